mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bump-version",
    about = "Bump the semantic version in the plugin manifest",
    version,
    propagate_version = true
)]
struct Cli {
    /// Repository root (default: walk up from cwd to the first .git/)
    #[arg(long, global = true, env = "BUMP_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bump the manifest version and optionally commit the change
    Bump {
        /// Segment to increment: major, minor, or patch (default: patch)
        kind: Option<String>,
    },

    /// Print the current manifest version
    Show,

    /// Run as a Git pre-commit hook: patch-bump when plugin files are staged
    Hook,

    /// Install the pre-commit hook into .git/hooks
    InstallHook,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Bump { kind } => {
            cmd::bump::run(&root, kind.as_deref(), cli.json, &mut cmd::bump::tty_confirm)
        }
        Commands::Show => cmd::show::run(&root, cli.json),
        Commands::Hook => cmd::hook::run(&root),
        Commands::InstallHook => cmd::install_hook::run(&root),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
