use crate::output::print_json;
use anyhow::Context;
use bump_core::{git, manifest, paths, version::BumpKind};
use std::io::{BufRead, IsTerminal, Write};
use std::path::Path;

/// `bump-version bump [major|minor|patch]` — manual bump.
///
/// Unknown kinds are rejected outright (exit 1, manifest untouched); only
/// the hook path hard-codes a default. The `confirm` capability is injected
/// so the stage-and-commit decision is testable without a terminal.
pub fn run(
    root: &Path,
    kind: Option<&str>,
    json: bool,
    confirm: &mut dyn FnMut(&str) -> anyhow::Result<bool>,
) -> anyhow::Result<()> {
    let kind = match kind {
        Some(raw) => raw.parse::<BumpKind>()?,
        None => BumpKind::default(),
    };

    let manifest_path = paths::manifest_path(root);
    let outcome = manifest::bump(&manifest_path, kind)
        .with_context(|| format!("failed to bump {}", manifest_path.display()))?;

    if json {
        print_json(&outcome)?;
    } else {
        println!("Version bumped from {} to {}", outcome.old, outcome.new);
    }

    if confirm(&format!("Commit version bump to {}? [y/N] ", outcome.new))? {
        git::stage(root, paths::MANIFEST_REL).context("failed to stage the manifest")?;
        git::commit(root, &format!("Bump version to {}", outcome.new))
            .context("failed to commit the version bump")?;
        println!("Committed.");
    }

    Ok(())
}

/// Interactive confirm: reads one line from stdin when it is a terminal.
/// Non-interactive invocations (pipes, CI) never commit.
pub fn tty_confirm(prompt: &str) -> anyhow::Result<bool> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        return Ok(false);
    }
    print!("{prompt}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}
