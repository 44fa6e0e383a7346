use anyhow::Context;
use bump_core::{git, io};
use std::path::Path;

/// Contents of the installed pre-commit hook. `bump-version` must be on
/// PATH when git runs it.
const HOOK_SCRIPT: &str = "#!/bin/sh\n\
# Bumps plugin/.claude-plugin/plugin.json before each commit.\n\
# Remove this file (or commit with \"[skip version bump]\") to opt out.\n\
exec bump-version hook\n";

/// `bump-version install-hook` — write `.git/hooks/pre-commit`, mode 755.
pub fn run(root: &Path) -> anyhow::Result<()> {
    let git_dir = git::git_dir(root)
        .with_context(|| format!("not a git repository: {}", root.display()))?;
    let hook_path = git_dir.join("hooks").join("pre-commit");

    if hook_path.exists() {
        let existing = std::fs::read_to_string(&hook_path).unwrap_or_default();
        if !existing.contains("bump-version hook") {
            anyhow::bail!(
                "refusing to overwrite existing pre-commit hook: {}",
                hook_path.display()
            );
        }
    }

    io::atomic_write(&hook_path, HOOK_SCRIPT.as_bytes())
        .with_context(|| format!("failed to write {}", hook_path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&hook_path, std::fs::Permissions::from_mode(0o755))
            .with_context(|| format!("failed to chmod {}", hook_path.display()))?;
    }

    println!("Installed pre-commit hook: {}", hook_path.display());
    Ok(())
}
