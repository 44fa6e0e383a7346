use anyhow::Context;
use bump_core::{git, hook, manifest, paths, version::BumpKind};
use std::path::Path;

/// `bump-version hook` — pre-commit mode.
///
/// Skips (exit 0, manifest untouched) when the commit message carries the
/// skip marker, a merge is in progress, or nothing under `plugin/` is
/// staged. Otherwise patch-bumps the manifest and re-stages it so the bump
/// rides in the same commit. A missing manifest is a configuration error
/// and fails the commit.
pub fn run(root: &Path) -> anyhow::Result<()> {
    let staged = git::staged_files(root).context("failed to list staged files")?;
    let message = git::commit_message(root)?;
    let merge = git::merge_in_progress(root)?;

    if let Some(reason) = hook::skip_reason(&staged, &message, merge) {
        println!("Skipping version bump: {reason}");
        return Ok(());
    }

    let manifest_path = paths::manifest_path(root);
    let outcome = manifest::bump(&manifest_path, BumpKind::Patch)
        .with_context(|| format!("failed to bump {}", manifest_path.display()))?;

    git::stage(root, paths::MANIFEST_REL).context("failed to re-stage the manifest")?;
    println!("Version bumped from {} to {}", outcome.old, outcome.new);
    Ok(())
}
