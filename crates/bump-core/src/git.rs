use crate::error::{BumpError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

fn run_git(root: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git").args(args).current_dir(root).output()?;
    if !output.status.success() {
        return Err(BumpError::Git {
            command: args.join(" "),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Paths staged for the in-progress commit, relative to the repository root.
pub fn staged_files(root: &Path) -> Result<Vec<String>> {
    let out = run_git(root, &["diff", "--cached", "--name-only"])?;
    Ok(out.lines().map(str::to_string).collect())
}

/// Resolve the repository's git directory. Handles worktrees, where `.git`
/// is a file pointing elsewhere.
pub fn git_dir(root: &Path) -> Result<PathBuf> {
    let out = run_git(root, &["rev-parse", "--git-dir"])?;
    let dir = PathBuf::from(out.trim());
    Ok(if dir.is_absolute() {
        dir
    } else {
        root.join(dir)
    })
}

/// Whether the next commit will be a merge commit (`MERGE_HEAD` exists).
pub fn merge_in_progress(root: &Path) -> Result<bool> {
    Ok(git_dir(root)?.join("MERGE_HEAD").exists())
}

/// The draft message for the in-progress commit. Empty when git has not
/// written `COMMIT_EDITMSG` yet.
pub fn commit_message(root: &Path) -> Result<String> {
    let path = git_dir(root)?.join("COMMIT_EDITMSG");
    match std::fs::read_to_string(&path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}

/// Stage `path` (relative to the repository root).
pub fn stage(root: &Path, path: &str) -> Result<()> {
    run_git(root, &["add", "--", path])?;
    Ok(())
}

/// Commit whatever is staged with the given message.
pub fn commit(root: &Path, message: &str) -> Result<()> {
    run_git(root, &["commit", "-m", message])?;
    Ok(())
}
