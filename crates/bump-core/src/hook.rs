use crate::paths::PLUGIN_PREFIX;
use std::fmt;

/// Literal a commit message carries to opt out of the automatic bump.
pub const SKIP_MARKER: &str = "[skip version bump]";

/// Why the pre-commit hook decided not to bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    SkipMarker,
    MergeCommit,
    NoPluginChanges,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::SkipMarker => "commit message contains [skip version bump]",
            SkipReason::MergeCommit => "merge commit in progress",
            SkipReason::NoPluginChanges => "no staged changes under plugin/",
        };
        f.write_str(s)
    }
}

/// Decide whether the pre-commit hook should leave the manifest alone.
///
/// `staged` holds paths relative to the repository root, as `git diff
/// --cached --name-only` prints them. Returns `None` when the bump should
/// proceed.
pub fn skip_reason(
    staged: &[String],
    message: &str,
    merge_in_progress: bool,
) -> Option<SkipReason> {
    if message.contains(SKIP_MARKER) {
        return Some(SkipReason::SkipMarker);
    }
    if merge_in_progress {
        return Some(SkipReason::MergeCommit);
    }
    if !staged.iter().any(|p| p.starts_with(PLUGIN_PREFIX)) {
        return Some(SkipReason::NoPluginChanges);
    }
    None
}
