use std::path::{Path, PathBuf};

/// Subtree whose staged changes trigger the automatic version bump.
pub const PLUGIN_DIR: &str = "plugin";

/// `PLUGIN_DIR` as a path prefix, for matching staged file lists.
pub const PLUGIN_PREFIX: &str = "plugin/";

/// Manifest location relative to the repository root.
pub const MANIFEST_REL: &str = "plugin/.claude-plugin/plugin.json";

pub fn manifest_path(root: &Path) -> PathBuf {
    root.join(MANIFEST_REL)
}
