use crate::error::{BumpError, Result};
use crate::io::atomic_write;
use crate::version::{BumpKind, Version};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// Key holding the semantic version inside the plugin manifest.
pub const VERSION_KEY: &str = "version";

/// Before/after versions from a successful bump, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BumpOutcome {
    pub old: String,
    pub new: String,
}

/// Read the manifest's current version without modifying the file.
pub fn read_version(path: &Path) -> Result<Version> {
    let doc = load(path)?;
    current_version(&doc, path)
}

/// Bump the manifest version at `path` by `kind` and write the file back.
///
/// Every key other than `version` survives the round trip unchanged
/// (serde_json's `preserve_order` keeps the author's key order, so
/// re-serialization is idempotent). The write is atomic.
pub fn bump(path: &Path, kind: BumpKind) -> Result<BumpOutcome> {
    let mut doc = load(path)?;
    let old = current_version(&doc, path)?;
    let new = old.bump(kind);

    // current_version already rejected non-object documents.
    doc.as_object_mut()
        .ok_or_else(|| BumpError::MissingVersion(path.to_path_buf()))?
        .insert(VERSION_KEY.to_string(), Value::String(new.to_string()));
    save(path, &doc)?;

    Ok(BumpOutcome {
        old: old.to_string(),
        new: new.to_string(),
    })
}

fn load(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(BumpError::ManifestNotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn current_version(doc: &Value, path: &Path) -> Result<Version> {
    // A missing or non-string version is a manifest defect, not a reason to
    // invent "0.0.0" — fail fast.
    let raw = doc
        .get(VERSION_KEY)
        .and_then(Value::as_str)
        .ok_or_else(|| BumpError::MissingVersion(path.to_path_buf()))?;
    raw.parse()
}

fn save(path: &Path, doc: &Value) -> Result<()> {
    let mut text = serde_json::to_string_pretty(doc)?;
    text.push('\n');
    atomic_write(path, text.as_bytes())
}
