use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BumpError {
    #[error("manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("manifest {} has no \"version\" field", .0.display())]
    MissingVersion(PathBuf),

    #[error("invalid version '{0}': expected MAJOR.MINOR.PATCH")]
    InvalidVersion(String),

    #[error("invalid bump kind '{0}': expected major, minor, or patch")]
    InvalidBumpKind(String),

    #[error("git {command} failed: {stderr}")]
    Git { command: String, stderr: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BumpError>;
