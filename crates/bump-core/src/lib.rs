pub mod error;
pub mod git;
pub mod hook;
pub mod io;
pub mod manifest;
pub mod paths;
pub mod version;

pub use error::{BumpError, Result};
