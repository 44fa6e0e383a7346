use crate::output::print_json;
use anyhow::Context;
use bump_core::{manifest, paths};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let manifest_path = paths::manifest_path(root);
    let version = manifest::read_version(&manifest_path)
        .with_context(|| format!("failed to read {}", manifest_path.display()))?;

    if json {
        #[derive(serde::Serialize)]
        struct ShowOutput {
            version: String,
        }
        print_json(&ShowOutput {
            version: version.to_string(),
        })?;
    } else {
        println!("{version}");
    }
    Ok(())
}
