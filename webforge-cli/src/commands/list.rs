//! `list` command: show the project's installed dependencies.

use std::path::Path;

use serde_json::Value;

use crate::error::CliError;

/// Print the dependencies recorded in `<dir>/package.json`.
///
/// Runtime and development dependencies are listed separately, each
/// sorted alphabetically with their version ranges.
pub fn run(dir: &Path) -> Result<(), CliError> {
    let manifest_path = dir.join("package.json");
    let raw = std::fs::read_to_string(&manifest_path).map_err(|error| CliError::FileRead {
        path: manifest_path.display().to_string(),
        error,
    })?;

    let manifest: Value = serde_json::from_str(&raw).map_err(|e| {
        CliError::Config(format!(
            "invalid package.json at {}: {}",
            manifest_path.display(),
            e
        ))
    })?;

    let mut printed_any = false;
    for (section, title) in [
        ("dependencies", "Dependencies"),
        ("devDependencies", "Dev dependencies"),
    ] {
        let Some(deps) = manifest.get(section).and_then(Value::as_object) else {
            continue;
        };
        if deps.is_empty() {
            continue;
        }

        let mut entries: Vec<(&String, &Value)> = deps.iter().collect();
        entries.sort_by_key(|(name, _)| name.as_str());

        println!("{} ({})", title, entries.len());
        for (name, version) in entries {
            println!("  {} {}", name, version.as_str().unwrap_or("?"));
        }
        println!();
        printed_any = true;
    }

    if !printed_any {
        println!("No dependencies found in {}", manifest_path.display());
    }

    Ok(())
}
