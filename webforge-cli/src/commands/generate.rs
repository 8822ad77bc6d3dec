//! `generate` command: scaffold a React component interactively.

use std::path::Path;

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use webforge::scaffold::component::{is_pascal_case, ComponentTemplate};

use crate::error::CliError;

/// Prompt for a component name and write its JSX, SCSS module, and test
/// files under `src/components/<Name>/`.
pub fn run(dir: &Path) -> Result<(), CliError> {
    let theme = ColorfulTheme::default();

    let name: String = Input::with_theme(&theme)
        .with_prompt("Component name (PascalCase)")
        .validate_with(|input: &String| {
            if is_pascal_case(input) {
                Ok(())
            } else {
                Err("component names must be PascalCase, e.g. NavBar")
            }
        })
        .interact_text()
        .map_err(|e| CliError::Prompt(format!("Input error: {}", e)))?;

    let use_motion = Confirm::with_theme(&theme)
        .with_prompt("Add animation variants (framer-motion)?")
        .default(false)
        .interact()
        .map_err(|e| CliError::Prompt(format!("Confirm error: {}", e)))?;

    let template = ComponentTemplate::new(name, use_motion);

    // Refuse to clobber an existing component unless explicitly allowed.
    for file in template.files() {
        let path = dir.join(&file.relative_path);
        if path.exists() {
            let overwrite = Confirm::with_theme(&theme)
                .with_prompt(format!("{} exists, overwrite?", path.display()))
                .default(false)
                .interact()
                .map_err(|e| CliError::Prompt(format!("Confirm error: {}", e)))?;
            if !overwrite {
                println!("Aborted, nothing written.");
                return Ok(());
            }
        }
    }

    for file in template.files() {
        let path = dir.join(&file.relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| CliError::FileWrite {
                path: parent.display().to_string(),
                error,
            })?;
        }
        std::fs::write(&path, &file.contents).map_err(|error| CliError::FileWrite {
            path: path.display().to_string(),
            error,
        })?;
        println!("  {} {}", style("✓").green(), path.display());
    }

    Ok(())
}
