//! `clean` command: strip the stock Create React App template.

use std::path::Path;

use webforge::scaffold::frontend::clean_template;

use crate::error::CliError;

/// Remove the CRA boilerplate from `dir` and write the SCSS-based
/// replacement files.
pub fn run(dir: &Path) -> Result<(), CliError> {
    println!("Cleaning template files in {}", dir.display());

    let report = clean_template(dir)?;

    for path in &report.removed {
        println!("  removed {}", path.display());
    }
    for path in &report.written {
        println!("  wrote   {}", path.display());
    }

    println!();
    println!(
        "Done: {} file(s) removed, {} file(s) written.",
        report.removed.len(),
        report.written.len()
    );

    Ok(())
}
