//! Prettier configuration plugin.

use std::path::Path;

use serde_json::json;

use super::{outcome, write_unless_present, PackageConfigurer, PluginError, SetupOutcome};

const PRETTIER_IGNORE: &str = "\
node_modules
dist
build
coverage
";

/// Writes `.prettierrc.json` and `.prettierignore`.
pub struct PrettierPlugin;

impl PrettierPlugin {
    fn config_json() -> String {
        let config = json!({
            "trailingComma": "es5",
            "tabWidth": 2,
            "semi": true,
            "singleQuote": true,
            "printWidth": 80,
        });
        serde_json::to_string_pretty(&config).expect("static config serializes")
    }
}

impl PackageConfigurer for PrettierPlugin {
    fn package(&self) -> &'static str {
        "prettier"
    }

    fn configure(&self, target_dir: &Path) -> Result<SetupOutcome, PluginError> {
        let mut wrote =
            write_unless_present(&target_dir.join(".prettierrc.json"), &Self::config_json())?;
        wrote |= write_unless_present(&target_dir.join(".prettierignore"), PRETTIER_IGNORE)?;
        Ok(outcome(wrote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_config_and_ignore_file() {
        let dir = TempDir::new().unwrap();
        let result = PrettierPlugin.configure(dir.path()).unwrap();
        assert_eq!(result, SetupOutcome::Configured);

        let config = std::fs::read_to_string(dir.path().join(".prettierrc.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&config).unwrap();
        assert_eq!(parsed["tabWidth"], 2);
        assert_eq!(parsed["singleQuote"], true);

        let ignore = std::fs::read_to_string(dir.path().join(".prettierignore")).unwrap();
        assert!(ignore.contains("node_modules"));
    }

    #[test]
    fn missing_ignore_file_is_backfilled() {
        let dir = TempDir::new().unwrap();
        PrettierPlugin.configure(dir.path()).unwrap();
        std::fs::remove_file(dir.path().join(".prettierignore")).unwrap();

        // Only the missing file is rewritten; the existing config is kept.
        let result = PrettierPlugin.configure(dir.path()).unwrap();
        assert_eq!(result, SetupOutcome::Configured);
        assert!(dir.path().join(".prettierignore").exists());
    }

    #[test]
    fn second_run_reports_already_configured() {
        let dir = TempDir::new().unwrap();
        PrettierPlugin.configure(dir.path()).unwrap();
        let again = PrettierPlugin.configure(dir.path()).unwrap();
        assert_eq!(again, SetupOutcome::AlreadyConfigured);
    }
}
