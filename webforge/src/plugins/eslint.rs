//! ESLint configuration plugin.

use std::path::Path;

use serde_json::json;

use super::{outcome, write_unless_present, PackageConfigurer, PluginError, SetupOutcome};

/// Writes `.eslintrc.json` with the React + Tailwind preset stack.
pub struct EslintPlugin;

impl EslintPlugin {
    fn config_json() -> String {
        let config = json!({
            "env": {
                "browser": true,
                "es2021": true,
                "node": true,
            },
            "extends": [
                "eslint:recommended",
                "plugin:react/recommended",
                "plugin:react-hooks/recommended",
                "plugin:tailwindcss/recommended",
                // prettier must come last so it can disable conflicting rules
                "prettier",
            ],
            "parserOptions": {
                "ecmaVersion": 12,
                "sourceType": "module",
            },
            "plugins": ["react", "react-hooks", "tailwindcss"],
            "rules": {
                "react/prop-types": "off",
                "tailwindcss/classnames-order": "warn",
            },
            "settings": {
                "react": {
                    "version": "detect",
                },
            },
        });
        serde_json::to_string_pretty(&config).expect("static config serializes")
    }
}

impl PackageConfigurer for EslintPlugin {
    fn package(&self) -> &'static str {
        "eslint"
    }

    fn configure(&self, target_dir: &Path) -> Result<SetupOutcome, PluginError> {
        let wrote = write_unless_present(&target_dir.join(".eslintrc.json"), &Self::config_json())?;
        Ok(outcome(wrote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_eslintrc() {
        let dir = TempDir::new().unwrap();
        let result = EslintPlugin.configure(dir.path()).unwrap();
        assert_eq!(result, SetupOutcome::Configured);

        let written = std::fs::read_to_string(dir.path().join(".eslintrc.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["settings"]["react"]["version"], "detect");
        assert_eq!(parsed["extends"].as_array().unwrap().last().unwrap(), "prettier");
    }

    #[test]
    fn second_run_is_idempotent() {
        let dir = TempDir::new().unwrap();
        EslintPlugin.configure(dir.path()).unwrap();
        let first = std::fs::read_to_string(dir.path().join(".eslintrc.json")).unwrap();

        let again = EslintPlugin.configure(dir.path()).unwrap();
        assert_eq!(again, SetupOutcome::AlreadyConfigured);
        let second = std::fs::read_to_string(dir.path().join(".eslintrc.json")).unwrap();
        assert_eq!(first, second);
    }
}
