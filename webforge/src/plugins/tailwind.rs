//! Tailwind CSS configuration plugin.
//!
//! Writes the Tailwind and PostCSS configs plus a base stylesheet with
//! the Tailwind directives. The configs are emitted directly rather
//! than via `npx tailwindcss init -p`, which would generate files this
//! plugin immediately overwrites anyway.

use std::path::Path;

use super::{
    ensure_dir, outcome, write_unless_present, PackageConfigurer, PluginError, SetupOutcome,
};

const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: [
    "./src/**/*.{js,jsx,ts,tsx}",
  ],
  theme: {
    extend: {},
  },
  plugins: [],
}
"#;

const POSTCSS_CONFIG: &str = r#"module.exports = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}
"#;

const BASE_STYLESHEET: &str = r#"@import "tailwindcss/base";
@import "tailwindcss/components";
@import "tailwindcss/utilities";
"#;

/// Writes `tailwind.config.js`, `postcss.config.js` and
/// `src/index.scss`.
pub struct TailwindPlugin;

impl PackageConfigurer for TailwindPlugin {
    fn package(&self) -> &'static str {
        "tailwindcss"
    }

    fn configure(&self, target_dir: &Path) -> Result<SetupOutcome, PluginError> {
        let mut wrote =
            write_unless_present(&target_dir.join("tailwind.config.js"), TAILWIND_CONFIG)?;
        wrote |= write_unless_present(&target_dir.join("postcss.config.js"), POSTCSS_CONFIG)?;

        let src = target_dir.join("src");
        ensure_dir(&src)?;
        wrote |= write_unless_present(&src.join("index.scss"), BASE_STYLESHEET)?;

        Ok(outcome(wrote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_configs_and_base_stylesheet() {
        let dir = TempDir::new().unwrap();
        let result = TailwindPlugin.configure(dir.path()).unwrap();
        assert_eq!(result, SetupOutcome::Configured);

        let tailwind = std::fs::read_to_string(dir.path().join("tailwind.config.js")).unwrap();
        assert!(tailwind.contains("./src/**/*.{js,jsx,ts,tsx}"));

        let postcss = std::fs::read_to_string(dir.path().join("postcss.config.js")).unwrap();
        assert!(postcss.contains("autoprefixer"));

        let stylesheet = std::fs::read_to_string(dir.path().join("src/index.scss")).unwrap();
        assert!(stylesheet.contains("tailwindcss/utilities"));
    }

    #[test]
    fn preserves_existing_configuration() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("tailwind.config.js"), "custom config").unwrap();

        TailwindPlugin.configure(dir.path()).unwrap();

        // An existing non-empty config is never overwritten.
        let kept = std::fs::read_to_string(dir.path().join("tailwind.config.js")).unwrap();
        assert_eq!(kept, "custom config");
    }

    #[test]
    fn second_run_reports_already_configured() {
        let dir = TempDir::new().unwrap();
        TailwindPlugin.configure(dir.path()).unwrap();
        assert_eq!(
            TailwindPlugin.configure(dir.path()).unwrap(),
            SetupOutcome::AlreadyConfigured
        );
    }
}
