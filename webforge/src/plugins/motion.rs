//! Framer Motion setup plugin.

use std::path::Path;

use super::{
    ensure_dir, outcome, write_unless_present, PackageConfigurer, PluginError, SetupOutcome,
};

const MOTION_VARIANTS: &str = r#"// Shared Framer Motion animation variants.
export const fadeIn = {
  hidden: { opacity: 0 },
  visible: { opacity: 1, transition: { duration: 0.3 } },
};

export const slideUp = {
  hidden: { opacity: 0, y: 16 },
  visible: { opacity: 1, y: 0, transition: { duration: 0.3 } },
};

export const stagger = {
  visible: { transition: { staggerChildren: 0.08 } },
};
"#;

/// Writes `src/motion.js` with shared animation variants.
pub struct MotionPlugin;

impl PackageConfigurer for MotionPlugin {
    fn package(&self) -> &'static str {
        "framer-motion"
    }

    fn configure(&self, target_dir: &Path) -> Result<SetupOutcome, PluginError> {
        let src = target_dir.join("src");
        ensure_dir(&src)?;
        let wrote = write_unless_present(&src.join("motion.js"), MOTION_VARIANTS)?;
        Ok(outcome(wrote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_shared_variants_module() {
        let dir = TempDir::new().unwrap();
        let result = MotionPlugin.configure(dir.path()).unwrap();
        assert_eq!(result, SetupOutcome::Configured);

        let variants = std::fs::read_to_string(dir.path().join("src/motion.js")).unwrap();
        assert!(variants.contains("fadeIn"));
        assert!(variants.contains("staggerChildren"));
    }

    #[test]
    fn second_run_reports_already_configured() {
        let dir = TempDir::new().unwrap();
        MotionPlugin.configure(dir.path()).unwrap();
        assert_eq!(
            MotionPlugin.configure(dir.path()).unwrap(),
            SetupOutcome::AlreadyConfigured
        );
    }
}
