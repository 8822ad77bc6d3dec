//! React frontend scaffolding and template cleanup.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::exec::CommandRunner;

use super::{ensure_dir, write_file, ScaffoldError};

/// Stock Create React App files replaced by the cleaned template.
const TEMPLATE_FILES_TO_REMOVE: &[&str] = &[
    "src/App.js",
    "src/index.js",
    "src/App.css",
    "src/index.css",
    "src/logo.svg",
    "public/favicon.ico",
    "public/logo192.png",
    "public/logo512.png",
];

const APP_JSX: &str = r#"import React from 'react';
import './App.scss';

function App() {
  return (
    <div className="App">
      <h1>Welcome to your React application</h1>
    </div>
  );
}

export default App;
"#;

const INDEX_JSX: &str = r#"import React from 'react';
import ReactDOM from 'react-dom/client';
import './index.scss';
import App from './App';

const root = ReactDOM.createRoot(document.getElementById('root'));
root.render(
  <React.StrictMode>
    <App />
  </React.StrictMode>
);
"#;

const APP_SCSS: &str = "/* Styles for the App component */\n";

/// Result of a template cleanup.
#[derive(Debug, Default)]
pub struct CleanReport {
    /// Stock files that were actually removed.
    pub removed: Vec<PathBuf>,
    /// Replacement files that were written.
    pub written: Vec<PathBuf>,
}

/// Remove the stock Create React App template and write the cleaned
/// SCSS-based replacement.
///
/// Files that are already gone are skipped with a warning rather than
/// failing; the replacement writes are the part that must succeed.
pub fn clean_template(dir: &Path) -> Result<CleanReport, ScaffoldError> {
    let mut report = CleanReport::default();

    for file in TEMPLATE_FILES_TO_REMOVE {
        let path = dir.join(file);
        match std::fs::remove_file(&path) {
            Ok(()) => {
                info!(file = %path.display(), "removed template file");
                report.removed.push(path);
            }
            Err(err) => {
                warn!(file = %path.display(), %err, "could not remove template file");
            }
        }
    }

    ensure_dir(&dir.join("src"))?;
    for (relative, contents) in [
        ("src/App.jsx", APP_JSX),
        ("src/index.jsx", INDEX_JSX),
        ("src/App.scss", APP_SCSS),
    ] {
        let path = dir.join(relative);
        write_file(&path, contents)?;
        report.written.push(path);
    }

    Ok(report)
}

/// Check that `dir` holds nothing but version-control droppings, the
/// precondition for running `create-react-app` in place.
pub fn ensure_effectively_empty(dir: &Path) -> Result<(), ScaffoldError> {
    let entries = std::fs::read_dir(dir).map_err(|source| ScaffoldError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries.flatten() {
        let name = entry.file_name();
        if name != ".git" && name != ".gitignore" {
            return Err(ScaffoldError::DirNotEmpty(dir.to_path_buf()));
        }
    }
    Ok(())
}

/// Run `npx create-react-app .` inside `dir`.
pub fn create_react_app(dir: &Path, runner: &dyn CommandRunner) -> Result<(), ScaffoldError> {
    info!(dir = %dir.display(), "running create-react-app");
    runner.run("npx", &["create-react-app", "."], Some(dir))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn clean_removes_stock_files_and_writes_replacements() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::create_dir_all(dir.path().join("public")).unwrap();
        std::fs::write(dir.path().join("src/App.js"), "stock").unwrap();
        std::fs::write(dir.path().join("src/index.css"), "stock").unwrap();

        let report = clean_template(dir.path()).unwrap();

        assert_eq!(report.removed.len(), 2);
        assert!(!dir.path().join("src/App.js").exists());
        assert!(dir.path().join("src/App.jsx").exists());
        assert!(dir.path().join("src/index.jsx").exists());
        assert!(dir.path().join("src/App.scss").exists());

        let app = std::fs::read_to_string(dir.path().join("src/App.jsx")).unwrap();
        assert!(app.contains("./App.scss"));
    }

    #[test]
    fn clean_works_on_an_empty_directory() {
        let dir = TempDir::new().unwrap();
        let report = clean_template(dir.path()).unwrap();
        assert!(report.removed.is_empty());
        assert_eq!(report.written.len(), 3);
    }

    #[test]
    fn empty_check_allows_git_files_only() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".gitignore"), "node_modules").unwrap();
        assert!(ensure_effectively_empty(dir.path()).is_ok());

        std::fs::write(dir.path().join("notes.txt"), "hi").unwrap();
        assert!(matches!(
            ensure_effectively_empty(dir.path()),
            Err(ScaffoldError::DirNotEmpty(_))
        ));
    }
}
