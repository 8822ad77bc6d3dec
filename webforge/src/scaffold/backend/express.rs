//! Express backend scaffold.

use std::path::Path;

use serde_json::json;
use tracing::info;

use crate::exec::CommandRunner;
use crate::scaffold::{write_file, ScaffoldError};

const INDEX_JS: &str = r#"import express from 'express';
import cors from 'cors';

const app = express();
const port = 3001;

app.use(cors());
app.use(express.json());

app.get('/', (req, res) => {
  res.json({ message: 'Hello from Express backend!' });
});

app.listen(port, () => {
  console.log(`Backend running on http://localhost:${port}`);
});
"#;

fn package_json() -> String {
    let manifest = json!({
        "name": "backend",
        "version": "1.0.0",
        "type": "module",
        "main": "index.js",
        "scripts": {
            "start": "node index.js",
            "dev": "nodemon index.js",
        },
        "dependencies": {
            "express": "^4.18.2",
            "cors": "^2.8.5",
        },
        "devDependencies": {
            "nodemon": "^3.0.1",
        },
    });
    serde_json::to_string_pretty(&manifest).expect("static manifest serializes")
}

pub(super) fn scaffold(dir: &Path, runner: &dyn CommandRunner) -> Result<(), ScaffoldError> {
    write_file(&dir.join("package.json"), &package_json())?;
    write_file(&dir.join("index.js"), INDEX_JS)?;

    info!("installing Express dependencies");
    runner.run("npm", &["install"], Some(dir))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::RecordingRunner;
    use tempfile::TempDir;

    #[test]
    fn writes_manifest_and_entry_point_then_installs() {
        let dir = TempDir::new().unwrap();
        let runner = RecordingRunner::new();

        scaffold(dir.path(), &runner).unwrap();

        let manifest: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join("package.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(manifest["type"], "module");
        assert!(manifest["dependencies"]["express"].is_string());

        let index = std::fs::read_to_string(dir.path().join("index.js")).unwrap();
        assert!(index.contains("app.listen(port"));

        let installs = runner.invocations();
        assert_eq!(installs.len(), 1);
        assert_eq!(installs[0].args, vec!["install"]);
    }
}
