//! NestJS backend scaffold.

use std::path::Path;

use tracing::info;

use crate::exec::CommandRunner;
use crate::scaffold::{ensure_dir, write_file, ScaffoldError};

const MAIN_TS: &str = r#"import { NestFactory } from '@nestjs/core';
import { AppModule } from './app.module.js';
import cors from 'cors';

async function bootstrap() {
  const app = await NestFactory.create(AppModule);
  app.use(cors());
  app.use('/test', (req, res) => res.json({ message: 'Hello from NestJS backend!' }));
  await app.listen(3001);
}
bootstrap();
"#;

pub(super) fn scaffold(dir: &Path, runner: &dyn CommandRunner) -> Result<(), ScaffoldError> {
    info!("creating NestJS project");
    runner.run(
        "npx",
        &["@nestjs/cli", "new", ".", "-p", "npm", "--skip-git"],
        Some(dir),
    )?;

    // Opt the generated project into ES modules.
    let manifest_path = dir.join("package.json");
    let raw = std::fs::read_to_string(&manifest_path).map_err(|source| ScaffoldError::Read {
        path: manifest_path.clone(),
        source,
    })?;
    let mut manifest: serde_json::Value =
        serde_json::from_str(&raw).map_err(|source| ScaffoldError::Json {
            path: manifest_path.clone(),
            source,
        })?;
    manifest["type"] = serde_json::Value::String("module".to_string());
    let pretty = serde_json::to_string_pretty(&manifest).map_err(|source| ScaffoldError::Json {
        path: manifest_path.clone(),
        source,
    })?;
    write_file(&manifest_path, &pretty)?;

    info!("installing additional NestJS dependencies");
    runner.run("npm", &["install", "cors"], Some(dir))?;

    ensure_dir(&dir.join("src"))?;
    write_file(&dir.join("src/main.ts"), MAIN_TS)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::RecordingRunner;
    use tempfile::TempDir;

    #[test]
    fn rewrites_manifest_and_entry_point() {
        let dir = TempDir::new().unwrap();
        // Simulate what the NestJS CLI would have generated.
        std::fs::write(
            dir.path().join("package.json"),
            r#"{"name": "backend", "version": "0.0.1"}"#,
        )
        .unwrap();

        let runner = RecordingRunner::new();
        scaffold(dir.path(), &runner).unwrap();

        let manifest: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join("package.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(manifest["type"], "module");
        assert_eq!(manifest["name"], "backend");

        let main = std::fs::read_to_string(dir.path().join("src/main.ts")).unwrap();
        assert!(main.contains("NestFactory.create"));

        let programs: Vec<String> = runner
            .invocations()
            .into_iter()
            .map(|i| i.program)
            .collect();
        assert_eq!(programs, vec!["npx", "npm"]);
    }
}
