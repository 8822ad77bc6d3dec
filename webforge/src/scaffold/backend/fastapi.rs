//! FastAPI backend scaffold.

use std::path::Path;

use crate::exec::CommandRunner;
use crate::scaffold::{write_file, ScaffoldError};

use super::{create_python_env, pip_install, venv_bin, write_run_script};

const MAIN_PY: &str = r#"from fastapi import FastAPI
from fastapi.middleware.cors import CORSMiddleware

app = FastAPI()

app.add_middleware(
    CORSMiddleware,
    allow_origins=["*"],
    allow_credentials=True,
    allow_methods=["*"],
    allow_headers=["*"],
)

@app.get("/")
async def root():
    return {"message": "Hello from FastAPI backend!"}
"#;

const REQUIREMENTS_TXT: &str = "fastapi==0.104.1\nuvicorn==0.24.0\n";

pub(super) fn scaffold(dir: &Path, runner: &dyn CommandRunner) -> Result<(), ScaffoldError> {
    create_python_env(dir, runner)?;

    write_file(&dir.join("main.py"), MAIN_PY)?;
    write_file(&dir.join("requirements.txt"), REQUIREMENTS_TXT)?;

    pip_install(dir, &["-r", "requirements.txt"], runner)?;

    let server = format!("{} main:app --reload", venv_bin("uvicorn").display());
    write_run_script(dir, &server, runner)?;
    Ok(())
}
