//! Django backend scaffold.

use std::path::Path;

use tracing::info;

use crate::exec::CommandRunner;
use crate::scaffold::{write_file, ScaffoldError};

use super::{create_python_env, pip_install, venv_bin, write_run_script};

const URLS_PY: &str = r#"from django.urls import path
from rest_framework.response import Response
from rest_framework.views import APIView

class HelloView(APIView):
    def get(self, request):
        return Response({"message": "Hello from Django backend!"})

urlpatterns = [
    path('', HelloView.as_view(), name='hello'),
]
"#;

const REQUIREMENTS_TXT: &str =
    "django==4.2.7\ndjangorestframework==3.14.0\ndjango-cors-headers==4.3.1\n";

pub(super) fn scaffold(dir: &Path, runner: &dyn CommandRunner) -> Result<(), ScaffoldError> {
    create_python_env(dir, runner)?;

    pip_install(
        dir,
        &["django==4.2.7", "djangorestframework==3.14.0"],
        runner,
    )?;

    info!("creating Django project");
    let django_admin = venv_bin("django-admin");
    runner.run(
        &django_admin.to_string_lossy(),
        &["startproject", "backend", "."],
        Some(dir),
    )?;

    patch_settings(dir)?;
    write_file(&dir.join("backend").join("urls.py"), URLS_PY)?;
    write_file(&dir.join("requirements.txt"), REQUIREMENTS_TXT)?;

    pip_install(dir, &["-r", "requirements.txt"], runner)?;

    let server = format!("{} manage.py runserver", venv_bin("python").display());
    write_run_script(dir, &server, runner)?;
    Ok(())
}

/// Enable REST framework and CORS in the generated settings module.
fn patch_settings(dir: &Path) -> Result<(), ScaffoldError> {
    let settings_path = dir.join("backend").join("settings.py");
    let mut settings =
        std::fs::read_to_string(&settings_path).map_err(|source| ScaffoldError::Read {
            path: settings_path.clone(),
            source,
        })?;

    settings = settings.replace(
        "INSTALLED_APPS = [",
        "INSTALLED_APPS = [\n    'rest_framework',\n    'corsheaders',",
    );
    settings = settings.replace(
        "MIDDLEWARE = [",
        "MIDDLEWARE = [\n    'corsheaders.middleware.CorsMiddleware',",
    );
    settings.push_str("\nCORS_ALLOW_ALL_ORIGINS = True\n");

    write_file(&settings_path, &settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn settings_patch_enables_rest_framework_and_cors() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("backend")).unwrap();
        std::fs::write(
            dir.path().join("backend/settings.py"),
            "INSTALLED_APPS = [\n    'django.contrib.admin',\n]\nMIDDLEWARE = [\n    'django.middleware.security.SecurityMiddleware',\n]\n",
        )
        .unwrap();

        patch_settings(dir.path()).unwrap();

        let patched = std::fs::read_to_string(dir.path().join("backend/settings.py")).unwrap();
        assert!(patched.contains("'rest_framework',"));
        assert!(patched.contains("'corsheaders',"));
        assert!(patched.contains("corsheaders.middleware.CorsMiddleware"));
        assert!(patched.ends_with("CORS_ALLOW_ALL_ORIGINS = True\n"));
    }

    #[test]
    fn requirements_pin_django_stack() {
        assert!(REQUIREMENTS_TXT.contains("django==4.2.7"));
        assert!(REQUIREMENTS_TXT.contains("django-cors-headers"));
    }
}
