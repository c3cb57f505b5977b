//! Usage: Resolve the per-user app data directory and the bundled UI entrypoint.

use std::path::{Path, PathBuf};
use tauri::Manager;

pub const APP_DOTDIR_NAME: &str = ".usha-business";
const APP_DOTDIR_NAME_ENV: &str = "USHA_BUSINESS_DOTDIR_NAME";

const UI_DIST_DIR: &str = "dist";
const UI_ENTRYPOINT_FILE: &str = "index.html";

fn is_safe_dotdir_name(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    if !name.starts_with('.') {
        return false;
    }
    if name.contains('/') || name.contains('\\') {
        return false;
    }
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_')
}

pub fn app_data_dir(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    let home_dir = app
        .path()
        .home_dir()
        .map_err(|e| format!("failed to resolve home dir: {e}"))?;

    let dotdir_name = std::env::var(APP_DOTDIR_NAME_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| is_safe_dotdir_name(v))
        .unwrap_or_else(|| APP_DOTDIR_NAME.to_string());

    let dir = home_dir.join(dotdir_name);
    std::fs::create_dir_all(&dir).map_err(|e| format!("failed to create app dir: {e}"))?;

    Ok(dir)
}

/// Path of the UI document under a given resource root.
pub(crate) fn ui_entrypoint_in(resource_root: &Path) -> PathBuf {
    resource_root.join(UI_DIST_DIR).join(UI_ENTRYPOINT_FILE)
}

/// Resource root for dev builds: the crate's own source tree.
fn dev_resource_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Resolve the bundled UI entrypoint. Dev builds read it from the source
/// tree; packaged builds read it from the bundle's resource directory.
pub(crate) fn ui_entrypoint(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    let root = if cfg!(debug_assertions) {
        dev_resource_root()
    } else {
        app.path()
            .resource_dir()
            .map_err(|e| format!("failed to resolve resource dir: {e}"))?
    };

    Ok(ui_entrypoint_in(&root))
}
