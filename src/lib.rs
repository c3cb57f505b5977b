mod app;
mod commands;
mod domain;
mod infra;

pub(crate) use app::window;
pub(crate) use domain::business_data;
pub(crate) use infra::{app_paths, db};

use commands::*;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let builder = tauri::Builder::default().plugin(tauri_plugin_opener::init());

    #[cfg(desktop)]
    let builder = builder.plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
        window::show_main_window(app);
    }));

    builder
        .setup(|app| {
            crate::app::logging::init(app.handle());

            #[cfg(debug_assertions)]
            {
                let enabled = std::env::var("USHA_BUSINESS_DEV_DIAGNOSTICS")
                    .ok()
                    .map(|v| v.trim().to_ascii_lowercase())
                    .is_some_and(|v| v == "1" || v == "true" || v == "yes");
                if enabled {
                    let identifier = &app.config().identifier;
                    let product_name = app.config().product_name.as_deref().unwrap_or("<missing>");
                    tracing::info!(identifier = %identifier, "[dev] tauri identifier");
                    tracing::info!(product_name = %product_name, "[dev] productName");
                    if let Ok(dir) = app_paths::app_data_dir(app.handle()) {
                        tracing::info!(dir = %dir.display(), "[dev] app data dir");
                    }
                }
            }

            // The app is unusable without storage; abort startup on failure.
            let db = match db::init(app.handle()) {
                Ok(db) => db,
                Err(err) => {
                    tracing::error!("database init failed: {}", err);
                    return Err(err.into());
                }
            };
            app.manage(db);

            match app_paths::ui_entrypoint(app.handle()) {
                Ok(path) if path.is_file() => {
                    tracing::debug!(path = %path.display(), "ui entrypoint resolved");
                }
                Ok(path) => {
                    tracing::warn!(path = %path.display(), "ui entrypoint missing on disk");
                }
                Err(err) => {
                    tracing::warn!("ui entrypoint resolution failed: {}", err);
                }
            }

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![load_data, save_data])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
