//! Usage: Tracing setup (stderr plus a rolling file in the app data dir).

use crate::app_paths;
use std::sync::OnceLock;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_DIR_NAME: &str = "logs";
const LOG_FILE_PREFIX: &str = "usha-business.log";

// Keeps the non-blocking writer's worker alive for the process lifetime.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

pub(crate) fn init(app: &tauri::AppHandle) {
    let _ = tracing_log::LogTracer::init();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    let file_writer = match log_dir(app) {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = FILE_GUARD.set(guard);
            Some(writer)
        }
        Err(err) => {
            eprintln!("file logging disabled: {err}");
            None
        }
    };
    let file_layer = file_writer.map(|writer| fmt::layer().with_writer(writer).with_ansi(false));

    if let Err(err) = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
    {
        eprintln!("logging already initialized: {err}");
    }
}

fn log_dir(app: &tauri::AppHandle) -> Result<std::path::PathBuf, String> {
    let dir = app_paths::app_data_dir(app)?.join(LOG_DIR_NAME);
    std::fs::create_dir_all(&dir).map_err(|e| format!("failed to create log dir: {e}"))?;
    Ok(dir)
}
