//! Usage: SQLite connection setup, schema init, and common DB helpers.

use crate::app_paths;
use rusqlite::Connection;
use std::path::PathBuf;
use std::time::Duration;

const DB_FILE_NAME: &str = "usha_business.db";
const BUSY_TIMEOUT: Duration = Duration::from_millis(2000);

/// Handle to the application database. Cheap to clone; every operation opens
/// its own short-lived connection, since access is sequential by contract.
#[derive(Clone, Debug)]
pub(crate) struct Db {
    path: PathBuf,
}

impl Db {
    pub(crate) fn open_connection(&self) -> Result<Connection, String> {
        let path_hint = self.path.to_string_lossy();
        let conn = Connection::open(&self.path)
            .map_err(|e| format!("DB_ERROR: failed to open sqlite db at {path_hint}: {e}"))?;

        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(|e| format!("DB_ERROR: failed to set sqlite busy_timeout for {path_hint}: {e}"))?;

        configure_connection(&conn)
            .map_err(|e| format!("DB_ERROR: sqlite init failed at {path_hint}: {e}"))?;

        Ok(conn)
    }
}

pub fn db_path(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    Ok(app_paths::app_data_dir(app)?.join(DB_FILE_NAME))
}

pub fn init(app: &tauri::AppHandle) -> Result<Db, String> {
    init_at(db_path(app)?)
}

pub(crate) fn init_at(path: PathBuf) -> Result<Db, String> {
    let db = Db { path };
    let conn = db.open_connection()?;
    ensure_schema(&conn)?;
    Ok(db)
}

fn ensure_schema(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        r#"
CREATE TABLE IF NOT EXISTS business_data (
  id INTEGER PRIMARY KEY,
  data_json TEXT
);
"#,
    )
    .map_err(|e| format!("DB_ERROR: failed to create business_data table: {e}"))
}

fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;
"#,
    )?;

    Ok(())
}
