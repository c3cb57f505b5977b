//! Usage: Whole-app-state persistence keyed by the fixed singleton record.

use crate::db;
use rusqlite::{params, OptionalExtension};

/// The one row the app ever writes. The UI owns the payload's shape; the
/// backend stores and returns it verbatim.
const RECORD_ID: i64 = 1;

pub fn load_record(db: &db::Db) -> Result<Option<String>, String> {
    let conn = db.open_connection()?;

    conn.query_row(
        "SELECT data_json FROM business_data WHERE id = ?1",
        params![RECORD_ID],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| format!("DB_ERROR: failed to query business_data: {e}"))
}

pub fn save_record(db: &db::Db, data_json: &str) -> Result<(), String> {
    let mut conn = db.open_connection()?;

    let tx = conn
        .transaction()
        .map_err(|e| format!("DB_ERROR: failed to start transaction: {e}"))?;

    let existing: Option<i64> = tx
        .query_row(
            "SELECT id FROM business_data WHERE id = ?1",
            params![RECORD_ID],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| format!("DB_ERROR: failed to query business_data: {e}"))?;

    match existing {
        Some(_) => {
            tx.execute(
                "UPDATE business_data SET data_json = ?1 WHERE id = ?2",
                params![data_json, RECORD_ID],
            )
            .map_err(|e| format!("DB_ERROR: failed to update business_data: {e}"))?;
        }
        None => {
            tx.execute(
                "INSERT INTO business_data (id, data_json) VALUES (?1, ?2)",
                params![RECORD_ID, data_json],
            )
            .map_err(|e| format!("DB_ERROR: failed to insert business_data: {e}"))?;
        }
    }

    tx.commit()
        .map_err(|e| format!("DB_ERROR: failed to commit: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_db(dir: &tempfile::TempDir) -> db::Db {
        db::init_at(dir.path().join("usha_business.db")).expect("init db")
    }

    fn row_count(db: &db::Db) -> i64 {
        let conn = db.open_connection().expect("open");
        conn.query_row("SELECT COUNT(*) FROM business_data", [], |row| row.get(0))
            .expect("count")
    }

    #[test]
    fn fresh_store_has_no_record() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = temp_db(&dir);

        assert_eq!(load_record(&db).expect("load"), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = temp_db(&dir);

        save_record(&db, r#"{"clients":[{"name":"Acme"}]}"#).expect("save");

        let stored = load_record(&db).expect("load");
        assert_eq!(stored.as_deref(), Some(r#"{"clients":[{"name":"Acme"}]}"#));
    }

    #[test]
    fn load_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = temp_db(&dir);

        save_record(&db, r#"{"n":1}"#).expect("save");

        let first = load_record(&db).expect("first load");
        let second = load_record(&db).expect("second load");
        assert_eq!(first, second);
    }

    #[test]
    fn first_save_inserts_then_updates_in_place() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = temp_db(&dir);

        save_record(&db, r#"{"rev":1}"#).expect("first save");
        assert_eq!(row_count(&db), 1);

        save_record(&db, r#"{"rev":2}"#).expect("second save");
        save_record(&db, r#"{"rev":3}"#).expect("third save");
        assert_eq!(row_count(&db), 1);

        let stored = load_record(&db).expect("load");
        assert_eq!(stored.as_deref(), Some(r#"{"rev":3}"#));
    }

    #[test]
    fn only_the_fixed_id_row_exists_after_saves() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = temp_db(&dir);

        save_record(&db, "{}").expect("save");
        save_record(&db, r#"{"a":true}"#).expect("save again");

        let conn = db.open_connection().expect("open");
        let id: i64 = conn
            .query_row("SELECT id FROM business_data", [], |row| row.get(0))
            .expect("single row id");
        assert_eq!(id, 1);
    }

    #[test]
    fn failed_save_keeps_the_previous_record() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = temp_db(&dir);

        save_record(&db, r#"{"rev":1}"#).expect("save");

        // Force the write path to fail while keeping the stored row readable.
        let conn = db.open_connection().expect("open");
        conn.execute_batch(
            r#"
ALTER TABLE business_data RENAME TO business_data_old;
CREATE TABLE business_data (
  id INTEGER PRIMARY KEY,
  data_json TEXT CHECK (length(data_json) <= 12)
);
INSERT INTO business_data SELECT * FROM business_data_old;
DROP TABLE business_data_old;
"#,
        )
        .expect("tighten schema");
        drop(conn);

        let err = save_record(&db, r#"{"rev":2,"padding":"xxxxxxxxxxxx"}"#)
            .expect_err("save should fail");
        assert!(err.starts_with("DB_ERROR:"), "unexpected error: {err}");

        let stored = load_record(&db).expect("load");
        assert_eq!(stored.as_deref(), Some(r#"{"rev":1}"#));
    }
}
