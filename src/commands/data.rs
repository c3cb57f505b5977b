//! Usage: Tauri commands bridging the UI to whole-app-state persistence.

use crate::{business_data, db};

/// Reply for `load_data`. Tagged so the UI can tell a first run apart from a
/// failed load; neither case rejects the invoke.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub(crate) enum LoadReply {
    Data { data: serde_json::Value },
    Empty,
    Error { message: String },
}

pub(crate) fn load_state(db: &db::Db) -> LoadReply {
    let stored = match business_data::load_record(db) {
        Ok(stored) => stored,
        Err(err) => {
            tracing::error!("load_data failed: {}", err);
            return LoadReply::Error { message: err };
        }
    };

    let Some(raw) = stored else {
        return LoadReply::Empty;
    };

    match serde_json::from_str(&raw) {
        Ok(data) => LoadReply::Data { data },
        Err(err) => {
            let message = format!("SERDE_ERROR: stored app state is not valid JSON: {err}");
            tracing::error!("load_data failed: {}", message);
            LoadReply::Error { message }
        }
    }
}

pub(crate) fn save_state(db: &db::Db, data: &serde_json::Value) -> bool {
    let data_json = match serde_json::to_string(data) {
        Ok(text) => text,
        Err(err) => {
            tracing::error!("save_data failed to serialize app state: {}", err);
            return false;
        }
    };

    match business_data::save_record(db, &data_json) {
        Ok(()) => true,
        Err(err) => {
            tracing::error!("save_data failed: {}", err);
            false
        }
    }
}

#[tauri::command]
pub(crate) fn load_data(db: tauri::State<'_, db::Db>) -> LoadReply {
    load_state(db.inner())
}

#[tauri::command]
pub(crate) fn save_data(db: tauri::State<'_, db::Db>, data: serde_json::Value) -> bool {
    save_state(db.inner(), &data)
}
