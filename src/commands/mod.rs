//! Usage: Tauri command handlers exposed over the UI bridge.

mod data;

pub(crate) use data::*;
