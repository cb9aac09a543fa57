//! Stakeholder 360: organizational viewer over uploaded tracker workbooks.
//!
//! The webview owns rendering and interaction state (current filters,
//! selected person); the Rust side owns the workbook session and everything
//! derived from it: ingestion, filtering, hierarchy reconstruction, and the
//! detail view model.

pub mod commands;
pub mod detail;
pub mod error;
pub mod filtering;
pub mod hierarchy;
pub mod state;
pub mod types;
pub mod workbook;

use std::sync::Arc;

use state::AppState;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            app.manage(Arc::new(AppState::new()));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::load_workbook,
            commands::select_sheet,
            commands::stakeholder_view,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
