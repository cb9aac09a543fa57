//! Tauri command surface for the webview.
//!
//! Commands are thin: they own the session state and the async file read,
//! and delegate everything else to the pure engine modules. Errors cross
//! IPC as `ViewerError` and are shown as toasts; no command leaves state
//! half-changed.

use std::path::Path;
use std::sync::Arc;

use tauri::State;

use crate::detail::detail_columns;
use crate::error::{ViewerError, WorkbookError};
use crate::filtering;
use crate::hierarchy::{build_hierarchy, group_by_level};
use crate::state::AppState;
use crate::types::{
    SheetLoaded, StakeholderPanel, StakeholderRecord, StakeholderView, WorkbookLoaded,
};
use crate::workbook::WorkbookSession;

/// Load a workbook from the picked file. Single-sheet workbooks arrive
/// ready to view; multi-sheet workbooks wait for `select_sheet`.
#[tauri::command]
pub async fn load_workbook(
    path: String,
    state: State<'_, Arc<AppState>>,
) -> Result<WorkbookLoaded, ViewerError> {
    let token = state.begin_load();
    let bytes = tokio::fs::read(&path).await.map_err(WorkbookError::from)?;

    let file_name = file_name_of(&path);
    let session = WorkbookSession::from_bytes(&file_name, bytes, token).map_err(|e| {
        log::warn!("failed to load workbook {}: {}", file_name, e);
        e
    })?;

    let loaded = WorkbookLoaded {
        file_name: session.file_name.clone(),
        sheet_names: session.sheet_names.clone(),
        record_count: session.records.len(),
        auto_loaded: session.active_sheet.is_some(),
        generation: token,
    };
    state.install_session(session)?;

    log::info!(
        "loaded workbook {} ({} sheets)",
        loaded.file_name,
        loaded.sheet_names.len()
    );
    Ok(loaded)
}

/// Decode the named sheet of the loaded workbook and make it active.
#[tauri::command]
pub fn select_sheet(
    sheet_name: String,
    state: State<'_, Arc<AppState>>,
) -> Result<SheetLoaded, ViewerError> {
    let loaded = state.with_session(|session| {
        session.load_sheet(&sheet_name)?;
        Ok(SheetLoaded {
            sheet_name: sheet_name.clone(),
            record_count: session.records.len(),
            generation: session.generation,
        })
    })?;

    log::info!(
        "loaded {} records from sheet {}",
        loaded.record_count,
        loaded.sheet_name
    );
    Ok(loaded)
}

/// Everything the stakeholder screen needs for the current filter and
/// selection state, in one payload.
#[tauri::command]
pub fn stakeholder_view(
    working_group: String,
    business_function: String,
    stakeholder: String,
    state: State<'_, Arc<AppState>>,
) -> Result<StakeholderView, ViewerError> {
    let view = state.with_session(|session| {
        Ok(build_view(
            &session.records,
            session.generation,
            &working_group,
            &business_function,
            &stakeholder,
        ))
    })?;
    Ok(view)
}

fn build_view(
    records: &[StakeholderRecord],
    generation: u64,
    working_group: &str,
    business_function: &str,
    stakeholder: &str,
) -> StakeholderView {
    let working_groups = filtering::distinct_values(records, |r| &r.working_group);
    let business_functions = filtering::distinct_values(records, |r| &r.business_functions);

    let filtered = filtering::apply_filters(records, working_group, business_function);
    let stakeholder_names = filtering::distinct_person_names(&filtered);

    // Selection resolves against the filtered set; the hierarchy is built
    // over the full sheet. A selection that no longer matches simply yields
    // no panel.
    let selected = if stakeholder.is_empty() {
        None
    } else {
        filtering::find_by_name(filtered.iter().copied(), stakeholder)
    };
    let panel = selected.map(|record| StakeholderPanel {
        org_chart: group_by_level(build_hierarchy(record, records)),
        detail: detail_columns(record),
    });

    StakeholderView {
        working_groups,
        business_functions,
        stakeholder_names,
        filtered_count: filtered.len(),
        stakeholder: panel,
        generation,
    }
}

fn file_name_of(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
