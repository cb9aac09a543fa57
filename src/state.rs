//! Application state managed by Tauri.
//!
//! At most one workbook session is active per window. Uploads race only
//! through the load token: every decode starts by taking a token, and only
//! the newest token may install its result. A decode that finished after a
//! newer upload began is discarded instead of clobbering it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::error::WorkbookError;
use crate::workbook::WorkbookSession;

pub struct AppState {
    session: Mutex<Option<WorkbookSession>>,
    next_load_token: AtomicU64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: Mutex::new(None),
            next_load_token: AtomicU64::new(1),
        }
    }

    /// Take the token a decode must present to install its result.
    /// Monotonically increasing; newest wins.
    pub fn begin_load(&self) -> u64 {
        self.next_load_token.fetch_add(1, Ordering::SeqCst)
    }

    /// Install a freshly decoded session, replacing any previous one
    /// wholesale. Refused with `SupersededLoad` when a newer load began
    /// while this decode ran.
    pub fn install_session(&self, session: WorkbookSession) -> Result<(), WorkbookError> {
        let mut guard = self
            .session
            .lock()
            .map_err(|_| WorkbookError::State("Lock poisoned"))?;
        let newest_issued = self.next_load_token.load(Ordering::SeqCst) - 1;
        if session.generation != newest_issued {
            return Err(WorkbookError::SupersededLoad);
        }
        *guard = Some(session);
        Ok(())
    }

    /// Run `f` against the active session, or fail with `NoWorkbookLoaded`.
    pub fn with_session<T>(
        &self,
        f: impl FnOnce(&mut WorkbookSession) -> Result<T, WorkbookError>,
    ) -> Result<T, WorkbookError> {
        let mut guard = self
            .session
            .lock()
            .map_err(|_| WorkbookError::State("Lock poisoned"))?;
        match guard.as_mut() {
            Some(session) => f(session),
            None => Err(WorkbookError::NoWorkbookLoaded),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_bytes() -> Vec<u8> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.xlsx");
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Roster").unwrap();
        sheet.write_string(0, 0, "Client Name").unwrap();
        sheet.write_string(1, 0, "Jane Doe").unwrap();
        workbook.save(&path).unwrap();
        std::fs::read(&path).unwrap()
    }

    #[test]
    fn test_with_session_before_any_load() {
        let state = AppState::new();
        let err = state.with_session(|_| Ok(())).unwrap_err();
        assert!(matches!(err, WorkbookError::NoWorkbookLoaded));
    }

    #[test]
    fn test_install_and_read_back() {
        let state = AppState::new();
        let token = state.begin_load();
        let session = WorkbookSession::from_bytes("roster.xlsx", session_bytes(), token).unwrap();
        state.install_session(session).unwrap();

        let count = state.with_session(|s| Ok(s.records.len())).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_stale_decode_is_discarded() {
        let state = AppState::new();
        let bytes = session_bytes();

        let stale_token = state.begin_load();
        let newer_token = state.begin_load();

        // The newer upload finishes first.
        let newer =
            WorkbookSession::from_bytes("newer.xlsx", bytes.clone(), newer_token).unwrap();
        state.install_session(newer).unwrap();

        // The stale decode completes afterwards and must not clobber it.
        let stale = WorkbookSession::from_bytes("stale.xlsx", bytes, stale_token).unwrap();
        let err = state.install_session(stale).unwrap_err();
        assert!(err.is_superseded());

        let file_name = state.with_session(|s| Ok(s.file_name.clone())).unwrap();
        assert_eq!(file_name, "newer.xlsx");
    }

    #[test]
    fn test_install_replaces_previous_session_wholesale() {
        let state = AppState::new();
        let bytes = session_bytes();

        let first = WorkbookSession::from_bytes("a.xlsx", bytes.clone(), state.begin_load()).unwrap();
        state.install_session(first).unwrap();
        let second = WorkbookSession::from_bytes("b.xlsx", bytes, state.begin_load()).unwrap();
        state.install_session(second).unwrap();

        let file_name = state.with_session(|s| Ok(s.file_name.clone())).unwrap();
        assert_eq!(file_name, "b.xlsx");
    }
}
