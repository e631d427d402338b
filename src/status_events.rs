use serde::Serialize;
use tauri::{AppHandle, Emitter};

use crate::{append_shell_log, UPDATE_STATUS_EVENT};

#[derive(Debug, Clone, Serialize)]
pub(crate) struct UpdateStatusPayload {
    pub(crate) status: String,
}

/// Pushes a status line to the settings page. Emission failures are logged
/// and otherwise ignored; the status surface is best-effort.
pub(crate) fn emit_update_status(app_handle: &AppHandle, status: &str) {
    let payload = UpdateStatusPayload {
        status: status.to_string(),
    };
    if let Err(error) = app_handle.emit(UPDATE_STATUS_EVENT, payload) {
        append_shell_log(&format!("failed to emit update status event: {error}"));
    }
}
