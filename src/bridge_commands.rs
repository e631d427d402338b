use tauri::{AppHandle, Manager};
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};

use crate::{
    append_restart_log, app_restart, shell_pages, update_flow, ShellBridgeResult, ShellBridgeState,
    ShellState,
};

#[tauri::command]
pub(crate) fn shell_bridge_is_desktop_runtime() -> bool {
    true
}

#[tauri::command]
pub(crate) fn shell_bridge_get_shell_state(app_handle: AppHandle) -> ShellBridgeState {
    app_handle.state::<ShellState>().bridge_state()
}

#[tauri::command]
pub(crate) fn shell_bridge_select_page(app_handle: AppHandle, page_id: String) -> ShellBridgeResult {
    match shell_pages::page_from_id(&page_id) {
        Some(page) => {
            app_handle.state::<ShellState>().set_current_page(page);
            ShellBridgeResult {
                ok: true,
                reason: None,
            }
        }
        None => ShellBridgeResult {
            ok: false,
            reason: Some(format!("Unknown shell page '{page_id}'.")),
        },
    }
}

#[tauri::command]
pub(crate) async fn shell_bridge_run_update(app_handle: AppHandle) -> ShellBridgeResult {
    update_flow::run_update_task(app_handle).await
}

/// Direct restart from the settings page. Bypasses the update flow and any
/// in-flight update state on purpose.
#[tauri::command]
pub(crate) async fn shell_bridge_restart_app(app_handle: AppHandle) -> ShellBridgeResult {
    append_restart_log("settings page requested a direct shell restart");
    let launch_args = app_handle.state::<ShellState>().launch_args.clone();
    match app_restart::restart_shell(&app_handle, &launch_args) {
        Ok(()) => ShellBridgeResult {
            ok: true,
            reason: None,
        },
        Err(message) => {
            append_restart_log(&format!("direct shell restart failed: {message}"));
            app_handle
                .dialog()
                .message(format!("Failed to restart the application: {message}"))
                .title("Error")
                .kind(MessageDialogKind::Error)
                .buttons(MessageDialogButtons::Ok)
                .blocking_show();
            ShellBridgeResult {
                ok: false,
                reason: Some(message),
            }
        }
    }
}
