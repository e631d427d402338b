use tauri::{Manager, RunEvent};

use crate::{
    append_shell_log, append_startup_log, bridge_commands, logging, ShellState, MAIN_WINDOW_LABEL,
};

pub(crate) fn run(launch_args: Vec<String>) {
    append_startup_log("desktop shell starting");
    if let Some(log_path) = logging::resolve_shell_log_path() {
        append_startup_log(&format!("shell log path: {}", log_path.display()));
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app_handle, _argv, _cwd| {
            // a second launch surfaces the existing window instead
            append_shell_log("second shell instance detected, focusing main window");
            if let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) {
                if let Err(error) = window.show() {
                    append_shell_log(&format!("failed to show main window: {error}"));
                }
                if let Err(error) = window.set_focus() {
                    append_shell_log(&format!("failed to focus main window: {error}"));
                }
            }
        }))
        .plugin(tauri_plugin_dialog::init())
        .manage(ShellState::with_launch_args(launch_args))
        .invoke_handler(tauri::generate_handler![
            bridge_commands::shell_bridge_is_desktop_runtime,
            bridge_commands::shell_bridge_get_shell_state,
            bridge_commands::shell_bridge_select_page,
            bridge_commands::shell_bridge_run_update,
            bridge_commands::shell_bridge_restart_app,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|_app_handle, event| match event {
            RunEvent::ExitRequested { .. } => {
                append_shell_log("shell exit requested");
            }
            RunEvent::Exit => {
                append_shell_log("shell exiting");
            }
            _ => {}
        });
}
