use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

use tauri::{AppHandle, Manager};
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};

use crate::{
    append_update_log, app_restart, status_events, update_outcome::UpdateOutcome,
    update_platform::HostPlatform, update_runner, AtomicFlagGuard, ShellBridgeResult, ShellState,
    STATUS_UPDATE_IN_PROGRESS, UPDATE_SCRIPT_TIMEOUT, UPDATE_SUCCESS_LINGER,
};

/// One full update attempt against the given entry-point directory.
/// Platform gate first, then script lookup, then the child process; the
/// first failing step wins and nothing is spawned after a failure.
pub(crate) fn perform_update(entry_dir: &Path, os_name: &str, timeout: Duration) -> UpdateOutcome {
    let platform = HostPlatform::from_os_name(os_name);
    let Some(script_name) = platform.update_script_name() else {
        return UpdateOutcome::UnsupportedPlatform {
            os_name: os_name.to_string(),
        };
    };

    let script_path = entry_dir.join(script_name);
    if !script_path.is_file() {
        return UpdateOutcome::ScriptNotFound { script_name };
    }

    update_runner::run_update_script(&script_path, platform, timeout)
}

fn shell_entrypoint_dir() -> Result<PathBuf, String> {
    let current_exe = env::current_exe()
        .map_err(|error| format!("Failed to resolve shell executable path: {error}"))?;
    current_exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        format!(
            "Shell executable {} has no parent directory.",
            current_exe.display()
        )
    })
}

pub(crate) async fn run_update_task(app_handle: AppHandle) -> ShellBridgeResult {
    let state = app_handle.state::<ShellState>();
    let Some(_in_flight) = AtomicFlagGuard::try_set(&state.update_in_flight) else {
        append_update_log("update request ignored: an attempt is already in flight");
        return ShellBridgeResult {
            ok: false,
            reason: Some("Update already in progress.".to_string()),
        };
    };

    append_update_log("update attempt started");
    status_events::emit_update_status(&app_handle, STATUS_UPDATE_IN_PROGRESS);

    let outcome = match shell_entrypoint_dir() {
        Ok(entry_dir) => {
            // The spawn_blocking hop doubles as the cooperative yield: the
            // in-progress status reaches the webview before anything blocks.
            tauri::async_runtime::spawn_blocking(move || {
                perform_update(&entry_dir, env::consts::OS, UPDATE_SCRIPT_TIMEOUT)
            })
            .await
            .unwrap_or_else(|error| UpdateOutcome::UnexpectedError {
                message: format!("Update task failed to complete: {error}"),
            })
        }
        Err(message) => UpdateOutcome::UnexpectedError { message },
    };

    let status_line = outcome.status_line();
    status_events::emit_update_status(&app_handle, &status_line);
    append_update_log(&format!("update attempt finished: {status_line}"));

    match outcome.failure_notice() {
        None => {
            let _ = tauri::async_runtime::spawn_blocking(|| {
                std::thread::sleep(UPDATE_SUCCESS_LINGER);
            })
            .await;

            let launch_args = state.launch_args.clone();
            match app_restart::restart_shell(&app_handle, &launch_args) {
                Ok(()) => ShellBridgeResult {
                    ok: true,
                    reason: None,
                },
                Err(message) => {
                    append_update_log(&format!(
                        "restart after successful update failed: {message}"
                    ));
                    show_blocking_error(
                        &app_handle,
                        "Error",
                        &format!("Failed to restart the application: {message}"),
                    );
                    ShellBridgeResult {
                        ok: false,
                        reason: Some(message),
                    }
                }
            }
        }
        Some(notice) => {
            show_blocking_error(&app_handle, notice.title, &notice.message);
            ShellBridgeResult {
                ok: false,
                reason: Some(notice.message),
            }
        }
    }
}

fn show_blocking_error(app_handle: &AppHandle, title: &str, message: &str) {
    app_handle
        .dialog()
        .message(message)
        .title(title)
        .kind(MessageDialogKind::Error)
        .buttons(MessageDialogButtons::Ok)
        .blocking_show();
}
