use std::time::Duration;

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";

pub(crate) const SHELL_HOME_DIR_NAME: &str = ".creatordesk";
pub(crate) const SHELL_LOG_FILE: &str = "desktop.log";

pub(crate) const UPDATE_SCRIPT_NAME_WINDOWS: &str = "update_app.bat";
pub(crate) const UPDATE_SCRIPT_NAME_UNIX: &str = "update_app.sh";

/// Hard ceiling on one update-script run; the child is killed on expiry.
pub(crate) const UPDATE_SCRIPT_TIMEOUT: Duration = Duration::from_secs(10 * 60);

pub(crate) const UPDATE_STATUS_EVENT: &str = "shell://update-status";

/// Pause between the success status and the restart, long enough for the
/// webview to paint the final status before the window goes away.
pub(crate) const UPDATE_SUCCESS_LINGER: Duration = Duration::from_millis(200);

pub(crate) const STATUS_UPDATE_IN_PROGRESS: &str = "Updating... please wait";
pub(crate) const STATUS_UPDATE_SUCCESS: &str = "Update successful, restarting...";
pub(crate) const STATUS_UPDATE_FAILED: &str = "Update failed.";
