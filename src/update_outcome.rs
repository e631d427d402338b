use crate::{STATUS_UPDATE_FAILED, STATUS_UPDATE_SUCCESS};

/// Result of one update attempt. Produced once per attempt and never
/// persisted; every non-success variant is terminal for the attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UpdateOutcome {
    Success,
    ScriptNotFound {
        script_name: &'static str,
    },
    UnsupportedPlatform {
        os_name: String,
    },
    ProcessFailed {
        exit_code: i32,
        stdout: String,
        stderr: String,
    },
    UnexpectedError {
        message: String,
    },
}

/// Title and body for the blocking error dialog shown on failure.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct FailureNotice {
    pub(crate) title: &'static str,
    pub(crate) message: String,
}

impl UpdateOutcome {
    pub(crate) fn status_line(&self) -> String {
        match self {
            UpdateOutcome::Success => STATUS_UPDATE_SUCCESS.to_string(),
            UpdateOutcome::ScriptNotFound { script_name } => {
                format!("Update failed: {script_name} not found")
            }
            UpdateOutcome::UnsupportedPlatform { os_name } => {
                format!("Update failed: unsupported platform '{os_name}'")
            }
            UpdateOutcome::ProcessFailed { .. } | UpdateOutcome::UnexpectedError { .. } => {
                STATUS_UPDATE_FAILED.to_string()
            }
        }
    }

    pub(crate) fn failure_notice(&self) -> Option<FailureNotice> {
        match self {
            UpdateOutcome::Success => None,
            UpdateOutcome::ScriptNotFound { script_name } => Some(FailureNotice {
                title: "Error",
                message: format!("Update script '{script_name}' not found."),
            }),
            UpdateOutcome::UnsupportedPlatform { os_name } => Some(FailureNotice {
                title: "Error",
                message: format!("Updates are not supported on this platform ('{os_name}')."),
            }),
            UpdateOutcome::ProcessFailed {
                exit_code,
                stdout,
                stderr,
            } => Some(FailureNotice {
                title: "Update Failed",
                message: format!(
                    "Update failed with exit code {exit_code}.\n\nOutput:\n{stdout}\n\nError:\n{stderr}"
                ),
            }),
            UpdateOutcome::UnexpectedError { message } => Some(FailureNotice {
                title: "Error",
                message: format!("An unexpected error occurred: {message}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UpdateOutcome;

    #[test]
    fn success_renders_the_restarting_status_and_no_notice() {
        let outcome = UpdateOutcome::Success;
        assert_eq!(outcome.status_line(), "Update successful, restarting...");
        assert!(outcome.failure_notice().is_none());
    }

    #[test]
    fn missing_script_status_names_the_expected_script() {
        let outcome = UpdateOutcome::ScriptNotFound {
            script_name: "update_app.bat",
        };
        assert_eq!(outcome.status_line(), "Update failed: update_app.bat not found");

        let notice = outcome.failure_notice().expect("missing script is a failure");
        assert_eq!(notice.title, "Error");
        assert_eq!(notice.message, "Update script 'update_app.bat' not found.");
    }

    #[test]
    fn unsupported_platform_status_names_the_os() {
        let outcome = UpdateOutcome::UnsupportedPlatform {
            os_name: "freebsd".to_string(),
        };
        assert_eq!(
            outcome.status_line(),
            "Update failed: unsupported platform 'freebsd'"
        );
    }

    #[test]
    fn process_failure_notice_carries_exit_code_and_both_streams() {
        let outcome = UpdateOutcome::ProcessFailed {
            exit_code: 2,
            stdout: "partial output".to_string(),
            stderr: "permission denied".to_string(),
        };
        assert_eq!(outcome.status_line(), "Update failed.");

        let notice = outcome.failure_notice().expect("non-zero exit is a failure");
        assert_eq!(notice.title, "Update Failed");
        assert!(notice.message.contains("exit code 2"));
        assert!(notice.message.contains("partial output"));
        assert!(notice.message.contains("permission denied"));
    }

    #[test]
    fn unexpected_error_uses_the_generic_failed_status() {
        let outcome = UpdateOutcome::UnexpectedError {
            message: "boom".to_string(),
        };
        assert_eq!(outcome.status_line(), "Update failed.");
        let notice = outcome.failure_notice().expect("unexpected error is a failure");
        assert!(notice.message.contains("boom"));
    }
}
