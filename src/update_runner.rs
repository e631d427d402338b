use std::{
    io::Read,
    path::Path,
    process::{Child, Command, Stdio},
    thread,
    time::{Duration, Instant},
};

use crate::{update_outcome::UpdateOutcome, update_platform::HostPlatform};

const SCRIPT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Native-interpreter command line for one update script.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ScriptInvocation {
    pub(crate) program: &'static str,
    pub(crate) args: Vec<String>,
}

pub(crate) fn interpreter_invocation(
    platform: HostPlatform,
    script_path: &Path,
) -> Option<ScriptInvocation> {
    let script_argument = script_path.to_string_lossy().to_string();
    match platform {
        HostPlatform::Windows => Some(ScriptInvocation {
            program: "cmd",
            args: vec!["/c".to_string(), script_argument],
        }),
        HostPlatform::Linux | HostPlatform::MacOs => Some(ScriptInvocation {
            program: "sh",
            args: vec![script_argument],
        }),
        HostPlatform::Other => None,
    }
}

/// Runs the script to completion, capturing both streams. Blocks the
/// calling thread; the caller is responsible for keeping it off the UI
/// event loop.
pub(crate) fn run_update_script(
    script_path: &Path,
    platform: HostPlatform,
    timeout: Duration,
) -> UpdateOutcome {
    let Some(invocation) = interpreter_invocation(platform, script_path) else {
        return UpdateOutcome::UnexpectedError {
            message: "No command interpreter is available for this platform.".to_string(),
        };
    };

    let mut child = match Command::new(invocation.program)
        .args(&invocation.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(error) => {
            return UpdateOutcome::UnexpectedError {
                message: format!(
                    "Failed to spawn update script {}: {}",
                    script_path.display(),
                    error
                ),
            };
        }
    };

    let stdout_drain = spawn_drain_thread(child.stdout.take());
    let stderr_drain = spawn_drain_thread(child.stderr.take());

    let started = Instant::now();
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {}
            Err(error) => {
                stop_script_process(&mut child);
                return UpdateOutcome::UnexpectedError {
                    message: format!("Failed to poll update script status: {error}"),
                };
            }
        }

        if started.elapsed() >= timeout {
            stop_script_process(&mut child);
            return UpdateOutcome::UnexpectedError {
                message: format!("Update script timed out after {}ms.", timeout.as_millis()),
            };
        }

        thread::sleep(SCRIPT_POLL_INTERVAL);
    };

    let stdout = join_drained(stdout_drain);
    let stderr = join_drained(stderr_drain);

    if status.success() {
        UpdateOutcome::Success
    } else {
        UpdateOutcome::ProcessFailed {
            // code() is None when a signal killed the child
            exit_code: status.code().unwrap_or(-1),
            stdout,
            stderr,
        }
    }
}

fn spawn_drain_thread<R>(pipe: Option<R>) -> Option<thread::JoinHandle<String>>
where
    R: Read + Send + 'static,
{
    pipe.map(|mut source| {
        thread::spawn(move || {
            let mut buffer = Vec::new();
            let _ = source.read_to_end(&mut buffer);
            String::from_utf8_lossy(&buffer).into_owned()
        })
    })
}

fn join_drained(drain: Option<thread::JoinHandle<String>>) -> String {
    drain
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default()
}

fn stop_script_process(child: &mut Child) {
    #[cfg(target_os = "windows")]
    {
        let _ = Command::new("taskkill")
            .args(["/pid", &child.id().to_string(), "/t", "/f"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        let _ = child.wait();
        return;
    }

    #[cfg(not(target_os = "windows"))]
    {
        let _ = child.kill();
        let _ = child.wait();
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::interpreter_invocation;
    use crate::update_platform::HostPlatform;

    #[test]
    fn windows_scripts_run_through_the_command_interpreter() {
        let invocation =
            interpreter_invocation(HostPlatform::Windows, Path::new("update_app.bat"))
                .expect("windows has an interpreter");
        assert_eq!(invocation.program, "cmd");
        assert_eq!(
            invocation.args,
            vec!["/c".to_string(), "update_app.bat".to_string()]
        );
    }

    #[test]
    fn unix_scripts_run_through_sh() {
        for platform in [HostPlatform::Linux, HostPlatform::MacOs] {
            let invocation = interpreter_invocation(platform, Path::new("/opt/app/update_app.sh"))
                .expect("unix platforms have an interpreter");
            assert_eq!(invocation.program, "sh");
            assert_eq!(invocation.args, vec!["/opt/app/update_app.sh".to_string()]);
        }
    }

    #[test]
    fn other_platforms_have_no_interpreter_invocation() {
        assert!(interpreter_invocation(HostPlatform::Other, Path::new("update_app.sh")).is_none());
    }
}
