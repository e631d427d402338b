use std::{env, process::Command};

use tauri::AppHandle;

use crate::append_restart_log;

/// Arguments to forward to a replacement process: everything the current
/// process was launched with except argv[0].
pub(crate) fn forwarded_launch_args(argv: impl Iterator<Item = String>) -> Vec<String> {
    argv.skip(1).collect()
}

/// Restart as a spawn-then-exit pair: launch a fresh instance of the
/// current executable with the original arguments, then exit this one.
/// Only returns on spawn failure, in which case the shell keeps running.
pub(crate) fn restart_shell(app_handle: &AppHandle, launch_args: &[String]) -> Result<(), String> {
    let current_exe = env::current_exe()
        .map_err(|error| format!("Failed to resolve shell executable path: {error}"))?;

    Command::new(&current_exe)
        .args(launch_args)
        .spawn()
        .map_err(|error| {
            format!(
                "Failed to spawn replacement shell process from {}: {}",
                current_exe.display(),
                error
            )
        })?;

    append_restart_log(&format!(
        "replacement process spawned from {}; exiting current shell",
        current_exe.display()
    ));
    app_handle.exit(0);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::forwarded_launch_args;

    #[test]
    fn forwarded_launch_args_drop_the_executable_path() {
        let argv = ["/opt/app/shell", "--minimized", "--profile=work"]
            .into_iter()
            .map(str::to_string);
        assert_eq!(
            forwarded_launch_args(argv),
            vec!["--minimized".to_string(), "--profile=work".to_string()]
        );
    }

    #[test]
    fn forwarded_launch_args_are_empty_for_a_bare_launch() {
        let argv = ["/opt/app/shell".to_string()].into_iter();
        assert!(forwarded_launch_args(argv).is_empty());
    }
}
