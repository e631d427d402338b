use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

use crate::{SHELL_HOME_DIR_NAME, SHELL_LOG_FILE};

pub(crate) fn resolve_shell_log_path() -> Option<PathBuf> {
    home::home_dir().map(|home_dir| {
        home_dir
            .join(SHELL_HOME_DIR_NAME)
            .join("logs")
            .join(SHELL_LOG_FILE)
    })
}

fn render_log_line(timestamp: &str, prefix: &str, message: &str) -> String {
    format!("[{timestamp}] [{prefix}] {message}")
}

// Logging must never take the shell down; every failure here is swallowed.
fn append_log_line(prefix: &str, message: &str) {
    let Some(log_path) = resolve_shell_log_path() else {
        return;
    };
    if let Some(parent_dir) = log_path.parent() {
        if fs::create_dir_all(parent_dir).is_err() {
            return;
        }
    }

    let timestamp = chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();
    if let Ok(mut log_file) = OpenOptions::new().create(true).append(true).open(&log_path) {
        let _ = writeln!(log_file, "{}", render_log_line(&timestamp, prefix, message));
    }
}

pub(crate) fn append_shell_log(message: &str) {
    append_log_line("shell", message);
}

pub(crate) fn append_startup_log(message: &str) {
    append_log_line("startup", message);
}

pub(crate) fn append_update_log(message: &str) {
    append_log_line("update", message);
}

pub(crate) fn append_restart_log(message: &str) {
    append_log_line("restart", message);
}

#[cfg(test)]
mod tests {
    use super::render_log_line;

    #[test]
    fn log_lines_carry_timestamp_and_concern_prefix() {
        assert_eq!(
            render_log_line("2026-01-01 12:00:00", "update", "attempt started"),
            "[2026-01-01 12:00:00] [update] attempt started"
        );
    }
}
