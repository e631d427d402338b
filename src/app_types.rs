use serde::Serialize;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use crate::ShellPage;

/// Shared shell state managed by the Tauri app.
#[derive(Debug)]
pub(crate) struct ShellState {
    pub(crate) current_page: Mutex<ShellPage>,
    pub(crate) update_in_flight: AtomicBool,
    /// Arguments (without argv[0]) the current process was launched with,
    /// forwarded verbatim to the replacement process on restart.
    pub(crate) launch_args: Vec<String>,
}

impl ShellState {
    pub(crate) fn with_launch_args(launch_args: Vec<String>) -> Self {
        Self {
            current_page: Mutex::new(ShellPage::default()),
            update_in_flight: AtomicBool::new(false),
            launch_args,
        }
    }

    pub(crate) fn current_page(&self) -> ShellPage {
        self.current_page
            .lock()
            .map(|guard| *guard)
            .unwrap_or_default()
    }

    pub(crate) fn set_current_page(&self, page: ShellPage) {
        if let Ok(mut guard) = self.current_page.lock() {
            *guard = page;
        }
    }

    pub(crate) fn is_update_in_flight(&self) -> bool {
        self.update_in_flight.load(Ordering::Acquire)
    }

    pub(crate) fn bridge_state(&self) -> ShellBridgeState {
        ShellBridgeState {
            page: self.current_page().id().to_string(),
            updating: self.is_update_in_flight(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ShellBridgeState {
    pub(crate) page: String,
    pub(crate) updating: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ShellBridgeResult {
    pub(crate) ok: bool,
    pub(crate) reason: Option<String>,
}

/// Drop guard around an `AtomicBool` flag. `try_set` wins the flag or
/// reports that another holder already has it.
pub(crate) struct AtomicFlagGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> AtomicFlagGuard<'a> {
    pub(crate) fn try_set(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        Some(Self { flag })
    }
}

impl Drop for AtomicFlagGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
