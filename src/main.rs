#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_restart;
mod app_runtime;
mod app_types;
mod bridge_commands;
mod logging;
mod shell_pages;
mod status_events;
mod update_flow;
mod update_outcome;
mod update_platform;
mod update_runner;

pub(crate) use app_constants::*;
pub(crate) use app_types::{AtomicFlagGuard, ShellBridgeResult, ShellBridgeState, ShellState};
pub(crate) use logging::{
    append_restart_log, append_shell_log, append_startup_log, append_update_log,
};
pub(crate) use shell_pages::ShellPage;

fn main() {
    app_runtime::run(app_restart::forwarded_launch_args(std::env::args()));
}
