//! Fire-and-forget command launching
//!
//! The caller gets control back as soon as the child exists. Nothing about the
//! child's outcome is reported: its output and diagnostics are discarded and
//! its exit status only shows up in debug logs.

use std::process::{Child, Command, Stdio};

use crate::error::ShellError;

use super::runner::ShellExecutor;

/// Name given to the threads that reap detached children
const REAPER_THREAD_NAME: &str = "shellexec-reaper";

/// Launch a command line through the platform shell without waiting for it
///
/// Standard output and standard error are sent to the null device. No handle
/// is returned, so the process can't be awaited, queried or cancelled.
///
/// The command line is interpreted by the shell; see [`execute`](super::execute)
/// for the injection caveat.
///
/// Each launch parks one small reaper thread in `wait()` until the child
/// exits, so N long-running children cost N OS threads. Callers launching
/// many long-lived processes should bound how many are in flight.
///
/// # Errors
/// * `ShellError::SpawnFailed` - If the shell couldn't be spawned. This is the
///   only error: failures of the command itself are never observed.
pub fn execute_async(command: &str) -> Result<(), ShellError> {
    ShellExecutor::default().execute_async(command)
}

/// Spawn `cmd` detached from the caller
pub(crate) fn launch_detached(mut cmd: Command, command_str: &str) -> Result<(), ShellError> {
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::null());
    cmd.stderr(Stdio::null());

    tracing::debug!("Launching: {}", command_str);

    let child = cmd.spawn().map_err(|e| ShellError::SpawnFailed {
        command: command_str.to_string(),
        error: e.to_string(),
    })?;

    reap_in_background(child, command_str.to_string());

    Ok(())
}

/// Wait for `child` on a detached thread so it doesn't linger as a zombie
///
/// The thread lives exactly as long as the child.
fn reap_in_background(mut child: Child, command_str: String) {
    let pid = child.id();

    let spawned = std::thread::Builder::new()
        .name(REAPER_THREAD_NAME.to_string())
        .spawn(move || match child.wait() {
            Ok(status) => {
                tracing::debug!(pid, exit_code = ?status.code(), "Detached command finished: {}", command_str);
            }
            Err(e) => {
                tracing::warn!(pid, "Failed to wait for detached command '{}': {}", command_str, e);
            }
        });

    if let Err(e) = spawned {
        // The process is running either way; it just won't be reaped until we exit
        tracing::warn!(pid, "Failed to start reaper thread: {}", e);
    }
}
