//! Blocking command execution with captured output
//!
//! Every call spawns one child, waits for it without a timeout, and returns
//! its standard output decoded as UTF-8. Standard error is captured separately
//! and only surfaces inside [`ShellError::NonZeroExit`].

use std::process::{Command, Stdio};

use crate::error::{suggest_fix, ShellError};

use super::runner::ShellExecutor;

/// Run a command line through the platform shell and return its stdout
///
/// Blocks the calling thread until the child exits. The output is returned
/// exactly as written, without trimming or line-ending normalization.
///
/// The command line is interpreted by the shell, so pipelines and globs work
/// and so does injection. Do not build it from untrusted input.
///
/// # Errors
/// * `ShellError::SpawnFailed` - If the shell couldn't be spawned
/// * `ShellError::NonZeroExit` - If the command exited with a non-zero status
/// * `ShellError::Decoding` - If stdout is not valid UTF-8
pub fn execute(command: &str) -> Result<String, ShellError> {
    ShellExecutor::default().execute(command)
}

/// Run a program with an argument vector, bypassing the shell
///
/// Arguments reach the program verbatim: no globbing, quoting or variable
/// expansion takes place. Capture, exit and decoding rules match [`execute`].
pub fn execute_argv(program: &str, args: &[&str]) -> Result<String, ShellError> {
    let mut cmd = Command::new(program);
    cmd.args(args);

    let command_str = if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    };

    capture_output(cmd, &command_str)
}

/// Run [`execute`] on tokio's blocking pool
///
/// For async hosts: the wait happens on a dedicated worker thread so the
/// calling task yields instead of stalling its executor.
pub async fn execute_blocking(command: String) -> Result<String, ShellError> {
    ShellExecutor::default().execute_blocking(command).await
}

/// Spawn `cmd`, wait for it, and decode its stdout
pub(crate) fn capture_output(mut cmd: Command, command_str: &str) -> Result<String, ShellError> {
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    tracing::debug!("Executing: {}", command_str);

    let output = cmd.output().map_err(|e| ShellError::SpawnFailed {
        command: command_str.to_string(),
        error: e.to_string(),
    })?;

    if !output.status.success() {
        let exit_code = output.status.code();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        tracing::debug!(?exit_code, "Command failed: {}", command_str);

        return Err(ShellError::NonZeroExit {
            command: command_str.to_string(),
            exit_code,
            suggestion: suggest_fix(command_str, &stderr),
            stderr,
        });
    }

    String::from_utf8(output.stdout).map_err(|source| ShellError::Decoding {
        command: command_str.to_string(),
        source,
    })
}
