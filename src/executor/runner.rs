//! Shell-bound executor handle
//!
//! [`ShellExecutor`] pins both operations to one [`Shell`]. It holds no other
//! state, so a single instance can be shared freely across threads.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::ShellError;

use super::launcher::launch_detached;
use super::shell::Shell;
use super::sync::capture_output;

/// Runs command lines through a fixed shell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellExecutor {
    shell: Shell,
}

impl ShellExecutor {
    /// Create an executor using the platform shell
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor using the given shell
    pub fn with_shell(shell: Shell) -> Self {
        Self { shell }
    }

    /// Create an executor from configuration
    ///
    /// `shell.program` is expanded (`~`, `$VAR`) and, unless it is already a
    /// path, resolved on PATH.
    ///
    /// # Errors
    /// * `ShellError::Config` - If the program can't be expanded or found
    pub fn from_config(config: &Config) -> Result<Self, ShellError> {
        let program = resolve_program(&config.shell.program)?;
        Ok(Self::with_shell(Shell::new(program, config.shell.flag.clone())))
    }

    /// The shell this executor runs commands through
    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Run `command` and return its stdout; see [`execute`](super::execute)
    pub fn execute(&self, command: &str) -> Result<String, ShellError> {
        capture_output(self.shell.command(command), command)
    }

    /// Run [`execute`](Self::execute) on tokio's blocking pool
    ///
    /// The executor is cloned into the worker thread, so the future is
    /// `'static` and can be spawned.
    ///
    /// # Errors
    /// As [`execute`](Self::execute), plus `ShellError::Io` if the worker
    /// thread panicked or was cancelled.
    pub async fn execute_blocking(&self, command: String) -> Result<String, ShellError> {
        let executor = self.clone();
        tokio::task::spawn_blocking(move || executor.execute(&command))
            .await
            .map_err(|e| ShellError::Io(std::io::Error::other(format!("blocking task failed: {}", e))))?
    }

    /// Launch `command` without waiting; see [`execute_async`](super::execute_async)
    pub fn execute_async(&self, command: &str) -> Result<(), ShellError> {
        launch_detached(self.shell.command(command), command)
    }
}

/// Expand and locate a configured shell program
fn resolve_program(program: &str) -> Result<String, ShellError> {
    let expanded = shellexpand::full(program)
        .map_err(|e| ShellError::Config(format!("cannot expand shell program '{}': {}", program, e)))?;

    let path = PathBuf::from(expanded.as_ref());
    if path.components().count() > 1 || path.is_absolute() {
        return Ok(expanded.into_owned());
    }

    which::which(&path)
        .map(|found| found.to_string_lossy().into_owned())
        .map_err(|e| ShellError::Config(format!("shell program '{}' not found: {}", program, e)))
}
