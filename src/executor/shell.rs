//! Shell interpreter selection
//!
//! A command line is never split by shellexec itself; it is handed as a single
//! argument to the platform shell, which parses metacharacters, pipelines and
//! globs. That makes every entry point taking a command line an injection
//! surface: never interpolate untrusted input into one. Use
//! [`execute_argv`](super::execute_argv) when arguments must be passed verbatim.

use std::process::Command;

use serde::{Deserialize, Serialize};

#[cfg(windows)]
const DEFAULT_PROGRAM: &str = "cmd";
#[cfg(windows)]
const DEFAULT_FLAG: &str = "/C";

#[cfg(not(windows))]
const DEFAULT_PROGRAM: &str = "sh";
#[cfg(not(windows))]
const DEFAULT_FLAG: &str = "-c";

/// A command interpreter and the flag that makes it read a command string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shell {
    /// Interpreter program (name on PATH or absolute path)
    pub program: String,
    /// Flag preceding the command string (`-c`, `/C`)
    pub flag: String,
}

impl Default for Shell {
    fn default() -> Self {
        Self::platform_default()
    }
}

impl Shell {
    /// Create a shell from an explicit program and flag
    pub fn new(program: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            flag: flag.into(),
        }
    }

    /// `sh -c` on Unix, `cmd /C` on Windows
    pub fn platform_default() -> Self {
        Self::new(DEFAULT_PROGRAM, DEFAULT_FLAG)
    }

    /// Build a `Command` that runs `command_line` through this shell
    ///
    /// On Windows, `cmd.exe` gets the line unquoted: it parses its own command
    /// line and does not understand the MSVCRT escaping `Command::arg` applies.
    pub fn command(&self, command_line: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(&self.flag);
        self.push_command_line(&mut cmd, command_line);
        cmd
    }

    /// Whether the program is `cmd` / `cmd.exe`, in any case or directory
    pub fn is_cmd(&self) -> bool {
        let name = self.program.rsplit(['/', '\\']).next().unwrap_or(&self.program);
        name.eq_ignore_ascii_case("cmd") || name.eq_ignore_ascii_case("cmd.exe")
    }

    #[cfg(windows)]
    fn push_command_line(&self, cmd: &mut Command, command_line: &str) {
        use std::os::windows::process::CommandExt;

        if self.is_cmd() {
            cmd.raw_arg(command_line);
        } else {
            cmd.arg(command_line);
        }
    }

    #[cfg(not(windows))]
    fn push_command_line(&self, cmd: &mut Command, command_line: &str) {
        cmd.arg(command_line);
    }
}
