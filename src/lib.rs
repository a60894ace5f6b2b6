//! shellexec - Run shell commands from Rust
//!
//! Two stateless operations over the platform shell (`sh -c` / `cmd /C`):
//!
//! - [`execute`] - block until the command exits and return its stdout as
//!   UTF-8 text; a non-zero exit is an error carrying the exit code and stderr
//! - [`execute_async`] - launch the command and return immediately; output is
//!   discarded and only a failure to spawn is reported
//!
//! ```no_run
//! let listing = shellexec::execute("ls -1 | head -n 3")?;
//! shellexec::execute_async("sleep 30 && touch done")?;
//! # Ok::<(), shellexec::ShellError>(())
//! ```
//!
//! Command lines are interpreted by the shell. Never build one from untrusted
//! input; [`execute_argv`] runs a program with an argument vector instead.

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use error::{ErrorInfo, ShellError};
pub use executor::{
    execute, execute_argv, execute_async, execute_blocking, Shell, ShellExecutor,
};
