//! Command execution module
//!
//! Provides two stateless operations over the platform shell:
//! - Blocking execution with captured, UTF-8 decoded stdout
//! - Fire-and-forget launching with discarded output

pub mod launcher;
pub mod runner;
pub mod shell;
pub mod sync;

pub use launcher::execute_async;
pub use runner::ShellExecutor;
pub use shell::Shell;
pub use sync::{execute, execute_argv, execute_blocking};
