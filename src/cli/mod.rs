//! CLI module for shellexec
//!
//! Provides command-line interface with the following subcommands:
//! - `run` - Run a command line and print its stdout
//! - `spawn` - Launch a command line without waiting
//! - `exec` - Run a program with an argument vector
//! - `config` - Show configuration

pub mod commands;

pub use commands::{Cli, Commands};
