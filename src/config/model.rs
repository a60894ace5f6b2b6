//! Configuration model for shellexec
//!
//! Defines the structure for XDG-compliant layered configuration.

use serde::{Deserialize, Serialize};

use crate::executor::Shell;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Which interpreter runs command lines
    #[serde(default)]
    pub shell: ShellSettings,

    /// Log output of the binary
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Shell interpreter settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ShellSettings {
    /// Interpreter program; `~` and `$VAR` are expanded, bare names looked up on PATH
    #[serde(default = "default_shell_program")]
    pub program: String,

    /// Flag that makes the interpreter read a command string
    #[serde(default = "default_shell_flag")]
    pub flag: String,
}

fn default_shell_program() -> String {
    Shell::platform_default().program
}

fn default_shell_flag() -> String {
    Shell::platform_default().flag
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            program: default_shell_program(),
            flag: default_shell_flag(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}
