//! Error types for shellexec
//!
//! Provides structured error types with suggestions for common issues.

use serde::Serialize;
use thiserror::Error;

/// Main error type for command execution
#[derive(Error, Debug)]
pub enum ShellError {
    /// The shell (or program) could not be spawned
    #[error("Failed to spawn command: {command}")]
    SpawnFailed { command: String, error: String },

    /// Command ran to completion but reported failure
    #[error("Command exited with {exit}: {command}", exit = describe_exit(.exit_code))]
    NonZeroExit {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
        suggestion: Option<String>,
    },

    /// Captured standard output is not valid UTF-8
    #[error("Command produced invalid UTF-8 output: {command}")]
    Decoding {
        command: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl ShellError {
    /// Exit code of the failed child, if it reported one
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ShellError::NonZeroExit { exit_code, .. } => *exit_code,
            _ => None,
        }
    }
}

/// Serializable error info for JSON error reports
#[derive(Debug, Serialize, Clone)]
pub struct ErrorInfo {
    pub message: String,
    pub error_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
}

impl From<&ShellError> for ErrorInfo {
    fn from(err: &ShellError) -> Self {
        let message = err.to_string();
        match err {
            ShellError::SpawnFailed { error, .. } => ErrorInfo {
                message,
                error_type: "spawn_failed".to_string(),
                suggestion: Some(format!("Check that the shell is available: {}", error)),
                exit_code: None,
                stderr: None,
            },
            ShellError::NonZeroExit {
                exit_code,
                stderr,
                suggestion,
                ..
            } => ErrorInfo {
                message,
                error_type: "non_zero_exit".to_string(),
                suggestion: suggestion.clone(),
                exit_code: *exit_code,
                stderr: Some(stderr.clone()),
            },
            ShellError::Decoding { source, .. } => ErrorInfo {
                message,
                error_type: "decoding".to_string(),
                suggestion: Some(format!(
                    "Output is not UTF-8 ({}). Pipe it through an encoder such as base64",
                    source.utf8_error()
                )),
                exit_code: None,
                stderr: None,
            },
            ShellError::Config(_) => ErrorInfo {
                message,
                error_type: "config_error".to_string(),
                suggestion: Some("Check your shellexec configuration file".to_string()),
                exit_code: None,
                stderr: None,
            },
            ShellError::Io(_) => ErrorInfo {
                message,
                error_type: "io_error".to_string(),
                suggestion: None,
                exit_code: None,
                stderr: None,
            },
        }
    }
}

/// Suggest fixes for common error patterns
pub fn suggest_fix(command: &str, stderr: &str) -> Option<String> {
    if stderr.contains("Permission denied") {
        return Some(
            "Permission denied. Check file permissions or run with appropriate access.".to_string(),
        );
    }

    // sh reports "not found", bash "command not found", cmd "is not recognized"
    if stderr.contains("not found") || stderr.contains("is not recognized") {
        let program = command.split_whitespace().next().unwrap_or(command);
        return Some(format!(
            "'{}' may not be installed. Check PATH and dependencies.",
            program
        ));
    }

    if stderr.contains("No such file") {
        return Some("File not found. Check the working directory and file paths.".to_string());
    }

    if stderr.to_lowercase().contains("syntax error") {
        return Some("The shell could not parse the command. Check quoting.".to_string());
    }

    None
}
