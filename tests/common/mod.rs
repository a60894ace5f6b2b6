//! Common test utilities for shellexec tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tempfile::TempDir;

/// Creates a temporary directory holding a config file with `content`
pub fn create_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = dir.path().join("shellexec.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (dir, config_path)
}

/// Polls until `path` exists or `timeout` elapses
pub fn wait_for_file(path: &Path, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if path.exists() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    path.exists()
}

/// Config that selects `sh -c` explicitly
pub const SH_CONFIG: &str = r#"
[shell]
program = "sh"
flag = "-c"

[logging]
level = "warn"
"#;

/// Config pointing at a shell that doesn't exist
pub const MISSING_SHELL_CONFIG: &str = r#"
[shell]
program = "/nonexistent/bin/shell"
flag = "-c"
"#;
