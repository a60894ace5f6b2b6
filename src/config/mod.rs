//! Configuration module for shellexec
//!
//! Provides XDG-compliant layered configuration loading.

pub mod loader;
pub mod model;

pub use loader::{config_paths, config_sources, explicit_config_path, load_config, CONFIG_ENV};
pub use model::*;
