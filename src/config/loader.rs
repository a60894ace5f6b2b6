//! Configuration loader with XDG-compliant path resolution
//!
//! Loads configuration from multiple locations with layered priority:
//! 1. `/etc/shellexec/config.toml` (lowest priority)
//! 2. `~/.config/shellexec/config.toml`
//! 3. `~/.shellexec.toml`
//! 4. `./.shellexec.toml`
//! 5. The explicit file: `--config`, else `$SHELLEXEC_CONFIG`
//! 6. `SHELLEXEC_*` environment variables (highest priority)

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use super::model::Config;

/// Application name used for XDG directories
const APP_NAME: &str = "shellexec";

/// Prefix for environment overrides
const ENV_PREFIX: &str = "SHELLEXEC_";

/// Names the explicit config file when `--config` is absent
pub const CONFIG_ENV: &str = "SHELLEXEC_CONFIG";

/// Well-known config locations in priority order (lowest to highest)
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(format!("/etc/{}/config.toml", APP_NAME))];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(APP_NAME).join("config.toml"));
    }
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(format!(".{}.toml", APP_NAME)));
    }
    paths.push(PathBuf::from(format!(".{}.toml", APP_NAME)));

    paths
}

/// The explicitly requested config file, if any
///
/// `explicit` (from `--config`) wins over `from_env`. Empty values count as
/// unset and a leading `~` is expanded.
pub fn explicit_config_path(explicit: Option<&str>, from_env: Option<OsString>) -> Option<PathBuf> {
    let raw = match explicit {
        Some(path) if !path.is_empty() => path.to_string(),
        _ => from_env
            .filter(|value| !value.is_empty())
            .map(|value| value.to_string_lossy().into_owned())?,
    };

    Some(PathBuf::from(shellexpand::tilde(&raw).as_ref()))
}

/// Config files that will be layered, lowest priority first
///
/// Well-known locations are skipped when absent; an explicitly requested
/// file must exist.
pub fn config_sources(explicit: Option<&str>) -> Result<Vec<PathBuf>> {
    let mut sources: Vec<PathBuf> = config_paths().into_iter().filter(|p| p.exists()).collect();

    if let Some(path) = explicit_config_path(explicit, std::env::var_os(CONFIG_ENV)) {
        if !path.is_file() {
            bail!("Config file not found: {}", path.display());
        }
        sources.push(path);
    }

    Ok(sources)
}

/// Load the layered configuration
///
/// # Errors
/// Fails if an explicitly requested file is missing, a file is not valid
/// TOML, or a value has the wrong type.
pub fn load_config(explicit: Option<&str>) -> Result<Config> {
    let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

    for path in config_sources(explicit)? {
        tracing::debug!("Loading config from: {}", path.display());
        figment = figment.merge(Toml::file(&path));
    }

    // SHELLEXEC_SHELL__PROGRAM=bash maps to shell.program = "bash";
    // SHELLEXEC_CONFIG names a file, not a setting
    figment = figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["CONFIG"]).split("__"));

    figment
        .extract()
        .context("Failed to load configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_paths_order() {
        let paths = config_paths();

        assert!(paths.len() >= 2);
        assert!(paths[0].to_string_lossy().contains("/etc/"));
        assert_eq!(paths.last().unwrap(), &PathBuf::from(".shellexec.toml"));
    }

    #[test]
    fn test_explicit_path_prefers_flag_over_env() {
        let picked = explicit_config_path(Some("/from/flag.toml"), Some("/from/env.toml".into()));
        assert_eq!(picked, Some(PathBuf::from("/from/flag.toml")));
    }

    #[test]
    fn test_explicit_path_falls_back_to_env() {
        assert_eq!(
            explicit_config_path(None, Some("/from/env.toml".into())),
            Some(PathBuf::from("/from/env.toml"))
        );
        assert_eq!(
            explicit_config_path(Some(""), Some("/from/env.toml".into())),
            Some(PathBuf::from("/from/env.toml"))
        );
    }

    #[test]
    fn test_explicit_path_unset_or_empty() {
        assert_eq!(explicit_config_path(None, None), None);
        assert_eq!(explicit_config_path(None, Some(OsString::new())), None);
    }

    #[test]
    fn test_explicit_path_expands_tilde() {
        if let Some(home) = dirs::home_dir() {
            let picked = explicit_config_path(Some("~/cfg.toml"), None).unwrap();
            assert_eq!(picked, home.join("cfg.toml"));
        }
    }

    #[test]
    fn test_config_sources_ends_with_explicit_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("explicit.toml");
        fs::write(&config_path, "").unwrap();

        let sources = config_sources(Some(config_path.to_str().unwrap())).unwrap();
        assert_eq!(sources.last(), Some(&config_path));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = load_config(Some("/nonexistent/shellexec.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/shellexec.toml"));
    }

    #[test]
    fn test_explicit_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(config_sources(Some(dir.path().to_str().unwrap())).is_err());
    }

    #[test]
    fn test_load_config_from_explicit_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("test-config.toml");

        fs::write(
            &config_path,
            r#"
            [shell]
            program = "bash"
            flag = "-ec"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        let config = load_config(Some(config_path.to_str().unwrap())).unwrap();

        assert_eq!(config.shell.program, "bash");
        assert_eq!(config.shell.flag, "-ec");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("broken.toml");
        fs::write(&config_path, "[shell\nprogram = ").unwrap();

        assert!(load_config(Some(config_path.to_str().unwrap())).is_err());
    }

    #[test]
    fn test_env_override() {
        // Unique key so parallel tests loading config aren't affected
        std::env::set_var("SHELLEXEC_LOGGING__LEVEL", "trace");

        let config = load_config(None);

        std::env::remove_var("SHELLEXEC_LOGGING__LEVEL");

        assert_eq!(config.unwrap().logging.level, "trace");
    }
}
