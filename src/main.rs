//! shellexec CLI entry point
//!
//! Usage:
//!   shellexec run <command>            Run a command line, print its stdout
//!   shellexec spawn <command>          Launch a command line and return
//!   shellexec exec <program> [args]    Run a program without a shell
//!   shellexec config                   Show configuration

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use shellexec::cli::{
    commands::{ConfigArgs, ConfigFormat, ErrorFormat, ExecArgs, RunArgs, SpawnArgs},
    Cli, Commands,
};
use shellexec::config::{config_sources, load_config, Config};
use shellexec::logging::init_logging;
use shellexec::{execute_argv, ErrorInfo, ShellError, ShellExecutor};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.logging, cli.verbose);

    match cli.command {
        Commands::Run(args) => run_command(args, &config).await,
        Commands::Spawn(args) => spawn_command(args, &config),
        Commands::Exec(args) => exec_program(args).await,
        Commands::Config(args) => show_config(args, &config, cli.config.as_deref()),
    }
}

/// Run a command line and print its stdout verbatim
async fn run_command(args: RunArgs, config: &Config) -> Result<ExitCode> {
    let executor = ShellExecutor::from_config(config)?;
    let result = executor.execute_blocking(args.command).await;

    finish(result, args.format)
}

/// Launch a command line and return immediately
fn spawn_command(args: SpawnArgs, config: &Config) -> Result<ExitCode> {
    let executor = ShellExecutor::from_config(config)?;
    executor
        .execute_async(&args.command)
        .with_context(|| format!("Failed to launch '{}'", args.command))?;

    Ok(ExitCode::SUCCESS)
}

/// Run a program with an argument vector
async fn exec_program(args: ExecArgs) -> Result<ExitCode> {
    let format = args.format;

    let result = tokio::task::spawn_blocking(move || {
        execute_argv(&args.program, &args.args_as_strs())
    })
    .await
    .context("Command task panicked")?;

    finish(result, format)
}

/// Print stdout on success, or report the failure and mirror the child's exit code
fn finish(result: Result<String, ShellError>, format: ErrorFormat) -> Result<ExitCode> {
    let err = match result {
        Ok(stdout) => {
            print!("{}", stdout);
            return Ok(ExitCode::SUCCESS);
        }
        Err(err) => err,
    };

    match format {
        ErrorFormat::Json => {
            eprintln!("{}", serde_json::to_string(&ErrorInfo::from(&err))?);
        }
        ErrorFormat::Text => {
            if let ShellError::NonZeroExit { stderr, .. } = &err {
                eprint!("{}", stderr);
            }
            eprintln!("{}: {}", "error".red().bold(), err);
            if let Some(suggestion) = ErrorInfo::from(&err).suggestion {
                eprintln!("{}: {}", "hint".yellow(), suggestion);
            }
        }
    }

    Ok(exit_code_for(&err))
}

/// Exit code the CLI uses when a command fails
fn exit_code_for(err: &ShellError) -> ExitCode {
    err.exit_code()
        .and_then(|code| u8::try_from(code).ok())
        .filter(|code| *code != 0)
        .map(ExitCode::from)
        .unwrap_or(ExitCode::FAILURE)
}

/// Show resolved configuration
fn show_config(args: ConfigArgs, config: &Config, explicit: Option<&str>) -> Result<ExitCode> {
    if args.files {
        for path in config_sources(explicit)? {
            println!("{}", path.display());
        }
        return Ok(ExitCode::SUCCESS);
    }

    let rendered = match args.format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
    };
    println!("{}", rendered);

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_zero(code: Option<i32>) -> ShellError {
        ShellError::NonZeroExit {
            command: "cmd".to_string(),
            exit_code: code,
            stderr: String::new(),
            suggestion: None,
        }
    }

    #[test]
    fn test_exit_code_mirrors_child() {
        assert_eq!(exit_code_for(&non_zero(Some(3))), ExitCode::from(3));
    }

    #[test]
    fn test_exit_code_out_of_range_falls_back() {
        assert_eq!(exit_code_for(&non_zero(Some(300))), ExitCode::FAILURE);
        assert_eq!(exit_code_for(&non_zero(Some(-1))), ExitCode::FAILURE);
        assert_eq!(exit_code_for(&non_zero(None)), ExitCode::FAILURE);
    }

    #[test]
    fn test_exit_code_for_spawn_failure() {
        let err = ShellError::SpawnFailed {
            command: "x".to_string(),
            error: "missing".to_string(),
        };
        assert_eq!(exit_code_for(&err), ExitCode::FAILURE);
    }
}
