//! CLI command definitions using clap
//!
//! Defines all CLI subcommands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};

/// Run shell commands with captured output, or launch them in the background.
///
/// `run` waits and prints the command's stdout; `spawn` returns as soon as
/// the command has started.
#[derive(Parser, Debug)]
#[command(name = "shellexec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file layered over the XDG paths (default: $SHELLEXEC_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a command line through the shell and print its stdout
    Run(RunArgs),

    /// Launch a command line through the shell without waiting for it
    Spawn(SpawnArgs),

    /// Run a program directly with arguments, bypassing the shell
    Exec(ExecArgs),

    /// Show the resolved configuration
    Config(ConfigArgs),
}

/// Arguments for the `run` subcommand
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Command line passed verbatim to the shell
    #[arg(required = true)]
    pub command: String,

    /// Error report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ErrorFormat,
}

/// Arguments for the `spawn` subcommand
#[derive(Parser, Debug)]
pub struct SpawnArgs {
    /// Command line passed verbatim to the shell
    #[arg(required = true)]
    pub command: String,
}

/// Arguments for the `exec` subcommand
#[derive(Parser, Debug)]
pub struct ExecArgs {
    /// Program to run
    #[arg(required = true)]
    pub program: String,

    /// Arguments passed to the program unchanged
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Error report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ErrorFormat,
}

impl ExecArgs {
    /// Arguments as string slices
    pub fn args_as_strs(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

/// Arguments for the `config` subcommand
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,

    /// List the config files that are layered instead
    #[arg(long)]
    pub files: bool,
}

/// How failures of `run` and `exec` are reported on stderr
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ErrorFormat {
    /// Colored human-readable message
    Text,
    /// JSON error object
    Json,
}

/// Output format for `config`
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML, as written in config files
    Toml,
    /// JSON output
    Json,
}
