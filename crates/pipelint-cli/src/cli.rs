//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// Pipelint CLI - Validate inference pipeline configurations
///
/// Checks the configuration of an inference pipeline before it is attached
/// to an index, and explains why an existing pipeline cannot be selected.
#[derive(Parser, Debug)]
#[command(
    name = "pipelint",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PIPELINT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results (defaults to the configured format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate an inference pipeline configuration document
    Validate(ValidateArgs),

    /// Explain why an existing pipeline cannot be selected for an index
    DisabledReason(DisabledReasonArgs),

    /// Check whether a pipeline name uses only allowed characters
    CheckName(CheckNameArgs),

    /// Inspect configuration files and settings
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the pipeline configuration file (JSON or YAML)
    #[arg(value_name = "CONFIG_FILE")]
    pub config_file: PathBuf,

    /// Existing pipelines keyed by name (JSON or YAML), used to check name availability
    #[arg(short, long, value_name = "CATALOG_FILE")]
    pub existing: Option<PathBuf>,

    /// Message table overriding the built-in messages
    #[arg(short, long, value_name = "FILE")]
    pub messages: Option<PathBuf>,

    /// Show the parsed configuration alongside the result
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for the disabled-reason command
#[derive(Parser, Debug)]
pub struct DisabledReasonArgs {
    /// Name of the existing pipeline
    #[arg(short, long)]
    pub pipeline: String,

    /// Source field the pipeline reads (repeatable)
    #[arg(long = "source-field", value_name = "FIELD")]
    pub source_fields: Vec<String>,

    /// Field available on the index (repeatable)
    #[arg(long = "index-field", value_name = "FIELD")]
    pub index_fields: Vec<String>,

    /// Processor already attached to the index (repeatable)
    #[arg(long = "processor", value_name = "NAME")]
    pub processors: Vec<String>,

    /// Message table overriding the built-in messages
    #[arg(short, long, value_name = "FILE")]
    pub messages: Option<PathBuf>,
}

/// Arguments for the check-name command
#[derive(Parser, Debug)]
pub struct CheckNameArgs {
    /// Candidate pipeline name
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration inspection actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show(ConfigShowArgs),

    /// List the configuration file locations that are searched
    Path,
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

impl OutputFormat {
    /// Parse a format name as written in the configuration file
    pub fn from_config_value(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value, true).ok()
    }
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
