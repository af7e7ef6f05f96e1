//! CLI argument definitions for `PlanPath`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use planpath::core::config::ConfigOverrides;
use planpath::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `base_url`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum ProgramsSubcommand {
    /// List all degree programs, optionally narrowed by a search query.
    List {
        /// Search query applied to program names (token-based matching)
        #[arg(short, long, value_name = "QUERY")]
        search: Option<String>,
    },
    /// Show one program's overview, credits, and link.
    Show {
        /// Program identifier (e.g., `bs-cs`)
        #[arg(value_name = "ID")]
        id: String,
    },
    /// List the requirement rows for a program.
    Requirements {
        /// Program identifier
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Show per-term grade averages.
    ///
    /// With an ID, shows every term for that program; with `--term`, shows
    /// that term across programs (or the one program when both are given).
    Averages {
        /// Program identifier (optional when `--term` is given)
        #[arg(value_name = "ID")]
        id: Option<String>,

        /// Term to filter on (e.g., "Fall 2024")
        #[arg(long, value_name = "TERM")]
        term: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProfileSubcommand {
    /// Fetch and display a profile record.
    Show {
        /// Profile record identifier
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Update one field of a profile record.
    ///
    /// The value is parsed as JSON when possible (numbers, `null`), otherwise
    /// sent as a string.
    Set {
        /// Profile record identifier
        #[arg(value_name = "ID")]
        id: String,
        /// Field name (`year`, `degree_program_id`, `minor_id`, `name`)
        #[arg(value_name = "FIELD")]
        field: String,
        /// New value
        #[arg(value_name = "VALUE")]
        value: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Browse degree programs, requirements, and grade averages.
    Programs {
        #[command(subcommand)]
        subcommand: ProgramsSubcommand,
    },
    /// Search degree programs by name.
    ///
    /// Quote multi-word queries; spacing is significant to the matcher.
    Search {
        /// Search query (e.g., "bachelor of science")
        #[arg(value_name = "QUERY")]
        query: String,
    },
    /// View and edit a student profile.
    Profile {
        #[command(subcommand)]
        subcommand: ProfileSubcommand,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "planpath",
    about = "PlanPath command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the data API base URL for this run
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the profile endpoint URL for this run
    #[arg(long = "profile-url", value_name = "URL")]
    pub profile_url: Option<String>,

    /// Serve embedded mock data instead of the live API (true/false)
    #[arg(long = "use-mock", value_parser = BoolishValueParser::new())]
    pub use_mock: Option<bool>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration for this run only.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            base_url: self.base_url.clone(),
            profile_url: self.profile_url.clone(),
            use_mock: self.use_mock,
        }
    }
}
