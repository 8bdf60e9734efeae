//! CLI command definitions using clap
//!
//! Defines the command structure for the `tripmate` CLI tool.

use clap::{Parser, Subcommand, ValueEnum};

/// trip-mate - Trip planning from your terminal
///
/// Ask the Trip Mate server for travel plans.
/// Run without arguments to launch the TUI mode.
#[derive(Parser, Debug)]
#[command(name = "tripmate", version, about, long_about = None)]
pub struct Cli {
    /// Trip Mate server URL (overrides the configured endpoint)
    #[arg(long, global = true, env = "TRIPMATE_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask for a trip plan
    Ask(AskArgs),

    /// Check that the server is reachable
    Health,

    /// Manage configuration
    Config(ConfigArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Ask Command
// ─────────────────────────────────────────────────────────────────────────────

/// Ask command arguments
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The trip-planning request; multiple words are joined with spaces
    #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
    pub query: Vec<String>,

    /// How to print the answer
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl AskArgs {
    /// The query as typed, before trimming
    pub fn raw_query(&self) -> String {
        self.query.join(" ")
    }
}

/// Output format for answers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered plain text
    #[default]
    Text,
    /// Sanitized HTML
    Html,
    /// Markup exactly as the server returned it
    Markdown,
    /// JSON object with query, markdown and html
    Json,
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key
        key: ConfigKey,

        /// Configuration value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: ConfigKey,
    },

    /// Reset a configuration value to its default
    Remove {
        /// Configuration key
        key: ConfigKey,
    },

    /// Print the configuration file location
    Path,
}

/// Available configuration keys
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ConfigKey {
    /// Trip Mate server URL
    #[value(name = "endpoint")]
    Endpoint,
}
