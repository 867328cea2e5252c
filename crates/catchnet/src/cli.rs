//! Clap derive structures for the `catchnet` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// catchnet -- port, date and vessel dashboards from the command line
#[derive(Debug, Parser)]
#[command(
    name = "catchnet",
    version,
    about = "Inspect CatchNet port operations data from the command line",
    long_about = "Loads the available ports, dates and vessels from a CatchNet API,\n\
        selects the first of each by default, and queries daily views for the\n\
        selected port and date.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration profile to use
    #[arg(long, short = 'p', env = "CATCHNET_PROFILE", global = true)]
    pub profile: Option<String>,

    /// API base URL (overrides profile)
    #[arg(long, short = 'u', env = "CATCHNET_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format [default: `defaults.output` from config, else table]
    #[arg(long, short = 'o', env = "CATCHNET_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds (0 or unset: wait indefinitely)
    #[arg(long, env = "CATCHNET_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

impl GlobalOpts {
    /// The output format in effect once config defaults are applied.
    pub fn output_format(&self) -> OutputFormat {
        self.output.unwrap_or(OutputFormat::Table)
    }
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load and show the available ports, dates and vessels
    #[command(alias = "f")]
    Filters(FiltersArgs),

    /// Show the daily view for a port and date
    #[command(alias = "dv")]
    DailyView(ScopeArgs),

    /// Show export tonnage for a port and date
    Exports(ScopeArgs),

    /// Check that the API is reachable
    Status,

    /// Manage configuration profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Filters ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct FiltersArgs {
    /// Show only one option list
    #[arg(long, value_enum)]
    pub only: Option<FilterKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterKind {
    Ports,
    Dates,
    Vessels,
}

// ── Scoped queries ───────────────────────────────────────────────────

/// Selection overrides. Unset values keep the loaded defaults.
#[derive(Debug, Args)]
pub struct ScopeArgs {
    /// Port to select instead of the first advertised one
    #[arg(long)]
    pub port: Option<String>,

    /// Date (YYYY-MM-DD) to select instead of the first advertised one
    #[arg(long)]
    pub date: Option<String>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Create or replace a profile
    Init(ConfigInitArgs),
}

#[derive(Debug, Args)]
pub struct ConfigInitArgs {
    /// API base URL for the profile
    #[arg(long, default_value = catchnet_api::DEFAULT_BASE_URL)]
    pub url: String,

    /// Custom CA certificate (PEM)
    #[arg(long)]
    pub ca_cert: Option<PathBuf>,

    /// Request timeout in seconds for this profile
    #[arg(long = "profile-timeout")]
    pub profile_timeout: Option<u64>,

    /// Make this the default profile
    #[arg(long)]
    pub set_default: bool,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}
