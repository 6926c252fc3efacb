//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "geoseed",
    bin_name = "geoseed",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f30d} Sample geodata seeding and workspace inventory",
    long_about = "geoseed writes placeholder geodata fixtures (a minimal \
                  GeoJSON document and a raster stand-in) and inventories \
                  workspaces for geodata files.",
    after_help = "EXAMPLES:\n\
        \x20 geoseed gen ./fixtures\n\
        \x20 geoseed scan ./data --format csv --output inventory.csv\n\
        \x20 geoseed config get defaults.output_dir\n\
        \x20 geoseed completions bash > /usr/share/bash-completion/completions/geoseed",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the sample fixture files into a directory.
    #[command(
        visible_alias = "g",
        about = "Generate sample geodata fixtures",
        after_help = "EXAMPLES:\n\
            \x20 geoseed gen ./fixtures\n\
            \x20 geoseed gen /tmp/demo-data\n\n\
            With no directory, prints the usage line and exits cleanly."
    )]
    Gen(GenArgs),

    /// Inventory a workspace for geodata files.
    #[command(
        visible_alias = "ls",
        about = "Scan a workspace for geodata files",
        after_help = "EXAMPLES:\n\
            \x20 geoseed scan ./data\n\
            \x20 geoseed scan ./data --format json\n\
            \x20 geoseed scan ./data --format csv --output inventory.csv"
    )]
    Scan(ScanArgs),

    /// Initialise a geoseed configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 geoseed init           # default location\n\
            \x20 geoseed init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 geoseed completions bash > ~/.local/share/bash-completion/completions/geoseed\n\
            \x20 geoseed completions zsh  > ~/.zfunc/_geoseed\n\
            \x20 geoseed completions fish > ~/.config/fish/completions/geoseed.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the geoseed configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 geoseed config get defaults.output_dir\n\
            \x20 geoseed config set scan.follow_links true\n\
            \x20 geoseed config list"
    )]
    Config(ConfigCommands),
}

// ── gen ───────────────────────────────────────────────────────────────────────

/// Arguments for `geoseed gen`.
#[derive(Debug, Args)]
pub struct GenArgs {
    /// Output directory for the sample files.
    ///
    /// Zero or more values so the zero-argument usage-line path stays
    /// expressible; anything beyond the first is ignored.
    #[arg(value_name = "OUTPUT_DIR", help = "Output directory for the sample files")]
    pub output_dirs: Vec<PathBuf>,
}

// ── scan ──────────────────────────────────────────────────────────────────────

/// Arguments for `geoseed scan`.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Workspace directory to scan.  Falls back to `defaults.output_dir`
    /// from the config, then to the current directory.
    #[arg(value_name = "DIR", help = "Workspace directory to scan")]
    pub dir: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ScanFormat,

    /// Write the report to a file instead of stdout (json/csv only).
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write the report to a file"
    )]
    pub output: Option<PathBuf>,
}

/// Output format for the `scan` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScanFormat {
    /// Human-readable table.
    Table,
    /// One path per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `geoseed init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `geoseed completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `geoseed config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.output_dir`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
