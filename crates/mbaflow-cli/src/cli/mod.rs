//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "mbaflow",
    bin_name = "mbaflow",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f393} MBA assignment workflow setup",
    long_about = "mbaflow creates the folder skeleton, assignment brief and \
                  six-stage agent workflow for an MBA writing assignment.",
    after_help = "EXAMPLES:\n\
        \x20 mbaflow new\n\
        \x20 mbaflow new --dry-run\n\
        \x20 mbaflow frameworks --format json\n\
        \x20 mbaflow completions bash > /usr/share/bash-completion/completions/mbaflow",
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
    /// Interactively set up a new assignment project.
    #[command(
        visible_alias = "n",
        about = "Set up a new assignment project",
        after_help = "EXAMPLES:\n\
            \x20 mbaflow new\n\
            \x20 mbaflow new --dry-run\n\
            \x20 mbaflow new --editor cursor"
    )]
    New(NewArgs),

    /// List the analysis frameworks offered at the framework prompt.
    #[command(
        visible_alias = "ls",
        about = "List available analysis frameworks",
        after_help = "EXAMPLES:\n\
            \x20 mbaflow frameworks\n\
            \x20 mbaflow frameworks swot\n\
            \x20 mbaflow frameworks --format json"
    )]
    Frameworks(FrameworksArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 mbaflow completions bash > ~/.local/share/bash-completion/completions/mbaflow\n\
            \x20 mbaflow completions zsh  > ~/.zfunc/_mbaflow\n\
            \x20 mbaflow completions fish > ~/.config/fish/completions/mbaflow.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the resolved settings.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 mbaflow config get workspace.courses_dir\n\
            \x20 mbaflow config list\n\
            \x20 mbaflow config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `mbaflow new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Ask every question but only show what would be created.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Editor binary used when you choose to open the project.
    #[arg(
        long = "editor",
        value_name = "BIN",
        help = "Editor to open the project with (default: code)"
    )]
    pub editor: Option<String>,
}

// ── frameworks ────────────────────────────────────────────────────────────────

/// Arguments for `mbaflow frameworks`.
#[derive(Debug, Args)]
pub struct FrameworksArgs {
    /// Show only this framework (name or alias such as `swot`, `7s`).
    #[arg(value_name = "NAME", help = "Show a single framework")]
    pub name: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `frameworks` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Numbered names with definitions.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `mbaflow completions`.
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

/// Subcommands for `mbaflow config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `workspace.courses_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
