//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use viper_core::application::Step;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "viper",
    bin_name = "viper",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Greet a profile, then navigate to its screen",
    long_about = "Viper wires a View, Presenter, Interactor and Router together \
                  and drives one interaction: the screen appears, then the user \
                  continues.",
    after_help = "EXAMPLES:\n\
        \x20 viper run\n\
        \x20 viper run --name \"Ada Lovelace\"\n\
        \x20 viper run --step arrive --step arrive --strict\n\
        \x20 viper completions bash > /usr/share/bash-completion/completions/viper",
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
    /// Assemble the profile module and drive the view.
    #[command(
        visible_alias = "r",
        about = "Run the profile interaction",
        after_help = "EXAMPLES:\n\
            \x20 viper run\n\
            \x20 viper run --name \"Ada Lovelace\"\n\
            \x20 viper run --step continue"
    )]
    Run(RunArgs),

    /// Initialise a Viper configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 viper init                   # default location\n\
            \x20 viper init --path viper.toml # explicit file\n\
            \x20 viper init --force           # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 viper completions bash > ~/.local/share/bash-completion/completions/viper\n\
            \x20 viper completions zsh  > ~/.zfunc/_viper\n\
            \x20 viper completions fish > ~/.config/fish/completions/viper.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Viper configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 viper config get profile.name\n\
            \x20 viper config list\n\
            \x20 viper config path"
    )]
    Config(ConfigCommands),
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for `viper run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Profile name; overrides `profile.name` from configuration.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Profile name")]
    pub name: Option<String>,

    /// View events to trigger, in order.  Defaults to `arrive` then `continue`.
    #[arg(
        short = 's',
        long = "step",
        value_name = "STEP",
        value_enum,
        help = "View event to trigger (repeatable)"
    )]
    pub steps: Vec<StepArg>,

    /// Verify the wiring before triggering any event.
    #[arg(long = "strict", help = "Fail if the module is not fully wired")]
    pub strict: bool,
}

/// A view event selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StepArg {
    /// The screen appeared.
    #[value(alias = "come-on-screen")]
    Arrive,
    /// The user asked to continue.
    #[value(alias = "proceed")]
    Continue,
}

impl From<StepArg> for Step {
    fn from(arg: StepArg) -> Self {
        match arg {
            StepArg::Arrive => Step::Arrive,
            StepArg::Continue => Step::Continue,
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `viper init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write here instead of the default location.
    #[arg(long = "path", value_name = "FILE", help = "Where to write the configuration")]
    pub path: Option<PathBuf>,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `viper completions`.
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

/// Subcommands for `viper config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `profile.name`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
