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
///
/// Without a subcommand the skeleton is created.
#[derive(Debug, Parser)]
#[command(
    name    = "twinskel",
    bin_name = "twinskel",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create an app + lib two-module project skeleton",
    long_about = "twinskel creates the directory and file skeleton of a \
                  two-module project: an `app` module depending on a `lib` \
                  module, both under a shared package namespace.",
    after_help = "EXAMPLES:\n\
        \x20 twinskel\n\
        \x20 twinskel --what-if\n\
        \x20 twinskel --confirm --base-package org,example\n\
        \x20 twinskel -v --app-file-name Main.scala -C ./my-project\n\
        \x20 twinskel completions bash > ~/.local/share/bash-completion/completions/twinskel",
    args_conflicts_with_subcommands = true,
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Skeleton options.
    #[command(flatten)]
    pub scaffold: ScaffoldArgs,

    /// Optional subcommand.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialise a twinskel configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 twinskel init          # user config location\n\
            \x20 twinskel init --local  # .twinskel.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 twinskel completions bash > ~/.local/share/bash-completion/completions/twinskel\n\
            \x20 twinskel completions zsh  > ~/.zfunc/_twinskel\n\
            \x20 twinskel completions fish > ~/.config/fish/completions/twinskel.fish"
    )]
    Completions(CompletionsArgs),
}

// ── scaffold ──────────────────────────────────────────────────────────────────

/// Options of the default (scaffold) action.
#[derive(Debug, Args)]
pub struct ScaffoldArgs {
    /// Ask before each directory or file is created.
    #[arg(long = "confirm", help = "Prompt before each of the four actions")]
    pub confirm: bool,

    /// Report what would be created without touching the filesystem.
    #[arg(
        long = "what-if",
        visible_alias = "dry-run",
        help = "Show what would be created without creating (overrides --confirm)"
    )]
    pub what_if: bool,

    /// Shared namespace of both modules.
    #[arg(
        long = "base-package",
        value_name = "SEGMENTS",
        value_delimiter = ',',
        help = "Base package segments [default: com,github,username]"
    )]
    pub base_package: Option<Vec<String>>,

    /// Subpackage of the app module.
    #[arg(
        long = "app-package",
        value_name = "SEGMENTS",
        value_delimiter = ',',
        help = "App module package segments [default: app]"
    )]
    pub app_package: Option<Vec<String>>,

    /// Subpackage of the lib module.
    #[arg(
        long = "lib-package",
        value_name = "SEGMENTS",
        value_delimiter = ',',
        help = "Lib module package segments [default: lib]"
    )]
    pub lib_package: Option<Vec<String>>,

    #[arg(
        long = "app-file-name",
        value_name = "FILE",
        help = "App source file name [default: App.scala]"
    )]
    pub app_file_name: Option<String>,

    #[arg(
        long = "lib-file-name",
        value_name = "FILE",
        help = "Lib source file name [default: Lib.scala]"
    )]
    pub lib_file_name: Option<String>,

    /// Directory the skeleton is created under.
    #[arg(
        short = 'C',
        long = "output-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Create the skeleton under DIR"
    )]
    pub output_dir: PathBuf,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `twinskel init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.twinskel.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `twinskel completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, value_name = "SHELL")]
    pub shell: Shell,
}

/// Shells supported by `clap_complete`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}
