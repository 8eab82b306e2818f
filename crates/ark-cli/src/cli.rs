//! CLI argument definitions for the `ark` host.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ark",
    version,
    about = "Ark visual builder - inspect the component catalog and replay editor scripts",
    long_about = "Inspect the Ark component catalog and replay editor command scripts.\n\n\
                  Scripts are JSON arrays of editor commands (add, update, remove,\n\
                  select, move, clear, initialize). The resulting component tree is\n\
                  printed as an outline."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Editor options file (default: editor.toml in the platform config folder).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List component types grouped by palette category.
    Palette,

    /// Show the property schema of one component type.
    Schema(SchemaArgs),

    /// Apply a command script to a fresh canvas and print the result.
    Replay(ReplayArgs),
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Component type tag (container, text, button, input, image).
    #[arg(value_name = "TYPE")]
    pub component_type: String,
}

#[derive(Parser)]
pub struct ReplayArgs {
    /// JSON file holding an array of editor commands.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Start from an empty canvas instead of a root container.
    #[arg(long = "no-init")]
    pub no_init: bool,

    /// Report failing commands and keep applying the rest.
    #[arg(long = "keep-going")]
    pub keep_going: bool,

    /// Use random id suffixes instead of `<type>_<n>` ids.
    ///
    /// Scripts that refer to components by id need the default
    /// sequential ids.
    #[arg(long = "random-ids")]
    pub random_ids: bool,

    /// Report every missing reference as an error.
    #[arg(long = "strict")]
    pub strict: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
