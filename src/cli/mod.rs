//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;
pub mod render;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::PositionId;
use output::OutputFormat;

/// orgtree - organizational positions as a tree
#[derive(Parser, Debug)]
#[command(name = "orgtree", version, about, long_about = None)]
pub struct Cli {
    /// Database file (overrides config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a position
    Add(AddArgs),

    /// Show the hierarchy, optionally filtered or paged
    Tree(TreeArgs),

    /// Show a position and everything below it
    Show(ShowArgs),

    /// Change a position's name, description or parent
    Edit(EditArgs),

    /// Delete a position, moving its children up one level
    Rm(RmArgs),

    /// Find positions by name
    Search(SearchArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Position name
    pub name: String,

    /// Description of the role
    #[arg(short = 'D', long)]
    pub desc: String,

    /// Parent position id (omit for a new root)
    #[arg(short, long)]
    pub parent: Option<PositionId>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `tree` command
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Only show positions whose name contains this text (ignores paging)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Page size
    #[arg(long)]
    pub limit: Option<usize>,

    /// Page number, starting at 1
    #[arg(long)]
    pub page: Option<usize>,

    /// Page over top-level positions instead of the flat list
    #[arg(long)]
    pub roots: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Position id
    pub id: PositionId,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Position id
    pub id: PositionId,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New description
    #[arg(short = 'D', long)]
    pub desc: Option<String>,

    /// New parent position id
    #[arg(short, long, conflicts_with = "root")]
    pub parent: Option<PositionId>,

    /// Make the position top-level
    #[arg(long)]
    pub root: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `rm` command
#[derive(Args, Debug)]
pub struct RmArgs {
    /// Position id
    pub id: PositionId,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for in position names (case-insensitive)
    pub query: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
