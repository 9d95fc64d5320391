//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use pocket_dex_lib::{DexKind, Possession};

#[derive(Parser)]
#[command(name = "pocket-dex")]
#[command(about = "Browse the Pokedex, Itemdex and Battledex catalogs", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to read a catalog from.
#[derive(Args, Clone)]
pub(crate) struct SourceArgs {
    /// CSV data file (defaults to the configured path, then ./<dex>.csv)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub(crate) struct BrowseArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Sort key; repeat for tie-breakers, most significant first
    #[arg(short, long = "sort", value_name = "KEY")]
    pub sort: Vec<String>,

    /// Sort in descending order
    #[arg(long)]
    pub desc: bool,

    /// Keep entries whose KEY equals VALUE (or whose list/mapping has it)
    #[arg(long = "is", value_name = "KEY=VALUE")]
    pub is: Vec<String>,

    /// Keep entries whose KEY contains TEXT (case-insensitive)
    #[arg(long = "contains", value_name = "KEY=TEXT")]
    pub contains: Vec<String>,

    /// Keep entries whose KEY lies in LO..HI (inclusive)
    #[arg(long = "between", value_name = "KEY=LO..HI")]
    pub between: Vec<String>,

    /// Maximum number of entries to print
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Print the entries as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List entries of a dex, filtered and sorted
    Browse {
        /// Dex to browse (species/pokedex, items/itemdex, moves/battledex)
        #[arg(value_parser = parse_dex)]
        dex: DexKind,

        #[command(flatten)]
        args: BrowseArgs,
    },

    /// Show every field of one entry
    Show {
        #[arg(value_parser = parse_dex)]
        dex: DexKind,

        /// Entry identifier (e.g. 25, 19:alolan, Tackle)
        id: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Print the entry as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the keys a dex can be sorted and filtered by
    Fields {
        #[arg(value_parser = parse_dex)]
        dex: DexKind,
    },

    /// Set the possession status of a species for this session
    Mark {
        /// Species identifier
        id: String,

        /// unknown, seen or owned
        #[arg(value_parser = parse_possession)]
        status: Possession,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Manage data file locations and schema overrides
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show settings and the data file each dex resolves to
    Show,

    /// Print the settings file path
    Path,

    /// Save the data file used for a dex
    SetData {
        #[arg(value_parser = parse_dex)]
        dex: DexKind,

        path: PathBuf,
    },

    /// Save the directory searched for <dex>.yaml schema overrides
    SetSchemas { dir: PathBuf },
}

fn parse_dex(s: &str) -> Result<DexKind, String> {
    s.parse().map_err(|e: pocket_dex_lib::DexError| e.to_string())
}

fn parse_possession(s: &str) -> Result<Possession, String> {
    s.parse().map_err(|e: pocket_dex_lib::DexError| e.to_string())
}
