use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode binary data
    Encode(EncodeArgs),
    /// Decode encoded text back to binary
    Decode(DecodeArgs),
    /// Inspect the encoding registry
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Encoding to use (see `config list`)
    pub encoding: String,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Wrap encoded lines after COLS characters (0 disables wrapping)
    #[arg(short = 'w', long, value_name = "COLS")]
    pub wrap: Option<usize>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Encoding to decode from
    pub encoding: String,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// List registered encodings
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details for a specific encoding
    Show {
        /// Encoding name
        encoding: String,
    },
}
