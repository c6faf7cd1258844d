use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "memory-wall")]
#[command(
    author,
    version,
    about = "A flat-file backend for a shared guest memory wall"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (defaults to ./memory-wall.yml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON file holding all memories (overrides config)
    #[arg(long, global = true, env = "MEMORY_WALL_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Directory for uploaded files (overrides config)
    #[arg(long, global = true, env = "MEMORY_WALL_UPLOAD_DIR")]
    pub upload_dir: Option<PathBuf>,

    /// Directory with the front-end assets (overrides config)
    #[arg(long, global = true, env = "MEMORY_WALL_PUBLIC_DIR")]
    pub public_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data file and upload directory if they are missing
    Init {
        /// Also write the effective settings to ./memory-wall.yml
        #[arg(long)]
        write_config: bool,
    },

    /// Start the HTTP server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long, env = "MEMORY_WALL_PORT")]
        port: Option<u16>,
    },

    /// List all memories, newest first
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show wall statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a memory and its uploaded files
    #[command(visible_alias = "rm")]
    Delete {
        /// ID of the memory to delete
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
