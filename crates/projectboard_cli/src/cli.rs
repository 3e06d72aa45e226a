use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "projectboard")]
#[command(about = "Inspect and merge project board snapshots")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// JSON store config (min_name_length, seed_default_project)
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long, global = true)]
    pub(crate) log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    pub(crate) log_level: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Write the snapshot of a freshly started board
    Export {
        /// Destination file; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Import snapshots into a board and write the merged result
    Merge {
        /// Snapshots to import, applied in order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Snapshot to start from instead of a freshly seeded board
        #[arg(long)]
        base: Option<PathBuf>,
        /// Destination file; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the projects of a snapshot
    Show {
        input: PathBuf,
    },
}
