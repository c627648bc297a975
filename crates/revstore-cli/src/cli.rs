use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "revstore",
    about = "revstore — versioned in-memory resource store",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// TOML store config (seed entries, search policy)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Read the latest revision, or a specific one via `<id>/_history/<label>`
    Read(ReadArgs),
    /// Search latest revisions by exact name
    Search(SearchArgs),
    /// List the latest revision of every resource
    List,
    /// Show every revision of a resource, oldest first
    History(HistoryArgs),
    /// Run a JSON array of requests against one store
    Batch(BatchArgs),
}

#[derive(Args)]
pub struct ReadArgs {
    pub id: String,
}

#[derive(Args)]
pub struct SearchArgs {
    #[arg(short, long)]
    pub name: String,
}

#[derive(Args)]
pub struct HistoryArgs {
    pub id: String,
}

#[derive(Args)]
pub struct BatchArgs {
    pub file: PathBuf,
    /// Keep going after a failed request
    #[arg(long)]
    pub keep_going: bool,
}
