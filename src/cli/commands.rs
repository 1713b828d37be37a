use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mdtask", about = concat!("mdtask v", env!("CARGO_PKG_VERSION"), " - markdown task files in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Task directory to use instead of the configured ones (repeatable)
    #[arg(short = 'd', long = "dir", global = true, value_name = "DIR")]
    pub dirs: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print tasks from every directory, newest first
    List(ListArgs),
    /// Show the effective configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Only show tasks whose name, title, status, or tags contain this text
    pub query: Option<String>,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Print only the config file path
    #[arg(long)]
    pub path: bool,
}
