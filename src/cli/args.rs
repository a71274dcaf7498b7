use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "climate-api")]
#[command(about = "Read-only JSON API over a historical station weather dataset")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Configuration file (TOML)")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the HTTP API
    Serve {
        #[arg(short, long, help = "Address to listen on [default: 127.0.0.1:5000]")]
        bind: Option<String>,

        #[arg(short, long, help = "SQLite database with station and measurement tables")]
        database: Option<PathBuf>,
    },

    /// Display a summary of the dataset
    Info {
        #[arg(short, long, help = "SQLite database with station and measurement tables")]
        database: Option<PathBuf>,
    },
}
