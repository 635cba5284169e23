use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "pitch", version)]
#[clap(about = "Turn dialogue scripts into fine-tuning training files", long_about = None)]
pub struct Cli {
    /// Display raw JSON output instead of tables
    #[clap(long, global = true)]
    pub raw: bool,

    /// Enable debug logging
    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of ~/.pitch/config.toml
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
