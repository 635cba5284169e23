use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::input_format::InputFormat;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Convert a story script into JSONL
    Convert {
        filepath: PathBuf,
        /// Write the JSONL here instead of stdout
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// Summarize a training file the way it would be uploaded
    Inspect {
        filepath: PathBuf,
        /// Input format; inferred from the file extension when omitted
        #[clap(short, long, value_enum)]
        format: Option<InputFormat>,
    },
    /// Write a sample config file
    Init,
    /// Check the config file and API key
    Validate,
}
