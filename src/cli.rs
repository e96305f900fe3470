use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a yaml configuration file
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the link-preview http server
    Daemon {
        /// Listen address, overrides the configured one
        #[clap(short, long)]
        listen: Option<String>,
    },

    /// Scrape one url and print the preview document
    Scrape {
        /// An absolute url
        url: String,
    },

    /// Probe one url and print its classification and content length
    Probe {
        /// An absolute url
        url: String,
    },

    /// Print the share count for one url
    ShareCount {
        /// An absolute url
        url: String,
    },
}
