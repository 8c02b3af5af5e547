use crate::commands;
use clap::{Parser, Subcommand};
use miette::Result;

#[derive(Parser)]
#[command(name = "gfetch", about = "Gfetch - refresh remote-tracking refs", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a remote's default branch ref into the local clone
    #[command(alias = "f")]
    Fetch {
        /// Remote to fetch from (config default: origin)
        remote: Option<String>,

        /// Ref to fetch (config default: HEAD)
        refspec: Option<String>,

        /// Exit non-zero when the fetch fails instead of only logging
        #[arg(short, long)]
        strict: bool,
    },

    /// Show the resolved configuration and where it lives
    Setup,
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Self::Fetch {
                remote,
                refspec,
                strict,
            } => commands::fetch::run(remote, refspec, strict),
            Commands::Setup => commands::setup::run(),
        }
    }
}
