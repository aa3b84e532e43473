use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{check, export};

#[derive(Parser)]
#[command(name = "superapp")]
#[command(about = "SuperApp lifecycle analytics dashboard tooling")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the embedded dataset and report every violation
    Check,
    /// Write a standalone HTML report with every dashboard panel
    ///
    /// The report loads Plotly.js from its CDN, so it needs network access
    /// when opened but no build step.
    Export {
        /// Output file; parent directories are created as needed
        #[arg(short, long, env = "SUPERAPP_REPORT_PATH", default_value = "docs/dashboard.html")]
        output: PathBuf,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Check => check()?,
            Commands::Export { output } => export(&output)?,
        }
        Ok(())
    }
}
