pub mod track;

use anyhow::Result;
use clap::Parser;

/// Track a work session and submit it to Clockify.
///
/// Pick a workspace and project, type what you are working on, press Enter
/// when you are done and save the entry.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

impl Cli {
    pub async fn menu() -> Result<()> {
        let _cli = Self::parse();
        track::cmd().await
    }
}
