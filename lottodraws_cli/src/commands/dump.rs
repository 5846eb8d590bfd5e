//! The `dump` subcommand: save the decoded listing page for inspection.
//!
//! Useful when the extraction grammar stops matching and the markup needs
//! to be eyeballed.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use lottodraws_lib::Game;

/// Arguments for the `dump` subcommand.
#[derive(Args)]
pub struct DumpArgs {
    /// Where to save the decoded HTML
    #[arg(long, default_value = "debug_pilio.html")]
    pub output: PathBuf,

    /// Override the upstream base URL (also: PILIO_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,
}

pub async fn run(args: &DumpArgs) -> Result<()> {
    let client = super::build_client(args.base_url.as_deref())?;
    match client.list_page(Game::BigLotto).await {
        Ok(html) => {
            fs::write(&args.output, html)?;
            tracing::info!("Saved {}", args.output.display());
        }
        Err(e) => tracing::error!("Error: {}", e),
    }
    Ok(())
}
