//! The `update` subcommand: refresh the generated draw-history module.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Args;
use lottodraws_lib::{datafile, draws, fetch_game, FetchConfig, Game};

/// Arguments for the `update` subcommand.
#[derive(Args)]
pub struct UpdateArgs {
    /// Path of the generated data module
    #[arg(long, default_value = "src/data/draws.js")]
    pub output: PathBuf,

    /// Override the upstream base URL (also: PILIO_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,
}

pub async fn run(args: &UpdateArgs) -> Result<()> {
    let client = super::build_client(args.base_url.as_deref())?;
    let config = FetchConfig::default();

    let big = fetch_game(&client, Game::BigLotto, &config).await;
    tracing::info!("Found {} Big Lotto draws total.", big.len());

    let super_draws = fetch_game(&client, Game::SuperLotto, &config).await;
    tracing::info!("Found {} Super Lotto draws total.", super_draws.len());

    let big = draws::finalize(big);
    let super_draws = draws::finalize(super_draws);

    datafile::write_module(&args.output, &big, &super_draws, Local::now())?;
    Ok(())
}
