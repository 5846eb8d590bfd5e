mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lottodraws")]
#[command(about = "Refresh the lottery draw-history data module from pilio.idv.tw")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch both games and rewrite the generated data module
    Update(commands::update::UpdateArgs),
    /// Save a decoded copy of the Big Lotto listing page for inspection
    Dump(commands::dump::DumpArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lottodraws_lib=info".parse().unwrap())
                .add_directive("pilio_api=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Update(args) => commands::update::run(args).await?,
        Commands::Dump(args) => commands::dump::run(args).await?,
    }

    Ok(())
}
