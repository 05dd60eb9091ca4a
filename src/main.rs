use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rand::Rng;

use crl_sync::{config::Config, refresh::Refresher, telemetry};

/// Fetch CRLs for the CAs in a hashed certificate directory and maintain the
/// hash-to-CRL symlinks a verifier resolves at check time.
#[derive(Parser)]
#[command(name = "crl-sync", version, about)]
struct Cli {
    /// Hashed certificate directory holding <ca>.crl_url files
    cert_dir: PathBuf,

    /// Show debug output
    #[arg(short, long)]
    verbose: bool,

    /// Wait a random time, up to SECONDS, before starting
    #[arg(short, long, value_name = "SECONDS")]
    delay: Option<u64>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose);

    let config = Config::load()?;

    // Jitter so a fleet of instances does not hit the distribution points at
    // the same moment
    if let Some(max) = cli.delay
        && max > 0
    {
        let wait = rand::rng().random_range(0..=max);
        tracing::debug!("Waiting {wait} seconds (out of a max of {max})");
        tokio::time::sleep(Duration::from_secs(wait)).await;
    }

    tracing::debug!("Fetching CRLs in {}", cli.cert_dir.display());
    let refresher = Refresher::new(cli.cert_dir, &config)?;
    refresher.run().await?;

    Ok(())
}
