//! freed-send - stream a FreeD camera pose over UDP until stopped.

use anyhow::Context;
use clap::Parser;
use tracing::info;

use freed::cli::Cli;
use freed::config::init_logging;
use freed::{FreeD, console};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = cli.resolve_config().context("failed to load configuration")?;
    init_logging(&config.logging)?;
    config.validate().context("usage: freed-send <ADDRESS> <PORT> [--config <FILE>]")?;

    let sender = FreeD::transmit(&config).await.context("failed to start transmitter")?;
    let stop = sender.cancellation_token();

    console::spawn_enter_watcher(stop.clone()).context("failed to watch console input")?;
    tokio::spawn(console::cancel_on_ctrl_c(stop.clone()));

    println!("Press ENTER to exit.");
    stop.cancelled().await;

    let stats = sender.join().await;
    info!("Stopped: {:?}", stats);

    Ok(())
}
