pub mod cli;
pub mod error;
pub mod events;
pub mod logger;
pub mod report;


use crate::cli::Cli;
use crate::error::Result as BridgeResult;
use crate::events::spawn_event_logger;
use crate::report::StatusReport;

use mcs_config::Config;
use mcs_core::Accessory;
use mcs_poller::{PollOutcome, Poller};

use std::sync::Arc;

use log::{error, info};

/// Load config, set up logging and run the bridge until Ctrl+C
pub async fn run(cli: Cli) -> BridgeResult<()> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(&config.logging, &Config::config_dir()?)?;

    info!("Starting mcs-bridge v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let accessory = Accessory::new(config.server.name.clone());
    let poller = Arc::new(Poller::from_config(&config, accessory.sensors())?);

    if cli.once {
        return run_once(&accessory, &poller, cli.pretty).await;
    }

    for service in accessory.services() {
        info!(
            "Registering {:?} service “{}” ({} characteristics)",
            service.kind,
            service.name,
            service.characteristics.len()
        );
    }

    if cli.identify {
        accessory.identify();
    }

    let event_logger = spawn_event_logger(accessory.sensors());
    let handle = Arc::clone(&poller).start(config.server.effective_update_interval());

    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }

    handle.stop().await;
    event_logger.abort();

    let stats = poller.stats();
    info!(
        "Polls: {} ok, {} failed, {} skipped",
        stats.successes, stats.failures, stats.skipped
    );

    Ok(())
}

/// Poll once and describe the resulting sensor state
pub async fn poll_report(accessory: &Accessory, poller: &Poller) -> BridgeResult<StatusReport> {
    let snapshot = match poller.poll_once().await? {
        PollOutcome::Updated(snapshot) => Some(snapshot),
        PollOutcome::Skipped => None,
    };

    Ok(StatusReport::new(
        accessory.name(),
        accessory.sensors().state(),
        snapshot,
        poller.stats(),
    ))
}

async fn run_once(accessory: &Accessory, poller: &Poller, pretty: bool) -> BridgeResult<()> {
    let report = poll_report(accessory, poller).await?;

    let output = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{output}");

    Ok(())
}
