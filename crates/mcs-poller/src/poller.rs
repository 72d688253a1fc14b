use crate::{
    PollMetrics, PollOutcome, PollResult, PollStats, PollStatsSnapshot, PollerHandle, StatusClient,
    in_flight_guard::InFlightGuard,
};

use mcs_config::Config;
use mcs_core::SensorStore;

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::{Duration, Instant};

use log::{debug, error, info, warn};
use tokio::sync::broadcast;
use tokio::time::MissedTickBehavior;

/// Fetches server status and writes it into a [`SensorStore`].
///
/// At most one poll runs at a time. A poll that finds another one in flight
/// returns [`PollOutcome::Skipped`] without touching the network.
pub struct Poller {
    client: StatusClient,
    sensors: Arc<SensorStore>,
    in_flight: AtomicBool,
    metrics: PollMetrics,
    stats: PollStats,
}

impl Poller {
    pub fn new(client: StatusClient, sensors: Arc<SensorStore>) -> Self {
        Self {
            client,
            sensors,
            in_flight: AtomicBool::new(false),
            metrics: PollMetrics::new(),
            stats: PollStats::default(),
        }
    }

    /// Build a poller for the configured server
    pub fn from_config(config: &Config, sensors: Arc<SensorStore>) -> PollResult<Self> {
        let client = StatusClient::new(&config.api, &config.server)?;
        Ok(Self::new(client, sensors))
    }

    pub fn sensors(&self) -> &Arc<SensorStore> {
        &self.sensors
    }

    /// In-process counters; the same events also go to the `metrics` recorder
    pub fn stats(&self) -> PollStatsSnapshot {
        self.stats.snapshot()
    }

    /// Run one poll cycle.
    ///
    /// On success both signals are updated from the snapshot. On failure the
    /// sensor state is left exactly as it was.
    pub async fn poll_once(&self) -> PollResult<PollOutcome> {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            self.metrics.poll_skipped();
            self.stats.record_skipped();
            return Ok(PollOutcome::Skipped);
        };

        debug!(
            "Updating status of Minecraft server “{}”...",
            self.sensors.name()
        );

        let start = Instant::now();
        let result = self.client.fetch().await;
        let elapsed = start.elapsed();
        self.metrics.request_duration(elapsed);
        self.stats.record_latency(elapsed);

        match result {
            Ok(snapshot) => {
                self.metrics.poll_succeeded();
                self.stats.record_success();
                self.sensors.apply(&snapshot);
                Ok(PollOutcome::Updated(snapshot))
            }
            Err(e) => {
                self.metrics.poll_failed(e.kind());
                self.stats.record_failure();
                Err(e)
            }
        }
    }

    /// Poll once and log the outcome; never fails
    pub(crate) async fn tick(&self) {
        match self.poll_once().await {
            Ok(PollOutcome::Updated(snapshot)) => {
                debug!(
                    "Server “{}” is {} with {} player(s)",
                    self.sensors.name(),
                    if snapshot.online { "online" } else { "offline" },
                    snapshot.players.unwrap_or(0)
                );
            }
            Ok(PollOutcome::Skipped) => {
                warn!(
                    "Skipping poll of “{}”: previous request still in flight",
                    self.sensors.name()
                );
            }
            Err(e) => {
                error!(
                    "Failed to update status of Minecraft server “{}”: {}",
                    self.sensors.name(),
                    e
                );
            }
        }
    }

    /// Start polling in the background: once immediately, then every
    /// `interval`. Ticks missed during a slow poll are skipped.
    pub fn start(self: Arc<Self>, interval: Duration) -> PollerHandle {
        // tokio's interval panics on a zero period
        let interval = interval.max(Duration::from_millis(1));
        let (shutdown_tx, mut shutdown_rx) = broadcast::channel::<()>(1);
        let poller = Arc::clone(&self);

        info!(
            "Polling “{}” every {}ms at {}",
            self.sensors.name(),
            interval.as_millis(),
            self.client.url()
        );

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    biased;
                    _ = shutdown_rx.recv() => break,
                    _ = ticker.tick() => {}
                }

                tokio::select! {
                    biased;
                    _ = shutdown_rx.recv() => break,
                    _ = poller.tick() => {}
                }
            }

            debug!("Poll loop for “{}” stopped", poller.sensors.name());
        });

        PollerHandle::new(self, shutdown_tx, task)
    }
}
