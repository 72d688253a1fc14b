//! Host-side observer that reports sensor changes.

use mcs_core::{SensorEvent, SensorStore};

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

/// One log line per change event
pub fn describe(name: &str, event: &SensorEvent) -> String {
    match event {
        SensorEvent::OccupancyChanged { old, new } => {
            format!("“{name}” occupancy: {old} -> {new}")
        }
        SensorEvent::FaultChanged { old, new } => {
            let old = old.map_or("unknown", |f| f.description());
            format!("“{name}” status: {old} -> {new}")
        }
    }
}

/// Follow the store's change events until it is dropped
pub fn spawn_event_logger(sensors: Arc<SensorStore>) -> JoinHandle<()> {
    let mut events = sensors.events();
    let name = sensors.name().to_string();
    drop(sensors);

    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => info!("{}", describe(&name, &event)),
                Err(RecvError::Lagged(missed)) => {
                    warn!("Event logger for “{name}” missed {missed} event(s)");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}
