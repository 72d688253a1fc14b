use mcs_core::{SensorState, ServerStatusSnapshot};
use mcs_poller::PollStatsSnapshot;

use serde::Serialize;

/// Output of a one-shot `--once` run
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub name: String,
    pub occupancy: &'static str,
    pub status: &'static str,
    pub state: SensorState,
    /// `None` when the poll was skipped
    pub snapshot: Option<ServerStatusSnapshot>,
    pub stats: PollStatsSnapshot,
}

impl StatusReport {
    pub fn new(
        name: &str,
        state: SensorState,
        snapshot: Option<ServerStatusSnapshot>,
        stats: PollStatsSnapshot,
    ) -> Self {
        Self {
            name: name.to_string(),
            occupancy: state.occupancy.description(),
            status: state.fault_description(),
            state,
            snapshot,
            stats,
        }
    }
}
