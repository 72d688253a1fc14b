use crate::{FaultState, OccupancyState};

use serde::Serialize;

/// One poll's decoded status result.
///
/// Never persisted; projected onto the sensor state and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerStatusSnapshot {
    pub online: bool,
    /// Connected players, only reported while online
    pub players: Option<u32>,
    pub max_players: Option<u32>,
    pub version: Option<String>,
}

impl ServerStatusSnapshot {
    pub fn online(players: u32) -> Self {
        Self {
            online: true,
            players: Some(players),
            max_players: None,
            version: None,
        }
    }

    pub fn offline() -> Self {
        Self {
            online: false,
            players: None,
            max_players: None,
            version: None,
        }
    }

    pub fn fault(&self) -> FaultState {
        FaultState::from_online(self.online)
    }

    /// Occupancy implied by this snapshot; `None` when offline, leaving the
    /// previous value in place.
    pub fn occupancy(&self) -> Option<OccupancyState> {
        self.online
            .then(|| OccupancyState::from_player_count(self.players.unwrap_or(0)))
    }
}
