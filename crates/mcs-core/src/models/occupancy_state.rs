use crate::{
    CoreError, OCCUPANCY_DETECTED, OCCUPANCY_NOT_DETECTED, Result as CoreErrorResult,
    occupancy_description,
};

use serde::{Deserialize, Serialize};

/// Occupancy reported by the sensor.
///
/// `Unknown` only ever appears before the first poll that found the server online.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyState {
    /// At least one player is connected
    Detected,
    /// Server is online and empty
    NotDetected,
    #[default]
    Unknown,
}

impl OccupancyState {
    /// Occupancy for an online server with the given player count
    pub fn from_player_count(players: u32) -> Self {
        if players > 0 {
            Self::Detected
        } else {
            Self::NotDetected
        }
    }

    /// Host characteristic code, `None` while unknown
    pub fn as_code(&self) -> Option<u8> {
        match self {
            Self::Detected => Some(OCCUPANCY_DETECTED),
            Self::NotDetected => Some(OCCUPANCY_NOT_DETECTED),
            Self::Unknown => None,
        }
    }

    #[track_caller]
    pub fn from_code(code: u8) -> CoreErrorResult<Self> {
        match code {
            OCCUPANCY_DETECTED => Ok(Self::Detected),
            OCCUPANCY_NOT_DETECTED => Ok(Self::NotDetected),
            _ => Err(CoreError::invalid_code("occupancy", code)),
        }
    }

    pub fn description(&self) -> &'static str {
        occupancy_description(self.as_code())
    }
}

impl std::fmt::Display for OccupancyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
