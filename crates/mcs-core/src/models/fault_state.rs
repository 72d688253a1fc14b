use crate::{CoreError, GENERAL_FAULT, NO_FAULT, Result as CoreErrorResult, fault_description};

use serde::{Deserialize, Serialize};

/// Fault status reported by the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultState {
    /// Last poll reported the server online
    NoFault,
    /// Last poll reported the server offline
    GeneralFault,
}

impl FaultState {
    pub fn from_online(online: bool) -> Self {
        if online {
            Self::NoFault
        } else {
            Self::GeneralFault
        }
    }

    pub fn as_code(&self) -> u8 {
        match self {
            Self::NoFault => NO_FAULT,
            Self::GeneralFault => GENERAL_FAULT,
        }
    }

    #[track_caller]
    pub fn from_code(code: u8) -> CoreErrorResult<Self> {
        match code {
            NO_FAULT => Ok(Self::NoFault),
            GENERAL_FAULT => Ok(Self::GeneralFault),
            _ => Err(CoreError::invalid_code("fault", code)),
        }
    }

    pub fn description(&self) -> &'static str {
        fault_description(Some(self.as_code()))
    }
}

impl std::fmt::Display for FaultState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
