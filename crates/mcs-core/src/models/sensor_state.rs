use crate::{FaultState, OccupancyState, fault_description};

use serde::Serialize;

/// Both output signals as the host platform sees them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SensorState {
    pub occupancy: OccupancyState,
    /// `None` until the first successful poll
    pub fault: Option<FaultState>,
}

impl SensorState {
    pub fn fault_description(&self) -> &'static str {
        fault_description(self.fault.map(|f| f.as_code()))
    }
}
