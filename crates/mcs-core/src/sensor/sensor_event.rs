use crate::{FaultState, OccupancyState};

/// Change notification published by [`crate::SensorStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorEvent {
    OccupancyChanged {
        old: OccupancyState,
        new: OccupancyState,
    },
    FaultChanged {
        old: Option<FaultState>,
        new: FaultState,
    },
}
