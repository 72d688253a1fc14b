pub mod accessory;
pub mod error;
pub mod labels;
pub mod models;
pub mod sensor;

#[cfg(test)]
mod tests;

pub use accessory::accessory::Accessory;
pub use accessory::accessory_info::AccessoryInfo;
pub use accessory::service_descriptor::{CharacteristicKind, ServiceDescriptor, ServiceKind};
pub use error::{CoreError, Result};
pub use labels::{fault_description, is_fault_code, occupancy_description};
pub use models::fault_state::FaultState;
pub use models::occupancy_state::OccupancyState;
pub use models::sensor_state::SensorState;
pub use models::server_status_snapshot::ServerStatusSnapshot;
pub use models::server_type::ServerType;
pub use sensor::sensor_event::SensorEvent;
pub use sensor::sensor_store::SensorStore;

/// Host code for `OccupancyDetected::OCCUPANCY_NOT_DETECTED`
pub const OCCUPANCY_NOT_DETECTED: u8 = 0;
/// Host code for `OccupancyDetected::OCCUPANCY_DETECTED`
pub const OCCUPANCY_DETECTED: u8 = 1;
/// Host code for `StatusFault::NO_FAULT`
pub const NO_FAULT: u8 = 0;
/// Host code for `StatusFault::GENERAL_FAULT`
pub const GENERAL_FAULT: u8 = 1;

const EVENT_CHANNEL_CAPACITY: usize = 16;
