pub mod fault_state;
pub mod occupancy_state;
pub mod sensor_state;
pub mod server_status_snapshot;
pub mod server_type;
