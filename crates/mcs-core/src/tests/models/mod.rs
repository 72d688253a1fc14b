mod fault_state;
mod occupancy_state;
mod server_status_snapshot;
mod server_type;
