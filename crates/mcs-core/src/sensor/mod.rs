pub mod sensor_event;
pub mod sensor_store;
