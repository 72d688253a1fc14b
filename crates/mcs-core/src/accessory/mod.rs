pub mod accessory;
pub mod accessory_info;
pub mod service_descriptor;
