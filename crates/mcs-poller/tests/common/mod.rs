#![allow(dead_code)]

pub mod recorder;

use mcs_config::{ApiConfig, ServerConfig};
use mcs_core::{SensorStore, ServerType};
use mcs_poller::{Poller, StatusClient};

use std::sync::Arc;

pub const HOST: &str = "mc.example.com";
pub const PORT: u16 = 25565;

/// Build a poller aimed at `base_url` for a server of the given type
pub fn build_poller(base_url: &str, server_type: ServerType) -> Arc<Poller> {
    let api = ApiConfig {
        base_url: base_url.to_string(),
        request_timeout_secs: 2,
    };
    let server = ServerConfig {
        name: String::from("Test Server"),
        host: String::from(HOST),
        port: PORT,
        server_type,
        ..ServerConfig::default()
    };

    let client = StatusClient::new(&api, &server).unwrap();
    let sensors = Arc::new(SensorStore::new(server.name.clone()));

    Arc::new(Poller::new(client, sensors))
}
