//! `--once` reporting against a wiremock stand-in for the status API

use mcs_bridge::error::BridgeError;
use mcs_bridge::poll_report;

use mcs_config::Config;
use mcs_core::{Accessory, FaultState, OccupancyState, ServerStatusSnapshot};
use mcs_poller::{PollError, Poller};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const STATUS_PATH: &str = "/3/mc.example.com:25565";

fn bridge_for(base_url: &str) -> (Accessory, Poller) {
    let mut config = Config::default();
    config.server.host = String::from("mc.example.com");
    config.api.base_url = base_url.to_string();
    config.api.request_timeout_secs = 2;

    let accessory = Accessory::new("Survival");
    let poller = Poller::from_config(&config, accessory.sensors()).unwrap();
    (accessory, poller)
}

#[tokio::test]
async fn given_online_server_when_reported_then_report_carries_labels_state_and_stats() {
    // Given
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUS_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"online": true, "players": {"online": 3}})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    let (accessory, poller) = bridge_for(&mock_server.uri());

    // When
    let report = poll_report(&accessory, &poller).await.unwrap();

    // Then
    assert_eq!(report.name, "Survival");
    assert_eq!(report.occupancy, "occupied");
    assert_eq!(report.status, "up");
    assert_eq!(report.state.occupancy, OccupancyState::Detected);
    assert_eq!(report.state.fault, Some(FaultState::NoFault));
    assert_eq!(report.snapshot, Some(ServerStatusSnapshot::online(3)));
    assert_eq!(report.stats.successes, 1);
    assert_eq!(report.stats.failures, 0);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["snapshot"]["players"], json!(3));
    assert_eq!(json["stats"]["successes"], json!(1));
}

#[tokio::test]
async fn given_upstream_unavailable_when_reported_then_poll_error_and_no_report() {
    // Given
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;
    let (accessory, poller) = bridge_for(&mock_server.uri());

    // When
    let result = poll_report(&accessory, &poller).await;

    // Then
    assert!(matches!(
        result,
        Err(BridgeError::Poll(PollError::Status { status: 503, .. }))
    ));
    assert_eq!(accessory.sensors().fault(), None);
    assert_eq!(accessory.sensors().occupancy(), OccupancyState::Unknown);
}
