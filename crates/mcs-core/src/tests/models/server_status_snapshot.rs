use crate::{FaultState, OccupancyState, ServerStatusSnapshot};

#[test]
fn test_online_with_players_is_detected_without_fault() {
    let snapshot = ServerStatusSnapshot::online(3);

    assert_eq!(snapshot.fault(), FaultState::NoFault);
    assert_eq!(snapshot.occupancy(), Some(OccupancyState::Detected));
}

#[test]
fn test_online_empty_is_not_detected_without_fault() {
    let snapshot = ServerStatusSnapshot::online(0);

    assert_eq!(snapshot.fault(), FaultState::NoFault);
    assert_eq!(snapshot.occupancy(), Some(OccupancyState::NotDetected));
}

#[test]
fn test_offline_is_general_fault_without_occupancy() {
    let snapshot = ServerStatusSnapshot::offline();

    assert_eq!(snapshot.fault(), FaultState::GeneralFault);
    assert_eq!(snapshot.occupancy(), None);
}

#[test]
fn test_online_without_player_count_counts_as_empty() {
    let snapshot = ServerStatusSnapshot {
        online: true,
        players: None,
        max_players: None,
        version: None,
    };

    assert_eq!(snapshot.occupancy(), Some(OccupancyState::NotDetected));
}
