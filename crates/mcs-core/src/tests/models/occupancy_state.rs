use crate::{OCCUPANCY_DETECTED, OCCUPANCY_NOT_DETECTED, OccupancyState};

#[test]
fn test_occupancy_from_player_count() {
    assert_eq!(OccupancyState::from_player_count(3), OccupancyState::Detected);
    assert_eq!(OccupancyState::from_player_count(1), OccupancyState::Detected);
    assert_eq!(
        OccupancyState::from_player_count(0),
        OccupancyState::NotDetected
    );
}

#[test]
fn test_occupancy_codes() {
    assert_eq!(OccupancyState::Detected.as_code(), Some(OCCUPANCY_DETECTED));
    assert_eq!(
        OccupancyState::NotDetected.as_code(),
        Some(OCCUPANCY_NOT_DETECTED)
    );
    assert_eq!(OccupancyState::Unknown.as_code(), None);

    assert_eq!(
        OccupancyState::from_code(1).unwrap(),
        OccupancyState::Detected
    );
    assert_eq!(
        OccupancyState::from_code(0).unwrap(),
        OccupancyState::NotDetected
    );
    assert!(OccupancyState::from_code(2).is_err());
}

#[test]
fn test_occupancy_default_is_unknown() {
    assert_eq!(OccupancyState::default(), OccupancyState::Unknown);
    assert_eq!(OccupancyState::default().to_string(), "unknown");
}
