use crate::{FaultState, GENERAL_FAULT, NO_FAULT};

#[test]
fn test_fault_from_online() {
    assert_eq!(FaultState::from_online(true), FaultState::NoFault);
    assert_eq!(FaultState::from_online(false), FaultState::GeneralFault);
}

#[test]
fn test_fault_codes() {
    assert_eq!(FaultState::NoFault.as_code(), NO_FAULT);
    assert_eq!(FaultState::GeneralFault.as_code(), GENERAL_FAULT);
    assert_eq!(FaultState::from_code(0).unwrap(), FaultState::NoFault);
    assert_eq!(FaultState::from_code(1).unwrap(), FaultState::GeneralFault);

    let err = FaultState::from_code(7).unwrap_err();
    assert!(err.to_string().contains("fault code: 7"));
}

#[test]
fn test_fault_display() {
    assert_eq!(FaultState::NoFault.to_string(), "up");
    assert_eq!(FaultState::GeneralFault.to_string(), "down");
}
