//! Human-readable labels for raw characteristic codes, used in diagnostics.

use crate::{GENERAL_FAULT, NO_FAULT, OCCUPANCY_DETECTED, OCCUPANCY_NOT_DETECTED};

pub fn occupancy_description(code: Option<u8>) -> &'static str {
    match code {
        Some(OCCUPANCY_DETECTED) => "occupied",
        Some(OCCUPANCY_NOT_DETECTED) => "not occupied",
        _ => "unknown",
    }
}

pub fn fault_description(code: Option<u8>) -> &'static str {
    match code {
        Some(NO_FAULT) => "up",
        Some(GENERAL_FAULT) => "down",
        _ => "unknown",
    }
}

/// Any code above `NO_FAULT` is a fault, like a non-zero exit status.
pub fn is_fault_code(code: u8) -> bool {
    code > NO_FAULT
}
