use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid server type: {value} {location}")]
    InvalidServerType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid {characteristic} code: {code} {location}")]
    InvalidCode {
        characteristic: &'static str,
        code: u8,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn invalid_server_type<S: Into<String>>(value: S) -> Self {
        CoreError::InvalidServerType {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_code(characteristic: &'static str, code: u8) -> Self {
        CoreError::InvalidCode {
            characteristic,
            code,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
