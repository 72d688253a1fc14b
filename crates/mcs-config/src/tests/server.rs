use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, MIN_UPDATE_INTERVAL_MS, ServerConfig};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Interval Clamping
// =========================================================================

#[test]
fn given_interval_below_minimum_when_effective_then_floored() {
    // Given
    let config = ServerConfig {
        update_interval_ms: 1000,
        ..ServerConfig::default()
    };

    // Then
    assert_that!(config.effective_update_interval_ms(), eq(60000));
    assert_that!(
        config.effective_update_interval(),
        eq(Duration::from_millis(MIN_UPDATE_INTERVAL_MS))
    );
}

#[test]
fn given_interval_above_minimum_when_effective_then_unchanged() {
    let config = ServerConfig {
        update_interval_ms: 120000,
        ..ServerConfig::default()
    };

    assert_that!(config.effective_update_interval_ms(), eq(120000));
}

#[test]
fn given_zero_interval_when_validate_then_ok_and_floored() {
    let config = ServerConfig {
        update_interval_ms: 0,
        ..ServerConfig::default()
    };

    assert_that!(config.validate(), ok(anything()));
    assert_that!(config.effective_update_interval_ms(), eq(60000));
}

// =========================================================================
// Validation Tests - Server
// =========================================================================

#[test]
#[serial]
fn given_empty_host_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _host = EnvGuard::set("MCS_SERVER_HOST", "");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_blank_name_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _name = EnvGuard::set("MCS_SERVER_NAME", "   ");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_host_with_scheme_or_path_when_validate_then_error() {
    for host in ["https://mc.example.com", "mc.example.com/status", "mc example"] {
        let config = ServerConfig {
            host: host.to_string(),
            ..ServerConfig::default()
        };

        assert!(config.validate().is_err(), "{host} should be rejected");
    }
}

#[test]
fn given_any_port_when_validate_then_ok() {
    for port in [0u16, 25565, 65535] {
        let config = ServerConfig {
            port,
            ..ServerConfig::default()
        };

        assert_that!(config.validate(), ok(anything()));
    }
}

#[test]
fn given_host_and_port_when_address_then_joined_with_colon() {
    let config = ServerConfig {
        host: String::from("mc.example.com"),
        port: 25565,
        ..ServerConfig::default()
    };

    assert_that!(config.address().as_str(), eq("mc.example.com:25565"));
}
