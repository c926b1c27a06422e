//! # Configuration Tests
//!
//! Defaults, JSON deserialization, and address resolution of the simulator
//! configuration.

use boardsim_core::ProxyError;
use boardsim_core::config::*;
use std::time::Duration;

#[test]
fn test_config_default() {
    let config = SimulatorConfig::default();
    assert_eq!(config.endpoint.host, "127.0.0.1");
    assert_eq!(config.endpoint.port, 9999);
    assert_eq!(config.endpoint.bind_host, "127.0.0.1");
    assert_eq!(config.transport.recv_buffer, 1024);
    assert_eq!(config.transport.read_timeout_ms, None);
}

#[test]
fn test_empty_json_uses_defaults() {
    let config = SimulatorConfig::from_json("{}").unwrap();
    assert_eq!(config, SimulatorConfig::default());
}

#[test]
fn test_partial_endpoint_json() {
    let json = r#"{ "endpoint": { "port": 12000 } }"#;
    let config = SimulatorConfig::from_json(json).unwrap();
    assert_eq!(config.endpoint.port, 12000);
    assert_eq!(config.endpoint.host, "127.0.0.1");
    assert_eq!(config.transport, TransportConfig::default());
}

#[test]
fn test_full_json() {
    let json = r#"{
        "endpoint": { "host": "localhost", "port": 9001, "bind_host": "0.0.0.0" },
        "transport": { "recv_buffer": 4096, "read_timeout_ms": 500 }
    }"#;
    let config = SimulatorConfig::from_json(json).unwrap();
    assert_eq!(config.endpoint.host, "localhost");
    assert_eq!(config.endpoint.port, 9001);
    assert_eq!(config.endpoint.bind_host, "0.0.0.0");
    assert_eq!(config.transport.recv_buffer, 4096);
    assert_eq!(
        config.transport.read_timeout(),
        Some(Duration::from_millis(500))
    );
}

#[test]
fn test_invalid_json_is_invalid_config() {
    let err = SimulatorConfig::from_json(r#"{ "endpoint": { "port": "nine" } }"#).unwrap_err();
    assert!(matches!(err, ProxyError::InvalidConfig(_)));
}

#[test]
fn test_zero_timeout_means_block() {
    let transport = TransportConfig {
        recv_buffer: 1024,
        read_timeout_ms: Some(0),
    };
    assert_eq!(transport.read_timeout(), None);
}

#[test]
fn test_simulator_addr_resolves_loopback() {
    let addr = SimulatorConfig::default().simulator_addr().unwrap();
    assert!(addr.ip().is_loopback());
    assert_eq!(addr.port(), 9999);
}

#[test]
fn test_bind_addr_is_ephemeral() {
    let addr = SimulatorConfig::default().bind_addr().unwrap();
    assert_eq!(addr.port(), 0);
}
