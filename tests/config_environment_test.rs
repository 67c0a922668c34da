// ABOUTME: Configuration tests for storage URL parsing and environment-driven settings
// ABOUTME: Environment-mutating tests run serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use healthlive::config::environment::{Environment, StorageUrl, ENVIRONMENT_VAR, STORAGE_URL_VAR};
use healthlive::config::AppConfig;
use healthlive::errors::ErrorCode;
use healthlive::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

#[test]
fn test_storage_url_parsing() {
    assert_eq!(StorageUrl::parse_url("memory").unwrap(), StorageUrl::Memory);
    assert_eq!(StorageUrl::parse_url(" MEMORY ").unwrap(), StorageUrl::Memory);
    assert_eq!(
        StorageUrl::parse_url("sqlite::memory:").unwrap(),
        StorageUrl::SqliteMemory
    );
    assert_eq!(
        StorageUrl::parse_url("sqlite:./data/healthlive.db").unwrap(),
        StorageUrl::Sqlite {
            path: PathBuf::from("./data/healthlive.db")
        }
    );
    assert_eq!(
        StorageUrl::parse_url("sqlite:///var/lib/healthlive.db").unwrap(),
        StorageUrl::Sqlite {
            path: PathBuf::from("/var/lib/healthlive.db")
        }
    );
}

#[test]
fn test_storage_url_rejects_unknown_schemes() {
    let error = StorageUrl::parse_url("postgres://localhost/db").unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    let error = StorageUrl::parse_url("sqlite:").unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_storage_url_display_round_trips() {
    for raw in ["memory", "sqlite::memory:", "sqlite:/tmp/healthlive.db"] {
        let parsed = StorageUrl::parse_url(raw).unwrap();
        assert_eq!(parsed.to_string(), raw);
    }
}

#[test]
fn test_environment_and_log_format_fallbacks() {
    assert_eq!(Environment::from_str_or_default("prod"), Environment::Production);
    assert_eq!(Environment::from_str_or_default("TEST"), Environment::Testing);
    assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
    assert!(Environment::Production.is_production());
    assert!(!Environment::Testing.is_production());
    assert_eq!(Environment::Testing.to_string(), "testing");

    assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("other"), LogFormat::Pretty);
}

#[test]
#[serial]
fn test_app_config_defaults_to_memory_storage() {
    env::remove_var(STORAGE_URL_VAR);
    env::remove_var(ENVIRONMENT_VAR);
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.storage, StorageUrl::Memory);
    assert_eq!(config.environment, Environment::Development);
}

#[test]
#[serial]
fn test_app_config_reads_environment() {
    env::set_var(STORAGE_URL_VAR, "sqlite::memory:");
    env::set_var(ENVIRONMENT_VAR, "production");
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.storage, StorageUrl::SqliteMemory);
    assert_eq!(config.environment, Environment::Production);

    let logging = LoggingConfig::from_env();
    assert!(logging.include_location);
    assert!(logging.include_thread);

    env::remove_var(STORAGE_URL_VAR);
    env::remove_var(ENVIRONMENT_VAR);
}

#[test]
#[serial]
fn test_app_config_rejects_malformed_storage_url() {
    env::set_var(STORAGE_URL_VAR, "redis://localhost");
    let result = AppConfig::from_env();
    env::remove_var(STORAGE_URL_VAR);
    assert_eq!(result.unwrap_err().code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_with_storage_override() {
    let config = AppConfig::default().with_storage(StorageUrl::SqliteMemory);
    assert_eq!(config.storage, StorageUrl::SqliteMemory);
    let logging = LoggingConfig::default().with_service_name("healthlive-cli");
    assert_eq!(logging.service_name, "healthlive-cli");
}
