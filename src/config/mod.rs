// ABOUTME: Application configuration assembled from environment variables
// ABOUTME: Selects the storage backend, deployment environment, and logging settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

//! Configuration
//!
//! Configuration is environment-only. There is no config file.

/// Environment and storage URL parsing
pub mod environment;

use crate::logging::LoggingConfig;
use environment::{Environment, StorageUrl, STORAGE_URL_VAR};
use healthlive_core::config::ThresholdConfig;
use healthlive_core::errors::AppResult;
use std::env;
use tracing::debug;

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Key-value storage backend
    pub storage: StorageUrl,
    /// Deployment environment
    pub environment: Environment,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Metric alert cutoffs
    pub thresholds: ThresholdConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageUrl::Memory,
            environment: Environment::Development,
            logging: LoggingConfig::default(),
            thresholds: ThresholdConfig::DEFAULT,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    ///
    /// `HEALTHLIVE_STORAGE_URL` defaults to `memory` when unset.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the storage URL is malformed
    pub fn from_env() -> AppResult<Self> {
        let storage = match env::var(STORAGE_URL_VAR) {
            Ok(raw) => StorageUrl::parse_url(&raw)?,
            Err(_) => StorageUrl::Memory,
        };
        let environment = Environment::from_env();
        debug!(storage = %storage, environment = %environment, "Loaded configuration");

        Ok(Self {
            storage,
            environment,
            logging: LoggingConfig::from_env(),
            thresholds: ThresholdConfig::DEFAULT,
        })
    }

    /// Override the storage backend
    #[must_use]
    pub fn with_storage(mut self, storage: StorageUrl) -> Self {
        self.storage = storage;
        self
    }
}
