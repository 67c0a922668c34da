// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, store construction, fixed clocks, and a failing store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `healthlive`

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use healthlive::errors::{AppError, AppResult};
use healthlive::storage::{InMemoryStore, KeyValueStore};
use std::env;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls verbosity; quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory store behind the trait object repositories take
pub fn create_test_store() -> Arc<dyn KeyValueStore> {
    init_test_logging();
    Arc::new(InMemoryStore::new())
}

/// 2025-03-12 10:00:00 UTC, a Wednesday
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 12, 10, 0, 0).unwrap()
}

/// Store whose reads succeed but every write fails
#[derive(Default)]
pub struct ReadOnlyStore {
    inner: InMemoryStore,
}

impl ReadOnlyStore {
    /// Wrap `inner`; seed it before wrapping, clones share entries
    pub fn new(inner: InMemoryStore) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl KeyValueStore for ReadOnlyStore {
    async fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get_item(key).await
    }

    async fn set_item(&self, _key: &str, _value: &str) -> AppResult<()> {
        Err(AppError::storage("storage is read-only"))
    }

    async fn remove_item(&self, _key: &str) -> AppResult<()> {
        Err(AppError::storage("storage is read-only"))
    }

    async fn keys(&self) -> AppResult<Vec<String>> {
        self.inner.keys().await
    }
}
