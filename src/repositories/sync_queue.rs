// ABOUTME: Outbound sync queue recording every added metric record
// ABOUTME: Entries accumulate until cleared; no component drains them to a server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use crate::storage::KeyValueStore;
use chrono::Utc;
use healthlive_core::constants::storage_keys;
use healthlive_core::errors::AppResult;
use healthlive_core::models::{MetricKind, SyncPayload};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// Append-only list of records waiting for upload
#[derive(Clone)]
pub struct SyncQueue {
    store: Arc<dyn KeyValueStore>,
}

impl SyncQueue {
    /// Create a queue over `store`
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Append a record stamped with the current time
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or the write fails
    pub async fn enqueue<T: Serialize + Sync>(&self, metric: MetricKind, record: &T) -> AppResult<()> {
        let mut payloads = self.pending().await?;
        payloads.push(SyncPayload {
            metric,
            record: serde_json::to_value(record)?,
            queued_at: Utc::now(),
        });
        let encoded = serde_json::to_string(&payloads)?;
        self.store.set_item(storage_keys::SYNC_QUEUE, &encoded).await
    }

    /// Queued entries in insertion order
    ///
    /// A corrupt queue reads as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage read fails
    pub async fn pending(&self) -> AppResult<Vec<SyncPayload>> {
        let Some(raw) = self.store.get_item(storage_keys::SYNC_QUEUE).await? else {
            return Ok(Vec::new());
        };
        Ok(serde_json::from_str(&raw).unwrap_or_else(|error| {
            warn!(error = %error, "Error parsing sync queue, treating it as empty");
            Vec::new()
        }))
    }

    /// Drop every queued entry
    ///
    /// # Errors
    ///
    /// Returns an error if the storage write fails
    pub async fn clear(&self) -> AppResult<()> {
        self.store.remove_item(storage_keys::SYNC_QUEUE).await
    }
}
