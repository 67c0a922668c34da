// ABOUTME: Metric record persistence with date ordering, drafts, and sync queue hand-off
// ABOUTME: One JSON array per metric kind plus an optional unsaved draft per kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use super::SyncQueue;
use crate::storage::KeyValueStore;
use chrono::Utc;
use healthlive_core::errors::AppResult;
use healthlive_core::models::{MetricDraft, MetricReading, MetricRecord};
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, warn};

/// New record identifier, `"{unix_millis}-{0..=1e9}"`
#[must_use]
pub fn create_metric_id() -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..=1_000_000_000);
    format!("{}-{suffix}", Utc::now().timestamp_millis())
}

/// Metric record storage
#[derive(Clone)]
pub struct MonitoringRepository {
    store: Arc<dyn KeyValueStore>,
    sync_queue: SyncQueue,
}

impl MonitoringRepository {
    /// Create a repository whose sync queue shares `store`
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let sync_queue = SyncQueue::new(Arc::clone(&store));
        Self { store, sync_queue }
    }

    /// Sync queue records are appended to
    #[must_use]
    pub const fn sync_queue(&self) -> &SyncQueue {
        &self.sync_queue
    }

    /// Records of kind `R` sorted ascending by `recorded_at`
    ///
    /// A corrupt list reads as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage read fails
    pub async fn get_records<R: MetricReading>(&self) -> AppResult<Vec<MetricRecord<R>>> {
        let key = R::KIND.storage_key();
        let Some(raw) = self.store.get_item(key).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<MetricRecord<R>>>(&raw) {
            Ok(mut records) => {
                sort_by_date(&mut records);
                Ok(records)
            }
            Err(error) => {
                warn!(metric = %R::KIND, error = %error, "Error parsing metric records");
                Ok(Vec::new())
            }
        }
    }

    /// Insert `record`, persist the sorted list, and queue it for sync
    ///
    /// Returns the updated list.
    ///
    /// # Errors
    ///
    /// Returns an error if reading, writing, or queueing fails
    pub async fn add_record<R: MetricReading>(
        &self,
        record: MetricRecord<R>,
    ) -> AppResult<Vec<MetricRecord<R>>> {
        let mut records = self.get_records::<R>().await?;
        records.push(record.clone());
        sort_by_date(&mut records);

        let encoded = serde_json::to_string(&records)?;
        self.store.set_item(R::KIND.storage_key(), &encoded).await?;
        self.sync_queue.enqueue(R::KIND, &record).await?;

        debug!(metric = %R::KIND, record_id = %record.id, total = records.len(), "Added metric record");
        Ok(records)
    }

    /// Save an unfinished entry for kind `R`, replacing any previous draft
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the storage write fails
    pub async fn persist_draft<R: MetricReading>(&self, draft: &MetricDraft<R>) -> AppResult<()> {
        let encoded = serde_json::to_string(draft)?;
        self.store.set_item(&R::KIND.draft_key(), &encoded).await
    }

    /// Saved draft for kind `R`; a corrupt draft reads as absent
    ///
    /// # Errors
    ///
    /// Returns an error if the storage read fails
    pub async fn read_draft<R: MetricReading>(&self) -> AppResult<Option<MetricDraft<R>>> {
        let Some(raw) = self.store.get_item(&R::KIND.draft_key()).await? else {
            return Ok(None);
        };
        Ok(serde_json::from_str(&raw)
            .map_err(|error| {
                warn!(metric = %R::KIND, error = %error, "Error parsing metric draft");
            })
            .ok())
    }

    /// Remove the draft for kind `R`
    ///
    /// # Errors
    ///
    /// Returns an error if the storage write fails
    pub async fn clear_draft<R: MetricReading>(&self) -> AppResult<()> {
        self.store.remove_item(&R::KIND.draft_key()).await
    }
}

// Stable, so equal timestamps keep insertion order
fn sort_by_date<R>(records: &mut [MetricRecord<R>]) {
    records.sort_by_key(|record| record.recorded_at);
}
