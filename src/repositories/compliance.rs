// ABOUTME: Compliance checklist persistence keyed by calendar day and ISO week
// ABOUTME: Writes only the current day and week, replacing earlier history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use crate::storage::{read_json, write_json, KeyValueStore};
use healthlive_core::constants::storage_keys;
use healthlive_core::errors::AppResult;
use healthlive_core::models::{ComplianceStatus, StoredCompliance};
use healthlive_intelligence::compliance::{
    current_period_snapshot, empty_compliance_status, resolve_status,
};
use std::sync::Arc;
use tracing::warn;

/// Daily and weekly checklist storage
#[derive(Clone)]
pub struct ComplianceRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ComplianceRepository {
    /// Create a repository over `store`
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Status for `day_key` and `week_key`
    ///
    /// Missing periods and unreadable storage yield all tasks not completed.
    pub async fn load(&self, day_key: &str, week_key: &str) -> ComplianceStatus {
        match read_json::<StoredCompliance>(self.store.as_ref(), storage_keys::REMINDER_COMPLIANCE)
            .await
        {
            Ok(Some(stored)) => resolve_status(&stored, day_key, week_key),
            Ok(None) => empty_compliance_status(),
            Err(error) => {
                warn!(error = %error, "Error loading compliance status");
                empty_compliance_status()
            }
        }
    }

    /// Persist `status` as the only stored day and week
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the storage write fails
    pub async fn save(&self, status: &ComplianceStatus, day_key: &str, week_key: &str) -> AppResult<()> {
        let snapshot = current_period_snapshot(status, day_key, week_key);
        write_json(self.store.as_ref(), storage_keys::REMINDER_COMPLIANCE, &snapshot).await
    }
}
