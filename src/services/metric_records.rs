// ABOUTME: Metric record service validating form input, storing records, and evaluating alerts
// ABOUTME: Generates record ids and clears the per-kind draft once a record is saved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use crate::forms::MetricForm;
use crate::repositories::{create_metric_id, MonitoringRepository};
use chrono::{DateTime, Utc};
use healthlive_core::errors::AppResult;
use healthlive_core::models::{MetricDraft, MetricReading, MetricRecord};
use healthlive_intelligence::{MetricAlert, MetricAlertEvaluator};
use tracing::{info, warn};

/// Entry point for recording and reviewing health metrics
#[derive(Clone)]
pub struct MetricRecordsService {
    repository: MonitoringRepository,
    evaluator: MetricAlertEvaluator,
}

impl MetricRecordsService {
    /// Create a service with the given alert evaluator
    #[must_use]
    pub const fn new(repository: MonitoringRepository, evaluator: MetricAlertEvaluator) -> Self {
        Self {
            repository,
            evaluator,
        }
    }

    /// Underlying repository
    #[must_use]
    pub const fn repository(&self) -> &MonitoringRepository {
        &self.repository
    }

    /// History for kind `R`, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the storage read fails
    pub async fn records<R: MetricReading>(&self) -> AppResult<Vec<MetricRecord<R>>> {
        self.repository.get_records::<R>().await
    }

    /// Assign an id to `draft` and store it
    ///
    /// Returns the updated history. The saved draft for the kind is cleared;
    /// failing to clear it is only logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be stored
    pub async fn add_record<R: MetricReading>(
        &self,
        draft: MetricDraft<R>,
    ) -> AppResult<Vec<MetricRecord<R>>> {
        let record = draft.into_record(create_metric_id());
        let record_id = record.id.clone();
        let records = self.repository.add_record(record).await?;
        if let Err(error) = self.repository.clear_draft::<R>().await {
            warn!(metric = %R::KIND, error = %error, "Error clearing metric draft");
        }
        info!(metric = %R::KIND, record_id = %record_id, "Recorded metric");
        Ok(records)
    }

    /// Validate `form` against `now` and store the resulting record
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` carrying the field messages when validation
    /// fails, or a storage error if the record cannot be stored
    pub async fn submit<F: MetricForm>(
        &self,
        form: &F,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<MetricRecord<F::Reading>>> {
        let draft = form.validate(now)?;
        self.add_record(draft).await
    }

    /// Alerts for the stored history of kind `R`
    ///
    /// # Errors
    ///
    /// Returns an error if the storage read fails
    pub async fn alerts<R: MetricReading>(&self) -> AppResult<Vec<MetricAlert>> {
        let records = self.records::<R>().await?;
        Ok(self.alerts_for(&records))
    }

    /// Alerts for an in-memory history
    #[must_use]
    pub fn alerts_for<R: MetricReading>(&self, records: &[MetricRecord<R>]) -> Vec<MetricAlert> {
        self.evaluator.evaluate(&R::series(records))
    }

    /// Save an unfinished entry
    ///
    /// # Errors
    ///
    /// Returns an error if the storage write fails
    pub async fn save_draft<R: MetricReading>(&self, draft: &MetricDraft<R>) -> AppResult<()> {
        self.repository.persist_draft(draft).await
    }

    /// Saved draft for kind `R`
    ///
    /// # Errors
    ///
    /// Returns an error if the storage read fails
    pub async fn draft<R: MetricReading>(&self) -> AppResult<Option<MetricDraft<R>>> {
        self.repository.read_draft::<R>().await
    }

    /// Drop the saved draft for kind `R`
    ///
    /// # Errors
    ///
    /// Returns an error if the storage write fails
    pub async fn discard_draft<R: MetricReading>(&self) -> AppResult<()> {
        self.repository.clear_draft::<R>().await
    }
}
