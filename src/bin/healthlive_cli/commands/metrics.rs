// ABOUTME: Metric commands for healthlive-cli
// ABOUTME: Validates form input into records, lists history, and prints threshold alerts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use chrono::Utc;
use healthlive::config::AppConfig;
use healthlive::errors::{AppError, AppResult};
use healthlive::forms::{
    BloodPressureInput, BodyCompositionInput, GlucoseInput, LipidInput, MetricForm,
};
use healthlive::repositories::MonitoringRepository;
use healthlive::services::MetricRecordsService;
use healthlive::storage::KeyValueStore;
use healthlive_core::models::{
    BloodPressure, BodyComposition, Glucose, Lipids, MetricKind, MetricReading,
};
use healthlive_intelligence::MetricAlertEvaluator;
use std::sync::Arc;

use crate::helpers::display::{display_alerts, display_records, display_validation, ReadingSummary};
use crate::{EntryCommon, MetricEntry};

fn service(store: Arc<dyn KeyValueStore>, config: &AppConfig) -> AppResult<MetricRecordsService> {
    let evaluator = MetricAlertEvaluator::new(config.thresholds)
        .map_err(|error| AppError::config_invalid(error.to_string()))?;
    Ok(MetricRecordsService::new(
        MonitoringRepository::new(store),
        evaluator,
    ))
}

fn recorded_at(common: &EntryCommon) -> String {
    common
        .date
        .clone()
        .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string())
}

/// Validate and store one entry
pub async fn add(
    store: Arc<dyn KeyValueStore>,
    config: &AppConfig,
    entry: MetricEntry,
) -> AppResult<()> {
    let service = service(store, config)?;
    match entry {
        MetricEntry::BloodPressure {
            systolic,
            diastolic,
            pulse,
            common,
        } => {
            let form = BloodPressureInput {
                systolic,
                diastolic,
                pulse,
                recorded_at: recorded_at(&common),
                note: common.note,
            };
            submit(&service, &form).await
        }
        MetricEntry::Glucose {
            value,
            context,
            common,
        } => {
            let form = GlucoseInput {
                value,
                context,
                recorded_at: recorded_at(&common),
                note: common.note,
            };
            submit(&service, &form).await
        }
        MetricEntry::Lipids {
            total_cholesterol,
            hdl,
            ldl,
            triglycerides,
            common,
        } => {
            let form = LipidInput {
                total_cholesterol,
                hdl,
                ldl,
                triglycerides,
                recorded_at: recorded_at(&common),
                note: common.note,
            };
            submit(&service, &form).await
        }
        MetricEntry::BodyComposition {
            weight_kg,
            height_cm,
            common,
        } => {
            let form = BodyCompositionInput {
                weight_kg,
                height_cm,
                recorded_at: recorded_at(&common),
                note: common.note,
            };
            submit(&service, &form).await
        }
    }
}

async fn submit<F>(service: &MetricRecordsService, form: &F) -> AppResult<()>
where
    F: MetricForm + Sync,
    F::Reading: ReadingSummary,
{
    let draft = match form.validate(Utc::now()) {
        Ok(draft) => draft,
        Err(errors) => {
            display_validation(&errors);
            return Err(errors.into());
        }
    };
    let records = service.add_record(draft).await?;
    println!("Saved. {} {} readings stored.", records.len(), F::Reading::KIND);
    display_alerts(&service.alerts_for(&records));
    Ok(())
}

/// Print history for `kind`
pub async fn list(
    store: Arc<dyn KeyValueStore>,
    config: &AppConfig,
    kind: MetricKind,
) -> AppResult<()> {
    let service = service(store, config)?;
    match kind {
        MetricKind::BloodPressure => print_history::<BloodPressure>(&service).await,
        MetricKind::Glucose => print_history::<Glucose>(&service).await,
        MetricKind::Lipids => print_history::<Lipids>(&service).await,
        MetricKind::BodyComposition => print_history::<BodyComposition>(&service).await,
    }
}

async fn print_history<R: MetricReading + ReadingSummary>(
    service: &MetricRecordsService,
) -> AppResult<()> {
    let records = service.records::<R>().await?;
    display_records(&records);
    Ok(())
}

/// Print alerts for `kind`
pub async fn alerts(
    store: Arc<dyn KeyValueStore>,
    config: &AppConfig,
    kind: MetricKind,
) -> AppResult<()> {
    let service = service(store, config)?;
    let alerts = match kind {
        MetricKind::BloodPressure => service.alerts::<BloodPressure>().await?,
        MetricKind::Glucose => service.alerts::<Glucose>().await?,
        MetricKind::Lipids => service.alerts::<Lipids>().await?,
        MetricKind::BodyComposition => service.alerts::<BodyComposition>().await?,
    };
    display_alerts(&alerts);
    Ok(())
}
