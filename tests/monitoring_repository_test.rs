// ABOUTME: Metric record repository tests for ordering, drafts, and the sync queue
// ABOUTME: Verifies persisted JSON shape and tolerance of corrupt storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, Utc};
use healthlive::errors::ErrorCode;
use healthlive::forms::BodyCompositionInput;
use healthlive::repositories::{create_metric_id, MonitoringRepository};
use healthlive::services::MetricRecordsService;
use healthlive_core::constants::storage_keys;
use healthlive_core::models::{
    BloodPressure, BodyComposition, Glucose, GlucoseContext, MetricDraft, MetricKind,
    MetricRecord,
};
use healthlive_intelligence::MetricAlertEvaluator;
use serde_json::Value;

fn glucose(id: &str, days_ago: i64, value: f64) -> MetricRecord<Glucose> {
    MetricRecord {
        id: id.to_owned(),
        recorded_at: common::fixed_now() - Duration::days(days_ago),
        note: None,
        reading: Glucose {
            value,
            context: GlucoseContext::Fasting,
        },
    }
}

#[tokio::test]
async fn test_records_are_kept_sorted_by_date() {
    let repository = MonitoringRepository::new(common::create_test_store());
    repository.add_record(glucose("b", 1, 100.0)).await.unwrap();
    repository.add_record(glucose("c", 0, 110.0)).await.unwrap();
    let updated = repository.add_record(glucose("a", 3, 95.0)).await.unwrap();

    let ids: Vec<&str> = updated.iter().map(|record| record.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);

    let reread = repository.get_records::<Glucose>().await.unwrap();
    assert_eq!(reread, updated);
}

#[tokio::test]
async fn test_equal_timestamps_keep_insertion_order() {
    let repository = MonitoringRepository::new(common::create_test_store());
    repository.add_record(glucose("first", 1, 100.0)).await.unwrap();
    let updated = repository
        .add_record(glucose("second", 1, 100.0))
        .await
        .unwrap();
    let ids: Vec<&str> = updated.iter().map(|record| record.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second"]);
}

#[tokio::test]
async fn test_records_are_stored_per_kind_with_flat_fields() {
    let store = common::create_test_store();
    let repository = MonitoringRepository::new(store.clone());
    repository
        .add_record(MetricRecord {
            id: "bp-1".to_owned(),
            recorded_at: common::fixed_now(),
            note: Some("after walk".to_owned()),
            reading: BloodPressure {
                systolic: 128.0,
                diastolic: 82.0,
                pulse: Some(70.0),
            },
        })
        .await
        .unwrap();

    let raw = store
        .get_item(storage_keys::BLOOD_PRESSURE)
        .await
        .unwrap()
        .unwrap();
    let stored: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored[0]["id"], "bp-1");
    assert_eq!(stored[0]["systolic"], 128.0);
    assert_eq!(stored[0]["note"], "after walk");
    assert!(stored[0]["recordedAt"].is_string());

    assert!(repository.get_records::<Glucose>().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_corrupt_records_read_as_empty() {
    let store = common::create_test_store();
    store
        .set_item(storage_keys::GLUCOSE, "[{\"broken\":")
        .await
        .unwrap();
    let repository = MonitoringRepository::new(store);
    assert!(repository.get_records::<Glucose>().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_record_enqueues_for_sync() {
    let repository = MonitoringRepository::new(common::create_test_store());
    repository.add_record(glucose("g-1", 0, 150.0)).await.unwrap();
    repository.add_record(glucose("g-2", 0, 90.0)).await.unwrap();

    let pending = repository.sync_queue().pending().await.unwrap();
    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].metric, MetricKind::Glucose);
    assert_eq!(pending[0].record["id"], "g-1");
    assert_eq!(pending[1].record["value"], 90.0);

    repository.sync_queue().clear().await.unwrap();
    assert!(repository.sync_queue().pending().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_draft_lifecycle() {
    let repository = MonitoringRepository::new(common::create_test_store());
    assert!(repository
        .read_draft::<BodyComposition>()
        .await
        .unwrap()
        .is_none());

    let draft = MetricDraft::new(
        common::fixed_now(),
        BodyComposition::from_measurements(64.0, 160.0).unwrap(),
    );
    repository.persist_draft(&draft).await.unwrap();
    assert_eq!(
        repository.read_draft::<BodyComposition>().await.unwrap(),
        Some(draft)
    );

    repository.clear_draft::<BodyComposition>().await.unwrap();
    assert!(repository
        .read_draft::<BodyComposition>()
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_corrupt_draft_reads_as_absent() {
    let store = common::create_test_store();
    store
        .set_item(&MetricKind::Glucose.draft_key(), "not json")
        .await
        .unwrap();
    let repository = MonitoringRepository::new(store);
    assert!(repository.read_draft::<Glucose>().await.unwrap().is_none());
}

#[test]
fn test_metric_ids_are_timestamp_prefixed() {
    let before = Utc::now().timestamp_millis();
    let id = create_metric_id();
    let (millis, suffix) = id.split_once('-').unwrap();
    assert!(millis.parse::<i64>().unwrap() >= before);
    assert!(suffix.parse::<u64>().unwrap() <= 1_000_000_000);
}

fn body_composition_form(weight_kg: &str, height_cm: &str, date: &str) -> BodyCompositionInput {
    BodyCompositionInput {
        weight_kg: weight_kg.to_owned(),
        height_cm: height_cm.to_owned(),
        recorded_at: date.to_owned(),
        note: String::new(),
    }
}

#[tokio::test]
async fn test_history_survives_reopen_and_rejected_entries() {
    let store = common::create_test_store();
    let service = MetricRecordsService::new(
        MonitoringRepository::new(store.clone()),
        MetricAlertEvaluator::default(),
    );
    for (weight, date) in [("82", "2025-03-01"), ("81.4", "2025-03-05"), ("80.9", "2025-03-10")] {
        service
            .submit(&body_composition_form(weight, "178", date), common::fixed_now())
            .await
            .unwrap();
    }

    for (weight, height) in [("70", "1e-200"), ("1e307", "175")] {
        let error = service
            .submit(&body_composition_form(weight, height, "2025-03-11"), common::fixed_now())
            .await
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }

    let raw = store
        .get_item(storage_keys::BODY_COMPOSITION)
        .await
        .unwrap()
        .unwrap();
    assert!(!raw.contains("null"));

    let reopened = MonitoringRepository::new(store);
    let records = reopened.get_records::<BodyComposition>().await.unwrap();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|record| record.reading.bmi.is_finite()));
    assert_eq!(reopened.sync_queue().pending().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_every_kind_round_trips_through_storage() {
    let store = common::create_test_store();
    let repository = MonitoringRepository::new(store.clone());
    for (days_ago, value) in [(0, 90.0), (1, 91.0), (2, 92.0), (3, 93.0)] {
        repository
            .add_record(glucose(&format!("g{days_ago}"), days_ago, value))
            .await
            .unwrap();
    }
    repository
        .add_record(MetricRecord {
            id: "bp".to_owned(),
            recorded_at: common::fixed_now(),
            note: Some("after walk".to_owned()),
            reading: BloodPressure {
                systolic: 124.0,
                diastolic: 82.0,
                pulse: Some(71.0),
            },
        })
        .await
        .unwrap();

    let reopened = MonitoringRepository::new(store);
    assert_eq!(reopened.get_records::<Glucose>().await.unwrap().len(), 4);
    let pressure = reopened.get_records::<BloodPressure>().await.unwrap();
    assert_eq!(pressure.len(), 1);
    assert_eq!(pressure[0].note.as_deref(), Some("after walk"));
}
