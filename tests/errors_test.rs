// ABOUTME: Error type tests for codes, constructors, display text, and conversions
// ABOUTME: Covers validation error aggregation and serde_json error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use healthlive::errors::{AppError, ErrorCode, ValidationErrors};
use serde_json::json;
use std::error::Error;
use std::io;

#[test]
fn test_constructors_set_codes() {
    assert_eq!(AppError::storage("x").code, ErrorCode::StorageError);
    assert_eq!(AppError::serialization("x").code, ErrorCode::SerializationError);
    assert_eq!(AppError::config_invalid("x").code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_error_codes_serialize_as_screaming_names() {
    assert_eq!(
        serde_json::to_value(ErrorCode::InvalidInput).unwrap(),
        json!("INVALID_INPUT")
    );
    assert_eq!(
        serde_json::to_value(ErrorCode::ResourceNotFound).unwrap(),
        json!("RESOURCE_NOT_FOUND")
    );
}

#[test]
fn test_not_found_message_and_display() {
    let error = AppError::not_found("reminder preference 'movement'");
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(error.message, "reminder preference 'movement' not found");
    let rendered = error.to_string();
    assert!(rendered.starts_with(ErrorCode::ResourceNotFound.description()));
    assert!(rendered.ends_with("reminder preference 'movement' not found"));
}

#[test]
fn test_validation_errors_replace_message_per_field() {
    let mut errors = ValidationErrors::new();
    assert!(errors.is_empty());
    errors.add("systolic", "first");
    errors.add("systolic", "second");
    errors.add("diastolic", "other");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get("systolic"), Some("second"));
    assert_eq!(errors.get("diastolic"), Some("other"));
    assert_eq!(errors.get("pulse"), None);
}

#[test]
fn test_validation_errors_convert_with_field_details() {
    let mut errors = ValidationErrors::new();
    errors.add("value", "Enter a valid glucose value.");
    let error = AppError::from(errors);
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.message, "validation failed for value");
    assert_eq!(
        error.details,
        json!({ "value": "Enter a valid glucose value." })
    );
}

#[test]
fn test_serde_json_error_maps_to_serialization() {
    let parse_error = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
    let error = AppError::from(parse_error);
    assert_eq!(error.code, ErrorCode::SerializationError);
    assert!(error.source().is_some());
}

#[test]
fn test_with_details_and_source() {
    let io_error = io::Error::other("disk full");
    let error = AppError::storage("write failed")
        .with_details(json!({ "key": "@healthlive:reminder-preferences" }))
        .with_source(io_error);
    assert_eq!(error.details["key"], "@healthlive:reminder-preferences");
    assert_eq!(error.source().map(ToString::to_string).as_deref(), Some("disk full"));
}
