// ABOUTME: Field-level validation errors collected at the form boundary
// ABOUTME: Maps each rejected field to a user-facing message and converts into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use super::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Validation failures keyed by field name
///
/// Every invalid field is reported at once so a form can render all messages
/// in one pass. A value is never constructed while this holds any entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("validation failed for {}", .fields.keys().cloned().collect::<Vec<_>>().join(", "))]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// Create an empty error set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, replacing any earlier message for it
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.insert(field.into(), message.into());
    }

    /// True when no field was rejected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of rejected fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Message for a single field
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// All field messages ordered by field name
    #[must_use]
    pub const fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors.fields).unwrap_or(serde_json::Value::Null);
        Self::new(ErrorCode::InvalidInput, errors.to_string()).with_details(details)
    }
}
