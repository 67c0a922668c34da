// ABOUTME: Configuration error types for threshold validation
// ABOUTME: Defines error variants for non-positive cutoffs and inverted ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

//! Configuration error types for intelligence module validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Cutoff is zero, negative, or not a number
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Lower bound is not below the upper bound
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),
}
