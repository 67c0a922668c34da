// ABOUTME: Application error types re-exported from the core crate
// ABOUTME: Keeps `healthlive::errors` as the single import path for binaries and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

pub use healthlive_core::errors::{AppError, AppResult, ErrorCode, ValidationErrors};
