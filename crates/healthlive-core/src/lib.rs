// ABOUTME: Core types and constants for the HealthLive wellness tracker
// ABOUTME: Foundation crate with error handling, domain models, thresholds, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

#![deny(unsafe_code)]

//! # HealthLive Core
//!
//! Foundation crate providing shared types and constants for the HealthLive
//! wellness tracker. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and field-level validation errors
//! - **constants**: Storage keys, scheduling limits, and notification identifiers
//! - **models**: Reminder preferences, metric records, compliance tasks, and planner habits
//! - **config**: Clinical threshold configuration

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (reminders, metric records, compliance, planner)
pub mod models;

/// Clinical threshold configuration
pub mod config;
