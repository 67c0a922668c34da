// ABOUTME: Main library entry point for the HealthLive wellness tracker
// ABOUTME: Storage, repositories, notifications, form validation, and state services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

#![deny(unsafe_code)]

//! # HealthLive
//!
//! Wellness tracking core: health metric logging with threshold alerts,
//! habit reminders scheduled as local notifications, compliance checklists,
//! and a generated weekly activity plan.
//!
//! ## Architecture
//!
//! - **`healthlive-core`**: errors, constants, domain models, thresholds
//! - **`healthlive-intelligence`**: slot scheduling, alerts, compliance math, planner
//! - **This crate**: key-value storage backends, repositories, notification
//!   planning, form validation, and services that keep state in memory while
//!   persisting in the background
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use healthlive::config::AppConfig;
//! use healthlive::errors::AppResult;
//! use healthlive::repositories::ReminderPreferencesRepository;
//! use healthlive::storage::Storage;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let store = Storage::new(&config.storage).await?.into_shared();
//!
//!     let preferences = ReminderPreferencesRepository::new(store).load().await;
//!     println!("{} reminders configured", preferences.len());
//!     Ok(())
//! }
//! ```

/// Environment-driven application configuration
pub mod config;

/// Error types shared with the core crate
pub mod errors;

/// Metric entry form validation
pub mod forms;

/// Structured logging setup and operation loggers
pub mod logging;

/// Local notification planning and the platform scheduler seam
pub mod notifications;

/// Typed persistence over the key-value store
pub mod repositories;

/// Stateful services with optimistic updates
pub mod services;

/// Key-value storage backends
pub mod storage;

pub use healthlive_core::{constants, models};
pub use healthlive_intelligence as intelligence;
