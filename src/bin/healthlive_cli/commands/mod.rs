// ABOUTME: Command modules for healthlive-cli
// ABOUTME: One module per top-level subcommand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

pub mod compliance;
pub mod metrics;
pub mod plan;
pub mod queue;
pub mod reminders;
