// ABOUTME: Sync queue commands for healthlive-cli
// ABOUTME: Inspects and empties the queue of records awaiting upload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use healthlive::errors::AppResult;
use healthlive::repositories::SyncQueue;
use healthlive::storage::KeyValueStore;
use std::sync::Arc;
use tracing::info;

/// Print every queued entry
pub async fn pending(store: Arc<dyn KeyValueStore>) -> AppResult<()> {
    let entries = SyncQueue::new(store).pending().await?;
    if entries.is_empty() {
        println!("Sync queue is empty.");
        return Ok(());
    }
    for entry in &entries {
        println!(
            "{}  {:<16} {}",
            entry.queued_at.format("%Y-%m-%d %H:%M:%S"),
            entry.metric.as_str(),
            entry.record
        );
    }
    println!("{} entries pending", entries.len());
    Ok(())
}

/// Remove every queued entry
pub async fn clear(store: Arc<dyn KeyValueStore>) -> AppResult<()> {
    SyncQueue::new(store).clear().await?;
    info!("Sync queue cleared");
    println!("Sync queue cleared.");
    Ok(())
}
