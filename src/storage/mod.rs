// ABOUTME: Key-value storage abstraction for persisting JSON-encoded application state
// ABOUTME: Pluggable backend support (in-memory, SQLite) selected from configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

/// Storage factory for creating storage backends
pub mod factory;
/// In-memory storage implementation
pub mod memory;
/// SQLite storage implementation
pub mod sqlite;

pub use factory::Storage;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;

use healthlive_core::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// String key to string value store
///
/// Values are opaque strings; callers encode JSON themselves. There are no
/// transactions and concurrent writers to the same key race with last write
/// winning.
///
/// # Examples
///
/// ```rust,no_run
/// use healthlive::storage::{InMemoryStore, KeyValueStore};
/// # async fn example() -> Result<(), healthlive::errors::AppError> {
/// let store = InMemoryStore::new();
/// store.set_item("@healthlive:example", "[1,2,3]").await?;
/// assert_eq!(store.get_item("@healthlive:example").await?.as_deref(), Some("[1,2,3]"));
/// store.remove_item("@healthlive:example").await?;
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn set_item(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete `key`; deleting a missing key succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn remove_item(&self, key: &str) -> AppResult<()>;

    /// Every stored key in ascending order
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn keys(&self) -> AppResult<Vec<String>>;
}

/// Read and decode a JSON value
///
/// # Errors
///
/// Returns an error if the backend fails or the stored text is not valid JSON
/// for `T`
pub async fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> AppResult<Option<T>> {
    match store.get_item(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode and store a JSON value
///
/// # Errors
///
/// Returns an error if serialization or the backend write fails
pub async fn write_json<T: Serialize + Sync>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let encoded = serde_json::to_string(value)?;
    store.set_item(key, &encoded).await
}
