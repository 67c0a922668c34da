// ABOUTME: Storage factory for configuration-based backend selection
// ABOUTME: Wraps the in-memory and SQLite stores behind one cloneable handle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

use super::{memory::InMemoryStore, sqlite::SqliteStore, KeyValueStore};
use crate::config::environment::{StorageUrl, STORAGE_URL_VAR};
use healthlive_core::errors::AppResult;
use std::env;
use std::sync::Arc;
use tracing::info;

/// Unified storage handle
#[derive(Debug, Clone)]
pub enum Storage {
    /// Process-local map
    Memory(InMemoryStore),
    /// SQLite database
    Sqlite(SqliteStore),
}

impl Storage {
    /// Create the backend named by `url`
    ///
    /// # Errors
    ///
    /// Returns an error if the SQLite database cannot be opened
    pub async fn new(url: &StorageUrl) -> AppResult<Self> {
        match url {
            StorageUrl::Memory => {
                info!("Initializing in-memory key-value storage");
                Ok(Self::Memory(InMemoryStore::new()))
            }
            StorageUrl::Sqlite { path } => {
                info!(path = %path.display(), "Initializing SQLite key-value storage");
                Ok(Self::Sqlite(SqliteStore::open(path).await?))
            }
            StorageUrl::SqliteMemory => {
                info!("Initializing in-memory SQLite key-value storage");
                Ok(Self::Sqlite(SqliteStore::in_memory().await?))
            }
        }
    }

    /// Create storage from `HEALTHLIVE_STORAGE_URL`, in-memory when unset
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the backend cannot be opened
    pub async fn from_env() -> AppResult<Self> {
        let url = match env::var(STORAGE_URL_VAR) {
            Ok(raw) => StorageUrl::parse_url(&raw)?,
            Err(_) => StorageUrl::Memory,
        };
        Self::new(&url).await
    }

    /// Shareable trait object for repositories
    #[must_use]
    pub fn into_shared(self) -> Arc<dyn KeyValueStore> {
        match self {
            Self::Memory(store) => Arc::new(store),
            Self::Sqlite(store) => Arc::new(store),
        }
    }

    /// Name of the active backend
    #[must_use]
    pub const fn backend_name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Sqlite(_) => "sqlite",
        }
    }
}
