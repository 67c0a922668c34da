// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses the deployment environment and the key-value storage location
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthLive

//! Environment-based configuration

use healthlive_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Environment variable selecting the storage backend
pub const STORAGE_URL_VAR: &str = "HEALTHLIVE_STORAGE_URL";

/// Environment variable selecting the deployment environment
pub const ENVIRONMENT_VAR: &str = "HEALTHLIVE_ENVIRONMENT";

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production device build
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Read `HEALTHLIVE_ENVIRONMENT`, defaulting to development
    #[must_use]
    pub fn from_env() -> Self {
        env::var(ENVIRONMENT_VAR).map_or(Self::Development, |raw| Self::from_str_or_default(&raw))
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe storage location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StorageUrl {
    /// Process-local concurrent map
    #[default]
    Memory,
    /// SQLite database file
    Sqlite {
        /// Database file path
        path: PathBuf,
    },
    /// In-memory SQLite database
    SqliteMemory,
}

impl StorageUrl {
    /// Parse from string with validation
    ///
    /// Accepted forms are `memory`, `sqlite::memory:`, and `sqlite:<path>`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for unknown schemes or an empty path
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("memory") {
            return Ok(Self::Memory);
        }
        let Some(path_str) = trimmed.strip_prefix("sqlite:") else {
            return Err(AppError::config_invalid(format!(
                "unsupported storage URL '{trimmed}', expected 'memory' or 'sqlite:<path>'"
            )));
        };
        if path_str == ":memory:" {
            return Ok(Self::SqliteMemory);
        }
        let path_str = path_str.strip_prefix("//").unwrap_or(path_str);
        if path_str.is_empty() {
            return Err(AppError::config_invalid("sqlite storage URL has no path"));
        }
        Ok(Self::Sqlite {
            path: PathBuf::from(path_str),
        })
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::Memory => "memory".to_owned(),
            Self::Sqlite { path } => format!("sqlite:{}", path.display()),
            Self::SqliteMemory => "sqlite::memory:".to_owned(),
        }
    }
}

impl fmt::Display for StorageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}
