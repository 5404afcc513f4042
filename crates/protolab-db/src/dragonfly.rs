//! `Dragonfly` (Redis-compatible) hash operations.
//!
//! Results live in a single hash so that "insert unless present" is one
//! atomic `HSETNX`.
//!
//! # Key Patterns
//!
//! | Pattern | Type | Description |
//! |---------|------|-------------|
//! | `personality-results` | Hash | identity -> result record JSON |

use std::collections::HashMap;

use fred::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::DbError;

/// Connection handle to a `Dragonfly` (Redis-compatible) instance.
///
/// Wraps a [`fred::prelude::Client`] and provides typed JSON operations
/// on hash fields.
#[derive(Clone)]
pub struct DragonflyPool {
    client: Client,
}

impl DragonflyPool {
    /// Connect to `Dragonfly` at the given URL.
    ///
    /// The URL should follow the Redis URL scheme:
    /// `redis://host:port` or `redis://host:port/db`
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Config`] if the URL cannot be parsed.
    /// Returns [`DbError::Dragonfly`] if the connection fails.
    pub async fn connect(url: &str) -> Result<Self, DbError> {
        let config = Config::from_url(url).map_err(|e| DbError::Config(format!("Invalid Dragonfly URL: {e}")))?;

        let client = Builder::from_config(config).build()?;
        client.init().await?;

        tracing::info!("Connected to Dragonfly");
        Ok(Self { client })
    }

    // =========================================================================
    // Hash fields as JSON
    // =========================================================================

    /// Store `value` as JSON at `key`/`field` unless the field already exists.
    ///
    /// Returns `true` if the field was created.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Serialization`] if serialization fails.
    /// Returns [`DbError::Dragonfly`] if the write fails.
    pub async fn hset_json_nx<T: Serialize>(&self, key: &str, field: &str, value: &T) -> Result<bool, DbError> {
        let json = serde_json::to_string(value)?;
        let created: bool = self.client.hsetnx(key, field, json.as_str()).await?;
        Ok(created)
    }

    /// Read every field of the hash at `key`, deserializing each value.
    ///
    /// Values that fail to parse are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Dragonfly`] if the read fails.
    pub async fn hgetall_json<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<(String, T)>, DbError> {
        let raw: HashMap<String, String> = self.client.hgetall(key).await?;
        let mut entries = Vec::with_capacity(raw.len());
        for (field, value) in raw {
            match serde_json::from_str(&value) {
                Ok(parsed) => entries.push((field, parsed)),
                Err(e) => tracing::warn!(key, field = %field, error = %e, "skipping unparseable hash value"),
            }
        }
        Ok(entries)
    }

    /// Remove `fields` from the hash at `key`. Returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Dragonfly`] if the delete fails.
    pub async fn hdel(&self, key: &str, fields: Vec<String>) -> Result<u64, DbError> {
        if fields.is_empty() {
            return Ok(0);
        }
        let removed: u64 = self.client.hdel(key, fields).await?;
        Ok(removed)
    }
}
