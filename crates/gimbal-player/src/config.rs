// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Player settings and the storage port they are loaded through.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::bindings::KeyBindings;
use crate::look::LookConfig;
use crate::movement::MovementConfig;
use crate::transform::Transform;

/// Where serialised player settings live, one blob per logical key.
///
/// Hosts back this with a file, a save slot or a remote profile.
pub trait ConfigStore {
    /// Blob stored under `key`, or `None` when nothing was ever saved there.
    fn load_raw(&self, key: &str) -> Result<Option<Vec<u8>>, ConfigError>;
    /// Replaces the blob under `key`.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Failure loading or saving player settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The backing store could not be read or written.
    #[error("settings store failed: {0}")]
    Store(#[from] std::io::Error),
    /// The blob under `key` is not a valid settings document.
    #[error("settings under `{key}` are not valid JSON: {source}")]
    Json {
        /// Store key of the offending blob.
        key: String,
        /// Parser or encoder error.
        #[source]
        source: serde_json::Error,
    },
}

/// Moves [`PlayerConfig`] documents between memory and a [`ConfigStore`].
///
/// Documents are pretty-printed JSON so players can edit them by hand.
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Service over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: ConfigStore> ConfigService<S> {
    /// An empty blob is treated the same as a missing one.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        match self.store.load_raw(key)? {
            Some(bytes) if !bytes.is_empty() => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|source| ConfigError::Json {
                    key: key.to_owned(),
                    source,
                }),
            _ => Ok(None),
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ConfigError> {
        let data = serde_json::to_vec_pretty(value).map_err(|source| ConfigError::Json {
            key: key.to_owned(),
            source,
        })?;
        self.store.save_raw(key, &data)
    }
}

/// In-memory [`ConfigStore`]. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    data: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryConfigStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys currently stored, in order.
    pub fn keys(&self) -> Vec<String> {
        self.data
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Option<Vec<u8>>, ConfigError> {
        Ok(self
            .data
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        self.data
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}

/// Everything a [`crate::PlayerContext`] is built from.
///
/// Missing fields fall back to their defaults, so partial documents load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Mouse-look tuning.
    pub look: LookConfig,
    /// Movement tuning.
    pub movement: MovementConfig,
    /// Action → key table.
    pub bindings: KeyBindings,
    /// Where new bodies are placed.
    pub spawn: Transform,
}

impl PlayerConfig {
    /// Store key the player settings live under.
    pub const KEY: &'static str = "player";

    /// Loads [`PlayerConfig::KEY`], or the defaults when nothing (or an
    /// empty blob) is stored.
    pub fn load_or_default<S: ConfigStore>(
        service: &ConfigService<S>,
    ) -> Result<Self, ConfigError> {
        Ok(service.load(Self::KEY)?.unwrap_or_default())
    }

    /// Stores these settings under [`PlayerConfig::KEY`].
    pub fn save<S: ConfigStore>(&self, service: &ConfigService<S>) -> Result<(), ConfigError> {
        service.save(Self::KEY, self)
    }
}
