//! Typed access to the two persisted catalog collections.
//!
//! The repository owns the storage backend and knows the key layout:
//! `pokemons` holds a JSON array of records, `favorites` a JSON array of
//! record ids. Loads never fail; an absent, unreadable or malformed value
//! comes back as `None` and the caller picks the fallback.

use crate::catalog::identity::PokemonId;
use crate::catalog::model::Pokemon;
use crate::storage::{Storage, StorageError, StorageResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub const POKEMONS_KEY: &str = "pokemons";
pub const FAVORITES_KEY: &str = "favorites";

#[derive(Debug, Default)]
/// Load/save capability for records and favorites over a `Storage`.
pub struct CatalogRepository<S> {
    storage: S,
}

impl<S: Storage> CatalogRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn load_pokemons(&self) -> Option<Vec<Pokemon>> {
        self.load_json(POKEMONS_KEY)
    }

    pub fn save_pokemons(&mut self, pokemons: &[Pokemon]) -> StorageResult<()> {
        self.save_json(POKEMONS_KEY, pokemons)
    }

    pub fn load_favorites(&self) -> Option<Vec<PokemonId>> {
        self.load_json(FAVORITES_KEY)
    }

    pub fn save_favorites(&mut self, favorites: &[PokemonId]) -> StorageResult<()> {
        self.save_json(FAVORITES_KEY, favorites)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.storage.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key, "no persisted value");
                return None;
            }
            Err(err) => {
                warn!(key, error = %err, "unable to read persisted value; using fallback");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, error = %err, "persisted value is malformed; using fallback");
                None
            }
        }
    }

    fn save_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> StorageResult<()> {
        let encoded = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.storage.write(key, &encoded)
    }
}
