//! The catalog store: authoritative in-memory state plus write-through
//! persistence.
//!
//! A `CatalogStore` is constructed once over a storage backend and passed by
//! reference to whatever drives it. Every successful mutation is persisted
//! before the call returns; a failed write rolls the in-memory change back so
//! memory and storage never disagree after a reported success.
//!
//! Records and favorites live under separate keys and are not written
//! atomically. `delete_pokemon` writes the record list first and the
//! favorites second; if the process dies in between, the persisted favorites
//! keep a stale id until the next `load_favorites` prunes it.

use crate::catalog::{
    CatalogRepository, FAVORITES_KEY, NewPokemon, POKEMONS_KEY, Pokemon, PokemonId, PokemonPatch,
    PokemonType, PokemonTypeId, TypeIndex, default_pokemons,
};
use crate::storage::{Storage, StorageError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

pub const ADDED_MESSAGE: &str = "Pokémon added successfully";
pub const UPDATED_MESSAGE: &str = "Pokémon updated successfully";
pub const DELETED_MESSAGE: &str = "Pokémon deleted successfully";
const REQUIRED_FIELDS: &str = "Pokémon name and level are required";

/// Failures reported by store mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required field was missing on create.
    #[error("{reason}")]
    Validation { reason: &'static str },

    /// The referenced record does not exist.
    #[error("Pokémon not found: {0}")]
    NotFound(PokemonId),

    /// The backend refused the write; the in-memory state was rolled back.
    #[error("failed to persist '{key}': {source}")]
    Storage {
        key: &'static str,
        #[source]
        source: StorageError,
    },
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// `{ success, message }` outcome handed to presentation code.
pub struct ActionResult {
    pub success: bool,
    pub message: String,
}

impl ActionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(err: &StoreError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
        }
    }

    /// Collapse a mutation result, using `success_message` on success.
    pub fn from_result<T>(result: &Result<T, StoreError>, success_message: &str) -> Self {
        match result {
            Ok(_) => Self::ok(success_message),
            Err(err) => Self::failed(err),
        }
    }
}

/// Records, favorites and the static type table over one storage backend.
pub struct CatalogStore<S: Storage> {
    types: TypeIndex,
    pokemons: Vec<Pokemon>,
    favorites: Vec<PokemonId>,
    repository: CatalogRepository<S>,
}

impl<S: Storage> CatalogStore<S> {
    /// Open the store with the built-in type table.
    ///
    /// Records are restored from storage when a parseable list exists there;
    /// otherwise the built-in defaults are used. Favorites start empty until
    /// [`CatalogStore::load_favorites`] runs.
    pub fn open(storage: S) -> Self {
        Self::with_types(storage, TypeIndex::builtin())
    }

    pub fn with_types(storage: S, types: TypeIndex) -> Self {
        let repository = CatalogRepository::new(storage);
        let pokemons = match repository.load_pokemons() {
            Some(pokemons) => {
                debug!(count = pokemons.len(), "restored pokemons from storage");
                pokemons
            }
            None => {
                debug!("seeding default pokemons");
                default_pokemons()
            }
        };
        Self {
            types,
            pokemons,
            favorites: Vec::new(),
            repository,
        }
    }

    pub fn types(&self) -> &TypeIndex {
        &self.types
    }

    pub fn type_by_id(&self, id: PokemonTypeId) -> Option<&PokemonType> {
        self.types.get(id)
    }

    pub fn pokemons(&self) -> &[Pokemon] {
        &self.pokemons
    }

    pub fn pokemon_by_id(&self, id: &PokemonId) -> Option<&Pokemon> {
        self.pokemons.iter().find(|pokemon| &pokemon.id == id)
    }

    /// Records tagged with `type_id`, in catalog order.
    pub fn pokemons_of_type(&self, type_id: PokemonTypeId) -> Vec<&Pokemon> {
        self.pokemons
            .iter()
            .filter(|pokemon| pokemon.has_type(type_id))
            .collect()
    }

    pub fn is_favorite(&self, pokemon: &Pokemon) -> bool {
        self.is_favorite_id(&pokemon.id)
    }

    pub fn is_favorite_id(&self, id: &PokemonId) -> bool {
        self.favorites.contains(id)
    }

    pub fn favorite_ids(&self) -> &[PokemonId] {
        &self.favorites
    }

    /// Favorite records in favorites order.
    ///
    /// Ids that no longer resolve are skipped here as well, independent of
    /// the pruning done by `load_favorites`.
    pub fn favorites(&self) -> Vec<&Pokemon> {
        self.favorites
            .iter()
            .filter_map(|id| self.pokemon_by_id(id))
            .collect()
    }

    pub fn total_pokemons(&self) -> usize {
        self.pokemons.len()
    }

    pub fn total_favorites(&self) -> usize {
        self.favorites.len()
    }

    /// Create a record from `candidate` and return its freshly issued id.
    ///
    /// Only presence of `name` and `level` is checked. Any id on the
    /// candidate is discarded.
    pub fn add_pokemon(&mut self, candidate: NewPokemon) -> Result<PokemonId, StoreError> {
        let id = PokemonId::generate();
        let pokemon = candidate
            .into_pokemon(id.clone())
            .ok_or(StoreError::Validation {
                reason: REQUIRED_FIELDS,
            })?;

        self.pokemons.push(pokemon);
        if let Err(source) = self.repository.save_pokemons(&self.pokemons) {
            self.pokemons.pop();
            return Err(StoreError::Storage {
                key: POKEMONS_KEY,
                source,
            });
        }

        info!(id = %id, total = self.pokemons.len(), "added pokemon");
        Ok(id)
    }

    /// Merge `patch` over the record it names.
    ///
    /// The merged record is not re-validated.
    pub fn update_pokemon(&mut self, patch: PokemonPatch) -> Result<(), StoreError> {
        let index = self
            .position(&patch.id)
            .ok_or_else(|| StoreError::NotFound(patch.id.clone()))?;

        let id = patch.id.clone();
        let previous = self.pokemons[index].clone();
        self.pokemons[index].apply(patch);
        if let Err(source) = self.repository.save_pokemons(&self.pokemons) {
            self.pokemons[index] = previous;
            return Err(StoreError::Storage {
                key: POKEMONS_KEY,
                source,
            });
        }

        info!(id = %id, "updated pokemon");
        Ok(())
    }

    /// Remove a record and, when starred, its favorite entry.
    pub fn delete_pokemon(&mut self, id: &PokemonId) -> Result<(), StoreError> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        let removed = self.pokemons.remove(index);
        if let Err(source) = self.repository.save_pokemons(&self.pokemons) {
            self.pokemons.insert(index, removed);
            return Err(StoreError::Storage {
                key: POKEMONS_KEY,
                source,
            });
        }
        info!(id = %id, total = self.pokemons.len(), "deleted pokemon");

        if self.is_favorite_id(id) {
            self.favorites.retain(|favorite| favorite != id);
            // The record is already gone from storage; a stale favorite is
            // healed by the next load_favorites.
            if let Err(err) = self.repository.save_favorites(&self.favorites) {
                warn!(
                    id = %id,
                    key = FAVORITES_KEY,
                    error = %err,
                    "favorites not persisted after delete; stale id pruned on next load"
                );
            }
        }
        Ok(())
    }

    /// Replace in-memory favorites with the persisted list minus stale ids.
    ///
    /// The pruned list is not written back; the next toggle persists it.
    pub fn load_favorites(&mut self) {
        let stored = self.repository.load_favorites().unwrap_or_default();
        let loaded = stored.len();
        let kept: Vec<PokemonId> = stored
            .into_iter()
            .filter(|id| self.position(id).is_some())
            .collect();

        let pruned = loaded - kept.len();
        if pruned > 0 {
            info!(pruned, "pruned stale favorites");
        }
        debug!(count = kept.len(), "loaded favorites");
        self.favorites = kept;
    }

    /// Star or unstar a record; returns whether it is now a favorite.
    ///
    /// The favorites list is persisted on every call.
    pub fn toggle_favorite(&mut self, id: &PokemonId) -> Result<bool, StoreError> {
        let previous = self.favorites.clone();
        let now_favorite = match self.favorites.iter().position(|favorite| favorite == id) {
            Some(index) => {
                self.favorites.remove(index);
                false
            }
            None => {
                self.favorites.push(id.clone());
                true
            }
        };

        if let Err(source) = self.repository.save_favorites(&self.favorites) {
            self.favorites = previous;
            return Err(StoreError::Storage {
                key: FAVORITES_KEY,
                source,
            });
        }

        debug!(id = %id, favorite = now_favorite, "toggled favorite");
        Ok(now_favorite)
    }

    pub fn storage(&self) -> &S {
        self.repository.storage()
    }

    pub fn storage_mut(&mut self) -> &mut S {
        self.repository.storage_mut()
    }

    pub fn into_storage(self) -> S {
        self.repository.into_storage()
    }

    fn position(&self, id: &PokemonId) -> Option<usize> {
        self.pokemons.iter().position(|pokemon| &pokemon.id == id)
    }
}
