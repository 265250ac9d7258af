//! Catalog data model and persistence wiring.
//!
//! Records and types mirror the JSON persisted under the `pokemons` key.
//! `TypeIndex` serves the static type table; `CatalogRepository` moves the
//! record list and the favorites list in and out of a `Storage` backend.

pub mod defaults;
pub mod identity;
pub mod index;
pub mod model;
pub mod repository;

pub use defaults::{default_pokemons, default_types};
pub use identity::{PokemonId, PokemonTypeId};
pub use index::{MAX_TYPES, TypeIndex, TypeIndexError};
pub use model::{NewPokemon, Pokemon, PokemonPatch, PokemonType, Stats};
pub use repository::{CatalogRepository, FAVORITES_KEY, POKEMONS_KEY};
