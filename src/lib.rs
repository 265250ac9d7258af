//! Shared library for the pokedex catalog.
//!
//! The crate exposes the catalog data model, the storage backends, and the
//! `CatalogStore` that ties them together. The `pokedex` binary is a thin
//! shell over these pieces; embedders construct one store at startup and
//! pass it by reference to whatever needs it.

use anyhow::{Context, Result};
use std::path::Path;

pub mod catalog;
pub mod config;
pub mod storage;
pub mod store;

pub use catalog::{
    CatalogRepository, FAVORITES_KEY, NewPokemon, POKEMONS_KEY, Pokemon, PokemonId, PokemonPatch,
    PokemonType, PokemonTypeId, Stats, TypeIndex, TypeIndexError, default_pokemons,
    default_types,
};
pub use config::Config;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::{
    ADDED_MESSAGE, ActionResult, CatalogStore, DELETED_MESSAGE, StoreError, UPDATED_MESSAGE,
};

/// Image used when a record has no picture of its own.
pub const DEFAULT_IMAGE: &str = "default.png";

const IMAGES_DIR: &str = "images";

/// Open the durable store rooted at `data_dir`.
pub fn open_file_store(data_dir: &Path) -> Result<CatalogStore<FileStorage>> {
    let storage = FileStorage::open(data_dir)
        .with_context(|| format!("opening data directory {}", data_dir.display()))?;
    Ok(CatalogStore::open(storage))
}

/// Map a bare image filename to its asset path under `base`.
///
/// `base` is treated as a directory prefix (`/`, `/pokedex/`, ...); a missing
/// trailing slash is added. Missing or empty filenames resolve to
/// [`DEFAULT_IMAGE`].
pub fn image_url(base: &str, filename: Option<&str>) -> String {
    image_url_or(base, filename, DEFAULT_IMAGE)
}

/// Like [`image_url`], with a caller-chosen `fallback` for missing filenames.
pub fn image_url_or(base: &str, filename: Option<&str>, fallback: &str) -> String {
    let filename = filename.filter(|name| !name.is_empty()).unwrap_or(fallback);
    let separator = if base.ends_with('/') { "" } else { "/" };
    format!("{base}{separator}{IMAGES_DIR}/{filename}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn image_url_prefixes_base_path() {
        assert_eq!(image_url("/", Some("pikachu.png")), "/images/pikachu.png");
        assert_eq!(
            image_url("/pokedex/", Some("tortank.png")),
            "/pokedex/images/tortank.png"
        );
        assert_eq!(
            image_url("/pokedex", Some("tortank.png")),
            "/pokedex/images/tortank.png"
        );
    }

    #[test]
    fn image_url_falls_back_to_default() {
        assert_eq!(image_url("/", None), "/images/default.png");
        assert_eq!(image_url("", Some("")), "/images/default.png");
    }

    #[test]
    fn image_url_or_uses_caller_fallback() {
        assert_eq!(
            image_url_or("/pokedex/", None, "unknown.png"),
            "/pokedex/images/unknown.png"
        );
        assert_eq!(
            image_url_or("/", Some("mew.png"), "unknown.png"),
            "/images/mew.png"
        );
    }

    #[test]
    fn open_file_store_creates_the_data_dir() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("state");
        let store = open_file_store(&data_dir).expect("store opens");
        assert!(data_dir.is_dir());
        assert_eq!(store.total_pokemons(), 10);
    }
}
