//! Serializable catalog records.
//!
//! `Pokemon` is the persisted shape stored under the `pokemons` key. Writes
//! go through two input shapes: `NewPokemon` for creation (every field
//! optional, id ignored) and `PokemonPatch` for updates (id required, the
//! rest merged field by field).

use crate::catalog::identity::{PokemonId, PokemonTypeId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Static category tag with its display color (`#RRGGBB`).
pub struct PokemonType {
    pub id: PokemonTypeId,
    pub name: String,
    pub color: String,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Base stats block. Replaced as a whole when patched.
pub struct Stats {
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub speed: i64,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// A single catalog entry.
pub struct Pokemon {
    pub id: PokemonId,
    pub name: String,
    #[serde(default)]
    pub types: Vec<PokemonTypeId>,
    pub level: i64,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stats: Stats,
}

impl Pokemon {
    pub fn has_type(&self, type_id: PokemonTypeId) -> bool {
        self.types.contains(&type_id)
    }

    /// Shallow-merge `patch` over this record.
    ///
    /// Fields present in the patch win, absent fields are kept. The id is
    /// identity and never part of the merge.
    pub fn apply(&mut self, patch: PokemonPatch) {
        let PokemonPatch {
            id: _,
            name,
            types,
            level,
            img,
            description,
            stats,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(types) = types {
            self.types = types;
        }
        if let Some(level) = level {
            self.level = level;
        }
        if let Some(img) = img {
            self.img = img;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(stats) = stats {
            self.stats = stats;
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Candidate record handed to `CatalogStore::add_pokemon`.
///
/// `name` and `level` are the only required fields; an `id` supplied here is
/// discarded in favor of a freshly issued one.
pub struct NewPokemon {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PokemonId>,
    pub name: Option<String>,
    pub types: Vec<PokemonTypeId>,
    pub level: Option<i64>,
    pub img: String,
    pub description: String,
    pub stats: Stats,
}

impl NewPokemon {
    pub fn new(name: impl Into<String>, level: i64) -> Self {
        Self {
            name: Some(name.into()),
            level: Some(level),
            ..Default::default()
        }
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = PokemonTypeId>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    pub fn with_img(mut self, img: impl Into<String>) -> Self {
        self.img = img.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = stats;
        self
    }

    /// True when `name` is missing or empty, or `level` is missing or zero.
    pub fn is_missing_required(&self) -> bool {
        self.name.as_deref().is_none_or(str::is_empty) || self.level.is_none_or(|level| level == 0)
    }

    /// Turn the candidate into a record under `id`.
    ///
    /// Returns `None` when a required field is missing.
    pub(crate) fn into_pokemon(self, id: PokemonId) -> Option<Pokemon> {
        if self.is_missing_required() {
            return None;
        }
        Some(Pokemon {
            id,
            name: self.name?,
            types: self.types,
            level: self.level?,
            img: self.img,
            description: self.description,
            stats: self.stats,
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Partial update addressed at an existing record by id.
pub struct PokemonPatch {
    pub id: PokemonId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<PokemonTypeId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
}

impl PokemonPatch {
    pub fn new(id: PokemonId) -> Self {
        Self {
            id,
            name: None,
            types: None,
            level: None,
            img: None,
            description: None,
            stats: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn types(mut self, types: impl IntoIterator<Item = PokemonTypeId>) -> Self {
        self.types = Some(types.into_iter().collect());
        self
    }

    pub fn level(mut self, level: i64) -> Self {
        self.level = Some(level);
        self
    }

    pub fn img(mut self, img: impl Into<String>) -> Self {
        self.img = Some(img.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Pokemon {
        Pokemon {
            id: PokemonId::from("sample"),
            name: "Pikachu".to_string(),
            types: vec![PokemonTypeId(1)],
            level: 35,
            img: "pikachu.png".to_string(),
            description: "Stores electricity in its cheeks.".to_string(),
            stats: Stats {
                hp: 35,
                attack: 55,
                defense: 40,
                speed: 90,
            },
        }
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut pokemon = sample();
        let before = pokemon.clone();
        pokemon.apply(PokemonPatch::new(PokemonId::from("sample")).level(99));
        assert_eq!(pokemon.level, 99);
        assert_eq!(pokemon.name, before.name);
        assert_eq!(pokemon.types, before.types);
        assert_eq!(pokemon.stats, before.stats);
        assert_eq!(pokemon.description, before.description);
    }

    #[test]
    fn apply_never_rewrites_identity() {
        let mut pokemon = sample();
        pokemon.apply(PokemonPatch::new(PokemonId::from("other")).name("Raichu"));
        assert_eq!(pokemon.id, PokemonId::from("sample"));
        assert_eq!(pokemon.name, "Raichu");
    }

    #[test]
    fn stats_are_replaced_wholesale() {
        let mut pokemon = sample();
        let stats = Stats {
            hp: 1,
            ..Default::default()
        };
        pokemon.apply(PokemonPatch::new(pokemon.id.clone()).stats(stats));
        assert_eq!(pokemon.stats, stats);
    }

    #[test]
    fn candidate_requires_name_and_level() {
        assert!(NewPokemon::default().is_missing_required());
        assert!(NewPokemon::new("", 10).is_missing_required());
        assert!(NewPokemon::new("Mew", 0).is_missing_required());
        assert!(!NewPokemon::new("Mew", 1).is_missing_required());
        assert!(!NewPokemon::new("Mew", -1).is_missing_required());

        let missing_name = NewPokemon {
            level: Some(10),
            ..Default::default()
        };
        assert!(missing_name.into_pokemon(PokemonId::generate()).is_none());
    }

    #[test]
    fn candidate_id_is_discarded() {
        let candidate = NewPokemon {
            id: Some(PokemonId::from("caller-chosen")),
            ..NewPokemon::new("Mew", 5)
        };
        let pokemon = candidate
            .into_pokemon(PokemonId::from("issued"))
            .expect("valid candidate");
        assert_eq!(pokemon.id, PokemonId::from("issued"));
    }

    #[test]
    fn record_tolerates_missing_optional_fields() {
        let value = json!({"id": "abc", "name": "Mew", "level": 3});
        let pokemon: Pokemon = serde_json::from_value(value).unwrap();
        assert!(pokemon.types.is_empty());
        assert_eq!(pokemon.stats, Stats::default());
        assert_eq!(pokemon.img, "");
    }

    #[test]
    fn record_keeps_negative_numbers() {
        let value = json!({
            "id": "abc",
            "name": "Mew",
            "level": -1,
            "stats": {"hp": -5, "attack": 0, "defense": 3, "speed": 4}
        });
        let pokemon: Pokemon = serde_json::from_value(value).unwrap();
        assert_eq!(pokemon.level, -1);
        assert_eq!(pokemon.stats.hp, -5);
        let encoded = serde_json::to_value(&pokemon).unwrap();
        assert_eq!(encoded["level"], json!(-1));
        assert_eq!(encoded["stats"]["hp"], json!(-5));
    }

    #[test]
    fn patch_serializes_only_present_fields() {
        let patch = PokemonPatch::new(PokemonId::from("abc")).level(99);
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, json!({"id": "abc", "level": 99}));
    }
}
