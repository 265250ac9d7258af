//! Indexed view of the static type table.
//!
//! The index is strict about the table it accepts: ids must be unique, names
//! non-empty, colors `#RRGGBB`, and the table may hold at most
//! `MAX_TYPES` entries. Lookups go through a BTreeMap so iteration order is
//! stable.

use crate::catalog::defaults::default_types;
use crate::catalog::identity::PokemonTypeId;
use crate::catalog::model::PokemonType;
use std::collections::BTreeMap;
use thiserror::Error;

/// Upper bound on the number of types a table may declare.
pub const MAX_TYPES: usize = 16;

/// Reasons a type table is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeIndexError {
    #[error("type table holds {0} entries; at most {max} are allowed", max = MAX_TYPES)]
    TooManyTypes(usize),

    #[error("duplicate type id {0}")]
    DuplicateId(PokemonTypeId),

    #[error("type {0} has an empty name")]
    EmptyName(PokemonTypeId),

    #[error("type {id} color must match #RRGGBB, got '{color}'")]
    InvalidColor { id: PokemonTypeId, color: String },
}

#[derive(Clone, Debug)]
/// Type table keyed by id.
pub struct TypeIndex {
    by_id: BTreeMap<PokemonTypeId, PokemonType>,
}

impl TypeIndex {
    /// Validate `types` and build the index.
    pub fn new(types: Vec<PokemonType>) -> Result<Self, TypeIndexError> {
        if types.len() > MAX_TYPES {
            return Err(TypeIndexError::TooManyTypes(types.len()));
        }

        let mut by_id = BTreeMap::new();
        for ty in types {
            if ty.name.trim().is_empty() {
                return Err(TypeIndexError::EmptyName(ty.id));
            }
            if !is_hex_color(&ty.color) {
                return Err(TypeIndexError::InvalidColor {
                    id: ty.id,
                    color: ty.color,
                });
            }
            if by_id.contains_key(&ty.id) {
                return Err(TypeIndexError::DuplicateId(ty.id));
            }
            by_id.insert(ty.id, ty);
        }
        Ok(Self { by_id })
    }

    /// Index over the built-in table.
    pub fn builtin() -> Self {
        let by_id = default_types().into_iter().map(|ty| (ty.id, ty)).collect();
        Self { by_id }
    }

    /// Resolve a type by id.
    pub fn get(&self, id: PokemonTypeId) -> Option<&PokemonType> {
        self.by_id.get(&id)
    }

    /// Types in id order.
    pub fn iter(&self) -> impl Iterator<Item = &PokemonType> {
        self.by_id.values()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl Default for TypeIndex {
    fn default() -> Self {
        Self::builtin()
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
