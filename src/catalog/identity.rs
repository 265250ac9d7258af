use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a catalog record (a UUID v4 rendered as text).
///
/// Ids are issued by the store when a record is created; callers never mint
/// them. The wrapper stays string-backed so records persisted by older
/// builds, or ids typed on the command line, round-trip untouched.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PokemonId(pub String);

impl PokemonId {
    /// Issue a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PokemonId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PokemonId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for PokemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Numeric key of a static Pokémon type.
///
/// Records reference types by this id; a reference is not required to
/// resolve against the loaded type table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PokemonTypeId(pub u32);

impl fmt::Display for PokemonTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct_uuids() {
        let first = PokemonId::generate();
        let second = PokemonId::generate();
        assert_ne!(first, second);
        let parsed = Uuid::parse_str(first.as_str()).expect("generated id is a uuid");
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn ids_serialize_as_bare_values() {
        let id = PokemonId::from("5566710e-29c7-43cc-ba04-46415a63e1ef");
        let serialized = serde_json::to_string(&id).unwrap();
        assert_eq!(serialized, "\"5566710e-29c7-43cc-ba04-46415a63e1ef\"");
        let parsed: PokemonId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, id);

        let type_id = PokemonTypeId(7);
        assert_eq!(serde_json::to_string(&type_id).unwrap(), "7");
        let parsed_type: PokemonTypeId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed_type, type_id);
    }

    #[test]
    fn non_uuid_ids_are_preserved() {
        let parsed: PokemonId = serde_json::from_str("\"legacy-id\"").unwrap();
        assert_eq!(parsed.to_string(), "legacy-id");
    }
}
