//! Runtime configuration resolved from the environment.
//!
//! `POKEDEX_DATA_DIR` chooses where `FileStorage` keeps its values and
//! `POKEDEX_BASE_URL` is the prefix used when building image paths. Blank
//! values count as unset. Command-line flags override both.

use std::env;
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "POKEDEX_DATA_DIR";
pub const BASE_URL_ENV: &str = "POKEDEX_BASE_URL";

const DEFAULT_DATA_DIR: &str = ".pokedex";
const DEFAULT_BASE_URL: &str = "/";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve against an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = non_blank(lookup(DATA_DIR_ENV))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let base_url =
            non_blank(lookup(BASE_URL_ENV)).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { data_dir, base_url }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
