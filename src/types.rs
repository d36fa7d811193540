use serde::Deserialize;

/// A single type tag on a record (e.g. "grass", "poison"). Order matters
/// for display.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeTag {
    pub name: String,
}

/// Lightweight per-record view shown in the catalog list. Built fresh from
/// each page; a later fetch of the same name supersedes, never merges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonSummary {
    pub name: String,
    pub types: Vec<TypeTag>,
    /// Sprite resource URI; the API legitimately omits sprites for some
    /// records, so this is not an error case.
    pub sprite: Option<String>,
}

/// Full per-record view shown in the detail panel. Only one of these is
/// materialized at a time; each detail load overwrites it in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonDetail {
    pub name: String,
    pub national_id: u32,
    pub attack: u32,
    pub defense: u32,
    pub hp: u32,
    pub sp_atk: u32,
    pub sp_def: u32,
    pub speed: u32,
    pub weight: u32,
    pub move_count: usize,
    /// Canonical sprite resource URI (the last entry the server lists).
    pub sprite: Option<String>,
}
