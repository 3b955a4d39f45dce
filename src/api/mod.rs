//! PokeAPI client and response models
//!
//! This module contains the HTTP client used to reach the PokeAPI and the
//! serde structs its JSON responses are decoded into. The client consults
//! the response cache before performing any real request.

pub mod client;

pub use client::{ApiError, PokeApiClient};

use serde::Deserialize;

/// A named API resource with its canonical URL
///
/// PokeAPI represents references between resources as `{name, url}` pairs;
/// this struct covers all of them.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    /// Resource name, e.g. "pikachu" or "canalave-city-area"
    pub name: String,
    /// Canonical URL of the full resource
    pub url: String,
}

/// One page of the paginated location-area listing
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas across all pages
    pub count: u32,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// The location areas on this page
    pub results: Vec<NamedResource>,
}

/// The Pokemon encounters within a single location area
#[derive(Debug, Clone, Deserialize)]
pub struct AreaEncounters {
    /// Every Pokemon that can be encountered in the area
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// One possible encounter in a location area
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    /// The Pokemon that can be encountered
    pub pokemon: NamedResource,
}

/// A Pokemon as returned by the `/pokemon/{name}` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    /// Pokemon name
    pub name: String,
    /// Base experience granted for defeating it; drives capture difficulty.
    /// The API omits this for some forms.
    pub base_experience: Option<u32>,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    /// Base stat values
    pub stats: Vec<PokemonStat>,
    /// Type slots, in slot order
    pub types: Vec<PokemonType>,
}

/// One base stat of a Pokemon
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    /// The stat's base value
    pub base_stat: u32,
    /// Which stat this is, e.g. "speed"
    pub stat: NamedResource,
}

/// One type slot of a Pokemon
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    /// The type in this slot, e.g. "electric"
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
