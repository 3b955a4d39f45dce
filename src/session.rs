//! Per-run session state for the Pokedex CLI
//!
//! Everything mutable that a command can touch lives here and is threaded
//! into each handler by `&mut` reference; there are no globals, so tests
//! can construct as many independent sessions as they need.

use std::collections::HashMap;

use chrono::{DateTime, Local};

use crate::api::{PokeApiClient, Pokemon};

/// A Pokemon the user has caught, and when
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    /// The caught Pokemon's full data
    pub pokemon: Pokemon,
    /// When the catch happened
    pub caught_at: DateTime<Local>,
}

/// Mutable state for one interactive run
pub struct Session {
    /// URL of the next location-area page; `None` once the listing ends
    pub next: Option<String>,
    /// URL of the previous location-area page; `None` on the first page
    pub previous: Option<String>,
    /// Pokemon caught this run, keyed by name
    pub pokedex: HashMap<String, CaughtPokemon>,
    /// Set by the `exit` command; the REPL loop breaks on it
    pub should_quit: bool,
    /// API client shared by all handlers
    pub client: PokeApiClient,
}

impl Session {
    /// Creates a session positioned at the first location-area page
    pub fn new(client: PokeApiClient) -> Self {
        Self {
            next: Some(client.first_location_page()),
            previous: None,
            pokedex: HashMap::new(),
            should_quit: false,
            client,
        }
    }

    /// Records a caught Pokemon, stamped with the current local time
    ///
    /// Catching the same Pokemon again replaces the earlier record.
    pub fn record_catch(&mut self, pokemon: Pokemon) {
        self.pokedex.insert(
            pokemon.name.clone(),
            CaughtPokemon {
                pokemon,
                caught_at: Local::now(),
            },
        );
    }
}
