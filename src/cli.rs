//! Command-line interface parsing for the Pokedex CLI
//!
//! Startup flags only; the interactive commands live in `commands`. The
//! cache TTL flag enforces the positive-interval constraint here, before
//! the cache is ever constructed.

use std::time::Duration;

use clap::Parser;

/// Default reap interval for the response cache, in seconds
const DEFAULT_CACHE_TTL_SECS: u64 = 60;

/// Pokedex CLI - browse location areas and catch Pokemon from your terminal
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "An interactive Pokedex over the PokeAPI")]
#[command(version)]
pub struct Cli {
    /// Seconds a cached API response is retained before the reaper removes it
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = DEFAULT_CACHE_TTL_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub cache_ttl: u64,

    /// Base URL of the PokeAPI instance to query
    ///
    /// Defaults to the public API; point it at a mirror to stay off the
    /// internet.
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,
}

impl Cli {
    /// The cache reap interval as a duration
    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}
