//! Pokedex CLI - catch Pokemon from your terminal
//!
//! An interactive REPL over the PokeAPI: page through location areas,
//! explore them, throw Pokeballs, and inspect what you catch. Responses
//! are cached in memory so repeated lookups stay off the network.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pokedex::api::PokeApiClient;
use pokedex::cache::TimedCache;
use pokedex::cli::Cli;
use pokedex::repl;
use pokedex::session::Session;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so they never mix into the prompt output;
    // enable with e.g. RUST_LOG=pokedex=debug
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cache = TimedCache::new(cli.cache_interval());

    let mut client = PokeApiClient::new(cache.clone());
    if let Some(base) = &cli.api_base {
        client = client.with_base_url(base);
    }

    let mut session = Session::new(client);
    repl::run(&mut session).await?;

    cache.stop();

    Ok(())
}
