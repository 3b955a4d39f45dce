//! The `catch` command — the capture roll

use rand::Rng;

use crate::api::ApiError;
use crate::session::Session;

use super::CommandError;

/// Base experience points per unit of capture difficulty
const EXPERIENCE_PER_DIFFICULTY: u32 = 75;

/// Attempts to catch the named Pokemon
///
/// The roll is uniform over `0..=difficulty` and only an exact 1 catches,
/// so stronger Pokemon (higher base experience) are harder to land.
pub async fn catch(session: &mut Session, arg: &str) -> Result<(), CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument("pokemon"));
    }

    let pokemon = match session.client.pokemon(arg).await {
        Err(ApiError::NotFound { .. }) => {
            return Err(CommandError::UnknownName {
                kind: "pokemon",
                name: arg.to_string(),
            })
        }
        other => other?,
    };

    println!();
    println!("Throwing a Pokeball at {}...", pokemon.name);

    let difficulty = capture_difficulty(pokemon.base_experience.unwrap_or(0));
    let roll = rand::rng().random_range(0..=difficulty);
    tracing::debug!(name = %pokemon.name, difficulty, roll, "capture roll");

    if roll == 1 {
        println!("{} was caught!", pokemon.name);
        println!("You may now inspect it with the inspect command.");
        session.record_catch(pokemon);
    } else {
        println!("{} escaped!", pokemon.name);
    }

    println!();

    Ok(())
}

/// Capture difficulty for a given base experience
///
/// One difficulty unit per 75 base experience, clamped to a minimum of 1.
/// The clamp keeps low-experience Pokemon (and forms the API reports no
/// base experience for) at even odds instead of a guaranteed catch.
fn capture_difficulty(base_experience: u32) -> u32 {
    (base_experience / EXPERIENCE_PER_DIFFICULTY).max(1)
}
