//! The `explore` command — listing the Pokemon in a location area

use crate::api::ApiError;
use crate::session::Session;

use super::CommandError;

/// Displays every Pokemon that can be encountered in the named area
pub async fn explore(session: &mut Session, arg: &str) -> Result<(), CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument("area"));
    }

    let area = match session.client.area_encounters(arg).await {
        Err(ApiError::NotFound { .. }) => {
            return Err(CommandError::UnknownName {
                kind: "location area",
                name: arg.to_string(),
            })
        }
        other => other?,
    };

    println!();
    println!("Exploring {}...", arg);
    println!("Found Pokemon:");
    println!();

    for encounter in &area.pokemon_encounters {
        println!(" - {}", encounter.pokemon.name);
    }

    println!();

    Ok(())
}
