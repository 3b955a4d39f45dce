//! The `inspect` and `pokedex` commands — viewing caught Pokemon

use crate::session::Session;

use super::CommandError;

/// Prints the details of a caught Pokemon
///
/// Asking about a Pokemon that was never caught is answered with a hint,
/// not an error.
pub async fn inspect(session: &mut Session, arg: &str) -> Result<(), CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument("pokemon"));
    }

    let Some(caught) = session.pokedex.get(arg) else {
        println!("you have not caught that pokemon");
        println!();
        return Ok(());
    };

    let pokemon = &caught.pokemon;

    println!();
    println!("Name: {}", pokemon.name);
    println!("Height: {}", pokemon.height);
    println!("Weight: {}", pokemon.weight);
    println!("Caught: {}", caught.caught_at.format("%Y-%m-%d %H:%M:%S"));
    println!("Stats:");

    for stat in &pokemon.stats {
        println!("   -{}: {}", stat.stat.name, stat.base_stat);
    }

    println!("Types:");

    for slot in &pokemon.types {
        println!("   - {}", slot.kind.name);
    }

    println!();

    Ok(())
}

/// Lists the names of every Pokemon caught this run
pub async fn pokedex(session: &mut Session, _arg: &str) -> Result<(), CommandError> {
    println!();

    if session.pokedex.is_empty() {
        println!("you have not caught any pokemon");
        println!();
        return Ok(());
    }

    println!("Your Pokedex:");

    for caught in session.pokedex.values() {
        println!("   - {}", caught.pokemon.name);
    }

    println!();

    Ok(())
}
