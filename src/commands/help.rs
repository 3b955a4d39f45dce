//! The `help` and `exit` commands

use crate::session::Session;

use super::{CommandError, COMMANDS};

/// Prints the welcome banner and every command's name and description
pub async fn help(_session: &mut Session, _arg: &str) -> Result<(), CommandError> {
    println!("\nWelcome to the Pokedex!\nUsage:");
    println!();

    for command in COMMANDS {
        println!("{}: {}", command.name, command.description);
    }

    println!();

    Ok(())
}

/// Prints the goodbye line and asks the REPL loop to stop
///
/// The loop observes `should_quit` and breaks, so destructors still run;
/// nothing calls `process::exit` from inside a handler.
pub async fn exit(session: &mut Session, _arg: &str) -> Result<(), CommandError> {
    println!("Closing the Pokedex... Goodbye!");
    session.should_quit = true;
    Ok(())
}
