//! Command registry and dispatch for the interactive prompt
//!
//! Every command shares a uniform calling contract: it receives the mutable
//! session and the remainder of the input line as its argument, and returns
//! a [`CommandError`] the REPL prints without terminating. The registry is
//! a lookup table over [`COMMANDS`], built once at startup.

mod catch;
mod explore;
mod help;
mod inspect;
mod map;

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use crate::api::ApiError;
use crate::session::Session;

/// Errors surfaced to the user by command handlers
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command needs an argument the user did not provide
    #[error("no {0} specified")]
    MissingArgument(&'static str),

    /// `mapb` with no previous page to go back to
    #[error("already at the beginning of the map")]
    StartOfMap,

    /// `map` after the listing has been exhausted
    #[error("already at the end of the map")]
    EndOfMap,

    /// The API has no resource with the given name (HTTP 404)
    #[error("unknown {kind} \"{name}\"")]
    UnknownName {
        /// What was looked up, e.g. "pokemon"
        kind: &'static str,
        /// The name the user typed
        name: String,
    },

    /// Any other API failure
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Future type returned by every command callback
type CommandFuture<'a> = Pin<Box<dyn Future<Output = Result<(), CommandError>> + Send + 'a>>;

/// Uniform signature all command callbacks share
pub type Callback = for<'a> fn(&'a mut Session, &'a str) -> CommandFuture<'a>;

/// One entry in the command registry
pub struct Command {
    /// Name as typed at the prompt, plus argument placeholders for help
    pub name: &'static str,
    /// One-line description shown by `help`
    pub description: &'static str,
    callback: Callback,
}

impl Command {
    /// The word the user types to invoke this command
    ///
    /// Strips the argument placeholder from names like "explore AREA-NAME".
    pub fn keyword(&self) -> &'static str {
        self.name.split_whitespace().next().unwrap_or(self.name)
    }

    /// Runs the command against the given session and argument
    pub async fn run(&self, session: &mut Session, arg: &str) -> Result<(), CommandError> {
        (self.callback)(session, arg).await
    }
}

/// Every command, in the order `help` lists them
pub static COMMANDS: &[Command] = &[
    Command {
        name: "help",
        description: "Displays a help message",
        callback: help_callback,
    },
    Command {
        name: "exit",
        description: "Exit the Pokedex",
        callback: exit_callback,
    },
    Command {
        name: "map",
        description: "Displays the names of the next 20 location areas in the Pokemon world.",
        callback: map_callback,
    },
    Command {
        name: "mapb",
        description: "Displays the names of the previous 20 location areas in the Pokemon world.",
        callback: mapb_callback,
    },
    Command {
        name: "explore AREA-NAME",
        description: "Displays the names of all pokemon in the given AREA-NAME argument.",
        callback: explore_callback,
    },
    Command {
        name: "catch POKEMON-NAME",
        description: "Attempt to catch the pokemon in the POKEMON-NAME argument.",
        callback: catch_callback,
    },
    Command {
        name: "inspect POKEMON-NAME",
        description: "View information of the pokemon in the POKEMON-NAME argument.",
        callback: inspect_callback,
    },
    Command {
        name: "pokedex",
        description: "List all the pokemon you've caught.",
        callback: pokedex_callback,
    },
];

/// Builds the keyword lookup table over [`COMMANDS`]
pub fn registry() -> HashMap<&'static str, &'static Command> {
    COMMANDS
        .iter()
        .map(|command| (command.keyword(), command))
        .collect()
}

// fn-pointer adapters boxing each handler's future; named fns coerce to
// the higher-ranked `Callback` type where closures cannot

fn help_callback<'a>(session: &'a mut Session, arg: &'a str) -> CommandFuture<'a> {
    Box::pin(help::help(session, arg))
}

fn exit_callback<'a>(session: &'a mut Session, arg: &'a str) -> CommandFuture<'a> {
    Box::pin(help::exit(session, arg))
}

fn map_callback<'a>(session: &'a mut Session, arg: &'a str) -> CommandFuture<'a> {
    Box::pin(map::map(session, arg))
}

fn mapb_callback<'a>(session: &'a mut Session, arg: &'a str) -> CommandFuture<'a> {
    Box::pin(map::mapb(session, arg))
}

fn explore_callback<'a>(session: &'a mut Session, arg: &'a str) -> CommandFuture<'a> {
    Box::pin(explore::explore(session, arg))
}

fn catch_callback<'a>(session: &'a mut Session, arg: &'a str) -> CommandFuture<'a> {
    Box::pin(catch::catch(session, arg))
}

fn inspect_callback<'a>(session: &'a mut Session, arg: &'a str) -> CommandFuture<'a> {
    Box::pin(inspect::inspect(session, arg))
}

fn pokedex_callback<'a>(session: &'a mut Session, arg: &'a str) -> CommandFuture<'a> {
    Box::pin(inspect::pokedex(session, arg))
}
