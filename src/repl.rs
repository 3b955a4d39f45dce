//! Interactive read-eval-print loop
//!
//! Reads lines from stdin, resolves the first word against the command
//! registry, and runs the matching handler with the rest of the line as
//! its argument. Handler errors are printed and the loop continues; only
//! the `exit` command or end of input (Ctrl-D) ends the session.

use std::collections::HashMap;
use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::{self, Command};
use crate::session::Session;

/// Prompt printed before each read
const PROMPT: &str = "pokedex > ";

/// Runs the REPL until `exit` or end of input
pub async fn run(session: &mut Session) -> std::io::Result<()> {
    let registry = commands::registry();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{PROMPT}");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            // End of input (Ctrl-D)
            println!();
            break;
        };

        dispatch(&registry, session, &line).await;

        if session.should_quit {
            break;
        }
    }

    Ok(())
}

/// Resolves and runs one input line against the registry
async fn dispatch(
    registry: &HashMap<&'static str, &'static Command>,
    session: &mut Session,
    line: &str,
) {
    let Some((word, arg)) = parse_line(line) else {
        return;
    };

    match registry.get(word) {
        Some(command) => {
            if let Err(err) = command.run(session, arg).await {
                println!("Error: {}", err);
            }
        }
        None => {
            println!("Invalid command. Type \"help\" for a list of commands");
        }
    }
}

/// Splits an input line into its command word and argument
///
/// The argument is everything after the first whitespace run, trimmed;
/// commands taking a single name treat it verbatim. Returns `None` for
/// blank lines so the loop can silently re-prompt.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    match line.split_once(char::is_whitespace) {
        Some((word, rest)) => Some((word, rest.trim())),
        None => Some((line, "")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PokeApiClient;
    use crate::cache::TimedCache;
    use std::time::Duration;

    fn test_session() -> Session {
        let cache = TimedCache::new(Duration::from_secs(600));
        Session::new(PokeApiClient::new(cache))
    }

    #[test]
    fn test_parse_line_bare_command() {
        assert_eq!(parse_line("map"), Some(("map", "")));
    }

    #[test]
    fn test_parse_line_command_with_argument() {
        assert_eq!(
            parse_line("explore canalave-city-area"),
            Some(("explore", "canalave-city-area"))
        );
    }

    #[test]
    fn test_parse_line_trims_surrounding_whitespace() {
        assert_eq!(parse_line("  catch   pikachu  "), Some(("catch", "pikachu")));
    }

    #[test]
    fn test_parse_line_blank_input() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("\t"), None);
    }

    #[tokio::test]
    async fn test_dispatch_exit_sets_quit_flag() {
        let registry = commands::registry();
        let mut session = test_session();

        dispatch(&registry, &mut session, "exit").await;

        assert!(session.should_quit);
    }

    #[tokio::test]
    async fn test_dispatch_unknown_command_leaves_session_running() {
        let registry = commands::registry();
        let mut session = test_session();

        dispatch(&registry, &mut session, "blorp").await;

        assert!(!session.should_quit);
    }

    #[tokio::test]
    async fn test_dispatch_handler_error_leaves_session_running() {
        let registry = commands::registry();
        let mut session = test_session();

        // mapb on the first page errors; the loop must keep going
        dispatch(&registry, &mut session, "mapb").await;

        assert!(!session.should_quit);
    }
}
