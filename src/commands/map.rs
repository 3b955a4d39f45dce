//! The `map` and `mapb` commands — paging through location areas

use crate::session::Session;

use super::CommandError;

/// Displays the next page of location areas
pub async fn map(session: &mut Session, _arg: &str) -> Result<(), CommandError> {
    let url = session.next.clone().ok_or(CommandError::EndOfMap)?;
    show_page(session, &url).await
}

/// Displays the previous page of location areas
pub async fn mapb(session: &mut Session, _arg: &str) -> Result<(), CommandError> {
    let url = session.previous.clone().ok_or(CommandError::StartOfMap)?;
    show_page(session, &url).await
}

/// Fetches one listing page, prints its area names, and advances the cursors
///
/// Both cursors come from the response itself, so `map` and `mapb` stay
/// consistent no matter which direction the user last moved.
async fn show_page(session: &mut Session, url: &str) -> Result<(), CommandError> {
    let page = session.client.location_page(url).await?;

    println!();
    for area in &page.results {
        println!("{}", area.name);
    }
    println!();

    session.next = page.next;
    session.previous = page.previous;

    Ok(())
}
