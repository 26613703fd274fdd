//! Interactive announcement board — `crewboard announce`.
//!
//! Announcements only live inside this session; quitting discards them.

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Select};

use crewboard::announcements::AnnouncementBoard;
use crewboard::api::ApiClient;
use crewboard::config::Config;
use crewboard::ui::icons::MEGAPHONE;
use crewboard::ui::spinner::with_spinner;

pub async fn cmd_announce(config: &Config) -> Result<()> {
    // Use the logged-in name as author when there is a session; the board
    // itself never talks to the backend.
    let author = resolve_author(config).await;

    let mut board = AnnouncementBoard::new();
    println!(
        "{} Announcement board (session-only; gone when you quit)",
        MEGAPHONE
    );

    loop {
        let actions = ["Post an announcement", "List announcements", "Dismiss one", "Quit"];
        let picked = Select::new()
            .with_prompt("Action")
            .items(&actions)
            .default(0)
            .interact()
            .context("Failed to read action")?;

        match picked {
            0 => {
                let title: String = Input::new()
                    .with_prompt("Title")
                    .interact_text()
                    .context("Failed to read title")?;
                let body: String = Input::new()
                    .with_prompt("Body")
                    .allow_empty(true)
                    .interact_text()
                    .context("Failed to read body")?;
                match board.post(&title, &body, &author) {
                    Ok(posted) => println!("Posted '{}'", posted.title),
                    Err(err) => println!("{}", style(err).red()),
                }
            }
            1 => {
                if board.is_empty() {
                    println!("No announcements yet.");
                    continue;
                }
                println!();
                for announcement in board.list() {
                    println!(
                        "  {}  {} by {}",
                        style(announcement.posted_at.format("%H:%M")).dim(),
                        style(&announcement.title).bold(),
                        announcement.author
                    );
                    if !announcement.body.is_empty() {
                        println!("        {}", announcement.body);
                    }
                }
                println!();
            }
            2 => {
                if board.is_empty() {
                    println!("Nothing to dismiss.");
                    continue;
                }
                let titles: Vec<String> =
                    board.list().iter().map(|a| a.title.clone()).collect();
                let which = Select::new()
                    .with_prompt("Dismiss which?")
                    .items(&titles)
                    .default(0)
                    .interact()
                    .context("Failed to read selection")?;
                let id = board.list()[which].id;
                board.dismiss(id);
                println!("Dismissed.");
            }
            _ => break,
        }
    }

    Ok(())
}

pub(crate) async fn resolve_author(config: &Config) -> String {
    let Ok(client) = ApiClient::new(config) else {
        return "you".to_string();
    };
    if !client.has_saved_session() {
        return "you".to_string();
    }
    match with_spinner("Checking session...", client.me()).await {
        Ok(Some(user)) => user.name,
        _ => "you".to_string(),
    }
}
