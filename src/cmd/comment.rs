//! Interactive discussion thread — `crewboard comments`.
//!
//! Like the announcement board, the thread is demo state: nothing is
//! persisted and the session ends with the process.

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Select};

use crewboard::comments::CommentThread;
use crewboard::config::Config;
use crewboard::ui::icons::SPEECH;

pub async fn cmd_comments(config: &Config) -> Result<()> {
    let author = super::announce::resolve_author(config).await;

    let mut thread = CommentThread::new();
    println!("{} Discussion thread (session-only)", SPEECH);

    loop {
        let actions = ["Add a comment", "Reply to a comment", "Show the thread", "Quit"];
        let picked = Select::new()
            .with_prompt("Action")
            .items(&actions)
            .default(0)
            .interact()
            .context("Failed to read action")?;

        match picked {
            0 => {
                let body: String = Input::new()
                    .with_prompt("Comment")
                    .interact_text()
                    .context("Failed to read comment")?;
                match thread.add_comment(&author, &body) {
                    Ok(_) => println!("Added."),
                    Err(err) => println!("{}", style(err).red()),
                }
            }
            1 => {
                if thread.is_empty() {
                    println!("Nothing to reply to yet.");
                    continue;
                }
                let summaries: Vec<String> = thread
                    .comments()
                    .iter()
                    .map(|c| format!("{}: {}", c.author, crewboard::util::truncate(&c.body, 40)))
                    .collect();
                let which = Select::new()
                    .with_prompt("Reply to which comment?")
                    .items(&summaries)
                    .default(0)
                    .interact()
                    .context("Failed to read selection")?;
                let parent = thread.comments()[which].id;
                let body: String = Input::new()
                    .with_prompt("Reply")
                    .interact_text()
                    .context("Failed to read reply")?;
                match thread.add_reply(parent, &author, &body) {
                    Ok(Some(_)) => println!("Replied."),
                    Ok(None) => println!("That comment is gone."),
                    Err(err) => println!("{}", style(err).red()),
                }
            }
            2 => {
                if thread.is_empty() {
                    println!("No comments yet.");
                    continue;
                }
                println!();
                for comment in thread.comments() {
                    println!(
                        "  {}  {}",
                        style(&comment.author).bold(),
                        comment.body
                    );
                    for reply in &comment.replies {
                        println!(
                            "      ↳ {}  {}",
                            style(&reply.author).bold(),
                            reply.body
                        );
                    }
                }
                println!();
                println!("{} message(s) in the thread", thread.total_count());
            }
            _ => break,
        }
    }

    Ok(())
}
