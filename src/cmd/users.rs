//! User directory and service probe commands.

use anyhow::Result;
use console::style;

use crewboard::api::ApiClient;
use crewboard::config::Config;
use crewboard::ui::icons::{CHECK, MEMBERS};
use crewboard::ui::spinner::with_spinner;

pub async fn cmd_users(config: &Config) -> Result<()> {
    let client = ApiClient::new(config)?;
    let users = with_spinner("Fetching users...", client.list_users()).await?;

    println!();
    println!("{} Registered users", MEMBERS);
    println!();
    if users.is_empty() {
        println!("  (none)");
        return Ok(());
    }
    for user in &users {
        println!("  {:>4}  {}  <{}>", user.id, style(&user.name).bold(), user.email);
    }
    println!();
    println!("{} user(s)", users.len());
    Ok(())
}

pub async fn cmd_health(config: &Config) -> Result<()> {
    let client = ApiClient::new(config)?;

    let banner = with_spinner("Contacting backend...", client.welcome()).await?;
    println!("{}", banner);

    let health = with_spinner("Probing health...", client.health()).await?;
    println!(
        "{}{} is {}",
        CHECK,
        style(&health.service).bold(),
        style(&health.status).green()
    );
    Ok(())
}
