//! Authentication commands — login, register, logout, whoami.

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Password};

use crewboard::api::ApiClient;
use crewboard::config::Config;
use crewboard::models::Credentials;
use crewboard::ui::icons::{CHECK, SPARKLE};
use crewboard::ui::spinner::with_spinner;

pub async fn cmd_login(config: &Config, email: Option<String>) -> Result<()> {
    let email = match email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("Email")
            .interact_text()
            .context("Failed to read email")?,
    };
    let password = Password::new()
        .with_prompt("Password")
        .interact()
        .context("Failed to read password")?;

    let credentials = Credentials::login(email, password);
    credentials.validate()?;

    let client = ApiClient::new(config)?;
    let user = with_spinner("Logging in...", client.login(&credentials)).await?;
    client.persist_session()?;

    println!("{} Logged in as {} <{}>", CHECK, style(&user.name).bold(), user.email);
    Ok(())
}

pub async fn cmd_register(config: &Config) -> Result<()> {
    let name: String = Input::new()
        .with_prompt("Name")
        .interact_text()
        .context("Failed to read name")?;
    let email: String = Input::new()
        .with_prompt("Email")
        .interact_text()
        .context("Failed to read email")?;
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .context("Failed to read password")?;

    let credentials = Credentials::register(name, email, password);
    credentials.validate()?;

    let client = ApiClient::new(config)?;
    let user = with_spinner("Creating account...", client.register(&credentials)).await?;
    client.persist_session()?;

    println!(
        "{} Welcome aboard, {}! You are now logged in.",
        SPARKLE,
        style(&user.name).bold()
    );
    Ok(())
}

pub async fn cmd_logout(config: &Config) -> Result<()> {
    let client = ApiClient::new(config)?;
    if !client.has_saved_session() {
        println!("Not logged in.");
        return Ok(());
    }

    // Best effort on the server side; the local session goes either way
    if let Err(err) = with_spinner("Logging out...", client.logout()).await {
        super::report_api_error(&err);
    }
    client.forget_session()?;
    println!("{} Logged out.", CHECK);
    Ok(())
}

pub async fn cmd_whoami(config: &Config) -> Result<()> {
    let client = ApiClient::new(config)?;
    if !client.has_saved_session() {
        println!("Not logged in. Run `crewboard login` first.");
        return Ok(());
    }

    match with_spinner("Checking session...", client.me()).await? {
        Some(user) => {
            println!("{} <{}>  (id {})", style(&user.name).bold(), user.email, user.id);
        }
        None => {
            // Stale session file: the cookie expired server-side
            client.forget_session()?;
            println!("Session expired. Run `crewboard login` again.");
        }
    }
    Ok(())
}
