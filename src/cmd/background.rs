//! Background picker commands — `crewboard background`.

use anyhow::{Context, Result};
use console::style;

use crewboard::background::{BackgroundChoice, choose_background, mime_label, scan_images};
use crewboard::config::Config;
use crewboard::ui::icons::{CHECK, PICTURE};

use super::super::BackgroundCommands;

pub async fn cmd_background(config: &Config, command: Option<BackgroundCommands>) -> Result<()> {
    match command {
        None | Some(BackgroundCommands::List) => {
            let Some(dir) = &config.images_dir else {
                println!("No images directory configured.");
                println!("Set `images_dir` in crewboard.toml or CREWBOARD_IMAGES_DIR.");
                return Ok(());
            };
            let images = scan_images(dir);
            println!();
            println!("{} Backgrounds in {}", PICTURE, dir.display());
            println!();
            if images.is_empty() {
                println!("  (none — the stock fallback image will be used)");
                return Ok(());
            }
            for image in &images {
                let name = image
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                println!("  {:<32} {}", name, style(mime_label(image)).dim());
            }
            println!();
            println!("{} image(s)", images.len());
        }
        Some(BackgroundCommands::Pick) => {
            let choice = choose_background(config.images_dir.as_deref());
            match &choice {
                BackgroundChoice::Local(path) => {
                    println!("{} Background: {}", CHECK, path.display());
                }
                BackgroundChoice::Fallback(url) => {
                    println!("{} No local image found; using the stock one:", CHECK);
                    println!("  {}", url);
                }
            }
        }
        Some(BackgroundCommands::Preview) => {
            let choice = choose_background(config.images_dir.as_deref());
            let location = choice.location();
            println!("Opening {}", location);
            open::that(&location)
                .with_context(|| format!("Failed to open {}", location))?;
        }
    }

    Ok(())
}
