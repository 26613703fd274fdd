//! Configuration commands — `crewboard config`.

use anyhow::Result;
use console::style;

use crewboard::config::Config;
use crewboard::ui::icons::CHECK;

use super::super::ConfigCommands;

pub fn cmd_config(
    working_dir: &std::path::Path,
    config: &Config,
    command: Option<ConfigCommands>,
) -> Result<()> {
    match command {
        None | Some(ConfigCommands::Show) => {
            println!();
            println!("Resolved configuration");
            println!();
            println!("  base_url:     {}", style(&config.base_url).bold());
            match &config.images_dir {
                Some(dir) => println!("  images_dir:   {}", dir.display()),
                None => println!("  images_dir:   (not set)"),
            }
            println!("  session_file: {}", config.session_file.display());
            println!(
                "  session:      {}",
                if config.session_file.exists() {
                    "saved"
                } else {
                    "none"
                }
            );
        }
        Some(ConfigCommands::Init) => match Config::write_default_file(working_dir)? {
            Some(path) => println!("{} Wrote {}", CHECK, path.display()),
            None => println!("crewboard.toml already exists here; leaving it alone."),
        },
    }
    Ok(())
}
