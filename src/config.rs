use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default backend base URL, matching the development server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Values read from a `crewboard.toml` file. All fields optional; anything
/// absent falls back to environment variables and then defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub images_dir: Option<PathBuf>,
}

/// Runtime configuration for the crewboard client.
///
/// Resolution order per value: CLI flag, environment variable, project
/// `crewboard.toml`, user config file, built-in default.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    /// Directory scanned for background images.
    pub images_dir: Option<PathBuf>,
    /// File holding the session cookie between invocations.
    pub session_file: PathBuf,
    pub verbose: bool,
}

impl Config {
    /// Resolve configuration for the current invocation.
    ///
    /// `base_url_flag` comes from `--base-url`; `working_dir` is where the
    /// project-level `crewboard.toml` is looked up.
    pub fn load(
        working_dir: &Path,
        base_url_flag: Option<String>,
        verbose: bool,
    ) -> Result<Self> {
        // .env next to the project config, if present
        let _ = dotenvy::from_path(working_dir.join(".env"));

        let file = Self::read_config_file(working_dir)?;

        let base_url = base_url_flag
            .or_else(|| std::env::var("CREWBOARD_BASE_URL").ok())
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        // A trailing slash would double up when joining endpoint paths
        let base_url = base_url.trim_end_matches('/').to_string();

        let images_dir = std::env::var("CREWBOARD_IMAGES_DIR")
            .ok()
            .map(PathBuf::from)
            .or(file.images_dir);

        Ok(Self {
            base_url,
            images_dir,
            session_file: Self::config_dir()?.join("session"),
            verbose,
        })
    }

    /// The user-level config directory, created on demand.
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Could not determine the user config directory")?
            .join("crewboard");
        std::fs::create_dir_all(&dir).context("Failed to create config directory")?;
        Ok(dir)
    }

    /// Look for `crewboard.toml` in the working directory first, then the
    /// user config directory.
    fn read_config_file(working_dir: &Path) -> Result<ConfigFile> {
        let project_file = working_dir.join("crewboard.toml");
        let path = if project_file.exists() {
            project_file
        } else {
            let user_file = Self::config_dir()?.join("config.toml");
            if !user_file.exists() {
                return Ok(ConfigFile::default());
            }
            user_file
        };

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Write a commented default `crewboard.toml` into `dir`.
    /// Returns the path, or None if the file already exists.
    pub fn write_default_file(dir: &Path) -> Result<Option<PathBuf>> {
        let path = dir.join("crewboard.toml");
        if path.exists() {
            return Ok(None);
        }
        let contents = format!(
            "# crewboard client configuration\n\
             \n\
             # Backend base URL\n\
             base_url = \"{}\"\n\
             \n\
             # Directory scanned for background images\n\
             # images_dir = \"~/Pictures/backgrounds\"\n",
            DEFAULT_BASE_URL
        );
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(Some(path))
    }
}
