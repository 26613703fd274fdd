//! Cosmetic background selection: scan a local image directory, pick one at
//! random, fall back to a stock remote image when the directory is empty or
//! unset.

use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use walkdir::WalkDir;

/// Stock image used when no local image is available.
pub const DEFAULT_BACKGROUND_URL: &str =
    "https://images.unsplash.com/photo-1552664730-d307ca884978?w=1200&q=80";

/// File extensions that count as background candidates.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "svg"];

/// What the picker settled on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundChoice {
    Local(PathBuf),
    Fallback(&'static str),
}

impl BackgroundChoice {
    /// A string a previewer can open.
    pub fn location(&self) -> String {
        match self {
            Self::Local(path) => path.display().to_string(),
            Self::Fallback(url) => (*url).to_string(),
        }
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Image files directly inside `dir`, sorted by name. Subdirectories are not
/// descended into; the original picker scanned a flat directory.
pub fn scan_images(dir: &Path) -> Vec<PathBuf> {
    let mut images: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_image(path))
        .collect();
    images.sort();
    images
}

/// Pick a random candidate.
pub fn pick_random(images: &[PathBuf]) -> Option<&PathBuf> {
    images.choose(&mut rand::thread_rng())
}

/// Resolve a background: a random local image when the directory yields any,
/// otherwise the stock fallback.
pub fn choose_background(images_dir: Option<&Path>) -> BackgroundChoice {
    let Some(dir) = images_dir else {
        return BackgroundChoice::Fallback(DEFAULT_BACKGROUND_URL);
    };
    let images = scan_images(dir);
    match pick_random(&images) {
        Some(path) => BackgroundChoice::Local(path.clone()),
        None => BackgroundChoice::Fallback(DEFAULT_BACKGROUND_URL),
    }
}

/// Display label for an image's media type, e.g. `image/png`.
pub fn mime_label(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scan_filters_by_extension() {
        let dir = tempdir().unwrap();
        for name in ["a.png", "b.JPG", "c.jpeg", "d.gif", "e.svg", "notes.txt", "f.webp"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        let images = scan_images(dir.path());
        let names: Vec<String> = images
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.png", "b.JPG", "c.jpeg", "d.gif", "e.svg"]);
    }

    #[test]
    fn test_scan_ignores_subdirectories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/deep.png"), b"x").unwrap();
        fs::write(dir.path().join("top.png"), b"x").unwrap();
        let images = scan_images(dir.path());
        assert_eq!(images.len(), 1);
        assert!(images[0].ends_with("top.png"));
    }

    #[test]
    fn test_scan_missing_dir_is_empty() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(scan_images(&missing).is_empty());
    }

    #[test]
    fn test_pick_random_from_empty_is_none() {
        assert!(pick_random(&[]).is_none());
    }

    #[test]
    fn test_pick_random_returns_a_candidate() {
        let images = vec![PathBuf::from("a.png"), PathBuf::from("b.png")];
        let picked = pick_random(&images).unwrap();
        assert!(images.contains(picked));
    }

    #[test]
    fn test_choose_background_falls_back_without_dir() {
        assert_eq!(
            choose_background(None),
            BackgroundChoice::Fallback(DEFAULT_BACKGROUND_URL)
        );
    }

    #[test]
    fn test_choose_background_falls_back_on_empty_dir() {
        let dir = tempdir().unwrap();
        assert_eq!(
            choose_background(Some(dir.path())),
            BackgroundChoice::Fallback(DEFAULT_BACKGROUND_URL)
        );
    }

    #[test]
    fn test_choose_background_prefers_local() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("team.png"), b"x").unwrap();
        match choose_background(Some(dir.path())) {
            BackgroundChoice::Local(path) => assert!(path.ends_with("team.png")),
            other => panic!("expected a local pick, got {:?}", other),
        }
    }

    #[test]
    fn test_mime_label() {
        assert_eq!(mime_label(Path::new("bg.png")), "image/png");
        assert_eq!(mime_label(Path::new("bg.svg")), "image/svg+xml");
        assert_eq!(mime_label(Path::new("bg.unknown")), "application/octet-stream");
    }
}
