//! Integration tests for crewboard
//!
//! These exercise the CLI surface that works without a backend: argument
//! parsing, configuration, the background picker, and the offline failure
//! paths. Anything needing a live session is covered by the unit tests of
//! the api and board modules.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a crewboard Command with an isolated config home.
fn crewboard(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("crewboard");
    // Keep the user-level config and session file inside the test sandbox
    cmd.env("XDG_CONFIG_HOME", home.path());
    cmd.env_remove("CREWBOARD_BASE_URL");
    cmd.env_remove("CREWBOARD_IMAGES_DIR");
    cmd
}

fn sandbox() -> TempDir {
    TempDir::new().unwrap()
}

// =============================================================================
// Basic CLI Tests
// =============================================================================

mod cli_basics {
    use super::*;

    #[test]
    fn test_crewboard_help() {
        let home = sandbox();
        crewboard(&home).arg("--help").assert().success();
    }

    #[test]
    fn test_crewboard_version() {
        let home = sandbox();
        crewboard(&home).arg("--version").assert().success();
    }

    #[test]
    fn test_unknown_subcommand_fails() {
        let home = sandbox();
        crewboard(&home).arg("frobnicate").assert().failure();
    }

    #[test]
    fn test_board_requires_project_argument() {
        let home = sandbox();
        crewboard(&home).arg("board").assert().failure();
    }

    #[test]
    fn test_board_assignee_conflicts_with_unassigned() {
        let home = sandbox();
        crewboard(&home)
            .args(["board", "1", "--assignee", "2", "--unassigned"])
            .assert()
            .failure();
    }
}

// =============================================================================
// Configuration Tests
// =============================================================================

mod config {
    use super::*;

    #[test]
    fn test_config_init_writes_default_file() {
        let home = sandbox();
        let dir = sandbox();

        crewboard(&home)
            .current_dir(dir.path())
            .args(["config", "init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("crewboard.toml"));

        let contents = fs::read_to_string(dir.path().join("crewboard.toml")).unwrap();
        assert!(contents.contains("base_url"));
    }

    #[test]
    fn test_config_init_does_not_overwrite() {
        let home = sandbox();
        let dir = sandbox();
        fs::write(dir.path().join("crewboard.toml"), "base_url = \"http://x:1\"\n").unwrap();

        crewboard(&home)
            .current_dir(dir.path())
            .args(["config", "init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("already exists"));

        let contents = fs::read_to_string(dir.path().join("crewboard.toml")).unwrap();
        assert_eq!(contents, "base_url = \"http://x:1\"\n");
    }

    #[test]
    fn test_config_show_reports_resolved_base_url() {
        let home = sandbox();
        let dir = sandbox();
        fs::write(
            dir.path().join("crewboard.toml"),
            "base_url = \"http://team.internal:5000\"\n",
        )
        .unwrap();

        crewboard(&home)
            .current_dir(dir.path())
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("http://team.internal:5000"));
    }

    #[test]
    fn test_base_url_flag_wins_over_file() {
        let home = sandbox();
        let dir = sandbox();
        fs::write(dir.path().join("crewboard.toml"), "base_url = \"http://file:1\"\n").unwrap();

        crewboard(&home)
            .current_dir(dir.path())
            .args(["--base-url", "http://flag:2", "config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("http://flag:2"));
    }
}

// =============================================================================
// Offline Failure Paths
// =============================================================================

mod offline {
    use super::*;

    /// A port nothing listens on; connections are refused immediately.
    const DEAD_BACKEND: &str = "http://127.0.0.1:9";

    #[test]
    fn test_board_reports_unreachable_backend() {
        let home = sandbox();
        crewboard(&home)
            .args(["--base-url", DEAD_BACKEND, "board", "1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Could not reach the backend"));
    }

    #[test]
    fn test_move_rejects_unknown_status_before_any_request() {
        let home = sandbox();
        crewboard(&home)
            .args(["--base-url", DEAD_BACKEND, "move", "1", "2", "sideways"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown status 'sideways'"));
    }

    #[test]
    fn test_board_rejects_unknown_priority_before_any_request() {
        let home = sandbox();
        crewboard(&home)
            .args(["--base-url", DEAD_BACKEND, "board", "1", "--priority", "extreme"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown priority 'extreme'"));
    }

    #[test]
    fn test_whoami_without_session_says_so() {
        let home = sandbox();
        crewboard(&home)
            .arg("whoami")
            .assert()
            .success()
            .stdout(predicate::str::contains("Not logged in"));
    }

    #[test]
    fn test_logout_without_session_says_so() {
        let home = sandbox();
        crewboard(&home)
            .arg("logout")
            .assert()
            .success()
            .stdout(predicate::str::contains("Not logged in"));
    }
}

// =============================================================================
// Background Picker Tests
// =============================================================================

mod background {
    use super::*;

    #[test]
    fn test_background_list_without_directory() {
        let home = sandbox();
        crewboard(&home)
            .args(["background", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No images directory configured"));
    }

    #[test]
    fn test_background_list_shows_images() {
        let home = sandbox();
        let images = sandbox();
        fs::write(images.path().join("team.png"), b"x").unwrap();
        fs::write(images.path().join("notes.txt"), b"x").unwrap();

        crewboard(&home)
            .env("CREWBOARD_IMAGES_DIR", images.path())
            .args(["background", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("team.png"))
            .stdout(predicate::str::contains("image/png"))
            .stdout(predicate::str::contains("notes.txt").not());
    }

    #[test]
    fn test_background_pick_falls_back_without_images() {
        let home = sandbox();
        let images = sandbox();

        crewboard(&home)
            .env("CREWBOARD_IMAGES_DIR", images.path())
            .args(["background", "pick"])
            .assert()
            .success()
            .stdout(predicate::str::contains("images.unsplash.com"));
    }

    #[test]
    fn test_background_pick_prefers_local_image() {
        let home = sandbox();
        let images = sandbox();
        fs::write(images.path().join("team.png"), b"x").unwrap();

        crewboard(&home)
            .env("CREWBOARD_IMAGES_DIR", images.path())
            .args(["background", "pick"])
            .assert()
            .success()
            .stdout(predicate::str::contains("team.png"));
    }
}
