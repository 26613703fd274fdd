//! CLI command implementations.
//!
//! Each submodule owns one or more related `Commands` variants:
//!
//! | Module       | Commands handled                               |
//! |--------------|-------------------------------------------------|
//! | `auth`       | `Login`, `Register`, `Logout`, `Whoami`        |
//! | `users`      | `Users`, `Health`                              |
//! | `project`    | `Project` (list/create/edit/delete/...)        |
//! | `task`       | `Task` (add/edit/delete)                       |
//! | `board`      | `Board`, `Move`                                |
//! | `stats`      | `Stats`                                        |
//! | `announce`   | `Announce`                                     |
//! | `comment`    | `Comments`                                     |
//! | `background` | `Background`                                   |
//! | `config`     | `Config`                                       |

pub mod announce;
pub mod auth;
pub mod background;
pub mod board;
pub mod comment;
pub mod config;
pub mod project;
pub mod stats;
pub mod task;
pub mod users;

pub use announce::cmd_announce;
pub use auth::{cmd_login, cmd_logout, cmd_register, cmd_whoami};
pub use background::cmd_background;
pub use board::{cmd_board, cmd_move};
pub use comment::cmd_comments;
pub use config::cmd_config;
pub use project::cmd_project;
pub use stats::cmd_stats;
pub use task::cmd_task;
pub use users::{cmd_health, cmd_users};

use console::style;
use crewboard::errors::ApiError;
use crewboard::ui::icons::CROSS;

/// Print an API failure the way the original surfaced it: one blocking
/// message carrying the server's error text or the generic fallback.
pub(crate) fn report_api_error(err: &ApiError) {
    eprintln!("{} {}", CROSS, style(err).red());
}
