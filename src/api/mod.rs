//! REST client for the collaboration backend.
//!
//! All requests ride on a cookie-based session. One submodule per resource:
//!
//! | Module     | Endpoints                                         |
//! |------------|---------------------------------------------------|
//! | `client`   | shared `ApiClient`, error decoding, session file  |
//! | `auth`     | login, register, logout, me                       |
//! | `users`    | user directory, welcome banner, health probe      |
//! | `projects` | project CRUD, invitations, member list            |
//! | `tasks`    | task CRUD under a project, board moves            |

pub mod auth;
pub mod client;
pub mod projects;
pub mod tasks;
pub mod users;

pub use client::ApiClient;
