//! Storybook: visual component explorer for the `ui` crate.
//!
//! Every Button story is a plain `fn() -> Markup`; the HTTP layer wraps it
//! in the storybook layout. See [`routes::configure`] for the URL map.

pub mod config;
pub mod error;
pub mod layout;
pub mod reload;
pub mod routes;
pub mod stories;

pub use config::Opts;
pub use error::StoryError;
