//! Emoji hub: a chat-bot add-on that answers configured text commands with
//! a randomly chosen image URL drawn from per-command pack files, and
//! remembers the last command per conversation so `onemore` can repeat it.
//!
//! The add-on owns no networking and no persistence beyond an in-memory
//! map; everything it needs from the bot host is expressed by the traits in
//! [`host`]. [`adapter`] ships a console host and a mock event so the crate
//! is runnable and testable on its own.

#![forbid(unsafe_code)]

pub mod adapter;
pub mod config;
pub mod error;
pub mod host;
pub mod hub;
pub mod prelude;
pub mod resolver;
pub mod session;
pub mod table;

pub use config::{EmojiEntry, EmojiHubConfig, SessionScope};
pub use error::{ConfigError, ResolveError};
pub use hub::EmojiHub;
