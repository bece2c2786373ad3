// Convenience re-exports: use emojihub::prelude::*;
pub use crate::adapter::{ConsoleAdapter, MockEvent, Reply};
pub use crate::config::{EmojiEntry, EmojiHubConfig, SessionScope};
pub use crate::error::{ConfigError, ResolveError};
pub use crate::host::{CommandSpec, Context, MessageEvent, Plugin};
pub use crate::hub::{EmojiHub, messages};

pub use async_trait::async_trait;
