//! The emoji hub add-on: command dispatch over the table and the session
//! memory.

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::config::{EmojiEntry, EmojiHubConfig, SessionScope};
use crate::error::ConfigError;
use crate::host::{CommandSpec, Context, MessageEvent, Plugin};
use crate::resolver;
use crate::session::SessionMemory;
use crate::table::CommandTable;

/// User-facing reply texts.
pub mod messages {
    pub const LIST_HEADER: &str = "Available emoji commands:";
    pub const LIST_FAILED: &str = "Failed to list emoji commands, please try again later.";
    pub const NO_PRIOR_COMMAND: &str =
        "No previous command in this conversation. Run an emoji command first!";
    pub const STALE_COMMAND: &str = "The last emoji command is no longer available, pick a new one.";
    pub const FETCH_FAILED: &str = "Failed to fetch the image, please try again later.";
    pub const RANDOM_FAILED: &str = "Failed to fetch a random emoji, please try again later.";
    pub const EMPTY_CONFIGURATION: &str =
        "No emoji packs configured, check the plugin configuration.";
    pub const RETRY_LATER: &str = "Failed to send the emoji, please try again later.";
}

/// List every configured command keyword.
pub const LIST_COMMAND: CommandSpec = CommandSpec {
    name: "emojihub",
    aliases: &[],
    description: "List all emoji commands",
};

/// Repeat the conversation's last emoji command.
pub const ONEMORE_COMMAND: CommandSpec = CommandSpec {
    name: "onemore",
    aliases: &["再来一张", "再来一张表情包"],
    description: "Send another image from the last emoji command",
};

/// Send an image from a uniformly random command.
pub const RANDOM_COMMAND: CommandSpec = CommandSpec {
    name: "random",
    aliases: &["随机表情包"],
    description: "Send an image from a random emoji command",
};

pub const COMMANDS: &[CommandSpec] = &[LIST_COMMAND, ONEMORE_COMMAND, RANDOM_COMMAND];

/// The add-on instance: immutable command table plus per-conversation
/// last-command memory. Construct once, hand to the host.
pub struct EmojiHub {
    table: CommandTable,
    sessions: SessionMemory,
    scope: SessionScope,
}

impl EmojiHub {
    /// Build the hub from a validated configuration.
    ///
    /// Fails fast on duplicate or empty command keywords.
    pub fn new(config: EmojiHubConfig) -> Result<Self, ConfigError> {
        let table = CommandTable::new(config.emojis)?;
        Ok(Self {
            table,
            sessions: SessionMemory::new(),
            scope: config.session_scope,
        })
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    pub fn sessions(&self) -> &SessionMemory {
        &self.sessions
    }

    pub fn session_scope(&self) -> SessionScope {
        self.scope
    }

    /// Reply with the newline-joined command list.
    pub async fn handle_list(&self, event: &dyn MessageEvent) -> Result<()> {
        if let Err(err) = self.list(event).await {
            error!(error = ?err, "failed to list emoji commands");
            event.reply_text(messages::LIST_FAILED).await?;
        }
        Ok(())
    }

    /// Re-run the conversation's last emoji command.
    pub async fn handle_onemore(&self, event: &dyn MessageEvent) -> Result<()> {
        if let Err(err) = self.onemore(event).await {
            error!(error = ?err, "failed to repeat last emoji command");
            event.reply_text(messages::RETRY_LATER).await?;
        }
        Ok(())
    }

    /// Send an image from a uniformly random configured command.
    pub async fn handle_random(&self, event: &dyn MessageEvent) -> Result<()> {
        if let Err(err) = self.random(event).await {
            error!(error = ?err, "failed to send random emoji");
            event.reply_text(messages::RETRY_LATER).await?;
        }
        Ok(())
    }

    /// Ambient matcher: run on every inbound message. Delivers an image when
    /// the text (with one optional leading `/`) equals a configured command;
    /// otherwise stays silent.
    pub async fn handle_message(&self, event: &dyn MessageEvent) -> Result<()> {
        if let Err(err) = self.ambient(event).await {
            error!(error = ?err, "failed to handle message");
        }
        Ok(())
    }

    async fn list(&self, event: &dyn MessageEvent) -> Result<()> {
        let reply = format!("{}\n{}", messages::LIST_HEADER, self.table.overview());
        event.reply_text(&reply).await
    }

    async fn onemore(&self, event: &dyn MessageEvent) -> Result<()> {
        let session = self.session_key(event);
        let Some(last) = self.sessions.last(&session) else {
            return event.reply_text(messages::NO_PRIOR_COMMAND).await;
        };

        match self.table.lookup(&last) {
            Some(entry) => self.deliver(event, entry, messages::FETCH_FAILED).await,
            None => {
                warn!(command = %last, "remembered command is no longer configured");
                event.reply_text(messages::STALE_COMMAND).await
            }
        }
    }

    async fn random(&self, event: &dyn MessageEvent) -> Result<()> {
        let Some(entry) = self.table.pick_random() else {
            return event.reply_text(messages::EMPTY_CONFIGURATION).await;
        };
        self.deliver(event, entry, messages::RANDOM_FAILED).await
    }

    async fn ambient(&self, event: &dyn MessageEvent) -> Result<()> {
        let text = event.text();
        let trimmed = text.trim();
        let keyword = trimmed.strip_prefix('/').unwrap_or(trimmed);

        let Some(entry) = self.table.lookup(keyword) else {
            return Ok(());
        };

        // Recorded before resolution: a failed fetch is still repeatable
        // with `onemore`.
        self.sessions.record(&self.session_key(event), &entry.command);
        self.deliver(event, entry, messages::FETCH_FAILED).await
    }

    /// Resolve the entry's source file and send the image, or the given
    /// retry message when the source is unavailable.
    async fn deliver(
        &self,
        event: &dyn MessageEvent,
        entry: &EmojiEntry,
        unavailable_msg: &str,
    ) -> Result<()> {
        match resolver::resolve(&entry.source).await {
            Ok(url) => {
                info!(command = %entry.command, %url, "sending emoji image");
                event.reply_image(&url).await
            }
            Err(err) => {
                error!(error = %err, command = %entry.command, "emoji source unavailable");
                event.reply_text(unavailable_msg).await
            }
        }
    }

    fn session_key(&self, event: &dyn MessageEvent) -> String {
        match self.scope {
            SessionScope::User => event.user_id(),
            SessionScope::Channel => event.channel_id().unwrap_or_else(|| event.user_id()),
        }
    }
}

#[async_trait]
impl Plugin for EmojiHub {
    fn name(&self) -> &'static str {
        "emojihub"
    }

    fn commands(&self) -> &'static [CommandSpec] {
        COMMANDS
    }

    async fn on_load(&self, _ctx: &Context) -> Result<()> {
        info!(packs = self.table.len(), "emoji hub loaded");
        Ok(())
    }

    async fn on_stop(&self, _ctx: &Context) -> Result<()> {
        info!("emoji hub stopped");
        Ok(())
    }

    async fn on_command(&self, name: &str, event: &dyn MessageEvent) -> Result<()> {
        if LIST_COMMAND.matches(name) {
            self.handle_list(event).await
        } else if ONEMORE_COMMAND.matches(name) {
            self.handle_onemore(event).await
        } else if RANDOM_COMMAND.matches(name) {
            self.handle_random(event).await
        } else {
            debug!(command = %name, "ignoring unknown command");
            Ok(())
        }
    }

    async fn on_message(&self, event: &dyn MessageEvent) -> Result<()> {
        self.handle_message(event).await
    }
}
