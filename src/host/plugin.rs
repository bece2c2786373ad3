use anyhow::Result;
use async_trait::async_trait;

use crate::host::context::Context;
use crate::host::event::MessageEvent;

/// Metadata for one command the host's command-filter layer routes on.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

impl CommandSpec {
    /// Whether `keyword` names this command, by primary name or alias.
    pub fn matches(&self, keyword: &str) -> bool {
        self.name == keyword || self.aliases.contains(&keyword)
    }
}

/// A bot add-on.
///
/// The host drives the lifecycle hooks and routes filtered commands to
/// `on_command`; every inbound message additionally reaches `on_message`.
#[async_trait]
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    /// Commands the host should filter and route to `on_command`.
    fn commands(&self) -> &'static [CommandSpec] {
        &[]
    }

    /// Called when the plugin is loaded.
    async fn on_load(&self, _ctx: &Context) -> Result<()> {
        Ok(())
    }

    /// Called when the plugin is torn down.
    async fn on_stop(&self, _ctx: &Context) -> Result<()> {
        Ok(())
    }

    /// Handle a command invocation matched by the host. `name` is the
    /// keyword the user typed (primary name or alias).
    async fn on_command(&self, name: &str, event: &dyn MessageEvent) -> Result<()>;

    /// Ambient hook: sees every inbound message the host delivers.
    async fn on_message(&self, event: &dyn MessageEvent) -> Result<()>;
}
