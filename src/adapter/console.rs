//! Stdin/stdout host for running the add-on interactively.

use anyhow::Result;
use async_trait::async_trait;
use tokio::io::{self, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::warn;

use crate::host::{CommandSpec, MessageEvent, Plugin};

const COMMAND_PREFIX: char = '/';

/// One console line as a message event. Replies go to the adapter's
/// outgoing channel; images are rendered as `[image] <url>`.
pub struct ConsoleEvent {
    line: String,
    outgoing_tx: mpsc::Sender<String>,
}

impl ConsoleEvent {
    pub fn new(line: String, outgoing_tx: mpsc::Sender<String>) -> Self {
        Self { line, outgoing_tx }
    }
}

#[async_trait]
impl MessageEvent for ConsoleEvent {
    fn text(&self) -> String {
        self.line.trim().to_string()
    }

    fn user_id(&self) -> String {
        "console-user".to_string()
    }

    fn channel_id(&self) -> Option<String> {
        None
    }

    async fn reply_text(&self, message: &str) -> Result<()> {
        self.outgoing_tx.send(message.to_string()).await?;
        Ok(())
    }

    async fn reply_image(&self, url: &str) -> Result<()> {
        self.outgoing_tx.send(format!("[image] {url}")).await?;
        Ok(())
    }
}

/// Reads stdin lines, routes them through the plugin, prints replies.
#[derive(Default)]
pub struct ConsoleAdapter;

impl ConsoleAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Run until stdin closes.
    pub async fn run(&self, plugin: &dyn Plugin) -> Result<()> {
        let (outgoing_tx, mut outgoing_rx) = mpsc::channel::<String>(100);

        let writer = tokio::spawn(async move {
            while let Some(line) = outgoing_rx.recv().await {
                println!("{line}");
            }
        });

        let stdin = io::stdin();
        let mut reader = io::BufReader::new(stdin).lines();

        while let Ok(Some(line)) = reader.next_line().await {
            if line.trim().is_empty() {
                continue;
            }
            let event = ConsoleEvent::new(line, outgoing_tx.clone());
            if let Err(e) = dispatch(plugin, &event).await {
                warn!("plugin failed to handle event: {e}");
            }
        }

        drop(outgoing_tx);
        writer.await?;
        Ok(())
    }
}

/// Host-side routing: prefixed commands the plugin declares go to
/// `on_command`, everything else to the ambient `on_message` hook.
async fn dispatch(plugin: &dyn Plugin, event: &ConsoleEvent) -> Result<()> {
    match command_keyword(&event.text(), plugin.commands()) {
        Some(name) => plugin.on_command(&name, event).await,
        None => plugin.on_message(event).await,
    }
}

/// First whitespace-delimited token of a `/`-prefixed line, if it names one
/// of the plugin's declared commands.
fn command_keyword(text: &str, specs: &[CommandSpec]) -> Option<String> {
    let trimmed = text.trim_start();
    let rest = trimmed.strip_prefix(COMMAND_PREFIX)?;

    let token_end = rest
        .char_indices()
        .find(|(_, ch)| ch.is_whitespace())
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len());
    let token = &rest[..token_end];

    if token.is_empty() {
        return None;
    }

    specs
        .iter()
        .find(|spec| spec.matches(token))
        .map(|_| token.to_string())
}
