use anyhow::Result;
use async_trait::async_trait;

/// One inbound message, with the reply capabilities the host grants.
///
/// Adapters implement this per platform. The add-on only ever sees messages
/// through this trait.
#[async_trait]
pub trait MessageEvent: Send + Sync {
    /// Raw text content of the message.
    fn text(&self) -> String;

    /// Stable identifier of the sending user.
    fn user_id(&self) -> String;

    /// Channel or group the message arrived in; `None` for direct messages.
    fn channel_id(&self) -> Option<String>;

    /// Emit a plain-text reply into the conversation.
    async fn reply_text(&self, message: &str) -> Result<()>;

    /// Emit an image reply; `url` is a full `http(s)` URL the platform
    /// fetches and displays.
    async fn reply_image(&self, url: &str) -> Result<()>;
}
