//! In-memory event for tests.
//!
//! Records every reply so assertions can inspect exactly what the add-on
//! sent, and can simulate a broken image transport.

use std::sync::Mutex;

use anyhow::{Result, bail};
use async_trait::async_trait;

use crate::host::MessageEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Image(String),
}

pub struct MockEvent {
    text: String,
    user: String,
    channel: Option<String>,
    fail_images: bool,
    replies: Mutex<Vec<Reply>>,
}

impl MockEvent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            user: "mock-user".to_string(),
            channel: None,
            fail_images: false,
            replies: Mutex::new(Vec::new()),
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Make every `reply_image` call fail, to exercise handler boundaries.
    pub fn with_failing_images(mut self) -> Self {
        self.fail_images = true;
        self
    }

    pub fn replies(&self) -> Vec<Reply> {
        self.replies.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.replies()
            .into_iter()
            .filter_map(|r| match r {
                Reply::Text(t) => Some(t),
                Reply::Image(_) => None,
            })
            .collect()
    }

    pub fn images(&self) -> Vec<String> {
        self.replies()
            .into_iter()
            .filter_map(|r| match r {
                Reply::Image(url) => Some(url),
                Reply::Text(_) => None,
            })
            .collect()
    }
}

#[async_trait]
impl MessageEvent for MockEvent {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn user_id(&self) -> String {
        self.user.clone()
    }

    fn channel_id(&self) -> Option<String> {
        self.channel.clone()
    }

    async fn reply_text(&self, message: &str) -> Result<()> {
        self.replies
            .lock()
            .unwrap()
            .push(Reply::Text(message.to_string()));
        Ok(())
    }

    async fn reply_image(&self, url: &str) -> Result<()> {
        if self.fail_images {
            bail!("image transport unavailable");
        }
        self.replies
            .lock()
            .unwrap()
            .push(Reply::Image(url.to_string()));
        Ok(())
    }
}
