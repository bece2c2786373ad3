//! Interactive console host for the emoji hub.
//!
//! Run with: `cargo run --example console_demo [config.toml]`
//!
//! With no argument the builtin pack table is used; pack files are looked up
//! relative to the working directory. Type `/emojihub` to list commands,
//! then any keyword (with or without the leading `/`) to get an image URL,
//! `/onemore` to repeat, `/random` for a random pack.

use anyhow::Result;
use emojihub::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let config = match std::env::args().nth(1) {
        Some(path) => EmojiHubConfig::from_file(path)?,
        None => EmojiHubConfig::builtin(),
    };

    let hub = EmojiHub::new(config)?;
    let ctx = Context::new();
    hub.on_load(&ctx).await?;

    println!("Console host started. Type /emojihub to list commands.");
    ConsoleAdapter::new().run(&hub).await?;

    hub.on_stop(&ctx).await?;
    Ok(())
}
