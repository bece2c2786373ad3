//! Picks one image URL from a command's source file.
//!
//! The file is re-read and re-sampled on every call: pack files may be
//! edited while the bot is running, and a fresh read is what makes that
//! visible. No caching.

use std::path::Path;

use rand::seq::SliceRandom;
use tokio::fs;
use tracing::debug;

use crate::error::ResolveError;

/// Prefix prepended to schemeless lines to form a full URL.
pub const IMAGE_BASE_URL: &str = "https://i0.hdslb.com/bfs/";

/// Read `path`, drop blank lines, and return one line chosen uniformly at
/// random, normalized into a full URL.
pub async fn resolve(path: &Path) -> Result<String, ResolveError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| ResolveError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

    let urls: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let picked = urls
        .choose(&mut rand::thread_rng())
        .ok_or_else(|| ResolveError::NoUsableLines {
            path: path.to_path_buf(),
        })?;

    let url = normalize_url(picked);
    debug!(path = %path.display(), %url, "picked image url");
    Ok(url)
}

/// Normalize a raw pack line into a full image URL.
///
/// Some pack files carry a known malformed double-scheme pattern
/// (`https:https://...`); others list bare file paths relative to the image
/// host. Well-formed URLs pass through unchanged.
pub fn normalize_url(raw: &str) -> String {
    if let Some(rest) = raw.strip_prefix("https:https://") {
        format!("https://{rest}")
    } else if !raw.starts_with("http://") && !raw.starts_with("https://") {
        format!("{IMAGE_BASE_URL}{raw}")
    } else {
        raw.to_string()
    }
}
