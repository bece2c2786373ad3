use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal configuration problems, detected at load time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The original silently let the first match win; duplicates are now
    /// rejected so a typo in the table cannot shadow a pack.
    #[error("duplicate emoji command '{command}'")]
    DuplicateCommand { command: String },

    #[error("emoji entry with an empty command keyword")]
    EmptyCommand,
}

/// A command's source file could not produce a URL. Non-fatal: handlers
/// translate this into a retry message for the user.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("failed to read source file '{path}'")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no usable URLs in source file '{path}'")]
    NoUsableLines { path: PathBuf },
}
