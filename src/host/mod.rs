//! The contract between the add-on and its bot host.
//!
//! Message ingestion, command filtering, and image transport belong to the
//! host; these traits are the surface the add-on needs from it.

pub mod context;
pub mod event;
pub mod plugin;

pub use context::Context;
pub use event::MessageEvent;
pub use plugin::{CommandSpec, Plugin};
