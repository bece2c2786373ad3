//! Hosts the add-on can run under without a live bot platform.

pub mod console;
pub mod mock;

pub use console::{ConsoleAdapter, ConsoleEvent};
pub use mock::{MockEvent, Reply};
