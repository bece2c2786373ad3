//! Last-command memory, one slot per conversation.

use dashmap::DashMap;

/// Remembers the last emoji command each session used.
///
/// Grows for the lifetime of the add-on (one slot per session ever seen) and
/// is never persisted. Safe under concurrent handler invocations across
/// sessions.
#[derive(Debug, Default)]
pub struct SessionMemory {
    last_by_session: DashMap<String, String>,
}

impl SessionMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite-or-insert the session's last command.
    pub fn record(&self, session_id: &str, command: &str) {
        self.last_by_session
            .insert(session_id.to_string(), command.to_string());
    }

    /// The last command this session used, if any.
    pub fn last(&self, session_id: &str) -> Option<String> {
        self.last_by_session
            .get(session_id)
            .map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.last_by_session.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_by_session.is_empty()
    }
}
