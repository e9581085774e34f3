//! Session-keyed conversation memory
//!
//! One bounded buffer per session id. Sessions idle longer than the TTL are
//! pruned lazily on the next access, so the map stays bounded without a
//! background task.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use super::{ConversationMemory, ConversationTurn};

struct SessionEntry {
    memory: ConversationMemory,
    last_active: Instant,
}

/// Store of per-session conversation memories
pub struct SessionStore {
    sessions: Mutex<HashMap<String, SessionEntry>>,
    window: usize,
    idle_ttl: Duration,
}

impl SessionStore {
    pub fn new(window: usize, idle_ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            window,
            idle_ttl,
        }
    }

    /// Recent turns for a session, most recent last. Unknown sessions
    /// return an empty history.
    pub async fn recent(&self, session_id: &str) -> Vec<ConversationTurn> {
        let mut sessions = self.sessions.lock().await;
        self.prune(&mut sessions);

        sessions
            .get(session_id)
            .map(|entry| entry.memory.recent())
            .unwrap_or_default()
    }

    /// Append a turn to a session, creating the session if needed
    pub async fn append(&self, session_id: &str, turn: ConversationTurn) {
        let mut sessions = self.sessions.lock().await;
        self.prune(&mut sessions);

        let entry = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| SessionEntry {
                memory: ConversationMemory::new(self.window),
                last_active: Instant::now(),
            });

        entry.memory.append(turn);
        entry.last_active = Instant::now();
    }

    /// Number of live sessions
    pub async fn session_count(&self) -> usize {
        let mut sessions = self.sessions.lock().await;
        self.prune(&mut sessions);
        sessions.len()
    }

    fn prune(&self, sessions: &mut HashMap<String, SessionEntry>) {
        let now = Instant::now();
        sessions.retain(|_, entry| now.duration_since(entry.last_active) < self.idle_ttl);
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("window", &self.window)
            .field("idle_ttl", &self.idle_ttl)
            .finish()
    }
}
