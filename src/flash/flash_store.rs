//! Per-session, single-read message queue with TTL.
//!
//! A mutation pushes a confirmation into its session's queue; the next page
//! that reads the queue drains it. Queues that sit unread longer than the TTL
//! are treated as gone.

use crate::session::SessionId;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

const MIN_TTL: Duration = Duration::from_millis(1);

/// Pending messages for one session.
#[derive(Debug, Clone)]
struct FlashEntry {
    messages: Vec<String>,
    touched_at: Instant,
}

impl FlashEntry {
    fn is_live(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.touched_at) < ttl
    }
}

/// Thread-safe store of pending one-shot messages keyed by session.
///
/// Cloning is cheap and clones share the same queues.
#[derive(Clone)]
pub struct FlashStore {
    entries: Arc<RwLock<HashMap<SessionId, FlashEntry>>>,
    ttl: Duration,
}

impl FlashStore {
    /// Create a store whose unread queues expire after `ttl`.
    ///
    /// `ttl` is raised to at least one millisecond.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl: ttl.max(MIN_TTL),
        }
    }

    /// Append a message to the session's queue and restart its TTL.
    ///
    /// An expired queue is discarded before the message is added.
    pub fn push(&self, session: &SessionId, message: impl Into<String>) {
        let now = Instant::now();

        if let Ok(mut entries) = self.entries.write() {
            let entry = entries.entry(session.clone()).or_insert_with(|| FlashEntry {
                messages: Vec::new(),
                touched_at: now,
            });

            if !entry.is_live(now, self.ttl) {
                entry.messages.clear();
            }
            entry.messages.push(message.into());
            entry.touched_at = now;
        }
    }

    /// Drain the session's queue.
    ///
    /// Returns the pending messages in push order, or nothing if the queue is
    /// empty or expired. A second call returns nothing.
    pub fn take(&self, session: &SessionId) -> Vec<String> {
        let now = Instant::now();

        if let Ok(mut entries) = self.entries.write() {
            if let Some(entry) = entries.remove(session) {
                if entry.is_live(now, self.ttl) {
                    return entry.messages;
                }
            }
        }

        Vec::new()
    }

    /// Bind this store to one session for the duration of a request.
    pub fn for_session(&self, session: SessionId) -> SessionFlash {
        SessionFlash {
            store: self.clone(),
            session,
        }
    }

    /// Drop every queue older than the TTL.
    pub fn cleanup_expired(&self) {
        let now = Instant::now();

        if let Ok(mut entries) = self.entries.write() {
            entries.retain(|_, entry| entry.is_live(now, self.ttl));
        }
    }

    /// Number of sessions with a queue (including expired ones).
    pub fn len(&self) -> usize {
        if let Ok(entries) = self.entries.read() {
            entries.len()
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl std::fmt::Debug for FlashStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlashStore")
            .field("ttl", &self.ttl)
            .field("sessions", &self.len())
            .finish()
    }
}

/// A [`FlashStore`] bound to the session of the current request.
#[derive(Debug, Clone)]
pub struct SessionFlash {
    store: FlashStore,
    session: SessionId,
}

impl SessionFlash {
    pub fn push(&self, message: impl Into<String>) {
        self.store.push(&self.session, message);
    }

    pub fn take(&self) -> Vec<String> {
        self.store.take(&self.session)
    }

    pub fn session(&self) -> &SessionId {
        &self.session
    }
}
