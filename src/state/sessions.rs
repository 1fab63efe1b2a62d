// src/state/sessions.rs
use crate::state::store::ExplorerState;
use base64::Engine;
use rand::{rngs::OsRng, RngCore};
use std::collections::HashMap;
use std::sync::{Arc, LockResult, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::debug;

pub const SESSION_COOKIE: &str = "explorer_session";
const SESSION_TOKEN_BYTES: usize = 32;

pub type SharedState = Arc<Mutex<ExplorerState>>;

/// In-memory explorer state per browser session. Nothing is persisted;
/// a restart simply starts everyone over. Sessions idle for longer than
/// `idle_ttl` are dropped.
pub struct SessionRegistry {
    preferred_hospital: String,
    idle_ttl: Duration,
    sessions: Mutex<HashMap<String, Entry>>,
}

struct Entry {
    state: SharedState,
    last_seen: Instant,
}

pub struct Session {
    pub id: String,
    pub state: SharedState,
    /// The cookie has to be (re)issued with the response.
    pub is_new: bool,
}

impl SessionRegistry {
    pub fn new(preferred_hospital: impl Into<String>, idle_ttl: Duration) -> Self {
        Self {
            preferred_hospital: preferred_hospital.into(),
            idle_ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the session named by the cookie, or a fresh one when the
    /// cookie is missing, unknown or expired.
    pub fn get_or_create(&self, cookie: Option<&str>) -> Session {
        self.get_or_create_at(cookie, Instant::now())
    }

    fn get_or_create_at(&self, cookie: Option<&str>, now: Instant) -> Session {
        let mut sessions = recover(self.sessions.lock());
        self.evict_idle(&mut sessions, now);

        if let Some(id) = cookie {
            if let Some(entry) = sessions.get_mut(id) {
                entry.last_seen = now;
                return Session {
                    id: id.to_string(),
                    state: entry.state.clone(),
                    is_new: false,
                };
            }
        }

        let id = generate_session_id();
        let state = Arc::new(Mutex::new(ExplorerState::new(
            self.preferred_hospital.clone(),
        )));
        sessions.insert(
            id.clone(),
            Entry {
                state: state.clone(),
                last_seen: now,
            },
        );

        Session {
            id,
            state,
            is_new: true,
        }
    }

    /// Looks up a live session without creating one.
    pub fn get(&self, id: &str) -> Option<SharedState> {
        self.get_at(id, Instant::now())
    }

    fn get_at(&self, id: &str, now: Instant) -> Option<SharedState> {
        let mut sessions = recover(self.sessions.lock());
        self.evict_idle(&mut sessions, now);

        sessions.get_mut(id).map(|entry| {
            entry.last_seen = now;
            entry.state.clone()
        })
    }

    fn evict_idle(&self, sessions: &mut HashMap<String, Entry>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, entry| now.saturating_duration_since(entry.last_seen) <= self.idle_ttl);

        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, remaining = sessions.len(), "evicted idle sessions");
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        recover(self.sessions.lock()).len()
    }
}

/// The guarded data is plain state, so a panic mid-update leaves nothing
/// worth refusing to read.
pub fn recover<'a, T>(result: LockResult<MutexGuard<'a, T>>) -> MutexGuard<'a, T> {
    result.unwrap_or_else(PoisonError::into_inner)
}

/// 32 random bytes, URL-safe base64 without padding.
fn generate_session_id() -> String {
    let mut raw = [0u8; SESSION_TOKEN_BYTES];
    OsRng.fill_bytes(&mut raw);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw)
}

/// Pulls the session id out of a `Cookie` header value.
pub fn session_from_cookie_header(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

pub fn session_cookie(id: &str) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}
