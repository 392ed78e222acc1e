//! Per-visitor session registry.
//!
//! Every session owns its own [`Dashboard`] (and with it its own alert
//! store). Sessions share nothing; the mutex only guards the map itself.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use domain::services::Dashboard;
use tracing::debug;
use uuid::Uuid;

use crate::config::Config;
use crate::middleware::metrics::{record_sessions_active, record_sessions_evicted};

/// Session resolved for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionHandle {
    pub id: Uuid,
    /// True when the session was created by this request.
    pub created: bool,
}

struct SessionEntry {
    dashboard: Dashboard,
    last_seen: Instant,
}

pub struct SessionRegistry {
    sessions: Mutex<HashMap<Uuid, SessionEntry>>,
    idle_timeout: Duration,
    max_sessions: usize,
    map_style: String,
}

impl SessionRegistry {
    pub fn new(idle_timeout: Duration, max_sessions: usize, map_style: impl Into<String>) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_timeout,
            max_sessions,
            map_style: map_style.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.session.idle_timeout(),
            config.session.max_sessions,
            config.dashboard.map_style.clone(),
        )
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, SessionEntry>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_expired(&self, entry: &SessionEntry, now: Instant) -> bool {
        now.saturating_duration_since(entry.last_seen) > self.idle_timeout
    }

    /// Touches the live session for `id`, dropping it if it has expired.
    fn touch(
        &self,
        sessions: &mut HashMap<Uuid, SessionEntry>,
        id: Uuid,
        now: Instant,
    ) -> Option<SessionHandle> {
        let expired = self.is_expired(sessions.get(&id)?, now);

        if expired {
            sessions.remove(&id);
            record_sessions_evicted(1);
            record_sessions_active(sessions.len());
            debug!(session_id = %id, "Expired session discarded");
            return None;
        }

        if let Some(entry) = sessions.get_mut(&id) {
            entry.last_seen = now;
        }
        Some(SessionHandle { id, created: false })
    }

    /// Returns the live session for `requested`, or starts a new seeded one.
    pub fn resolve(&self, requested: Option<Uuid>) -> SessionHandle {
        self.resolve_at(requested, Instant::now())
    }

    pub fn resolve_at(&self, requested: Option<Uuid>, now: Instant) -> SessionHandle {
        let mut sessions = self.lock();

        if let Some(handle) = requested.and_then(|id| self.touch(&mut sessions, id, now)) {
            return handle;
        }

        if sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| *id);
            if let Some(oldest) = oldest {
                sessions.remove(&oldest);
                record_sessions_evicted(1);
                debug!(session_id = %oldest, "Least recently seen session evicted");
            }
        }

        let id = Uuid::new_v4();
        sessions.insert(
            id,
            SessionEntry {
                dashboard: Dashboard::new(self.map_style.clone()),
                last_seen: now,
            },
        );
        record_sessions_active(sessions.len());

        SessionHandle { id, created: true }
    }

    /// Returns the live session for `requested` without ever creating one.
    pub fn lookup(&self, requested: Option<Uuid>) -> Option<SessionHandle> {
        self.lookup_at(requested, Instant::now())
    }

    pub fn lookup_at(&self, requested: Option<Uuid>, now: Instant) -> Option<SessionHandle> {
        let id = requested?;
        let mut sessions = self.lock();
        self.touch(&mut sessions, id, now)
    }

    /// Runs `f` against the session's dashboard. `None` if the session is gone.
    pub fn with_dashboard<R>(&self, id: Uuid, f: impl FnOnce(&mut Dashboard) -> R) -> Option<R> {
        let mut sessions = self.lock();
        sessions.get_mut(&id).map(|entry| f(&mut entry.dashboard))
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.lock().contains_key(&id)
    }

    /// Ends a session, dropping its alerts. Returns false if it did not exist.
    pub fn end(&self, id: Uuid) -> bool {
        let mut sessions = self.lock();
        let ended = sessions.remove(&id).is_some();
        if ended {
            record_sessions_active(sessions.len());
        }
        ended
    }

    /// Destroys sessions idle longer than the timeout; returns how many.
    pub fn evict_idle(&self) -> usize {
        self.evict_idle_at(Instant::now())
    }

    pub fn evict_idle_at(&self, now: Instant) -> usize {
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, entry| !self.is_expired(entry, now));
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }
}

impl std::fmt::Debug for SessionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRegistry")
            .field("active_sessions", &self.len())
            .field("max_sessions", &self.max_sessions)
            .field("idle_timeout", &self.idle_timeout)
            .finish()
    }
}
