//! Idle session eviction job.

use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::scheduler::Job;
use crate::middleware::metrics::{record_sessions_active, record_sessions_evicted};
use crate::services::sessions::SessionRegistry;

/// Ends sessions that have been idle longer than the configured timeout,
/// discarding their alerts.
pub struct SessionSweepJob {
    sessions: Arc<SessionRegistry>,
    interval: Duration,
}

impl SessionSweepJob {
    pub fn new(sessions: Arc<SessionRegistry>, interval: Duration) -> Self {
        Self { sessions, interval }
    }
}

#[async_trait::async_trait]
impl Job for SessionSweepJob {
    fn name(&self) -> &'static str {
        "session_sweep"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    async fn execute(&self) -> Result<(), String> {
        let evicted = self.sessions.evict_idle();
        let active = self.sessions.len();

        record_sessions_evicted(evicted);
        record_sessions_active(active);

        if evicted > 0 {
            info!(evicted = evicted, active = active, "Idle sessions evicted");
        }
        Ok(())
    }
}
