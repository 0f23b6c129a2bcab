// src/store.rs

use std::{collections::HashMap, sync::Arc};

use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::session::AssessmentSession;

/// In-memory, process-wide map of assessment sessions.
///
/// Cloning is cheap; all clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, AssessmentSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh session and returns its id.
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.inner
            .write()
            .await
            .insert(id, AssessmentSession::new(id));
        tracing::debug!(session = %id, "Created assessment session");
        id
    }

    /// Discards all answers of an existing session, keeping its id.
    pub async fn reset(&self, id: Uuid) -> bool {
        let mut sessions = self.inner.write().await;
        match sessions.get_mut(&id) {
            Some(session) => {
                *session = AssessmentSession::new(id);
                true
            }
            None => false,
        }
    }

    pub async fn contains(&self, id: Uuid) -> bool {
        self.inner.read().await.contains_key(&id)
    }

    /// Runs `f` against the session under the write lock and marks it as seen.
    ///
    /// Returns `None` when the session does not exist (never created or purged).
    pub async fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut AssessmentSession) -> R,
    ) -> Option<R> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id)?;
        session.last_seen = Utc::now();
        Some(f(session))
    }

    /// Drops sessions idle for longer than `max_idle`. Returns how many were removed.
    pub async fn purge_idle(&self, max_idle: Duration) -> usize {
        let cutoff = Utc::now() - max_idle;
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.last_seen >= cutoff);
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
