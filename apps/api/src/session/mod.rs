//! Per-user session store.
//!
//! Every piece of mutable user state (uploaded resume text, cached analysis,
//! interview progress) lives in a `UserSession` reached through its id. The
//! store hands out one `Mutex` per session, so a session is driven by one
//! request at a time while distinct sessions never contend.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::InterviewSession;

#[derive(Debug)]
pub struct UserSession {
    pub id: Uuid,
    /// Text extracted from the latest upload. `Some("")` means the upload had no readable text.
    pub resume_text: Option<String>,
    pub analysis_report: Option<String>,
    pub interview: InterviewSession,
}

impl UserSession {
    fn new(id: Uuid) -> Self {
        Self {
            id,
            resume_text: None,
            analysis_report: None,
            interview: InterviewSession::new(),
        }
    }
}

pub type SessionHandle = Arc<Mutex<UserSession>>;

struct SessionEntry {
    handle: SessionHandle,
    last_seen: DateTime<Utc>,
}

impl SessionEntry {
    fn is_expired(&self, now: DateTime<Utc>, idle_timeout: Duration) -> bool {
        now - self.last_seen >= idle_timeout
    }
}

/// Sessions idle for `idle_timeout` are dropped: lazily on `get`, and in bulk on every `create`.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionEntry>>>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::default(),
            idle_timeout,
        }
    }

    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_expired(now, self.idle_timeout));
        let expired = before - sessions.len();
        if expired > 0 {
            info!(expired, "Dropped idle sessions");
        }

        sessions.insert(
            id,
            SessionEntry {
                handle: Arc::new(Mutex::new(UserSession::new(id))),
                last_seen: now,
            },
        );
        info!(session_id = %id, "Session created");
        id
    }

    /// Returns the session and marks it as seen.
    pub async fn get(&self, id: Uuid) -> Result<SessionHandle, AppError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        let expired = match sessions.get_mut(&id) {
            Some(entry) if !entry.is_expired(now, self.idle_timeout) => {
                entry.last_seen = now;
                return Ok(entry.handle.clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            sessions.remove(&id);
            debug!(session_id = %id, "Session expired");
        }

        Err(not_found(id))
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| info!(session_id = %id, "Session ended"))
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::InterviewState;

    fn store() -> SessionStore {
        SessionStore::new(Duration::minutes(30))
    }

    #[tokio::test]
    async fn test_created_session_is_retrievable_and_empty() {
        let store = store();
        let id = store.create().await;

        let handle = store.get(id).await.unwrap();
        let session = handle.lock().await;

        assert_eq!(session.id, id);
        assert!(session.resume_text.is_none());
        assert!(session.analysis_report.is_none());
        assert_eq!(session.interview.state(), InterviewState::NotStarted);
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let store = store();
        let result = store.get(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = store();
        let a = store.create().await;
        let b = store.create().await;

        store.get(a).await.unwrap().lock().await.interview.start();

        let b_handle = store.get(b).await.unwrap();
        assert_eq!(
            b_handle.lock().await.interview.state(),
            InterviewState::NotStarted
        );
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_removed_session_is_not_found() {
        let store = store();
        let id = store.create().await;

        store.remove(id).await.unwrap();

        assert!(matches!(store.get(id).await, Err(AppError::NotFound(_))));
        assert!(matches!(store.remove(id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_idle_session_expires() {
        let store = SessionStore::new(Duration::zero());
        let id = store.create().await;

        assert!(matches!(store.get(id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_sweeps_idle_sessions() {
        let store = SessionStore::new(Duration::zero());
        let stale = store.create().await;
        let fresh = store.create().await;

        let sessions = store.sessions.read().await;
        assert!(!sessions.contains_key(&stale));
        assert!(sessions.contains_key(&fresh));
    }

    #[tokio::test]
    async fn test_active_session_survives_sweep() {
        let store = store();
        let id = store.create().await;
        store.create().await;

        assert!(store.get(id).await.is_ok());
    }
}
