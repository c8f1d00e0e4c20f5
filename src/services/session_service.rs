use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppResult;

/// One login session. Ephemeral cache only: the durable source of truth for
/// who a user is lives elsewhere, and losing this table just forces a fresh
/// login.
#[derive(Clone, Debug)]
pub struct Session {
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
}

/// Pluggable backing for the session table: an in-memory map in development
/// and tests, a durable store in deployments that need restart survival.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn put(&self, token: &str, session: Session) -> AppResult<()>;
    async fn get(&self, token: &str) -> AppResult<Option<Session>>;
    async fn remove(&self, token: &str) -> AppResult<()>;
}

#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(&self, token: &str, session: Session) -> AppResult<()> {
        self.sessions
            .write()
            .await
            .insert(token.to_string(), session);
        Ok(())
    }

    async fn get(&self, token: &str) -> AppResult<Option<Session>> {
        Ok(self.sessions.read().await.get(token).cloned())
    }

    async fn remove(&self, token: &str) -> AppResult<()> {
        self.sessions.write().await.remove(token);
        Ok(())
    }
}

/// The session contract: `create`, `validate`, `invalidate`. Expiry is
/// checked at validation time; expired entries are dropped on sight.
pub struct SessionService {
    store: Arc<dyn SessionStore>,
    ttl: Duration,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStore>, ttl_minutes: i64) -> Self {
        Self {
            store,
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    pub async fn create(&self, user_id: &str) -> AppResult<(String, DateTime<Utc>)> {
        let token = Uuid::new_v4().to_string();
        let expires_at = Utc::now() + self.ttl;
        self.store
            .put(
                &token,
                Session {
                    user_id: user_id.to_string(),
                    expires_at,
                },
            )
            .await?;
        Ok((token, expires_at))
    }

    /// Returns the user id behind a live token, or `None` for unknown and
    /// expired tokens alike.
    pub async fn validate(&self, token: &str) -> AppResult<Option<String>> {
        match self.store.get(token).await? {
            Some(session) if session.expires_at > Utc::now() => Ok(Some(session.user_id)),
            Some(_) => {
                self.store.remove(token).await?;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    pub async fn invalidate(&self, token: &str) -> AppResult<()> {
        self.store.remove(token).await
    }
}
