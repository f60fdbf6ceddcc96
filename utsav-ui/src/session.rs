//! Admin session tokens
//!
//! A successful login issues a random UUIDv4 token with a fixed lifetime.
//! Sessions live in memory only; restarting the service logs everyone out.
//! Expired tokens are pruned lazily on validation.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory admin session store
pub struct SessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<Uuid, Instant>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Session lifetime
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a fresh session token
    pub async fn issue(&self) -> Uuid {
        let token = Uuid::new_v4();
        self.sessions.write().await.insert(token, Instant::now());
        token
    }

    /// Check a token, pruning it if expired
    pub async fn validate(&self, token: Uuid) -> bool {
        let mut sessions = self.sessions.write().await;
        match sessions.get(&token) {
            Some(issued_at) if issued_at.elapsed() < self.ttl => true,
            Some(_) => {
                sessions.remove(&token);
                false
            }
            None => false,
        }
    }

    /// Revoke a token; returns whether it existed
    pub async fn revoke(&self, token: Uuid) -> bool {
        self.sessions.write().await.remove(&token).is_some()
    }
}
