//! In-memory user and session tables.
//!
//! Placeholder storage: nothing survives a restart.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::User;

/// Lifetime of an issued bearer token.
pub const SESSION_TTL_DAYS: i64 = 7;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email already registered: {0}")]
    EmailTaken(String),
}

#[derive(Debug, Clone)]
struct Session {
    user_id: Uuid,
    expires_at: DateTime<Utc>,
}

/// Pluggable user store. Default: `InMemoryUserStore`.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Option<User>;

    /// Inserts a new user; fails if the email is already taken.
    async fn insert(&self, user: User) -> Result<User, StoreError>;

    /// Issues a fresh opaque bearer token for the user.
    async fn issue_token(&self, user_id: Uuid) -> String;

    /// Resolves a bearer token to its user, if the token is known and unexpired.
    async fn resolve_token(&self, token: &str) -> Option<User>;
}

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Emails are matched case-insensitively.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.read().await.get(&normalize_email(email)).cloned()
    }

    async fn insert(&self, user: User) -> Result<User, StoreError> {
        let key = normalize_email(&user.email);
        let mut users = self.users.write().await;
        if users.contains_key(&key) {
            return Err(StoreError::EmailTaken(key));
        }
        users.insert(key, user.clone());
        Ok(user)
    }

    async fn issue_token(&self, user_id: Uuid) -> String {
        let now = Utc::now();
        let token = Uuid::new_v4().simple().to_string();
        let session = Session {
            user_id,
            expires_at: now + Duration::days(SESSION_TTL_DAYS),
        };
        let mut sessions = self.sessions.write().await;
        // Sweep expired sessions.
        sessions.retain(|_, s| s.expires_at > now);
        sessions.insert(token.clone(), session);
        token
    }

    async fn resolve_token(&self, token: &str) -> Option<User> {
        let session = {
            let mut sessions = self.sessions.write().await;
            match sessions.get(token) {
                Some(s) if s.expires_at > Utc::now() => s.clone(),
                Some(_) => {
                    sessions.remove(token);
                    return None;
                }
                None => return None,
            }
        };

        self.users
            .read()
            .await
            .values()
            .find(|u| u.id == session.user_id)
            .cloned()
    }
}
