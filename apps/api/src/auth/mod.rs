// Mock authentication: in-memory users, opaque bearer tokens.
// Not a security model; there is no persistence and no password policy.

pub mod handlers;
pub mod password;
pub mod store;
pub mod token;

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use uuid::Uuid;

use crate::models::User;
use store::{InMemoryUserStore, UserStore};

pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "password123";
pub const DEMO_NAME: &str = "Demo User";

/// Builds the default store, seeded with the demo account.
pub async fn seeded_user_store() -> Result<Arc<dyn UserStore>> {
    let store = InMemoryUserStore::new();
    let password_hash =
        tokio::task::spawn_blocking(|| password::hash_password(DEMO_PASSWORD)).await??;
    store
        .insert(User {
            id: Uuid::new_v4(),
            email: DEMO_EMAIL.to_string(),
            name: DEMO_NAME.to_string(),
            password_hash,
            created_at: Utc::now(),
        })
        .await?;
    Ok(Arc::new(store))
}
