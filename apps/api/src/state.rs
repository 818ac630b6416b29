use std::sync::Arc;

use anyhow::Result;

use crate::auth::seeded_user_store;
use crate::auth::store::UserStore;
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Pluggable user store. Default: InMemoryUserStore seeded with the demo account.
    pub users: Arc<dyn UserStore>,
    pub config: Config,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Self> {
        let llm = LlmClient::new(config.llm_api_key.clone(), config.llm_api_url.clone());
        let users = seeded_user_store().await?;
        Ok(Self { llm, users, config })
    }
}
