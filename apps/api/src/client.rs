//! API client for the wizard front end.
//!
//! Attaches the bearer token when one is held and otherwise proceeds
//! unauthenticated. Recommendation lookups never fail: any error degrades to
//! the static mock catalog, with the reason reported alongside.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::auth::handlers::{AuthResponse, LoginRequest, RegisterRequest};
use crate::gifts::catalog::mock_recommendations;
use crate::gifts::generator::{GenerateGiftsRequest, GenerateGiftsResponse};
use crate::models::{Budget, GiftRecommendation, PublicUser, QuizAnswers, UserProfile};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Where a set of recommendations came from.
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationSource {
    Generated,
    /// Profile or budget missing, so the API was not called.
    Mock,
    /// The API call failed; carries the error shown to the user.
    Fallback { reason: String },
}

#[derive(Debug, Clone)]
pub struct Recommendations {
    pub gifts: Vec<GiftRecommendation>,
    pub source: RecommendationSource,
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn logout(&mut self) {
        self.token = None;
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let request = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body);
        let response = self.authorize(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    /// Logs in and keeps the issued token for later requests.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<PublicUser, ClientError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: AuthResponse = self.post_json("/api/auth/login", &body).await?;
        self.token = Some(response.token);
        Ok(response.user)
    }

    /// Registers and keeps the issued token for later requests.
    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<PublicUser, ClientError> {
        let body = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        };
        let response: AuthResponse = self.post_json("/api/auth/register", &body).await?;
        self.token = Some(response.token);
        Ok(response.user)
    }

    /// Calls `/api/generate-gifts` without any fallback.
    pub async fn generate_gifts(
        &self,
        request: &GenerateGiftsRequest,
    ) -> Result<Vec<GiftRecommendation>, ClientError> {
        let response: GenerateGiftsResponse =
            self.post_json("/api/generate-gifts", request).await?;
        Ok(response.recommendations)
    }

    /// Results for the final wizard step.
    pub async fn recommendations(
        &self,
        profile: Option<&UserProfile>,
        quiz: Option<&QuizAnswers>,
        budget: Option<&Budget>,
    ) -> Recommendations {
        let (Some(profile), Some(budget)) = (profile, budget) else {
            return Recommendations {
                gifts: mock_recommendations(budget),
                source: RecommendationSource::Mock,
            };
        };

        let request = GenerateGiftsRequest {
            user_profile: Some(profile.clone()),
            quiz_answers: quiz.cloned(),
            budget: Some(*budget),
        };

        match self.generate_gifts(&request).await {
            Ok(gifts) => Recommendations {
                gifts,
                source: RecommendationSource::Generated,
            },
            Err(e) => {
                warn!("Gift generation failed, using mock recommendations: {e}");
                Recommendations {
                    gifts: mock_recommendations(Some(budget)),
                    source: RecommendationSource::Fallback {
                        reason: e.to_string(),
                    },
                }
            }
        }
    }
}
