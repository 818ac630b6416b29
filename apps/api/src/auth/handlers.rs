//! Axum route handlers for the mock auth API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::optional_user;
use crate::errors::AppError;
use crate::models::{PublicUser, User};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: PublicUser,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: PublicUser,
}

const INVALID_CREDENTIALS: &str = "Invalid credentials";

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/auth/register
///
/// Creates an account in the in-memory table and issues a bearer token.
pub async fn handle_register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let Json(request) = payload?;
    let email = request.email.trim().to_string();
    let name = request.name.trim().to_string();
    if email.is_empty() || request.password.is_empty() || name.is_empty() {
        return Err(AppError::Validation(
            "Email, password, and name are required".to_string(),
        ));
    }

    if state.users.find_by_email(&email).await.is_some() {
        return Err(AppError::Conflict("User already exists".to_string()));
    }

    let password = request.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    let user = state
        .users
        .insert(User {
            id: Uuid::new_v4(),
            email,
            name,
            password_hash,
            created_at: Utc::now(),
        })
        .await?;

    let token = state.users.issue_token(user.id).await;
    info!("Registered user {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User created successfully".to_string(),
            token,
            user: PublicUser::from(&user),
        }),
    ))
}

/// POST /api/auth/login
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn handle_login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AppError> {
    let Json(request) = payload?;
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(AppError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let user = state
        .users
        .find_by_email(&request.email)
        .await
        .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    let password = request.password;
    let stored_hash = user.password_hash.clone();
    let valid = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|e| AppError::Internal(e.into()))?;
    if !valid {
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    let token = state.users.issue_token(user.id).await;
    info!("User {} logged in", user.id);

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: PublicUser::from(&user),
    }))
}

/// GET /api/auth/me
///
/// Returns the user behind the bearer token.
pub async fn handle_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MeResponse>, AppError> {
    let user = optional_user(&state, &headers)
        .await
        .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

    Ok(Json(MeResponse {
        user: PublicUser::from(&user),
    }))
}
