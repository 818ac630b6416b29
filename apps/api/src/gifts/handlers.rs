//! Axum route handler for gift generation.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    Json,
};
use tracing::info;

use crate::auth::token::optional_user;
use crate::errors::AppError;
use crate::gifts::generator::{
    generate_recommendations, GenerateGiftsRequest, GenerateGiftsResponse,
};
use crate::state::AppState;

/// POST /api/generate-gifts
///
/// Builds the gift prompt from the wizard input, calls the LLM once and returns
/// whatever gifts could be parsed from the reply. Authentication is optional.
pub async fn handle_generate_gifts(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<GenerateGiftsRequest>, JsonRejection>,
) -> Result<Json<GenerateGiftsResponse>, AppError> {
    let Json(request) = payload?;

    match optional_user(&state, &headers).await {
        Some(user) => info!("Gift generation requested by user {}", user.id),
        None => info!("Gift generation requested anonymously"),
    }

    let recommendations = generate_recommendations(&state.llm, &request).await?;

    Ok(Json(GenerateGiftsResponse { recommendations }))
}
