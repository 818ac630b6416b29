//! Gift generation pipeline: validate → build prompt → gateway call → parse.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::gifts::parser::parse_recommendations;
use crate::gifts::prompt_builder::build_gift_prompt;
use crate::llm_client::prompts::GIFT_ASSISTANT_SYSTEM;
use crate::llm_client::LlmClient;
use crate::models::{Budget, GiftRecommendation, QuizAnswers, UserProfile};

/// Body of `POST /api/generate-gifts`. Profile and budget are required, the quiz is not.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateGiftsRequest {
    #[serde(default)]
    pub user_profile: Option<UserProfile>,
    #[serde(default)]
    pub quiz_answers: Option<QuizAnswers>,
    #[serde(default)]
    pub budget: Option<Budget>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateGiftsResponse {
    pub recommendations: Vec<GiftRecommendation>,
}

/// Checks the required fields and returns them borrowed.
pub fn validate_request(
    request: &GenerateGiftsRequest,
) -> Result<(&UserProfile, &Budget), AppError> {
    let (Some(profile), Some(budget)) = (&request.user_profile, &request.budget) else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };
    budget.validate().map_err(AppError::Validation)?;
    Ok((profile, budget))
}

/// Runs the full pipeline for one request.
/// Gateway failures propagate; an unparseable reply yields an empty list.
pub async fn generate_recommendations(
    llm: &LlmClient,
    request: &GenerateGiftsRequest,
) -> Result<Vec<GiftRecommendation>, AppError> {
    let (profile, budget) = validate_request(request)?;

    let prompt = build_gift_prompt(profile, request.quiz_answers.as_ref(), budget);
    let reply = llm.call_text(&prompt, GIFT_ASSISTANT_SYSTEM).await?;
    let recommendations = parse_recommendations(&reply);

    info!(
        "Generated {} recommendations (budget ${}-${})",
        recommendations.len(),
        budget.min,
        budget.max
    );

    Ok(recommendations)
}
