//! Response parser — turns the model's free-text reply into gift records.
//!
//! Malformed model output degrades to an empty list; it never fails the request.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::llm_client::strip_json_fences;
use crate::models::GiftRecommendation;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("reply is not JSON and contains no [...] span")]
    NoArray,

    #[error("embedded [...] span is not valid JSON: {0}")]
    InvalidEmbedded(#[source] serde_json::Error),

    #[error("reply is JSON but not an array")]
    NotAnArray,
}

fn array_span_regex() -> &'static Regex {
    // Greedy and dot-matches-newline: first '[' through last ']'.
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\[.*\]").expect("Invalid array span regex pattern"))
}

/// Parses an LLM reply into gifts, returning an empty list when nothing usable is found.
pub fn parse_recommendations(text: &str) -> Vec<GiftRecommendation> {
    match extract_gift_array(text) {
        Ok(items) => decode_gifts(items),
        Err(e) => {
            warn!("Could not parse gift recommendations from LLM reply: {e}");
            Vec::new()
        }
    }
}

/// Strict parse of the whole reply first, then the first `[...]` span.
pub fn extract_gift_array(text: &str) -> Result<Vec<Value>, ParseError> {
    let stripped = strip_json_fences(text);

    // Valid JSON that wraps the array, e.g. {"gifts": [...]}, falls through to the span match.
    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(stripped) {
        return Ok(items);
    }

    let span = array_span_regex()
        .find(stripped)
        .ok_or(ParseError::NoArray)?;

    match serde_json::from_str::<Value>(span.as_str()).map_err(ParseError::InvalidEmbedded)? {
        Value::Array(items) => Ok(items),
        _ => Err(ParseError::NotAnArray),
    }
}

/// Decodes each element independently; non-gift elements are dropped.
fn decode_gifts(items: Vec<Value>) -> Vec<GiftRecommendation> {
    let mut gifts = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<GiftRecommendation>(item) {
            Ok(mut gift) => {
                if gift.id.trim().is_empty() {
                    gift.id = (index + 1).to_string();
                }
                gifts.push(gift);
            }
            Err(e) => warn!("Skipping gift at position {index}: {e}"),
        }
    }
    gifts
}
