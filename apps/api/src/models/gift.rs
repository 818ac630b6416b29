use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single gift suggestion, from the mock catalog or parsed out of an LLM reply.
/// Only `name` is required; every other field tolerates `null` and loosely typed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftRecommendation {
    /// Filled from the list position when the source omits it.
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub reason: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_rating",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<f32>,
    #[serde(
        default,
        deserialize_with = "lenient_reviews",
        skip_serializing_if = "Option::is_none"
    )]
    pub reviews: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<String>,
}

fn number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?").expect("Invalid number regex pattern"))
}

/// First number in free text, ignoring thousands separators: `"$1,200 - $1,500"` → 1200.
fn first_number(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|c| *c != ',').collect();
    number_regex()
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Scalars become their text form; `null`, arrays and objects become empty.
fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn value_to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => first_number(s),
        _ => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_text(Value::deserialize(deserializer)?))
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = value_to_text(Value::deserialize(deserializer)?);
    Ok((!text.is_empty()).then_some(text))
}

/// Accepts `45`, `"$45.00"`, `"1,200"` and ranges like `"$30-$40"` (lower bound).
/// Anything without a number is priced at 0.
fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_number(&Value::deserialize(deserializer)?).unwrap_or(0.0))
}

/// Accepts an array of scalars or one comma-separated string.
fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags: Vec<String> = match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(value_to_text).collect(),
        Value::String(s) => s.split(',').map(|t| t.trim().to_string()).collect(),
        _ => Vec::new(),
    };
    Ok(tags.into_iter().filter(|t| !t.is_empty()).collect())
}

fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_number(&Value::deserialize(deserializer)?).map(|r| r as f32))
}

fn lenient_reviews<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_number(&Value::deserialize(deserializer)?)
        .filter(|n| *n >= 0.0)
        .map(|n| n.min(u32::MAX as f64) as u32))
}
