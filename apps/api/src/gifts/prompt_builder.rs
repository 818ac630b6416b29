//! Renders the gift prompt from wizard input.
//!
//! The output is deterministic for a given input, and never contains an empty value:
//! every missing field is replaced with a readable placeholder.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::gifts::prompts::{GIFT_COUNT, GIFT_PROMPT_TEMPLATE};
use crate::llm_client::prompts::{ANY, NONE, UNKNOWN};
use crate::models::{Budget, QuizAnswers, UserProfile};

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").expect("Invalid placeholder regex pattern"))
}

/// Builds the gift generation prompt. `quiz` may be absent or partially filled.
pub fn build_gift_prompt(
    profile: &UserProfile,
    quiz: Option<&QuizAnswers>,
    budget: &Budget,
) -> String {
    let quiz = quiz.cloned().unwrap_or_default();

    let values: HashMap<&str, String> = HashMap::from([
        ("gift_count", GIFT_COUNT.to_string()),
        ("recipient_name", or_placeholder(&profile.recipient_name, UNKNOWN)),
        ("age", or_placeholder(&profile.age, UNKNOWN)),
        ("gender", or_placeholder(&profile.gender, UNKNOWN)),
        ("relationship", or_placeholder(&profile.relationship, UNKNOWN)),
        ("hobbies", join_or_placeholder(&profile.hobbies)),
        ("occasion", or_placeholder(&profile.occasion, UNKNOWN)),
        ("lifestyle", or_placeholder(&quiz.lifestyle, UNKNOWN)),
        ("personality", or_placeholder(&quiz.personality, UNKNOWN)),
        ("interests", join_or_placeholder(&quiz.interests)),
        ("gift_style", or_placeholder(&quiz.gift_style, ANY)),
        ("budget_min", format_amount(budget.min)),
        ("budget_max", format_amount(budget.max)),
    ]);

    // Single pass, so user text that looks like a placeholder is never expanded.
    placeholder_regex()
        .replace_all(GIFT_PROMPT_TEMPLATE, |caps: &Captures| {
            values
                .get(&caps[1])
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        placeholder.to_string()
    } else {
        trimmed.to_string()
    }
}

fn join_or_placeholder(items: &[String]) -> String {
    let joined = items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        NONE.to_string()
    } else {
        joined
    }
}

/// `20.0` renders as `20`, `19.5` as `19.50`.
fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}
