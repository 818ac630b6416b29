//! Wizard input records: who the gift is for, how they live, and what to spend.

use serde::{Deserialize, Serialize};

/// Recipient profile collected by the first wizard step.
/// Every field tolerates absence on the wire; the prompt builder substitutes placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub recipient_name: String,
    /// Age bracket as chosen in the form, e.g. "25-34".
    pub age: String,
    pub gender: String,
    pub relationship: String,
    pub hobbies: Vec<String>,
    pub occasion: String,
}

/// Personality quiz answers. Values are the quiz option keys
/// (`homebody`, `creative`, `experiential`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizAnswers {
    pub lifestyle: String,
    pub personality: String,
    pub interests: Vec<String>,
    pub gift_style: String,
}

/// Spending range in whole dollars (fractional values are accepted).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub min: f64,
    pub max: f64,
}

/// A named budget range offered by the budget step.
#[derive(Debug, Clone, Copy)]
pub struct BudgetPreset {
    pub label: &'static str,
    pub description: &'static str,
    pub budget: Budget,
}

pub const SLIDER_MIN: f64 = 5.0;
pub const SLIDER_MAX: f64 = 500.0;
/// Width of the range derived from a slider position.
const SLIDER_SPAN: f64 = 20.0;

impl Budget {
    pub const PRESETS: [BudgetPreset; 5] = [
        BudgetPreset {
            label: "Small & Sweet",
            description: "Thoughtful gifts under $20",
            budget: Budget { min: 5.0, max: 20.0 },
        },
        BudgetPreset {
            label: "Just Right",
            description: "Perfect balance of quality and value",
            budget: Budget { min: 20.0, max: 50.0 },
        },
        BudgetPreset {
            label: "Special Occasion",
            description: "For those meaningful moments",
            budget: Budget { min: 50.0, max: 100.0 },
        },
        BudgetPreset {
            label: "Premium Choice",
            description: "High-quality, lasting gifts",
            budget: Budget { min: 100.0, max: 250.0 },
        },
        BudgetPreset {
            label: "Luxury Experience",
            description: "Exceptional and memorable",
            budget: Budget { min: 250.0, max: 500.0 },
        },
    ];

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Budget for a custom slider position: the slider value is the ceiling,
    /// the floor sits $20 below it but never under the slider minimum.
    pub fn from_slider(value: f64) -> Self {
        let max = value.clamp(SLIDER_MIN, SLIDER_MAX);
        Self {
            min: (max - SLIDER_SPAN).max(SLIDER_MIN),
            max,
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }

    /// Checks the bounds are finite, non-negative and ordered.
    pub fn validate(&self) -> Result<(), String> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err("budget bounds must be finite numbers".to_string());
        }
        if self.min < 0.0 {
            return Err("budget.min cannot be negative".to_string());
        }
        if self.min > self.max {
            return Err(format!(
                "budget.min ({}) cannot exceed budget.max ({})",
                self.min, self.max
            ));
        }
        Ok(())
    }
}
