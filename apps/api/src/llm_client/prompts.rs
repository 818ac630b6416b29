// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System message sent with every gift generation call.
pub const GIFT_ASSISTANT_SYSTEM: &str = "You are a helpful gift recommendation assistant.";

/// Placeholder for a missing free-text field.
pub const UNKNOWN: &str = "Unknown";

/// Placeholder for an empty list field.
pub const NONE: &str = "None";

/// Placeholder for a missing preference.
pub const ANY: &str = "Any";
