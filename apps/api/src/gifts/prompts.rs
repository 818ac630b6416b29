// All LLM prompt constants for the gift generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Number of gifts the model is asked for.
pub const GIFT_COUNT: usize = 6;

/// Gift generation prompt template.
/// Replace: {gift_count}, {recipient_name}, {age}, {gender}, {relationship}, {hobbies},
///          {occasion}, {lifestyle}, {personality}, {interests}, {gift_style},
///          {budget_min}, {budget_max}
pub const GIFT_PROMPT_TEMPLATE: &str = r#"You are a creative gift recommendation assistant.

Given the following recipient information, suggest {gift_count} unique, thoughtful, and diverse gift ideas.
Each gift must:
- Fit the recipient's interests, personality, and occasion.
- Be within the specified budget.
- Be from a different category (e.g., tech, experience, personalized, wellness, etc.).
- Be creative and not generic.
- Include a short, compelling reason for the choice.

Respond ONLY with a JSON array in this format:
[
  {
    "name": "Gift Name",
    "price": 45,
    "description": "Short description of the gift.",
    "reason": "Why this is a great fit for the recipient.",
    "category": "Category",
    "tags": ["tag1", "tag2", "tag3"]
  },
  ...
]

Example input:
Recipient: Sarah
Age: 25
Gender: Female
Relationship: Friend
Hobbies: Music, Art
Occasion: Birthday
Lifestyle: Social
Personality: Creative
Interests: Music, Art
Gift Style: Unique
Budget: $20 - $50

Example output:
[
  {
    "name": "Custom Song Portrait",
    "price": 40,
    "description": "A digital portrait of Sarah created by an artist, inspired by her favorite song.",
    "reason": "Combines her love for music and art in a personalized way.",
    "category": "Personalized Art",
    "tags": ["music", "art", "personalized"]
  }
]

Now, here is the recipient:
Recipient: {recipient_name}
Age: {age}
Gender: {gender}
Relationship: {relationship}
Hobbies: {hobbies}
Occasion: {occasion}
Lifestyle: {lifestyle}
Personality: {personality}
Interests: {interests}
Gift Style: {gift_style}
Budget: ${budget_min} - ${budget_max}"#;
