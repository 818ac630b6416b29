pub mod gift;
pub mod profile;
pub mod user;

pub use gift::GiftRecommendation;
pub use profile::{Budget, QuizAnswers, UserProfile};
pub use user::{PublicUser, User};
