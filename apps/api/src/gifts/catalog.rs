//! Static mock recommendations, shown when no profile/budget is available
//! or when gift generation fails.

use crate::gifts::prompts::GIFT_COUNT;
use crate::models::{Budget, GiftRecommendation};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=200&width=200";

struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    price: f64,
    description: &'static str,
    reason: &'static str,
    category: &'static str,
    tags: &'static [&'static str],
    rating: f32,
    reviews: u32,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "1",
        name: "Personalized Photo Album",
        price: 35.0,
        description: "Custom photo album with beautiful leather binding and personalized engraving",
        reason: "Perfect for someone sentimental who values memories and personal connections",
        category: "Personalized",
        tags: &["Sentimental", "Personalized", "Memories"],
        rating: 4.8,
        reviews: 127,
    },
    CatalogEntry {
        id: "2",
        name: "Wireless Charging Station",
        price: 45.0,
        description: "Sleek bamboo wireless charging station for multiple devices",
        reason: "Great for tech-savvy individuals who appreciate practical and modern solutions",
        category: "Tech",
        tags: &["Practical", "Tech", "Modern"],
        rating: 4.6,
        reviews: 89,
    },
    CatalogEntry {
        id: "3",
        name: "Artisan Coffee Subscription",
        price: 60.0,
        description: "3-month subscription to premium artisan coffee from around the world",
        reason: "Perfect for coffee lovers who enjoy trying new experiences and flavors",
        category: "Experience",
        tags: &["Experience", "Gourmet", "Subscription"],
        rating: 4.9,
        reviews: 203,
    },
    CatalogEntry {
        id: "4",
        name: "Meditation Cushion Set",
        price: 55.0,
        description: "Organic cotton meditation cushion with matching mat for mindfulness practice",
        reason: "Ideal for wellness enthusiasts who value self-care and mindfulness",
        category: "Wellness",
        tags: &["Wellness", "Mindfulness", "Self-care"],
        rating: 4.7,
        reviews: 156,
    },
    CatalogEntry {
        id: "5",
        name: "Cooking Class Experience",
        price: 85.0,
        description: "Hands-on cooking class with a professional chef in your city",
        reason: "Great for food lovers who enjoy learning new skills and social experiences",
        category: "Experience",
        tags: &["Experience", "Learning", "Social"],
        rating: 4.8,
        reviews: 94,
    },
    CatalogEntry {
        id: "6",
        name: "Smart Plant Monitor",
        price: 40.0,
        description: "Bluetooth plant monitor that tracks soil moisture, light, and temperature",
        reason: "Perfect for plant lovers who appreciate technology that helps with their hobbies",
        category: "Tech",
        tags: &["Tech", "Gardening", "Smart Home"],
        rating: 4.5,
        reviews: 78,
    },
];

impl CatalogEntry {
    fn to_recommendation(&self) -> GiftRecommendation {
        GiftRecommendation {
            id: self.id.to_string(),
            name: self.name.to_string(),
            price: self.price,
            description: self.description.to_string(),
            reason: self.reason.to_string(),
            category: self.category.to_string(),
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            image_url: Some(PLACEHOLDER_IMAGE.to_string()),
            rating: Some(self.rating),
            reviews: Some(self.reviews),
            link: Some("#".to_string()),
        }
    }
}

/// Mock gifts priced within the budget (inclusive), or all of them without a budget.
/// At most six are returned.
pub fn mock_recommendations(budget: Option<&Budget>) -> Vec<GiftRecommendation> {
    CATALOG
        .iter()
        .filter(|entry| budget.map_or(true, |b| b.contains(entry.price)))
        .take(GIFT_COUNT)
        .map(CatalogEntry::to_recommendation)
        .collect()
}
