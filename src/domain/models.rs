use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default author shown when the source payload carries no usable name
pub const ANONYMOUS_AUTHOR: &str = "Анонимный пользователь";

/// Default restaurant label for records missing the restaurant name
pub const UNKNOWN_RESTAURANT: &str = "Ресторан";

/// Review subtype, decides which category set applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewKind {
    InRestaurant,
    Delivery,
}

impl ReviewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewKind::InRestaurant => "inRestaurant",
            ReviewKind::Delivery => "delivery",
        }
    }
}

/// Evaluation dimension of a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Food,
    Service,
    Atmosphere,
    Price,
    Cleanliness,
    DeliverySpeed,
    DeliveryQuality,
}

/// Category set for in-restaurant reviews
pub const IN_RESTAURANT_CATEGORIES: [Category; 5] = [
    Category::Food,
    Category::Service,
    Category::Atmosphere,
    Category::Price,
    Category::Cleanliness,
];

/// Category set for delivery reviews
pub const DELIVERY_CATEGORIES: [Category; 4] = [
    Category::Food,
    Category::Price,
    Category::DeliverySpeed,
    Category::DeliveryQuality,
];

impl Category {
    /// JSON key used by the backend payloads
    pub fn key(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Service => "service",
            Category::Atmosphere => "atmosphere",
            Category::Price => "price",
            Category::Cleanliness => "cleanliness",
            Category::DeliverySpeed => "deliverySpeed",
            Category::DeliveryQuality => "deliveryQuality",
        }
    }

    /// Display label for dashboard output
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Food => "Кухня",
            Category::Service => "Сервис",
            Category::Atmosphere => "Атмосфера",
            Category::Price => "Цена/качество",
            Category::Cleanliness => "Чистота",
            Category::DeliverySpeed => "Скорость доставки",
            Category::DeliveryQuality => "Качество доставки",
        }
    }

    pub fn set_for(kind: ReviewKind) -> &'static [Category] {
        match kind {
            ReviewKind::InRestaurant => &IN_RESTAURANT_CATEGORIES,
            ReviewKind::Delivery => &DELIVERY_CATEGORIES,
        }
    }
}

/// Canonical review, the single shape every view consumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub text: String,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: ReviewKind,
    pub ratings: BTreeMap<Category, f64>,
    pub responded: bool,
    pub response: Option<String>,
    pub author_name: String,
    pub restaurant_name: String,
}

/// Aggregated average for one evaluation dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRating {
    pub criteria: Category,
    pub name: String,
    pub value: f64,
    pub count: usize,
    #[serde(rename = "type")]
    pub kind: ReviewKind,
}

/// Point-in-time dashboard counters, recomputed on every refresh
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub total_reviews: usize,
    pub responded_reviews: usize,
    pub pending_reviews: usize,
    pub average_rating: f64,
    pub total_restaurants: usize,
}

/// Percentage deltas between two consecutive snapshots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsTrends {
    pub total_reviews: i64,
    pub average_rating: i64,
    pub pending_reviews: i64,
}

/// Platform user as returned by the admin endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub role: String,
    #[serde(default)]
    pub blocked: bool,
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Restaurant summary as returned by `GET /restaurants`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}
