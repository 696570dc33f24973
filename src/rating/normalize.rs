use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

use crate::domain::models::{
    ANONYMOUS_AUTHOR, Category, Review, ReviewKind, UNKNOWN_RESTAURANT,
};

// Alias chains tried in priority order. The canonical field name comes
// first so normalizing an already-canonical record is a no-op.
const ID_ALIASES: [&str; 4] = ["id", "reviewId", "review_id", "_id"];
const TEXT_ALIASES: [&str; 3] = ["text", "comment", "content"];
const RATING_ALIASES: [&str; 3] = ["rating", "overallRating", "overall_rating"];
const DATE_ALIASES: [&str; 3] = ["createdAt", "created_at", "date"];
const AUTHOR_ALIASES: [&str; 5] = ["authorName", "user_name", "userName", "username", "name"];
const RESTAURANT_ALIASES: [&str; 2] = ["restaurantName", "restaurant_name"];
const RESPONSE_ALIASES: [&str; 4] = ["response", "managerResponse", "manager_response", "reply"];

/// Normalize a batch of raw review payloads, dropping records that carry
/// neither a comment body nor an overall rating
pub fn normalize_reviews(raw: &[Value]) -> Vec<Review> {
    raw.iter().filter_map(normalize_review).collect()
}

/// Convert one raw review record of unknown shape into the canonical form.
/// Returns `None` when the record has nothing displayable.
pub fn normalize_review(raw: &Value) -> Option<Review> {
    let text = first_string(raw, &TEXT_ALIASES).unwrap_or_default();
    let rating = first_number(raw, &RATING_ALIASES);

    if text.is_empty() && rating.is_none() {
        return None;
    }

    let rating = rating.unwrap_or(0.0);
    let kind = detect_kind(raw);

    Some(Review {
        id: extract_id(raw),
        text,
        rating,
        created_at: extract_created_at(raw),
        kind,
        ratings: extract_category_ratings(raw, kind, rating),
        responded: extract_responded(raw),
        response: first_string(raw, &RESPONSE_ALIASES),
        author_name: extract_author(raw),
        restaurant_name: extract_restaurant(raw),
    })
}

/// A record is a delivery review if any of the known markers says so
fn detect_kind(raw: &Value) -> ReviewKind {
    let marked_delivery = raw.get("type").and_then(Value::as_str) == Some("delivery")
        || raw.get("isDelivery").and_then(Value::as_bool) == Some(true)
        || raw.get("delivery").and_then(Value::as_bool) == Some(true);

    if marked_delivery {
        ReviewKind::Delivery
    } else {
        ReviewKind::InRestaurant
    }
}

/// Per-category scores: nested `ratings.<key>` wins over the flat
/// `<key>_rating` field. Zero, missing or non-numeric values fall back to
/// the overall rating so no category is left at a misleading zero.
fn extract_category_ratings(
    raw: &Value,
    kind: ReviewKind,
    overall: f64,
) -> BTreeMap<Category, f64> {
    let mut ratings = BTreeMap::new();

    for &category in Category::set_for(kind) {
        let nested = raw
            .get("ratings")
            .and_then(|r| r.get(category.key()))
            .and_then(value_as_f64);
        let flat = || {
            first_number(
                raw,
                &[
                    format!("{}_rating", category.key()).as_str(),
                    format!("{}_rating", snake_key(category)).as_str(),
                ],
            )
        };

        let value = match nested.or_else(flat) {
            Some(v) if v.is_finite() && v > 0.0 => v,
            _ => overall,
        };

        ratings.insert(category, value);
    }

    ratings
}

fn snake_key(category: Category) -> &'static str {
    match category {
        Category::DeliverySpeed => "delivery_speed",
        Category::DeliveryQuality => "delivery_quality",
        other => other.key(),
    }
}

fn extract_id(raw: &Value) -> String {
    for alias in ID_ALIASES {
        match raw.get(alias) {
            Some(Value::String(s)) if !s.is_empty() => return s.clone(),
            Some(Value::Number(n)) => return n.to_string(),
            _ => {}
        }
    }
    String::new()
}

fn extract_author(raw: &Value) -> String {
    first_string(raw, &AUTHOR_ALIASES)
        .or_else(|| nested_name(raw, "author"))
        .or_else(|| nested_name(raw, "user"))
        .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string())
}

fn extract_restaurant(raw: &Value) -> String {
    first_string(raw, &RESTAURANT_ALIASES)
        .or_else(|| nested_name(raw, "restaurant"))
        .unwrap_or_else(|| UNKNOWN_RESTAURANT.to_string())
}

fn extract_responded(raw: &Value) -> bool {
    if let Some(flag) = raw.get("responded").and_then(Value::as_bool) {
        return flag;
    }
    first_string(raw, &RESPONSE_ALIASES).is_some()
}

/// Timestamps arrive as RFC-3339 strings, naive datetime strings or epoch
/// numbers. Undated records sort to the bottom of newest-first views.
fn extract_created_at(raw: &Value) -> DateTime<Utc> {
    DATE_ALIASES
        .iter()
        .filter_map(|alias| raw.get(alias))
        .find_map(parse_timestamp)
        .unwrap_or(DateTime::UNIX_EPOCH)
}

fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_timestamp_str(s),
        Value::Number(n) => n.as_i64().map(epoch_to_datetime),
        _ => None,
    }
}

fn parse_timestamp_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.and_utc());
        }
    }

    if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

/// Values past the year 33658 cannot be seconds; treat them as milliseconds
fn epoch_to_datetime(epoch: i64) -> DateTime<Utc> {
    if epoch.abs() >= 1_000_000_000_000 {
        DateTime::from_timestamp_millis(epoch).unwrap_or(DateTime::UNIX_EPOCH)
    } else {
        DateTime::from_timestamp(epoch, 0).unwrap_or(DateTime::UNIX_EPOCH)
    }
}

fn first_string(raw: &Value, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .filter_map(|alias| raw.get(alias))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

fn first_number(raw: &Value, aliases: &[&str]) -> Option<f64> {
    aliases
        .iter()
        .filter_map(|alias| raw.get(alias))
        .find_map(value_as_f64)
}

/// Accepts JSON numbers and numeric strings, mirroring the loose typing of
/// the upstream payloads
fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn nested_name(raw: &Value, field: &str) -> Option<String> {
    raw.get(field)
        .and_then(|v| v.get("name"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
