use crate::domain::models::{Category, CategoryRating, Review, ReviewKind, StatsSnapshot};

/// Neutral midpoint shown for categories with no reviews yet, keeps chart
/// scales stable instead of collapsing to zero
const EMPTY_PARTITION_VALUE: f64 = 3.0;

/// Compute per-category averages for both review kinds.
/// Output is sorted by value descending for display.
pub fn aggregate_category_ratings(reviews: &[Review]) -> Vec<CategoryRating> {
    let mut result = Vec::new();
    result.extend(aggregate_for_kind(reviews, ReviewKind::InRestaurant));
    result.extend(aggregate_for_kind(reviews, ReviewKind::Delivery));
    result.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));
    result
}

/// Average every category of one kind's category set across the matching
/// partition of reviews
pub fn aggregate_for_kind(reviews: &[Review], kind: ReviewKind) -> Vec<CategoryRating> {
    let partition: Vec<&Review> = reviews.iter().filter(|r| r.kind == kind).collect();

    Category::set_for(kind)
        .iter()
        .map(|&category| aggregate_category(&partition, category, kind))
        .collect()
}

fn aggregate_category(partition: &[&Review], category: Category, kind: ReviewKind) -> CategoryRating {
    let value = if partition.is_empty() {
        EMPTY_PARTITION_VALUE
    } else {
        let sum: f64 = partition.iter().map(|r| category_value(r, category)).sum();
        sum / partition.len() as f64
    };

    CategoryRating {
        criteria: category,
        name: category.display_name().to_string(),
        value,
        count: partition.len(),
        kind,
    }
}

/// Normalized reviews always carry every category of their set; the overall
/// rating stands in if one is somehow absent
fn category_value(review: &Review, category: Category) -> f64 {
    review.ratings.get(&category).copied().unwrap_or(review.rating)
}

/// Dashboard counters recomputed on every data refresh
pub fn compute_snapshot(reviews: &[Review], total_restaurants: usize) -> StatsSnapshot {
    let responded = reviews.iter().filter(|r| r.responded).count();
    let average_rating = if reviews.is_empty() {
        0.0
    } else {
        reviews.iter().map(|r| r.rating).sum::<f64>() / reviews.len() as f64
    };

    StatsSnapshot {
        total_reviews: reviews.len(),
        responded_reviews: responded,
        pending_reviews: reviews.len() - responded,
        average_rating,
        total_restaurants,
    }
}
