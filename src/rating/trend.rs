use crate::domain::models::{StatsSnapshot, StatsTrends};

/// Percentage change between two values, rounded to the nearest integer.
/// A zero or absent baseline reports 0 instead of infinity.
pub fn trend_percent(current: f64, previous: f64) -> i64 {
    if previous == 0.0 || !previous.is_finite() {
        return 0;
    }
    (((current - previous) / previous) * 100.0).round() as i64
}

/// Deltas between the current snapshot and the previous one. The previous
/// snapshot lives only long enough for this comparison; with none yet taken
/// every trend is flat.
pub fn compute_trends(current: &StatsSnapshot, previous: Option<&StatsSnapshot>) -> StatsTrends {
    let Some(previous) = previous else {
        return StatsTrends::default();
    };

    StatsTrends {
        total_reviews: trend_percent(current.total_reviews as f64, previous.total_reviews as f64),
        average_rating: trend_percent(current.average_rating, previous.average_rating),
        pending_reviews: trend_percent(
            current.pending_reviews as f64,
            previous.pending_reviews as f64,
        ),
    }
}
