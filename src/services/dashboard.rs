use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::info;

use crate::api::{ApiError, PlatformClient};
use crate::domain::models::{CategoryRating, Review, StatsSnapshot, StatsTrends};
use crate::listing::{Page, ReviewFilter, SortDirection, SortField, filter_reviews, paginate, sort_reviews};
use crate::rating::{aggregate_category_ratings, compute_snapshot, compute_trends, normalize_reviews};

/// Everything one dashboard refresh produces. Local state is disposable;
/// the backend stays the source of truth.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub reviews: Vec<Review>,
    pub snapshot: StatsSnapshot,
    pub trends: StatsTrends,
    pub category_ratings: Vec<CategoryRating>,
}

/// Orchestrates fetch, normalize, aggregate for the manager dashboard.
/// Each refresh gets a generation number; a response that finishes after a
/// newer refresh has started is discarded instead of overwriting state.
pub struct DashboardService {
    client: Arc<PlatformClient>,
    previous: Option<StatsSnapshot>,
    generation: Arc<AtomicU64>,
}

impl DashboardService {
    pub fn new(client: Arc<PlatformClient>) -> Self {
        Self {
            client,
            previous: None,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Fetch reviews and restaurants concurrently and rebuild the dashboard
    /// state. Returns `Ok(None)` when a newer refresh superseded this one.
    pub async fn refresh(&mut self) -> Result<Option<DashboardState>, ApiError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let (reviews, restaurants) = tokio::join!(
            self.client.manager_reviews(),
            self.client.list_restaurants(),
        );
        let raw_reviews = reviews?;
        let restaurants = restaurants?;

        if self.generation.load(Ordering::SeqCst) != generation {
            info!("Discarding stale refresh (generation {})", generation);
            return Ok(None);
        }

        let reviews = normalize_reviews(&raw_reviews);
        let snapshot = compute_snapshot(&reviews, restaurants.len());
        let trends = compute_trends(&snapshot, self.previous.as_ref());

        // The previous snapshot only lives long enough for the trend deltas
        self.previous = Some(snapshot);

        Ok(Some(DashboardState {
            category_ratings: aggregate_category_ratings(&reviews),
            reviews,
            snapshot,
            trends,
        }))
    }
}

/// One listed page of reviews: filter, sort, slice, all recomputed from the
/// full collection on every call
pub fn build_review_page(
    reviews: &[Review],
    filter: &ReviewFilter,
    sort_field: SortField,
    sort_direction: SortDirection,
    page: usize,
    page_size: usize,
) -> Page<Review> {
    let mut filtered = filter_reviews(reviews, filter);
    sort_reviews(&mut filtered, sort_field, sort_direction);

    let page = paginate(&filtered, page, page_size);
    Page {
        items: page.items.into_iter().cloned().collect(),
        page: page.page,
        total_pages: page.total_pages,
        total_items: page.total_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::normalize_review;
    use serde_json::json;

    fn sample_reviews() -> Vec<Review> {
        (1..=8)
            .map(|i| {
                normalize_review(&json!({
                    "id": i,
                    "text": format!("отзыв {i}"),
                    "rating": (i % 5 + 1) as f64,
                    "created_at": format!("2024-01-{:02}T00:00:00Z", i),
                    "responded": i % 2 == 0
                }))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn page_pipeline_filters_sorts_and_slices() {
        let reviews = sample_reviews();
        let page = build_review_page(
            &reviews,
            &ReviewFilter::default(),
            SortField::Date,
            SortDirection::Desc,
            1,
            6,
        );
        assert_eq!(page.items.len(), 6);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items[0].id, "8");

        let page = build_review_page(
            &reviews,
            &ReviewFilter::default(),
            SortField::Date,
            SortDirection::Desc,
            2,
            6,
        );
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn page_pipeline_applies_filter_before_slicing() {
        let reviews = sample_reviews();
        let filter = ReviewFilter {
            status: crate::listing::StatusFilter::Responded,
            ..Default::default()
        };
        let page = build_review_page(&reviews, &filter, SortField::Date, SortDirection::Desc, 1, 6);
        assert_eq!(page.total_items, 4);
        assert!(page.items.iter().all(|r| r.responded));
    }
}
