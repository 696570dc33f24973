use crate::domain::models::{Review, ReviewKind};

/// Response-status predicate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Responded,
}

/// Active filter predicates for a review list. A record is included only
/// when every active predicate passes; defaults leave the list untouched.
#[derive(Debug, Clone, Default)]
pub struct ReviewFilter {
    pub status: StatusFilter,
    /// Overall rating rounded down to a whole star, `None` means all
    pub rating: Option<u8>,
    pub kind: Option<ReviewKind>,
    /// Case-insensitive substring over author, body and restaurant name
    pub search: Option<String>,
}

impl ReviewFilter {
    pub fn matches(&self, review: &Review) -> bool {
        self.matches_status(review)
            && self.matches_rating(review)
            && self.matches_kind(review)
            && self.matches_search(review)
    }

    fn matches_status(&self, review: &Review) -> bool {
        match self.status {
            StatusFilter::All => true,
            StatusFilter::Pending => !review.responded,
            StatusFilter::Responded => review.responded,
        }
    }

    fn matches_rating(&self, review: &Review) -> bool {
        match self.rating {
            Some(stars) => review.rating.floor() as u8 == stars,
            None => true,
        }
    }

    fn matches_kind(&self, review: &Review) -> bool {
        match self.kind {
            Some(kind) => review.kind == kind,
            None => true,
        }
    }

    fn matches_search(&self, review: &Review) -> bool {
        let Some(query) = self.search.as_deref() else {
            return true;
        };
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        review.author_name.to_lowercase().contains(&query)
            || review.text.to_lowercase().contains(&query)
            || review.restaurant_name.to_lowercase().contains(&query)
    }
}

/// Apply the filter to a list, preserving input order
pub fn filter_reviews<'a>(reviews: &'a [Review], filter: &ReviewFilter) -> Vec<&'a Review> {
    reviews.iter().filter(|r| filter.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::normalize_review;
    use serde_json::json;

    fn sample_reviews() -> Vec<Review> {
        let raw = vec![
            json!({"id": 1, "text": "Отличная паста", "rating": 5, "user_name": "Иван",
                   "restaurant_name": "Траттория", "responded": true}),
            json!({"id": 2, "text": "Долгая доставка", "rating": 2, "user_name": "Мария",
                   "restaurant_name": "Суши Бар", "type": "delivery"}),
            json!({"id": 3, "text": "Нормально", "rating": 5, "user_name": "Пётр",
                   "restaurant_name": "Траттория"}),
        ];
        raw.iter().filter_map(normalize_review).collect()
    }

    #[test]
    fn default_filter_returns_everything_in_order() {
        let reviews = sample_reviews();
        let filtered = filter_reviews(&reviews, &ReviewFilter::default());
        assert_eq!(filtered.len(), 3);
        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn predicates_compose_with_and() {
        let reviews = sample_reviews();
        let filter = ReviewFilter {
            status: StatusFilter::Responded,
            rating: Some(5),
            ..Default::default()
        };
        let filtered = filter_reviews(&reviews, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn kind_filter_selects_partition() {
        let reviews = sample_reviews();
        let filter = ReviewFilter {
            kind: Some(ReviewKind::Delivery),
            ..Default::default()
        };
        let filtered = filter_reviews(&reviews, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }

    #[test]
    fn search_is_case_insensitive_over_all_text_fields() {
        let reviews = sample_reviews();
        let filter = ReviewFilter {
            search: Some("траттория".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_reviews(&reviews, &filter).len(), 2);

        let filter = ReviewFilter {
            search: Some("МАРИЯ".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_reviews(&reviews, &filter).len(), 1);

        let filter = ReviewFilter {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_reviews(&reviews, &filter).len(), 3);
    }
}
