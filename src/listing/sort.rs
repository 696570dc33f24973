use std::cmp::Ordering;

use crate::domain::models::Review;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    /// Creation timestamp, the dashboard default
    #[default]
    Date,
    Rating,
    Author,
    Restaurant,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    /// Newest/highest first, the dashboard default
    #[default]
    Desc,
}

/// Sort reviews by one field. String fields compare case-insensitively,
/// numeric and date fields by value.
pub fn sort_reviews(reviews: &mut [&Review], field: SortField, direction: SortDirection) {
    reviews.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare(a: &Review, b: &Review, field: SortField) -> Ordering {
    match field {
        SortField::Date => a.created_at.cmp(&b.created_at),
        SortField::Rating => a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal),
        SortField::Author => compare_str(&a.author_name, &b.author_name),
        SortField::Restaurant => compare_str(&a.restaurant_name, &b.restaurant_name),
    }
}

fn compare_str(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::normalize_review;
    use serde_json::json;

    fn sample_reviews() -> Vec<Review> {
        let raw = vec![
            json!({"id": 1, "text": "a", "rating": 3, "user_name": "борис",
                   "created_at": "2024-01-10T00:00:00Z"}),
            json!({"id": 2, "text": "b", "rating": 5, "user_name": "Анна",
                   "created_at": "2024-03-01T00:00:00Z"}),
            json!({"id": 3, "text": "c", "rating": 1, "user_name": "Вера",
                   "created_at": "2023-12-01T00:00:00Z"}),
        ];
        raw.iter().filter_map(normalize_review).collect()
    }

    fn ids(reviews: &[&Review]) -> Vec<String> {
        reviews.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn sorts_by_date_desc_by_default_settings() {
        let reviews = sample_reviews();
        let mut refs: Vec<&Review> = reviews.iter().collect();
        sort_reviews(&mut refs, SortField::default(), SortDirection::default());
        assert_eq!(ids(&refs), vec!["2", "1", "3"]);
    }

    #[test]
    fn sorts_by_rating_ascending() {
        let reviews = sample_reviews();
        let mut refs: Vec<&Review> = reviews.iter().collect();
        sort_reviews(&mut refs, SortField::Rating, SortDirection::Asc);
        assert_eq!(ids(&refs), vec!["3", "1", "2"]);
    }

    #[test]
    fn author_sort_ignores_case() {
        let reviews = sample_reviews();
        let mut refs: Vec<&Review> = reviews.iter().collect();
        sort_reviews(&mut refs, SortField::Author, SortDirection::Asc);
        assert_eq!(ids(&refs), vec!["2", "1", "3"]);
    }
}
