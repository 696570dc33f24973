pub mod aggregate;
pub mod normalize;
pub mod trend;

pub use aggregate::{aggregate_category_ratings, aggregate_for_kind, compute_snapshot};
pub use normalize::{normalize_review, normalize_reviews};
pub use trend::{compute_trends, trend_percent};
