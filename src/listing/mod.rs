pub mod filter;
pub mod paginate;
pub mod sort;

pub use filter::{ReviewFilter, StatusFilter, filter_reviews};
pub use paginate::{Page, paginate};
pub use sort::{SortDirection, SortField, sort_reviews};
