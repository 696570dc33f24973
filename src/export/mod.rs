pub mod csv;

pub use self::csv::export_reviews_csv;
