pub mod client;
pub mod error;

pub use client::PlatformClient;
pub use error::ApiError;
