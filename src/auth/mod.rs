pub mod store;

pub use store::{AuthEvent, AuthStore};
