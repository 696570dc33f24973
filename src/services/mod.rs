pub mod dashboard;
pub mod poller;

pub use dashboard::{DashboardService, DashboardState, build_review_page};
pub use poller::Poller;
