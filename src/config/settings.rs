#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.resto-reviews.ru".to_string(),
            user_agent: "ReviewDashboard/1.0",
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardSettings {
    pub page_size: usize,
    pub refresh_interval_secs: u64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            page_size: 6,
            refresh_interval_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub dashboard: DashboardSettings,
}

impl AppConfig {
    /// Defaults with the API base URL overridable from the environment
    pub fn new() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var("REVIEW_API_URL") {
            if !base_url.is_empty() {
                config.api.base_url = base_url;
            }
        }
        config
    }
}
