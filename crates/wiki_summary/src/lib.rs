use std::time::Duration;

pub mod explainer;
pub mod models;
pub mod sentences;

pub const DEFAULT_SUMMARY_URL: &str =
    "https://api.wikimedia.org/core/v1/wikipedia/de/page/summary";
pub const DEFAULT_USER_AGENT: &str = "WikiStyleSandbox/1.0";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for the external summary source.
#[derive(Debug, Clone)]
pub struct Config {
    /// `wikipedia` (default) or `dummy`.
    pub model_name: Option<String>,
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_name: None,
            base_url: DEFAULT_SUMMARY_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub mod prelude {
    pub use super::Config;
    pub use super::explainer::Explainer;
    pub use super::models::create_model;
    pub use super::sentences::normalize_to_five;
    pub use wiki_core::{Explanation, Result, Error, Summary, SummaryModel};
}

pub use explainer::Explainer;
pub use models::create_model;
pub use sentences::normalize_to_five;
