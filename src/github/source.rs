use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ContributionWeek, UserProfile};

/// The three GitHub lookups the driver needs.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self, username: &str) -> Result<UserProfile>;

    /// Number of starred repositories on the first page. Degrades to 0
    /// instead of failing.
    async fn fetch_starred_count(&self, username: &str) -> usize;

    async fn fetch_contribution_calendar(&self, username: &str) -> Result<Vec<ContributionWeek>>;
}
