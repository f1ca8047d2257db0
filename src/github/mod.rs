pub mod client;
pub mod graphql;
pub mod rate_limit;
pub mod source;

pub use client::GitHubClient;
pub use rate_limit::RateLimitStatus;
pub use source::ProfileSource;
