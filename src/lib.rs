pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod render;

pub use app::{App, HeatmapOutcome};
pub use config::{Config, Credential};
pub use error::{Error, Result};
pub use github::{GitHubClient, ProfileSource};
pub use models::{classify, ContributionLevel, ContributionWeek, UserProfile};
pub use render::{AvatarDisplay, KittyIcat, Palette};
