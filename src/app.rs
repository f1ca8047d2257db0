use std::io::Write;

use crate::error::Result;
use crate::github::ProfileSource;
use crate::render::{format_heatmap, format_profile, AvatarDisplay, Palette};

pub const MISSING_TOKEN_WARNING: &str = "Warning: GITHUB_TOKEN not set. Skipping heatmap.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatmapOutcome {
    NotRequested,
    Shown,
    SkippedNoCredential,
}

/// Sequences one invocation: profile, starred count, avatar, card, then the
/// optional heatmap.
pub struct App<'a> {
    source: &'a dyn ProfileSource,
    avatar: &'a dyn AvatarDisplay,
    palette: &'a Palette,
    has_credential: bool,
}

impl<'a> App<'a> {
    pub fn new(
        source: &'a dyn ProfileSource,
        avatar: &'a dyn AvatarDisplay,
        palette: &'a Palette,
        has_credential: bool,
    ) -> Self {
        Self {
            source,
            avatar,
            palette,
            has_credential,
        }
    }

    pub async fn run<W: Write>(
        &self,
        username: &str,
        heatmap: bool,
        out: &mut W,
    ) -> Result<HeatmapOutcome> {
        let profile = self.source.fetch_profile(username).await?;
        let starred_count = self.source.fetch_starred_count(username).await;

        if profile.avatar_url.is_empty() {
            tracing::warn!("No avatar URL for {}, skipping avatar", username);
        } else {
            out.flush()?;
            self.avatar.show(&profile.avatar_url).await?;
        }

        write!(
            out,
            "{}",
            format_profile(&profile, starred_count, username, self.palette)
        )?;

        if !heatmap {
            return Ok(HeatmapOutcome::NotRequested);
        }

        if !self.has_credential {
            writeln!(out, "{}", self.palette.warning(MISSING_TOKEN_WARNING))?;
            return Ok(HeatmapOutcome::SkippedNoCredential);
        }

        let weeks = self.source.fetch_contribution_calendar(username).await?;
        write!(out, "{}", format_heatmap(&weeks, self.palette))?;
        out.flush()?;

        Ok(HeatmapOutcome::Shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::{ContributionWeek, UserProfile};
    use crate::render::heatmap::HEATMAP_TITLE;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FakeSource {
        profile: Option<UserProfile>,
        starred: usize,
        calls: Mutex<Vec<&'static str>>,
    }

    impl FakeSource {
        fn with_profile(json: &str) -> Self {
            Self {
                profile: Some(serde_json::from_str(json).unwrap()),
                starred: 3,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn not_found() -> Self {
            Self {
                profile: None,
                starred: 0,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ProfileSource for FakeSource {
        async fn fetch_profile(&self, _username: &str) -> Result<UserProfile> {
            self.calls.lock().unwrap().push("profile");
            self.profile.clone().ok_or_else(|| Error::Http {
                status: 404,
                message: "Not Found".to_string(),
            })
        }

        async fn fetch_starred_count(&self, _username: &str) -> usize {
            self.calls.lock().unwrap().push("starred");
            self.starred
        }

        async fn fetch_contribution_calendar(&self, _username: &str) -> Result<Vec<ContributionWeek>> {
            self.calls.lock().unwrap().push("calendar");
            Ok(vec![ContributionWeek::from_counts([0, 1, 3, 6, 10, 0, 2])])
        }
    }

    #[derive(Default)]
    struct FakeAvatar {
        missing: bool,
        shown: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AvatarDisplay for FakeAvatar {
        async fn show(&self, image_url: &str) -> Result<()> {
            if self.missing {
                return Err(Error::MissingDependency {
                    program: "kitten".to_string(),
                });
            }
            self.shown.lock().unwrap().push(image_url.to_string());
            Ok(())
        }
    }

    const ALICE: &str = r#"{"login":"alice","public_repos":5,"followers":10,"following":2,"avatar_url":"https://avatars.example/alice"}"#;

    async fn run_app(
        source: &FakeSource,
        avatar: &FakeAvatar,
        has_credential: bool,
        heatmap: bool,
    ) -> (Result<HeatmapOutcome>, String) {
        let palette = Palette::default();
        let app = App::new(source, avatar, &palette, has_credential);
        let mut out = Vec::new();
        let result = app.run("alice", heatmap, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_profile_only() {
        let source = FakeSource::with_profile(ALICE);
        let avatar = FakeAvatar::default();

        let (result, output) = run_app(&source, &avatar, false, false).await;
        assert_eq!(result.unwrap(), HeatmapOutcome::NotRequested);
        assert_eq!(source.calls(), vec!["profile", "starred"]);
        assert_eq!(*avatar.shown.lock().unwrap(), vec!["https://avatars.example/alice"]);
        assert!(output.contains("alice@github.com"));
        assert!(output.contains("N/A"));
        assert!(output.contains("Not Provided"));
        assert!(!output.contains(HEATMAP_TITLE));
    }

    #[tokio::test]
    async fn test_heatmap_without_credential_is_skipped() {
        let source = FakeSource::with_profile(ALICE);
        let avatar = FakeAvatar::default();

        let (result, output) = run_app(&source, &avatar, false, true).await;
        assert_eq!(result.unwrap(), HeatmapOutcome::SkippedNoCredential);
        assert!(!source.calls().contains(&"calendar"));
        assert!(output.contains(MISSING_TOKEN_WARNING));
        assert!(!output.contains(HEATMAP_TITLE));
    }

    #[tokio::test]
    async fn test_heatmap_with_credential() {
        let source = FakeSource::with_profile(ALICE);
        let avatar = FakeAvatar::default();

        let (result, output) = run_app(&source, &avatar, true, true).await;
        assert_eq!(result.unwrap(), HeatmapOutcome::Shown);
        assert_eq!(source.calls(), vec!["profile", "starred", "calendar"]);
        assert!(output.contains(HEATMAP_TITLE));
        assert!(!output.contains(MISSING_TOKEN_WARNING));
    }

    #[tokio::test]
    async fn test_profile_error_stops_run() {
        let source = FakeSource::not_found();
        let avatar = FakeAvatar::default();

        let (result, output) = run_app(&source, &avatar, true, true).await;
        assert_eq!(result.unwrap_err().status(), Some(404));
        assert_eq!(source.calls(), vec!["profile"]);
        assert!(avatar.shown.lock().unwrap().is_empty());
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_missing_avatar_tool_is_fatal() {
        let source = FakeSource::with_profile(ALICE);
        let avatar = FakeAvatar {
            missing: true,
            ..Default::default()
        };

        let (result, output) = run_app(&source, &avatar, true, true).await;
        assert!(matches!(result, Err(Error::MissingDependency { .. })));
        assert!(!source.calls().contains(&"calendar"));
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_empty_avatar_url_skips_display() {
        let source =
            FakeSource::with_profile(r#"{"login":"alice","public_repos":5,"followers":10,"following":2}"#);
        let avatar = FakeAvatar {
            missing: true,
            ..Default::default()
        };

        let (result, output) = run_app(&source, &avatar, false, false).await;
        assert_eq!(result.unwrap(), HeatmapOutcome::NotRequested);
        assert!(output.contains("Starred repos:"));
    }
}
