use serde::{Deserialize, Serialize};

/// Snapshot of `GET /users/{username}`, limited to the fields the card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    #[serde(default)]
    pub public_repos: u32,
    pub bio: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    #[serde(default)]
    pub avatar_url: String,
}

impl UserProfile {
    /// Bio with blank values treated as missing.
    pub fn bio(&self) -> Option<&str> {
        non_blank(self.bio.as_deref())
    }

    pub fn location(&self) -> Option<&str> {
        non_blank(self.location.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_profile() {
        let json = r#"{"login":"alice","public_repos":5,"followers":10,"following":2}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.login, "alice");
        assert_eq!(profile.public_repos, 5);
        assert_eq!(profile.bio(), None);
        assert_eq!(profile.location(), None);
        assert!(profile.avatar_url.is_empty());
    }

    #[test]
    fn test_blank_bio_is_missing() {
        let json = r#"{"login":"bob","bio":"   ","location":"Berlin"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.bio(), None);
        assert_eq!(profile.location(), Some("Berlin"));
    }
}
