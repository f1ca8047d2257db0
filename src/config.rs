use std::env;
use std::fmt;

use crate::error::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Bearer token for the GitHub API. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: Option<Credential>,
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let github_token = lookup("GITHUB_TOKEN")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(Credential::new);

        let api_base_url = match lookup("GITHUB_API_URL") {
            Some(url) if !url.trim().is_empty() => {
                let url = url.trim().trim_end_matches('/');
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(Error::Config(format!(
                        "GITHUB_API_URL must be an http(s) URL, got {}",
                        url
                    )));
                }
                url.to_string()
            }
            _ => DEFAULT_API_URL.to_string(),
        };

        Ok(Self {
            github_token,
            api_base_url,
        })
    }

    pub fn has_credential(&self) -> bool {
        self.github_token.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_token: None,
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}
