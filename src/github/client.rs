use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;

use crate::config::{Config, Credential};
use crate::error::{Error, Result};
use crate::github::graphql::{parse_contribution_calendar, GraphQLRequest};
use crate::github::rate_limit::log_rate_limit;
use crate::github::source::ProfileSource;
use crate::models::{ContributionWeek, UserProfile};

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

impl GitHubClient {
    pub fn new(credential: Option<&Credential>, base_url: impl Into<String>) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(credential) = credential {
            let mut value = header::HeaderValue::from_str(&format!("Bearer {}", credential.token()))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("githubfetch/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.github_token.as_ref(), config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_user(&self, username: &str) -> Result<UserProfile> {
        let url = format!("{}/users/{}", self.base_url, username);
        tracing::info!("Fetching user: {}", username);

        let response = self.client.get(&url).send().await?;
        log_rate_limit(response.headers());

        let status = response.status();
        let body = response.text().await?;
        profile_from_response(status, &body)
    }

    pub async fn get_starred_count(&self, username: &str) -> usize {
        let url = format!("{}/users/{}/starred", self.base_url, username);
        tracing::info!("Fetching starred repositories for: {}", username);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Starred request failed, reporting 0: {}", e);
                return 0;
            }
        };
        log_rate_limit(response.headers());

        let status = response.status();
        match response.text().await {
            Ok(body) => starred_count_from_response(status, &body),
            Err(e) => {
                tracing::debug!("Starred body unreadable, reporting 0: {}", e);
                0
            }
        }
    }

    pub async fn get_contribution_calendar(&self, username: &str) -> Result<Vec<ContributionWeek>> {
        let url = format!("{}/graphql", self.base_url);
        tracing::info!("Fetching contribution calendar for: {}", username);

        let response = self
            .client
            .post(&url)
            .json(&GraphQLRequest::contributions(username))
            .send()
            .await?;
        log_rate_limit(response.headers());

        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            tracing::debug!("GraphQL returned {}", status);
        }

        let weeks = parse_contribution_calendar(&body)?;
        tracing::debug!("Received {} calendar weeks", weeks.len());
        Ok(weeks)
    }
}

#[async_trait]
impl ProfileSource for GitHubClient {
    async fn fetch_profile(&self, username: &str) -> Result<UserProfile> {
        self.get_user(username).await
    }

    async fn fetch_starred_count(&self, username: &str) -> usize {
        self.get_starred_count(username).await
    }

    async fn fetch_contribution_calendar(&self, username: &str) -> Result<Vec<ContributionWeek>> {
        self.get_contribution_calendar(username).await
    }
}

/// Interprets a `GET /users/{username}` response. Anything but 200 is an
/// [`Error::Http`] carrying the API's `message` when the body has one.
pub fn profile_from_response(status: StatusCode, body: &str) -> Result<UserProfile> {
    if status != StatusCode::OK {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_default();
        return Err(Error::Http {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(body)?)
}

/// Interprets a `GET /users/{username}/starred` response. Only the first page
/// is counted, so the result is capped by the API's default page size.
pub fn starred_count_from_response(status: StatusCode, body: &str) -> usize {
    if status != StatusCode::OK {
        tracing::debug!("Starred request returned {}, reporting 0", status);
        return 0;
    }

    match serde_json::from_str::<Vec<serde_json::Value>>(body) {
        Ok(items) => items.len(),
        Err(e) => {
            tracing::debug!("Starred body is not a list, reporting 0: {}", e);
            0
        }
    }
}
