use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;

/// Rate limit state reported by GitHub on every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitStatus {
    pub remaining: u32,
    pub reset_at: Option<DateTime<Utc>>,
}

impl RateLimitStatus {
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let remaining = headers
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())?;

        let reset_at = headers
            .get("x-ratelimit-reset")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<i64>().ok())
            .and_then(|ts| DateTime::from_timestamp(ts, 0));

        Some(Self {
            remaining,
            reset_at,
        })
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// Logs the rate limit headers of a response. Nothing waits on them.
pub fn log_rate_limit(headers: &HeaderMap) {
    let Some(status) = RateLimitStatus::from_headers(headers) else {
        return;
    };

    tracing::debug!("Rate limit remaining: {}", status.remaining);
    if status.is_exhausted() {
        match status.reset_at {
            Some(reset_at) => tracing::warn!(
                "GitHub rate limit exhausted, resets at {}",
                reset_at.format("%Y-%m-%d %H:%M:%S UTC")
            ),
            None => tracing::warn!("GitHub rate limit exhausted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_parse_rate_limit_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("0"));
        headers.insert("x-ratelimit-reset", HeaderValue::from_static("1700000000"));

        let status = RateLimitStatus::from_headers(&headers).unwrap();
        assert!(status.is_exhausted());
        assert_eq!(status.reset_at.unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_missing_headers() {
        assert!(RateLimitStatus::from_headers(&HeaderMap::new()).is_none());
    }
}
