use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::notice::NoticeKind;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5072/api";
pub const MAX_BASE_URL_LENGTH: usize = 2048;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ConfigError {
    fn invalid(url: &str, reason: impl Into<String>) -> Self {
        let url = if url.len() <= 100 {
            url.to_string()
        } else {
            format!("{}...", url.chars().take(100).collect::<String>())
        };
        Self::InvalidBaseUrl {
            url,
            reason: reason.into(),
        }
    }
}

/// How long each kind of notice stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeDurations {
    pub info_ms: u64,
    pub success_ms: u64,
    pub error_ms: u64,
}

impl NoticeDurations {
    #[must_use]
    pub const fn for_kind(&self, kind: NoticeKind) -> u64 {
        match kind {
            NoticeKind::Info => self.info_ms,
            NoticeKind::Success => self.success_ms,
            NoticeKind::Error => self.error_ms,
        }
    }
}

impl Default for NoticeDurations {
    fn default() -> Self {
        Self {
            info_ms: NoticeKind::Info.default_duration_ms(),
            success_ms: NoticeKind::Success.default_duration_ms(),
            error_ms: NoticeKind::Error.default_duration_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    api_base: Url,
    pub notice_durations: NoticeDurations,
}

impl Config {
    pub fn with_base_url(raw: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base: parse_base_url(raw)?,
            notice_durations: NoticeDurations::default(),
        })
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    pub fn set_api_base(&mut self, raw: &str) -> Result<(), ConfigError> {
        self.api_base = parse_base_url(raw)?;
        Ok(())
    }

    /// `{base}/jobs`
    #[must_use]
    pub fn jobs_url(&self) -> Url {
        self.endpoint(&["jobs"])
    }

    /// `{base}/jobs/{id}`, with `id` percent-encoded as one segment.
    #[must_use]
    pub fn job_url(&self, id: &str) -> Url {
        self.endpoint(&["jobs", id])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.api_base.clone();
        // parse_base_url rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE_URL)
                .unwrap_or_else(|_| unreachable!("default base URL is valid")),
            notice_durations: NoticeDurations::default(),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::invalid(raw, "URL cannot be empty"));
    }
    if trimmed.len() > MAX_BASE_URL_LENGTH {
        return Err(ConfigError::invalid(
            raw,
            format!("URL exceeds maximum length of {MAX_BASE_URL_LENGTH} bytes"),
        ));
    }

    let mut url = Url::parse(trimmed).map_err(|e| ConfigError::invalid(raw, e.to_string()))?;

    let scheme = url.scheme().to_lowercase();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::invalid(
            raw,
            format!("invalid scheme '{scheme}', only 'http' and 'https' are allowed"),
        ));
    }
    if url.host_str().is_none() || url.cannot_be_a_base() {
        return Err(ConfigError::invalid(raw, "URL must have a host"));
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(ConfigError::invalid(raw, "credentials in URL are not allowed"));
    }

    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
