//! Remote sync client for the `/jobs` REST resource.
//!
//! Every operation is split into a request builder and a response decoder.
//! Both are pure: the app hands the [`ApiRequest`] to the HTTP capability and
//! feeds the resulting [`Exchange`] back through the decoder. There is no
//! retry, caching or batching; a failure is reported once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::capabilities::{ApiRequest, Exchange, RequestError};
use crate::config::Config;
use crate::job::{JobApplication, JobDraft, JobId};
use crate::wire::{NewWireJob, WireJob};

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FailureCause {
    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("could not build request: {0}")]
    Request(String),
}

impl From<RequestError> for FailureCause {
    fn from(e: RequestError) -> Self {
        Self::Request(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SyncError {
    #[error("failed to fetch job applications: {0}")]
    Fetch(FailureCause),

    #[error("failed to create job application: {0}")]
    Create(FailureCause),

    #[error("failed to update job application {id}: {cause}")]
    Update { id: JobId, cause: FailureCause },

    #[error("failed to delete job application {id}: {cause}")]
    Delete { id: JobId, cause: FailureCause },
}

impl SyncError {
    pub fn cause(&self) -> &FailureCause {
        match self {
            Self::Fetch(cause) | Self::Create(cause) => cause,
            Self::Update { cause, .. } | Self::Delete { cause, .. } => cause,
        }
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "FETCH_ERROR",
            Self::Create(_) => "CREATE_ERROR",
            Self::Update { .. } => "UPDATE_ERROR",
            Self::Delete { .. } => "DELETE_ERROR",
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Fetch(_) => "Could not load your applications. Please try again.".into(),
            Self::Create(_) => "Could not save the new application. Please try again.".into(),
            Self::Update { .. } => "Could not save your changes. Please try again.".into(),
            Self::Delete { .. } => "Could not delete the application. Please try again.".into(),
        }
    }
}

/// Maps a non-success exchange to its cause, passing the body through otherwise.
fn successful_body(exchange: Exchange) -> Result<Vec<u8>, FailureCause> {
    match exchange {
        Exchange::Response { status, body } if (200..300).contains(&status) => Ok(body),
        Exchange::Response { status, .. } => Err(FailureCause::Status(status)),
        Exchange::Failed { message } => Err(FailureCause::Transport(message)),
    }
}

fn decode_record(body: &[u8]) -> Result<JobApplication, FailureCause> {
    let wire: WireJob =
        serde_json::from_slice(body).map_err(|e| FailureCause::Decode(e.to_string()))?;
    JobApplication::try_from(wire).map_err(|e| FailureCause::Decode(e.to_string()))
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

// --- list ---

#[must_use]
pub fn list_all(config: &Config) -> ApiRequest {
    ApiRequest::get(config.jobs_url())
}

pub fn decode_list(exchange: Exchange) -> Result<Vec<JobApplication>, SyncError> {
    let body = successful_body(exchange).map_err(SyncError::Fetch)?;

    let records: Vec<WireJob> = serde_json::from_slice(&body)
        .map_err(|e| SyncError::Fetch(FailureCause::Decode(e.to_string())))?;

    records
        .into_iter()
        .map(|wire| {
            JobApplication::try_from(wire)
                .map_err(|e| SyncError::Fetch(FailureCause::Decode(e.to_string())))
        })
        .collect()
}

// --- create ---

pub fn create(
    config: &Config,
    draft: &JobDraft,
    now: DateTime<Utc>,
) -> Result<ApiRequest, SyncError> {
    ApiRequest::post(config.jobs_url())
        .with_json(&NewWireJob::from_draft(draft, now))
        .map_err(|e| SyncError::Create(e.into()))
}

pub fn decode_created(exchange: Exchange) -> Result<JobApplication, SyncError> {
    let body = successful_body(exchange).map_err(SyncError::Create)?;
    let job = decode_record(&body).map_err(SyncError::Create)?;

    if job.id.is_empty() {
        return Err(SyncError::Create(FailureCause::Decode(
            "response record has no id".into(),
        )));
    }
    Ok(job)
}

// --- update ---

pub fn update(config: &Config, job: &JobApplication) -> Result<ApiRequest, SyncError> {
    ApiRequest::put(config.job_url(job.id.as_str()))
        .with_json(&WireJob::from(job))
        .map_err(|e| SyncError::Update {
            id: job.id.clone(),
            cause: e.into(),
        })
}

/// The server's record wins. An empty 2xx body means it kept `sent` as is.
pub fn decode_updated(
    exchange: Exchange,
    sent: &JobApplication,
) -> Result<JobApplication, SyncError> {
    let fail = |cause| SyncError::Update {
        id: sent.id.clone(),
        cause,
    };

    let body = successful_body(exchange).map_err(fail)?;
    if is_blank(&body) {
        return Ok(sent.clone());
    }

    let job = decode_record(&body).map_err(fail)?;
    if job.id != sent.id {
        return Err(fail(FailureCause::Decode(format!(
            "response id '{}' does not match '{}'",
            job.id, sent.id
        ))));
    }
    Ok(job)
}

// --- delete ---

#[must_use]
pub fn remove(config: &Config, id: &JobId) -> ApiRequest {
    ApiRequest::delete(config.job_url(id.as_str()))
}

pub fn decode_removed(exchange: Exchange, id: &JobId) -> Result<(), SyncError> {
    successful_body(exchange)
        .map(|_| ())
        .map_err(|cause| SyncError::Delete {
            id: id.clone(),
            cause,
        })
}
