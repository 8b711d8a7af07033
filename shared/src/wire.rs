//! JSON shapes exchanged with the REST backend and the mapping to and from
//! the canonical [`JobApplication`].
//!
//! Inbound decoding is lenient about `status`: the server may send an integer
//! code or a name, and anything unrecognized becomes [`JobStatus::Applied`].
//! Outbound encoding always emits the integer code.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::job::{JobApplication, JobDraft, JobId, JobStatus};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid applicationDate '{0}'")]
    InvalidDate(String),
}

// --- Status mapping ---

impl JobStatus {
    /// Integer code used on the wire.
    #[must_use]
    pub const fn wire_code(self) -> u8 {
        match self {
            Self::Applied => 1,
            Self::Interview => 2,
            Self::Offer => 3,
            Self::Rejected => 4,
            Self::Withdrawn => 5,
        }
    }

    #[must_use]
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Applied,
            2 => Self::Interview,
            3 => Self::Offer,
            4 => Self::Rejected,
            5 => Self::Withdrawn,
            _ => Self::Applied,
        }
    }

    /// Case-insensitive match on the status name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(name))
            .unwrap_or(Self::Applied)
    }

    /// Decodes whatever the server put in the `status` field. Never fails.
    #[must_use]
    pub fn from_wire(value: &Value) -> Self {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(code) => Self::from_code(code),
                None => n
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                    .map_or(Self::Applied, |f| Self::from_code(f as i64)),
            },
            Value::String(name) => Self::from_name(name),
            _ => Self::Applied,
        }
    }

    #[must_use]
    pub fn to_wire(self) -> Value {
        Value::from(self.wire_code())
    }
}

// --- Dates ---

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Accepts RFC 3339, offset-less date-times (read as UTC) and plain dates.
#[must_use]
pub fn parse_wire_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// RFC 3339 in UTC, keeping every sub-second digit the value carries.
#[must_use]
pub fn format_wire_date(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

// --- Wire records ---

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WireJob {
    pub id: String,
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub status: Value,
    pub application_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_posting_url: Option<String>,
}

/// Body of `POST /jobs`: a wire record without `id`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewWireJob {
    pub company: String,
    pub position: String,
    pub status: Value,
    pub application_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_posting_url: Option<String>,
}

impl NewWireJob {
    /// New records always start as `applied`, dated `now`.
    #[must_use]
    pub fn from_draft(draft: &JobDraft, now: DateTime<Utc>) -> Self {
        Self {
            company: draft.company().to_string(),
            position: draft.position().to_string(),
            status: JobStatus::Applied.to_wire(),
            application_date: format_wire_date(&now),
            description: draft.notes().map(str::to_string),
            job_posting_url: draft.job_url().map(str::to_string),
        }
    }
}

impl TryFrom<WireJob> for JobApplication {
    type Error = DecodeError;

    fn try_from(wire: WireJob) -> Result<Self, Self::Error> {
        let applied_date = parse_wire_date(&wire.application_date)
            .ok_or_else(|| DecodeError::InvalidDate(wire.application_date.clone()))?;

        Ok(Self {
            id: JobId(wire.id),
            company: wire.company,
            position: wire.position,
            status: JobStatus::from_wire(&wire.status),
            applied_date,
            notes: wire.description,
            job_url: wire.job_posting_url,
        })
    }
}

impl From<&JobApplication> for WireJob {
    fn from(job: &JobApplication) -> Self {
        Self {
            id: job.id.0.clone(),
            company: job.company.clone(),
            position: job.position.clone(),
            status: job.status.to_wire(),
            application_date: format_wire_date(&job.applied_date),
            description: job.notes.clone(),
            job_posting_url: job.job_url.clone(),
        }
    }
}
