use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// --- Typed ID ---

/// Server-assigned identifier. Opaque to the client.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct JobId(pub String);

impl JobId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// --- Status ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Applied,
    Interview,
    Offer,
    Rejected,
    Withdrawn,
}

impl JobStatus {
    pub const ALL: [JobStatus; 5] = [
        Self::Applied,
        Self::Interview,
        Self::Offer,
        Self::Rejected,
        Self::Withdrawn,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Interview => "interview",
            Self::Offer => "offer",
            Self::Rejected => "rejected",
            Self::Withdrawn => "withdrawn",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Rejected => "Rejected",
            Self::Withdrawn => "Withdrawn",
        }
    }

    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Rejected | Self::Withdrawn)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Validation ---

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("company is required")]
    MissingCompany,
    #[error("position is required")]
    MissingPosition,
}

fn required(value: &str, missing: ValidationError) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(missing);
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// --- Canonical record ---

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct JobApplication {
    pub id: JobId,
    pub company: String,
    pub position: String,
    pub status: JobStatus,
    pub applied_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub job_url: Option<String>,
}

impl JobApplication {
    /// Returns a copy with `edit` applied. `id` and `applied_date` are carried over untouched.
    #[must_use]
    pub fn with_edit(&self, edit: &JobEdit) -> Self {
        Self {
            id: self.id.clone(),
            company: edit.company.clone(),
            position: edit.position.clone(),
            status: edit.status,
            applied_date: self.applied_date,
            notes: edit.notes.clone(),
            job_url: edit.job_url.clone(),
        }
    }

    #[must_use]
    pub fn with_status(&self, status: JobStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        required(&self.company, ValidationError::MissingCompany)?;
        required(&self.position, ValidationError::MissingPosition)?;
        Ok(())
    }
}

// --- Raw form input ---

/// Untrimmed form fields as the shell collected them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct DraftInput {
    pub company: String,
    pub position: String,
    pub notes: Option<String>,
    pub job_url: Option<String>,
}

/// A validated create intent.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct JobDraft {
    company: String,
    position: String,
    notes: Option<String>,
    job_url: Option<String>,
}

impl JobDraft {
    pub fn new(
        company: &str,
        position: &str,
        notes: Option<&str>,
        job_url: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            company: required(company, ValidationError::MissingCompany)?,
            position: required(position, ValidationError::MissingPosition)?,
            notes: optional(notes),
            job_url: optional(job_url),
        })
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn job_url(&self) -> Option<&str> {
        self.job_url.as_deref()
    }
}

impl TryFrom<&DraftInput> for JobDraft {
    type Error = ValidationError;

    fn try_from(input: &DraftInput) -> Result<Self, Self::Error> {
        Self::new(
            &input.company,
            &input.position,
            input.notes.as_deref(),
            input.job_url.as_deref(),
        )
    }
}

/// The editable subset of a record.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct JobEdit {
    pub company: String,
    pub position: String,
    pub status: JobStatus,
    pub notes: Option<String>,
    pub job_url: Option<String>,
}

impl JobEdit {
    /// Trims every field; blank optional fields are dropped.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            company: self.company.trim().to_string(),
            position: self.position.trim().to_string(),
            status: self.status,
            notes: optional(self.notes.as_deref()),
            job_url: optional(self.job_url.as_deref()),
        }
    }
}

impl From<&JobApplication> for JobEdit {
    fn from(job: &JobApplication) -> Self {
        Self {
            company: job.company.clone(),
            position: job.position.clone(),
            status: job.status,
            notes: job.notes.clone(),
            job_url: job.job_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> JobApplication {
        JobApplication {
            id: JobId::new("job-1"),
            company: "Acme".into(),
            position: "Engineer".into(),
            status: JobStatus::Applied,
            applied_date: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
            notes: None,
            job_url: None,
        }
    }

    #[test]
    fn draft_trims_and_drops_blank_optionals() {
        let draft = JobDraft::new("  Acme ", " Engineer", Some("   "), Some(" https://acme.test/jobs/1 "))
            .unwrap();
        assert_eq!(draft.company(), "Acme");
        assert_eq!(draft.position(), "Engineer");
        assert_eq!(draft.notes(), None);
        assert_eq!(draft.job_url(), Some("https://acme.test/jobs/1"));
    }

    #[test]
    fn draft_requires_company_and_position() {
        assert_eq!(
            JobDraft::new("  ", "Engineer", None, None),
            Err(ValidationError::MissingCompany)
        );
        assert_eq!(
            JobDraft::new("Acme", "", None, None),
            Err(ValidationError::MissingPosition)
        );
    }

    #[test]
    fn draft_from_input() {
        let input = DraftInput {
            company: "Acme".into(),
            position: "Engineer".into(),
            notes: Some("referral".into()),
            job_url: None,
        };
        let draft = JobDraft::try_from(&input).unwrap();
        assert_eq!(draft.notes(), Some("referral"));
    }

    #[test]
    fn edit_keeps_id_and_applied_date() {
        let job = sample();
        let edit = JobEdit {
            company: "Acme Corp".into(),
            position: "Staff Engineer".into(),
            status: JobStatus::Interview,
            notes: Some("onsite next week".into()),
            job_url: None,
        };

        let edited = job.with_edit(&edit);
        assert_eq!(edited.id, job.id);
        assert_eq!(edited.applied_date, job.applied_date);
        assert_eq!(edited.status, JobStatus::Interview);
        assert_eq!(edited.notes.as_deref(), Some("onsite next week"));
    }

    #[test]
    fn edit_normalization() {
        let edit = JobEdit {
            company: " Acme ".into(),
            position: "Engineer ".into(),
            status: JobStatus::Offer,
            notes: Some(" ".into()),
            job_url: Some("https://acme.test".into()),
        }
        .normalized();
        assert_eq!(edit.company, "Acme");
        assert_eq!(edit.position, "Engineer");
        assert_eq!(edit.notes, None);
    }

    #[test]
    fn validate_rejects_blank_fields() {
        let mut job = sample();
        assert!(job.validate().is_ok());
        job.position = "   ".into();
        assert_eq!(job.validate(), Err(ValidationError::MissingPosition));
    }

    #[test]
    fn closed_statuses() {
        assert!(JobStatus::Rejected.is_closed());
        assert!(JobStatus::Withdrawn.is_closed());
        assert!(!JobStatus::Offer.is_closed());
        assert_eq!(JobStatus::default(), JobStatus::Applied);
    }
}
