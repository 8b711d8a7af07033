use serde::{Deserialize, Serialize};

use crate::job::{JobApplication, JobEdit, JobStatus};
use crate::notice::{Notice, NoticeKind};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobRow {
    pub id: String,
    pub company: String,
    pub position: String,
    pub status: JobStatus,
    pub status_label: String,
    /// Rejected or withdrawn.
    pub is_closed: bool,
    pub applied_on: String,
    pub notes: Option<String>,
    pub job_url: Option<String>,
    pub is_editing: bool,
}

impl JobRow {
    #[must_use]
    pub fn new(job: &JobApplication, is_editing: bool) -> Self {
        Self {
            id: job.id.0.clone(),
            company: job.company.clone(),
            position: job.position.clone(),
            status: job.status,
            status_label: job.status.label().to_string(),
            is_closed: job.status.is_closed(),
            applied_on: job.applied_date.format("%Y-%m-%d").to_string(),
            notes: job.notes.clone(),
            job_url: job.job_url.clone(),
            is_editing,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoticeView {
    pub message: String,
    pub kind: NoticeKind,
    pub remaining_ms: u64,
}

impl NoticeView {
    #[must_use]
    pub fn new(notice: &Notice, now_ms: u64) -> Self {
        Self {
            message: notice.message.clone(),
            kind: notice.kind,
            remaining_ms: notice.remaining_ms(now_ms),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ViewModel {
    pub jobs: Vec<JobRow>,
    pub total: usize,
    pub editing_id: Option<String>,
    /// Current values of the record being edited, to prefill the form.
    pub edit_form: Option<JobEdit>,
    pub is_loading: bool,
    pub notice: Option<NoticeView>,
}
