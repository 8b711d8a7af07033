//! Local list of job applications plus the editing cursor.
//!
//! `JobStore` only changes through [`JobStore::dispatch`]. The app dispatches
//! after the server has confirmed a change, never before.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::job::{JobApplication, JobId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    /// Replace the whole list with a fresh server listing.
    Loaded(Vec<JobApplication>),
    Added(JobApplication),
    Replaced(JobApplication),
    Removed(JobId),
    EditStarted(JobId),
    EditFinished,
}

impl StoreAction {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Loaded(_) => "loaded",
            Self::Added(_) => "added",
            Self::Replaced(_) => "replaced",
            Self::Removed(_) => "removed",
            Self::EditStarted(_) => "edit_started",
            Self::EditFinished => "edit_finished",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStore {
    jobs: Vec<JobApplication>,
    editing: Option<JobId>,
}

impl JobStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jobs(&self) -> &[JobApplication] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn get(&self, id: &JobId) -> Option<&JobApplication> {
        self.jobs.iter().find(|j| &j.id == id)
    }

    pub fn contains(&self, id: &JobId) -> bool {
        self.get(id).is_some()
    }

    pub fn editing(&self) -> Option<&JobId> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: &JobId) -> bool {
        self.editing.as_ref() == Some(id)
    }

    pub fn dispatch(&mut self, action: StoreAction) {
        debug!(action = action.name(), "store dispatch");

        match action {
            StoreAction::Loaded(jobs) => {
                let mut seen = HashSet::with_capacity(jobs.len());
                let before = jobs.len();
                self.jobs = jobs
                    .into_iter()
                    .filter(|j| seen.insert(j.id.clone()))
                    .collect();
                if self.jobs.len() != before {
                    warn!(
                        dropped = before - self.jobs.len(),
                        "listing contained duplicate ids"
                    );
                }
                self.clear_dangling_cursor();
            }

            StoreAction::Added(job) => {
                match self.jobs.iter_mut().find(|j| j.id == job.id) {
                    Some(existing) => {
                        warn!(id = %job.id, "added record already present, replacing");
                        *existing = job;
                    }
                    None => self.jobs.push(job),
                }
            }

            StoreAction::Replaced(job) => {
                if let Some(existing) = self.jobs.iter_mut().find(|j| j.id == job.id) {
                    *existing = job;
                }
            }

            StoreAction::Removed(id) => {
                self.jobs.retain(|j| j.id != id);
                if self.editing.as_ref() == Some(&id) {
                    self.editing = None;
                }
            }

            StoreAction::EditStarted(id) => {
                if self.contains(&id) {
                    self.editing = Some(id);
                }
            }

            StoreAction::EditFinished => {
                self.editing = None;
            }
        }
    }

    fn clear_dangling_cursor(&mut self) {
        if let Some(id) = &self.editing {
            if !self.contains(id) {
                self.editing = None;
            }
        }
    }
}
