use serde::{Deserialize, Serialize};

use crate::job::{DraftInput, JobApplication, JobEdit, JobId, JobStatus};
use crate::sync::SyncError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub enum Event {
    #[default]
    Noop,

    // Configuration
    Configure {
        base_url: String,
    },

    // List
    LoadRequested,

    // Form & editing
    CreateRequested(DraftInput),
    EditRequested {
        id: JobId,
    },
    EditCancelled,
    UpdateRequested {
        id: JobId,
        edit: JobEdit,
    },
    StatusChangeRequested {
        id: JobId,
        status: JobStatus,
    },
    DeleteRequested {
        id: JobId,
    },

    // Notices
    NoticeDismissed,
    Tick,

    // Sync completions, local to the core
    #[serde(skip)]
    Listed(Result<Vec<JobApplication>, SyncError>),
    #[serde(skip)]
    Created(Result<JobApplication, SyncError>),
    #[serde(skip)]
    Updated(Result<JobApplication, SyncError>),
    #[serde(skip)]
    Deleted {
        id: JobId,
        result: Result<(), SyncError>,
    },
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::Configure { .. } => "configure",
            Self::LoadRequested => "load_requested",
            Self::CreateRequested(_) => "create_requested",
            Self::EditRequested { .. } => "edit_requested",
            Self::EditCancelled => "edit_cancelled",
            Self::UpdateRequested { .. } => "update_requested",
            Self::StatusChangeRequested { .. } => "status_change_requested",
            Self::DeleteRequested { .. } => "delete_requested",
            Self::NoticeDismissed => "notice_dismissed",
            Self::Tick => "tick",
            Self::Listed(_) => "listed",
            Self::Created(_) => "created",
            Self::Updated(_) => "updated",
            Self::Deleted { .. } => "deleted",
        }
    }

    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        matches!(
            self,
            Self::LoadRequested
                | Self::CreateRequested(_)
                | Self::EditRequested { .. }
                | Self::EditCancelled
                | Self::UpdateRequested { .. }
                | Self::StatusChangeRequested { .. }
                | Self::DeleteRequested { .. }
                | Self::NoticeDismissed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_events_round_trip_through_json() {
        let event = Event::StatusChangeRequested {
            id: JobId::new("42"),
            status: JobStatus::Interview,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(serde_json::from_str::<Event>(&json).unwrap(), event);
    }

    #[test]
    fn completions_are_not_user_initiated() {
        assert!(Event::LoadRequested.is_user_initiated());
        assert!(!Event::Listed(Ok(Vec::new())).is_user_initiated());
        assert!(!Event::Tick.is_user_initiated());
        assert_eq!(Event::Tick.name(), "tick");
    }

    #[test]
    fn event_size_is_reasonable() {
        let size = std::mem::size_of::<Event>();
        assert!(
            size <= 256,
            "Event enum is {} bytes, box the larger variants",
            size
        );
    }
}
