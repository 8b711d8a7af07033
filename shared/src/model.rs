use crate::config::Config;
use crate::notice::{Notice, NoticeKind};
use crate::store::{JobStore, StoreAction};

#[derive(Debug, Default)]
pub struct Model {
    pub store: JobStore,
    pub config: Config,
    pub notice: Option<Notice>,
    pub is_loading: bool,
    /// Clock reading taken at the start of the latest `update`, used by `view`.
    pub view_timestamp_ms: u64,
}

impl Model {
    pub fn update_timestamp(&mut self, now_ms: u64) {
        self.view_timestamp_ms = now_ms;
    }

    pub fn dispatch(&mut self, action: StoreAction) {
        self.store.dispatch(action);
    }

    /// Replaces whatever notice is currently shown.
    pub fn show_notice(&mut self, message: impl Into<String>, kind: NoticeKind, now_ms: u64) {
        let duration_ms = self.config.notice_durations.for_kind(kind);
        self.notice = Some(Notice::new(message, kind, now_ms, duration_ms));
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Drops the notice once its display time is over. Returns whether it did.
    pub fn expire_notice(&mut self, now_ms: u64) -> bool {
        match &self.notice {
            Some(notice) if notice.is_expired(now_ms) => {
                self.notice = None;
                true
            }
            _ => false,
        }
    }
}
