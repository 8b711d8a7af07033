use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NoticeKind {
    #[must_use]
    pub const fn default_duration_ms(self) -> u64 {
        match self {
            Self::Info => 3000,
            Self::Success => 2000,
            Self::Error => 4000,
        }
    }
}

/// Transient message shown to the user. A new notice replaces the current one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub created_at_ms: u64,
    pub duration_ms: u64,
}

impl Notice {
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        kind: NoticeKind,
        created_at_ms: u64,
        duration_ms: u64,
    ) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at_ms,
            duration_ms,
        }
    }

    #[must_use]
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.created_at_ms) >= self.duration_ms
    }

    #[must_use]
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.duration_ms
            .saturating_sub(now_ms.saturating_sub(self.created_at_ms))
    }
}
