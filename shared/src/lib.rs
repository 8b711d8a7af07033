#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod capabilities;
pub mod config;
pub mod event;
pub mod job;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod model;
pub mod notice;
pub mod store;
pub mod sync;
pub mod view;
pub mod wire;

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use config::{Config, ConfigError, DEFAULT_API_BASE_URL};
pub use crux_core::{render::Render, App as CruxApp};
pub use event::Event;
pub use job::{
    DraftInput, JobApplication, JobDraft, JobEdit, JobId, JobStatus, ValidationError,
};
pub use model::Model;
pub use notice::{Notice, NoticeKind};
pub use store::{JobStore, StoreAction};
pub use sync::{FailureCause, SyncError};
pub use view::{JobRow, NoticeView, ViewModel};

#[must_use]
pub fn get_current_time_ms() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}
