use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use crate::capabilities::{send, Capabilities};
use crate::event::Event;
use crate::job::{JobApplication, JobDraft, JobEdit};
use crate::model::Model;
use crate::notice::NoticeKind;
use crate::store::StoreAction;
use crate::sync::{self, SyncError};
use crate::view::{JobRow, NoticeView, ViewModel};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Company and position are required";
pub const INVALID_BASE_URL_MESSAGE: &str = "The server address is not valid.";
pub const UNKNOWN_JOB_MESSAGE: &str = "That application no longer exists.";

#[derive(Default)]
pub struct App;

impl App {
    fn report_failure(error: &SyncError, model: &mut Model, now_ms: u64) {
        warn!(code = error.code(), error = %error, "sync failed");
        model.show_notice(error.user_message(), NoticeKind::Error, now_ms);
    }

    fn send_update(job: JobApplication, model: &mut Model, caps: &Capabilities, now_ms: u64) {
        if let Err(e) = job.validate() {
            debug!(id = %job.id, error = %e, "update rejected locally");
            model.show_notice(REQUIRED_FIELDS_MESSAGE, NoticeKind::Error, now_ms);
            return;
        }

        match sync::update(&model.config, &job) {
            Ok(request) => send(&caps.http, request, move |exchange| {
                Event::Updated(sync::decode_updated(exchange, &job))
            }),
            Err(e) => Self::report_failure(&e, model, now_ms),
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    #[instrument(skip_all, fields(event = event.name()))]
    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        let now_ms = crate::get_current_time_ms();
        model.update_timestamp(now_ms);

        if event.is_user_initiated() {
            info!("user action");
        }

        match event {
            Event::Noop => return,

            Event::Configure { base_url } => match model.config.set_api_base(&base_url) {
                Ok(()) => info!(base_url = %model.config.api_base(), "api base configured"),
                Err(e) => {
                    warn!(error = %e, "rejected base url");
                    model.show_notice(INVALID_BASE_URL_MESSAGE, NoticeKind::Error, now_ms);
                }
            },

            Event::LoadRequested => {
                model.is_loading = true;
                send(&caps.http, sync::list_all(&model.config), |exchange| {
                    Event::Listed(sync::decode_list(exchange))
                });
            }

            Event::CreateRequested(input) => match JobDraft::try_from(&input) {
                Ok(draft) => match sync::create(&model.config, &draft, Utc::now()) {
                    Ok(request) => send(&caps.http, request, |exchange| {
                        Event::Created(sync::decode_created(exchange))
                    }),
                    Err(e) => Self::report_failure(&e, model, now_ms),
                },
                Err(e) => {
                    debug!(error = %e, "draft rejected");
                    model.show_notice(REQUIRED_FIELDS_MESSAGE, NoticeKind::Error, now_ms);
                }
            },

            Event::EditRequested { id } => {
                if !model.store.contains(&id) {
                    debug!(%id, "edit requested for unknown record");
                }
                model.dispatch(StoreAction::EditStarted(id));
            }

            Event::EditCancelled => model.dispatch(StoreAction::EditFinished),

            Event::UpdateRequested { id, edit } => match model.store.get(&id) {
                Some(job) => {
                    let edited = job.with_edit(&edit.normalized());
                    Self::send_update(edited, model, caps, now_ms);
                }
                None => {
                    warn!(%id, "update requested for unknown record");
                    model.show_notice(UNKNOWN_JOB_MESSAGE, NoticeKind::Error, now_ms);
                }
            },

            Event::StatusChangeRequested { id, status } => match model.store.get(&id) {
                Some(job) => {
                    let edited = job.with_status(status);
                    Self::send_update(edited, model, caps, now_ms);
                }
                None => {
                    warn!(%id, "status change requested for unknown record");
                    model.show_notice(UNKNOWN_JOB_MESSAGE, NoticeKind::Error, now_ms);
                }
            },

            // Sent even if the record is not in the local list: the server decides.
            Event::DeleteRequested { id } => {
                let request = sync::remove(&model.config, &id);
                send(&caps.http, request, move |exchange| {
                    let result = sync::decode_removed(exchange, &id);
                    Event::Deleted { id, result }
                });
            }

            Event::NoticeDismissed => model.clear_notice(),

            Event::Tick => {
                if !model.expire_notice(now_ms) {
                    return;
                }
            }

            Event::Listed(result) => {
                model.is_loading = false;
                match result {
                    Ok(jobs) => {
                        info!(count = jobs.len(), "applications loaded");
                        model.dispatch(StoreAction::Loaded(jobs));
                    }
                    Err(e) => Self::report_failure(&e, model, now_ms),
                }
            }

            Event::Created(result) => match result {
                Ok(job) => {
                    info!(id = %job.id, "application created");
                    model.dispatch(StoreAction::Added(job));
                    model.show_notice("Application added", NoticeKind::Success, now_ms);
                }
                Err(e) => Self::report_failure(&e, model, now_ms),
            },

            Event::Updated(result) => match result {
                Ok(job) => {
                    info!(id = %job.id, "application updated");
                    if model.store.is_editing(&job.id) {
                        model.dispatch(StoreAction::EditFinished);
                    }
                    model.dispatch(StoreAction::Replaced(job));
                    model.show_notice("Changes saved", NoticeKind::Success, now_ms);
                }
                Err(e) => Self::report_failure(&e, model, now_ms),
            },

            Event::Deleted { id, result } => match result {
                Ok(()) => {
                    info!(%id, "application deleted");
                    model.dispatch(StoreAction::Removed(id));
                    model.show_notice("Application deleted", NoticeKind::Success, now_ms);
                }
                Err(e) => Self::report_failure(&e, model, now_ms),
            },
        }

        caps.render.render();
    }

    fn view(&self, model: &Model) -> ViewModel {
        let jobs = model
            .store
            .jobs()
            .iter()
            .map(|job| JobRow::new(job, model.store.is_editing(&job.id)))
            .collect::<Vec<_>>();

        ViewModel {
            total: jobs.len(),
            jobs,
            editing_id: model.store.editing().map(|id| id.0.clone()),
            edit_form: model
                .store
                .editing()
                .and_then(|id| model.store.get(id))
                .map(JobEdit::from),
            is_loading: model.is_loading,
            notice: model
                .notice
                .as_ref()
                .map(|n| NoticeView::new(n, model.view_timestamp_ms)),
        }
    }
}
