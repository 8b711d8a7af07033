use crux_core::testing::{AppTester, Update};
use crux_http::protocol::{HttpResponse, HttpResult};
use crux_http::HttpError;
use serde_json::json;
use shared::{
    App, DraftInput, Effect, Event, FailureCause, JobEdit, JobId, JobStatus, Model, NoticeKind,
    SyncError,
};

/// Answers the single HTTP effect in `update` and returns the event the core produced.
fn answer(
    app: &AppTester<App, Effect>,
    mut update: Update<Effect, Event>,
    result: HttpResult,
) -> Event {
    let request = update
        .effects_mut()
        .find_map(|e| match e {
            Effect::Http(request) => Some(request),
            _ => None,
        })
        .expect("an http effect");

    let resolved = app.resolve(request, result).expect("request resolves");
    assert_eq!(resolved.events.len(), 1);
    resolved.events.into_iter().next().unwrap()
}

fn listed_model(app: &AppTester<App, Effect>) -> Model {
    let mut model = Model::default();
    let update = app.update(Event::LoadRequested, &mut model);

    let response = HttpResponse::ok()
        .json(json!([
            {"id": "1", "company": "Acme", "position": "Engineer", "status": 1,
             "applicationDate": "2024-03-01T09:30:00.1234567"},
            {"id": "2", "company": "Globex", "position": "Analyst", "status": "Interview",
             "applicationDate": "2024-03-04"}
        ]))
        .build();
    let event = answer(app, update, HttpResult::Ok(response));
    app.update(event, &mut model);
    model
}

#[test]
fn listing_response_fills_the_store() {
    let app = AppTester::<App, Effect>::default();
    let model = listed_model(&app);

    assert!(!model.is_loading);
    assert_eq!(model.store.len(), 2);
    assert_eq!(
        model.store.get(&JobId::new("2")).unwrap().status,
        JobStatus::Interview
    );
}

#[test]
fn server_error_on_list_is_a_status_failure() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let update = app.update(Event::LoadRequested, &mut model);
    let event = answer(&app, update, HttpResult::Ok(HttpResponse::status(503).build()));

    assert_eq!(
        event,
        Event::Listed(Err(SyncError::Fetch(FailureCause::Status(503))))
    );
}

#[test]
fn network_error_on_list_is_a_transport_failure() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let update = app.update(Event::LoadRequested, &mut model);
    let event = answer(
        &app,
        update,
        HttpResult::Err(HttpError::Io("connection refused".into())),
    );

    assert!(matches!(
        event,
        Event::Listed(Err(SyncError::Fetch(FailureCause::Transport(_))))
    ));
}

#[test]
fn created_response_is_appended() {
    let app = AppTester::<App, Effect>::default();
    let mut model = listed_model(&app);

    let update = app.update(
        Event::CreateRequested(DraftInput {
            company: "Initech".into(),
            position: "SRE".into(),
            ..DraftInput::default()
        }),
        &mut model,
    );
    let response = HttpResponse::status(201)
        .json(json!({
            "id": "3", "company": "Initech", "position": "SRE", "status": 1,
            "applicationDate": "2024-03-05T12:00:00Z"
        }))
        .build();
    let event = answer(&app, update, HttpResult::Ok(response));
    app.update(event, &mut model);

    assert_eq!(model.store.len(), 3);
    assert_eq!(model.store.jobs()[2].id, JobId::new("3"));
    assert_eq!(model.notice.as_ref().unwrap().kind, NoticeKind::Success);
}

#[test]
fn empty_update_response_keeps_the_sent_record_and_its_date() {
    let app = AppTester::<App, Effect>::default();
    let mut model = listed_model(&app);
    let before = model.store.get(&JobId::new("1")).unwrap().clone();

    let update = app.update(
        Event::StatusChangeRequested {
            id: JobId::new("1"),
            status: JobStatus::Offer,
        },
        &mut model,
    );
    let event = answer(&app, update, HttpResult::Ok(HttpResponse::status(204).build()));
    app.update(event, &mut model);

    let after = model.store.get(&JobId::new("1")).unwrap();
    assert_eq!(after.status, JobStatus::Offer);
    assert_eq!(after.applied_date, before.applied_date);
}

#[test]
fn rejected_update_reports_the_status() {
    let app = AppTester::<App, Effect>::default();
    let mut model = listed_model(&app);

    let update = app.update(
        Event::UpdateRequested {
            id: JobId::new("2"),
            edit: JobEdit {
                company: "Globex".into(),
                position: "Analyst".into(),
                status: JobStatus::Offer,
                notes: None,
                job_url: None,
            },
        },
        &mut model,
    );
    let response = HttpResponse::status(500).json("boom").build();
    let event = answer(&app, update, HttpResult::Ok(response));

    assert_eq!(
        event,
        Event::Updated(Err(SyncError::Update {
            id: JobId::new("2"),
            cause: FailureCause::Status(500),
        }))
    );
}

#[test]
fn delete_of_missing_record_reports_not_found() {
    let app = AppTester::<App, Effect>::default();
    let mut model = listed_model(&app);

    let update = app.update(Event::DeleteRequested { id: JobId::new("404") }, &mut model);
    let event = answer(&app, update, HttpResult::Ok(HttpResponse::status(404).build()));

    assert_eq!(
        event,
        Event::Deleted {
            id: JobId::new("404"),
            result: Err(SyncError::Delete {
                id: JobId::new("404"),
                cause: FailureCause::Status(404),
            }),
        }
    );

    app.update(event, &mut model);
    assert_eq!(model.store.len(), 2);
    assert_eq!(model.notice.as_ref().unwrap().kind, NoticeKind::Error);
}

#[test]
fn confirmed_delete_removes_the_record() {
    let app = AppTester::<App, Effect>::default();
    let mut model = listed_model(&app);

    let update = app.update(Event::DeleteRequested { id: JobId::new("1") }, &mut model);
    let event = answer(&app, update, HttpResult::Ok(HttpResponse::status(204).build()));
    app.update(event, &mut model);

    assert!(!model.store.contains(&JobId::new("1")));
    assert_eq!(model.store.len(), 1);
}
