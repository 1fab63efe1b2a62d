// src/tests/router_tests/explorer_tests.rs
use crate::domain::Hospital;
use crate::errors::ServerError;
use crate::router::handle;
use crate::state::Action;
use crate::tests::utils::{
    body_string, get, hospital, loaded_session, property, session_cookie_of, test_app,
    wait_for_properties, FakeApi,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn network() -> Vec<Hospital> {
    vec![
        hospital("Northside Hospital Atlanta", 33.9, -84.35),
        hospital("Northside Hospital Gwinnett", 33.96, -83.99),
        hospital("Northside Hospital Cherokee", 34.2, -84.5),
    ]
}

fn scripted() -> FakeApi {
    FakeApi::default()
        .with_hospitals(network())
        .with_properties(
            "Northside Hospital Gwinnett",
            vec![
                property("Sugarloaf Commons", "1 Sugarloaf Pkwy", 12, 4.3),
                property("Duluth Station", "2 Buford Hwy", 31, 4.8),
                property("Lawrenceville Lofts", "3 Main St", 22, 3.9),
            ],
        )
        .with_properties(
            "Northside Hospital Cherokee",
            vec![property("Canton Flats", "9 Riverstone Pkwy", 8, 4.0)],
        )
}

fn backend() -> Arc<FakeApi> {
    Arc::new(scripted())
}

#[test]
fn first_visit_selects_default_hospital_and_sets_cookie() -> Result<(), ServerError> {
    let api = backend();
    let app = test_app(api.clone(), &[]);

    let resp = handle(get("/", None), &app)?;
    assert_eq!(resp.status(), 200);
    let cookie = session_cookie_of(&resp).expect("session cookie issued");
    assert!(cookie.starts_with("explorer_session="));
    let body = body_string(resp);
    assert!(body.contains("Hospital Housing"));

    wait_for_properties(&app, &cookie);
    let body = body_string(handle(get("/", Some(&cookie)), &app)?);
    assert!(body.contains("Sugarloaf Commons"));
    assert!(body.contains("Lawrenceville Lofts"));
    // 31 minutes is over the default 30 minute cap
    assert!(!body.contains("Duluth Station"));
    assert!(body.contains("2 apartments found near Gwinnett"));
    assert!(body.contains("text-green-600 bg-green-50"));

    assert_eq!(api.calls("hospitals"), 1);
    assert_eq!(api.calls("properties"), 1);
    Ok(())
}

#[test]
fn returning_session_reuses_loaded_state() -> Result<(), ServerError> {
    let api = backend();
    let app = test_app(api.clone(), &[]);
    let cookie = loaded_session(&app);

    let second = handle(get("/", Some(&cookie)), &app)?;
    assert!(second.headers().get("set-cookie").is_none());
    assert!(body_string(second).contains("Sugarloaf Commons"));

    assert_eq!(api.calls("hospitals"), 1);
    assert_eq!(api.calls("properties"), 1);
    assert_eq!(app.sessions.len(), 1);
    Ok(())
}

#[test]
fn commute_cap_is_inclusive_and_adjustable() -> Result<(), ServerError> {
    let app = test_app(backend(), &[]);
    let cookie = loaded_session(&app);

    let body = body_string(handle(get("/?max_commute=31", Some(&cookie)), &app)?);
    assert!(body.contains("Duluth Station"));

    let body = body_string(handle(get("/?max_commute=500", Some(&cookie)), &app)?);
    // clamped to the slider maximum
    assert!(body.contains(r#"value="60""#));
    Ok(())
}

#[test]
fn selecting_another_hospital_fetches_its_properties() -> Result<(), ServerError> {
    let api = backend();
    let app = test_app(api.clone(), &[]);
    let cookie = loaded_session(&app);

    handle(
        get("/?hospital=Northside+Hospital+Cherokee", Some(&cookie)),
        &app,
    )?;
    wait_for_properties(&app, &cookie);

    let body = body_string(handle(get("/", Some(&cookie)), &app)?);
    assert!(body.contains("Canton Flats"));
    assert!(!body.contains("Sugarloaf Commons"));
    assert_eq!(api.calls("properties"), 2);

    // same hospital again is a no-op
    handle(
        get("/?hospital=Northside+Hospital+Cherokee", Some(&cookie)),
        &app,
    )?;
    assert_eq!(api.calls("properties"), 2);
    Ok(())
}

#[test]
fn selection_renders_loading_state_before_slow_backend_answers() -> Result<(), ServerError> {
    let delay = Duration::from_millis(800);
    let app = test_app(Arc::new(scripted().with_slow_properties(delay)), &[]);
    let cookie = loaded_session(&app);

    let started = Instant::now();
    let resp = handle(
        get("/?hospital=Northside+Hospital+Cherokee", Some(&cookie)),
        &app,
    )?;
    assert!(started.elapsed() < delay);

    let body = body_string(resp);
    assert!(body.contains("Loading properties..."));
    assert!(body.contains(r#"hx-trigger="load delay:500ms""#));
    // previous hospital's list is gone
    assert!(!body.contains("Sugarloaf Commons"));
    assert!(!body.contains("Canton Flats"));

    // the polling fragment picks up the new list once the fetch lands
    wait_for_properties(&app, &cookie);
    let body = body_string(handle(get("/results", Some(&cookie)), &app)?);
    assert!(body.contains("Canton Flats"));
    assert!(!body.contains(r#"hx-trigger="load delay:500ms""#));
    Ok(())
}

#[test]
fn unknown_hospital_and_bad_numbers_are_rejected() {
    let app = test_app(backend(), &[]);

    let err = handle(get("/?hospital=Nowhere+General", None), &app).unwrap_err();
    assert_eq!(err.status(), 400);

    let err = handle(get("/?max_commute=soon", None), &app).unwrap_err();
    assert_eq!(err.status(), 400);

    let err = handle(get("/?scenario=weekend", None), &app).unwrap_err();
    assert_eq!(err.status(), 400);
}

#[test]
fn hospital_param_waits_while_list_is_loading() -> Result<(), ServerError> {
    let app = test_app(backend(), &[]);

    // a session whose list fetch is still in flight
    let session = app.sessions.get_or_create(None);
    session
        .state
        .lock()
        .unwrap()
        .dispatch(Action::LoadHospitals);
    let cookie = format!("explorer_session={}", session.id);

    let resp = handle(
        get("/?hospital=Northside+Hospital+Cherokee", Some(&cookie)),
        &app,
    )?;
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Loading hospital data..."));
    assert!(body.contains(r#"http-equiv="refresh""#));
    Ok(())
}

#[test]
fn backend_outage_renders_empty_selector() -> Result<(), ServerError> {
    let api = Arc::new(FakeApi::default());
    let app = test_app(api.clone(), &[]);

    let body = body_string(handle(get("/", None), &app)?);
    assert!(body.contains("No hospitals available right now."));
    assert!(body.contains("Select a hospital to view nearby properties"));
    assert_eq!(api.calls("properties"), 0);
    Ok(())
}

#[test]
fn results_fragment_updates_list_and_counters() -> Result<(), ServerError> {
    let app = test_app(backend(), &[]);
    let cookie = loaded_session(&app);

    let resp = handle(
        get("/results?q=LOFTS&max_commute=60&min_rating=0", Some(&cookie)),
        &app,
    )?;
    let body = body_string(resp);

    assert!(body.contains(r#"id="property-list""#));
    assert!(body.contains("Lawrenceville Lofts"));
    assert!(!body.contains("Sugarloaf Commons"));
    assert!(body.contains(r#"id="map-status" hx-swap-oob="true""#));
    assert!(body.contains(r#"id="properties-found" hx-swap-oob="true""#));
    assert!(!body.contains("<html"));
    Ok(())
}

#[test]
fn rating_floor_filters_results() -> Result<(), ServerError> {
    let app = test_app(backend(), &[]);
    let cookie = loaded_session(&app);

    let body = body_string(handle(get("/results?min_rating=4.2", Some(&cookie)), &app)?);
    assert!(body.contains("Sugarloaf Commons"));
    assert!(!body.contains("Lawrenceville Lofts"));
    Ok(())
}

#[test]
fn health_and_unknown_routes() -> Result<(), ServerError> {
    let app = test_app(backend(), &[]);

    let resp = handle(get("/healthz", None), &app)?;
    assert_eq!(body_string(resp), "ok");

    let err = handle(get("/nope", None), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
    Ok(())
}
