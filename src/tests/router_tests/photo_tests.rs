// src/tests/router_tests/photo_tests.rs
use crate::errors::ServerError;
use crate::photos::fallback_image;
use crate::router::handle;
use crate::tests::utils::{body_string, get, hospital, loaded_session, property, test_app, FakeApi};
use std::sync::Arc;

fn setup(api: FakeApi) -> (Arc<FakeApi>, crate::app::AppState, String) {
    let api = Arc::new(
        api.with_hospitals(vec![hospital("Northside Hospital Gwinnett", 33.96, -83.99)])
            .with_properties(
                "Northside Hospital Gwinnett",
                vec![
                    property("Sugarloaf Commons", "1 Sugarloaf Pkwy", 12, 4.3),
                    property("Lawrenceville Lofts", "3 Main St", 22, 3.9),
                ],
            ),
    );
    let app = test_app(api.clone(), &[]);
    let cookie = loaded_session(&app);
    (api, app, cookie)
}

#[test]
fn cards_lazy_load_their_photo_slot() -> Result<(), ServerError> {
    let (_api, app, cookie) = setup(FakeApi::default());
    let body = body_string(handle(get("/", Some(&cookie)), &app)?);
    assert!(body.contains("/photo?index=0&amp;name=Sugarloaf+Commons"));
    assert!(body.contains("/photo?index=1&amp;name=Lawrenceville+Lofts"));
    Ok(())
}

#[test]
fn photo_slot_resolves_through_strategies() -> Result<(), ServerError> {
    let (api, app, cookie) = setup(FakeApi::default().with_keyword_photo("https://photos/kw.jpg"));

    let resp = handle(
        get("/photo?index=0&name=Sugarloaf+Commons", Some(&cookie)),
        &app,
    )?;
    let body = body_string(resp);
    assert!(body.contains(r#"src="https://photos/kw.jpg""#));
    assert!(body.contains(r#"id="photo-0""#));
    assert_eq!(api.calls("keyword_photo"), 1);
    Ok(())
}

#[test]
fn failed_lookups_use_fallback_image() -> Result<(), ServerError> {
    let (_api, app, cookie) = setup(FakeApi::default().failing_photos());

    let body = body_string(handle(
        get("/photo?index=1&name=Lawrenceville+Lofts", Some(&cookie)),
        &app,
    )?);
    let expected = fallback_image("Lawrenceville Lofts", 1).replace('&', "&amp;");
    assert!(body.contains(&expected));
    Ok(())
}

#[test]
fn stale_or_sessionless_slots_are_not_found() {
    let (api, app, cookie) = setup(FakeApi::default());

    let err = handle(
        get("/photo?index=0&name=Lawrenceville+Lofts", Some(&cookie)),
        &app,
    )
    .unwrap_err();
    assert_eq!(err.status(), 404);

    let err = handle(get("/photo?index=7&name=Sugarloaf+Commons", Some(&cookie)), &app).unwrap_err();
    assert_eq!(err.status(), 404);

    let err = handle(get("/photo?index=0&name=Sugarloaf+Commons", None), &app).unwrap_err();
    assert_eq!(err.status(), 404);

    let err = handle(get("/photo?index=x&name=Sugarloaf+Commons", Some(&cookie)), &app).unwrap_err();
    assert_eq!(err.status(), 400);

    assert_eq!(api.calls("keyword_photo"), 0);
}
