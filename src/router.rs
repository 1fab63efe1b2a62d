use crate::api::MapsKeyPayload;
use crate::app::{self, AppState};
use crate::config::MapsKeyError;
use crate::domain::filter::{clamp_max_commute, clamp_min_rating};
use crate::domain::CommuteScenario;
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, text_response, with_cookie, ResultResp};
use crate::state::sessions::SharedState;
use crate::state::{recover, session_cookie, session_from_cookie_header, Action, Session};
use crate::templates;
use crate::templates::components::photo_img;
use astra::Request;
use serde_json::json;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::{debug, error, warn};

pub fn handle(req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);

    debug!(%method, %path, "request");

    match (method, path) {
        ("GET", "/") => explorer(&req, &params, app),
        ("GET", "/results") => results(&req, &params, app),
        ("GET", "/photo") => photo(&req, &params, app),
        ("GET", "/api/maps-key") => maps_key(app),
        ("GET", "/healthz") => text_response("ok"),
        _ => Err(ServerError::NotFound),
    }
}

fn explorer(req: &Request, params: &HashMap<String, String>, app: &AppState) -> ResultResp {
    let session = session_for(req, app);
    app::dispatch(&app.api, &session.state, Action::LoadHospitals);

    // another request of this session is still fetching the list
    if !recover(session.state.lock()).hospitals_settled() {
        return finish(html_response(templates::pages::loading_page())?, &session);
    }

    if let Some(name) = params.get("hospital").filter(|n| !n.is_empty()) {
        app::select_hospital(&app.api, &session.state, name)?;
    }
    apply_criteria(&session.state, params)?;

    let state = app::snapshot(&session.state);
    finish(html_response(templates::pages::explorer_page(&state))?, &session)
}

fn results(req: &Request, params: &HashMap<String, String>, app: &AppState) -> ResultResp {
    let session = session_for(req, app);
    app::dispatch(&app.api, &session.state, Action::LoadHospitals);
    apply_criteria(&session.state, params)?;

    let state = app::snapshot(&session.state);
    finish(html_response(templates::pages::results_fragment(&state))?, &session)
}

/// Resolves the photo for slot `index` of the session's current list.
/// A slot whose property has since moved or vanished is a 404, which
/// leaves the placeholder in place.
fn photo(req: &Request, params: &HashMap<String, String>, app: &AppState) -> ResultResp {
    let index: usize = required(params, "index")?;
    let name = params
        .get("name")
        .ok_or_else(|| ServerError::BadRequest("missing name".into()))?;

    let state = cookie_value(req)
        .and_then(|id| app.sessions.get(id))
        .ok_or(ServerError::NotFound)?;

    let property = recover(state.lock())
        .filtered
        .get(index)
        .filter(|p| &p.property_name == name)
        .cloned()
        .ok_or(ServerError::NotFound)?;

    let photo = app.photos.resolve(&property, index);
    debug!(property = %property.property_name, source = ?photo.source, "photo resolved");

    html_response(photo_img(&photo.url, &property.property_name, index))
}

fn maps_key(app: &AppState) -> ResultResp {
    match app.config.maps_key.resolve(app.config.environment) {
        Ok(api_key) => json_response(200, &MapsKeyPayload { api_key }),
        Err(MapsKeyError::NotConfigured) => {
            warn!("maps key requested but none is configured");
            json_response(500, &json!({ "error": "API key not configured" }))
        }
        Err(MapsKeyError::Unreadable(reason)) => {
            error!(%reason, "failed to read maps key secret");
            json_response(500, &json!({ "error": "Failed to fetch API key" }))
        }
    }
}

/// Applies whichever criteria the query carries. Out-of-range numbers are
/// clamped; unparseable ones are rejected.
fn apply_criteria(state: &SharedState, params: &HashMap<String, String>) -> Result<(), ServerError> {
    let mut actions = Vec::new();

    if let Some(raw) = params.get("scenario") {
        let scenario = CommuteScenario::parse(raw)
            .filter(|s| s.is_available())
            .ok_or_else(|| ServerError::BadRequest(format!("unsupported scenario: {raw}")))?;
        actions.push(Action::SetScenario(scenario));
    }
    if let Some(search) = params.get("q") {
        actions.push(Action::SetSearch(search.clone()));
    }
    if let Some(minutes) = optional::<u32>(params, "max_commute")? {
        actions.push(Action::SetMaxCommute(clamp_max_commute(minutes)));
    }
    if let Some(rating) = optional::<f64>(params, "min_rating")? {
        actions.push(Action::SetMinRating(clamp_min_rating(rating)));
    }

    let mut s = recover(state.lock());
    for action in actions {
        s.dispatch(action);
    }
    Ok(())
}

fn session_for(req: &Request, app: &AppState) -> Session {
    app.sessions.get_or_create(cookie_value(req))
}

fn cookie_value(req: &Request) -> Option<&str> {
    req.headers()
        .get("cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(session_from_cookie_header)
}

fn finish(resp: astra::Response, session: &Session) -> ResultResp {
    if session.is_new {
        with_cookie(resp, &session_cookie(&session.id))
    } else {
        Ok(resp)
    }
}

fn optional<T: FromStr>(params: &HashMap<String, String>, key: &str) -> Result<Option<T>, ServerError> {
    match params.get(key).map(|v| v.trim()).filter(|v| !v.is_empty()) {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| ServerError::BadRequest(format!("invalid {key}: {raw}"))),
        None => Ok(None),
    }
}

fn required<T: FromStr>(params: &HashMap<String, String>, key: &str) -> Result<T, ServerError> {
    optional(params, key)?.ok_or_else(|| ServerError::BadRequest(format!("missing {key}")))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
