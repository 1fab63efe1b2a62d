// src/tests/utils.rs
use crate::api::{ApiError, HousingApi, PhotoLookup};
use crate::app::AppState;
use crate::config::Config;
use crate::domain::{Hospital, Property};
use crate::router::handle;
use crate::state::{recover, session_from_cookie_header};
use astra::{Body, Request, Response};
use http::Method;
use std::collections::HashMap;
use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

pub fn hospital(name: &str, lat: f64, lng: f64) -> Hospital {
    Hospital {
        name: name.to_string(),
        address: format!("{name} Way"),
        lat,
        lng,
    }
}

pub fn property(name: &str, address: &str, minutes: u32, rating: f64) -> Property {
    Property {
        property_name: name.to_string(),
        address: address.to_string(),
        lat: 33.96,
        lng: -83.99,
        driving_duration_minutes: minutes,
        rush_hour_duration_minutes: minutes + 5,
        rating,
        total_reviews: 100,
        price_level: 2,
        hospital_name: String::new(),
        marketing_summary: None,
        place_id: None,
    }
}

pub fn property_at(name: &str, minutes: u32, lat: f64, lng: f64) -> Property {
    Property {
        lat,
        lng,
        ..property(name, "1 Test St", minutes, 4.0)
    }
}

/// Scripted backend. Every call is counted by method name.
#[derive(Default)]
pub struct FakeApi {
    hospitals: Option<Vec<Hospital>>,
    properties: HashMap<String, Vec<Property>>,
    keyword_photo: Option<String>,
    place_photo: Option<String>,
    search_photo: Option<String>,
    photos_fail: bool,
    properties_delay: Option<Duration>,
    calls: Mutex<HashMap<&'static str, usize>>,
}

impl FakeApi {
    pub fn with_hospitals(mut self, hospitals: Vec<Hospital>) -> Self {
        self.hospitals = Some(hospitals);
        self
    }

    pub fn with_properties(mut self, hospital: &str, properties: Vec<Property>) -> Self {
        self.properties.insert(hospital.to_string(), properties);
        self
    }

    pub fn with_slow_properties(mut self, delay: Duration) -> Self {
        self.properties_delay = Some(delay);
        self
    }

    pub fn with_keyword_photo(mut self, url: &str) -> Self {
        self.keyword_photo = Some(url.to_string());
        self
    }

    pub fn with_place_photo(mut self, url: &str) -> Self {
        self.place_photo = Some(url.to_string());
        self
    }

    pub fn with_search_photo(mut self, url: &str) -> Self {
        self.search_photo = Some(url.to_string());
        self
    }

    pub fn failing_photos(mut self) -> Self {
        self.photos_fail = true;
        self
    }

    pub fn calls(&self, name: &str) -> usize {
        self.calls.lock().unwrap().get(name).copied().unwrap_or(0)
    }

    fn record(&self, name: &'static str) {
        *self.calls.lock().unwrap().entry(name).or_insert(0) += 1;
    }

    fn photo(&self, url: &Option<String>) -> Result<PhotoLookup, ApiError> {
        if self.photos_fail {
            return Err(ApiError::Network("connection refused".into()));
        }
        Ok(PhotoLookup {
            has_photo: url.is_some(),
            photo_url: url.clone(),
        })
    }
}

impl HousingApi for FakeApi {
    fn hospitals(&self) -> Result<Vec<Hospital>, ApiError> {
        self.record("hospitals");
        self.hospitals.clone().ok_or(ApiError::Status {
            status: 503,
            url: "/api/hospitals".into(),
        })
    }

    fn properties(&self, hospital: &Hospital) -> Result<Vec<Property>, ApiError> {
        self.record("properties");
        if let Some(delay) = self.properties_delay {
            thread::sleep(delay);
        }
        self.properties
            .get(&hospital.name)
            .cloned()
            .ok_or_else(|| ApiError::Status {
                status: 404,
                url: format!("/api/hospitals/{}/properties", hospital.slug()),
            })
    }

    fn keyword_photo(&self, _property: &Property) -> Result<PhotoLookup, ApiError> {
        self.record("keyword_photo");
        self.photo(&self.keyword_photo)
    }

    fn place_photo(&self, _place_id: &str) -> Result<PhotoLookup, ApiError> {
        self.record("place_photo");
        self.photo(&self.place_photo)
    }

    fn search_photo(&self, _property: &Property) -> Result<PhotoLookup, ApiError> {
        self.record("search_photo");
        self.photo(&self.search_photo)
    }
}

/// App wired to `api`, with whatever config overrides are given.
pub fn test_app(api: Arc<FakeApi>, env: &[(&str, &str)]) -> AppState {
    let env: HashMap<String, String> = env
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let config = Config::from_lookup(|key| env.get(key).cloned())
        .unwrap_or_else(|e| panic!("test config: {e}"));
    AppState::new(config, api)
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    if let Some(cookie) = cookie {
        req.headers_mut().insert("cookie", cookie.parse().unwrap());
    }
    req
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// The `name=value` part of the response's set-cookie header.
pub fn session_cookie_of(resp: &Response) -> Option<String> {
    resp.headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

/// Blocks until the session behind `cookie` has no property fetch in flight.
pub fn wait_for_properties(app: &AppState, cookie: &str) {
    let id = session_from_cookie_header(cookie).expect("session cookie");
    let state = app.sessions.get(id).expect("live session");
    let deadline = Instant::now() + Duration::from_secs(5);

    while recover(state.lock()).loading_properties {
        assert!(Instant::now() < deadline, "properties never finished loading");
        thread::sleep(Duration::from_millis(5));
    }
}

/// First visit plus the background property fetch it starts; returns the
/// session cookie.
pub fn loaded_session(app: &AppState) -> String {
    let resp = handle(get("/", None), app).expect("first visit");
    let cookie = session_cookie_of(&resp).expect("session cookie issued");
    wait_for_properties(app, &cookie);
    cookie
}
