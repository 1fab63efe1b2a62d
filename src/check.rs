// src/check.rs
//! Smoke check against a running backend and a running explorer.
use reqwest::blocking::Client;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BACKEND: &str = "http://localhost:8080";
pub const DEFAULT_FRONTEND: &str = "http://localhost:3003";

const EXPECTED_HOSPITALS: usize = 6;
const MIN_GWINNETT_PROPERTIES: usize = 20;
const GWINNETT: &str = "Northside Hospital Gwinnett";
const REQUIRED_PROPERTY_FIELDS: [&str; 5] =
    ["property_name", "address", "lat", "lng", "driving_duration_minutes"];

/// What one GET came back with.
pub struct Probe {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

impl Probe {
    fn json(&self) -> Result<Value, String> {
        serde_json::from_str(&self.body).map_err(|e| format!("invalid JSON: {e}"))
    }
}

type Validator = fn(&Probe) -> Result<(), String>;

struct Check {
    name: &'static str,
    url: String,
    validate: Validator,
}

fn expect_ok(probe: &Probe) -> Result<(), String> {
    if probe.status != 200 {
        return Err(format!("Expected 200, got {}", probe.status));
    }
    Ok(())
}

pub fn validate_hospitals(probe: &Probe) -> Result<(), String> {
    expect_ok(probe)?;
    let json = probe.json()?;
    let list = json.as_array().ok_or("Expected array of hospitals")?;
    if list.len() != EXPECTED_HOSPITALS {
        return Err(format!(
            "Expected {EXPECTED_HOSPITALS} hospitals, got {}",
            list.len()
        ));
    }
    if !list.iter().any(|h| h["name"] == GWINNETT) {
        return Err("Gwinnett hospital not found".into());
    }
    Ok(())
}

pub fn validate_gwinnett_properties(probe: &Probe) -> Result<(), String> {
    expect_ok(probe)?;
    let json = probe.json()?;
    let list = json["properties"]
        .as_array()
        .ok_or("No properties array found")?;
    if list.len() < MIN_GWINNETT_PROPERTIES {
        return Err(format!(
            "Expected {MIN_GWINNETT_PROPERTIES}+ properties, got {}",
            list.len()
        ));
    }
    let first = &list[0];
    match REQUIRED_PROPERTY_FIELDS
        .iter()
        .find(|field| first.get(**field).is_none())
    {
        Some(field) => Err(format!("Missing required field: {field}")),
        None => Ok(()),
    }
}

pub fn validate_cors(probe: &Probe) -> Result<(), String> {
    if probe.headers.contains_key("access-control-allow-origin") {
        Ok(())
    } else {
        Err("No CORS header found".into())
    }
}

pub fn validate_homepage(probe: &Probe) -> Result<(), String> {
    expect_ok(probe)?;
    if !probe.body.contains("Hospital Housing") {
        return Err("Hospital housing content not found".into());
    }
    Ok(())
}

pub fn validate_maps_key(probe: &Probe) -> Result<(), String> {
    expect_ok(probe)?;
    let json = probe.json()?;
    let key = json["apiKey"].as_str().ok_or("No API key returned")?;
    if !key.starts_with("AIzaSy") {
        return Err("Invalid API key format".into());
    }
    Ok(())
}

fn checks(backend: &str, frontend: &str) -> Vec<Check> {
    let backend = backend.trim_end_matches('/');
    let frontend = frontend.trim_end_matches('/');

    vec![
        Check {
            name: "Backend: Hospital List API",
            url: format!("{backend}/api/hospitals"),
            validate: validate_hospitals,
        },
        Check {
            name: "Backend: Gwinnett Properties API",
            url: format!("{backend}/api/hospitals/northside_hospital_gwinnett/properties"),
            validate: validate_gwinnett_properties,
        },
        Check {
            name: "Backend: CORS Headers",
            url: format!("{backend}/api/hospitals"),
            validate: validate_cors,
        },
        Check {
            name: "Frontend: Homepage Access",
            url: format!("{frontend}/"),
            validate: validate_homepage,
        },
        Check {
            name: "Frontend: Maps API Key Endpoint",
            url: format!("{frontend}/api/maps-key"),
            validate: validate_maps_key,
        },
    ]
}

fn fetch(client: &Client, url: &str) -> Result<Probe, String> {
    let resp = client.get(url).send().map_err(|e| e.to_string())?;
    let status = resp.status().as_u16();
    let headers = resp.headers().clone();
    let body = resp.text().map_err(|e| e.to_string())?;
    Ok(Probe {
        status,
        headers,
        body,
    })
}

/// Runs every check in order and returns the process exit code.
pub fn run(backend: &str, frontend: &str) -> i32 {
    let client = match Client::builder().timeout(Duration::from_secs(30)).build() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Could not build HTTP client: {e}");
            return 1;
        }
    };

    println!("Starting Hospital Housing integration checks\n");

    let checks = checks(backend, frontend);
    let mut passed = 0;
    for check in &checks {
        debug!(url = %check.url, "running check");
        match fetch(&client, &check.url).and_then(|probe| (check.validate)(&probe)) {
            Ok(()) => {
                passed += 1;
                println!("{}... PASS", check.name);
            }
            Err(reason) => println!("{}... FAIL: {reason}", check.name),
        }
    }

    let total = checks.len();
    let failed = total - passed;
    println!("\nResults: {passed} passed, {failed} failed");
    println!(
        "Success rate: {:.1}%",
        passed as f64 / total as f64 * 100.0
    );

    if failed == 0 {
        println!("All checks passed");
        0
    } else {
        1
    }
}
