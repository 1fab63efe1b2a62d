// src/domain/hospital.rs
use crate::domain::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Prefix shared by every hospital in the network; dropped in compact labels.
pub const NETWORK_PREFIX: &str = "Northside Hospital ";

/// A fixed point of interest. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

impl Hospital {
    pub fn position(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lng,
        }
    }

    /// Path segment used by the backend: "Northside Hospital Gwinnett"
    /// becomes "northside_hospital_gwinnett".
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    pub fn short_name(&self) -> String {
        self.name.replacen(NETWORK_PREFIX, "", 1)
    }
}

/// Lowercases and replaces every run of whitespace with a single underscore.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;

    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }

    out
}
