// src/domain/property.rs
use crate::domain::commute::CommuteBucket;
use crate::domain::geo::LatLng;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Literal the backend stores when a listing was never matched to a place.
const PLACE_ID_PLACEHOLDER: &str = "None";

/// A rental listing near a hospital, as served by the housing backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub property_name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(deserialize_with = "whole_number")]
    pub driving_duration_minutes: u32,

    #[serde(default, deserialize_with = "nullable_whole_number")]
    pub rush_hour_duration_minutes: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    #[serde(default, deserialize_with = "nullable_whole_number")]
    pub total_reviews: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_level: u8,
    /// Back-reference by name, not ownership.
    #[serde(default, deserialize_with = "null_as_default")]
    pub hospital_name: String,

    #[serde(default)]
    pub marketing_summary: Option<String>,
    #[serde(default)]
    pub place_id: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `12` as well as `12.0` or `11.6`, rounding to the nearest
/// whole number. Negative and non-finite values are rejected.
fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    round_to_u32(raw)
        .ok_or_else(|| D::Error::custom(format!("expected a non-negative number, got {raw}")))
}

fn nullable_whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        Some(raw) => round_to_u32(raw)
            .ok_or_else(|| D::Error::custom(format!("expected a non-negative number, got {raw}"))),
        None => Ok(0),
    }
}

fn round_to_u32(raw: f64) -> Option<u32> {
    let rounded = raw.round();
    let in_range = rounded.is_finite() && rounded >= 0.0 && rounded <= f64::from(u32::MAX);
    in_range.then_some(rounded as u32)
}

impl Property {
    pub fn position(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lng,
        }
    }

    pub fn commute_bucket(&self) -> CommuteBucket {
        CommuteBucket::from_minutes(self.driving_duration_minutes)
    }

    /// The external place identifier, if it is usable for a lookup.
    pub fn place_id(&self) -> Option<&str> {
        self.place_id
            .as_deref()
            .filter(|id| !id.trim().is_empty() && *id != PLACE_ID_PLACEHOLDER)
    }

    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.property_name.to_lowercase().contains(needle)
            || self.address.to_lowercase().contains(needle)
    }

    pub fn rating_stars(&self) -> String {
        rating_stars(self.rating)
    }

    pub fn price_symbols(&self) -> String {
        "$".repeat(self.price_level.max(1) as usize)
    }
}

/// Five glyphs: one filled star per whole rating point, hollow for the rest.
pub fn rating_stars(rating: f64) -> String {
    let full = rating.clamp(0.0, 5.0).floor() as usize;
    format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
}
