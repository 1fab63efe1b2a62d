// src/domain/filter.rs
use crate::domain::property::Property;

pub const DEFAULT_MAX_COMMUTE: u32 = 30;
pub const MIN_MAX_COMMUTE: u32 = 5;
pub const MAX_MAX_COMMUTE: u32 = 60;

pub const DEFAULT_MIN_RATING: f64 = 0.0;
pub const MAX_MIN_RATING: f64 = 5.0;
pub const MIN_RATING_STEP: f64 = 0.5;

/// The user's narrowing choices over the full property set.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub search: String,
    pub max_commute: u32,
    pub min_rating: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            max_commute: DEFAULT_MAX_COMMUTE,
            min_rating: DEFAULT_MIN_RATING,
        }
    }
}

/// Clamps a slider value into 5..=60 minutes.
pub fn clamp_max_commute(minutes: u32) -> u32 {
    minutes.clamp(MIN_MAX_COMMUTE, MAX_MAX_COMMUTE)
}

/// Clamps into 0..=5 and snaps to the slider's half-point steps.
pub fn clamp_min_rating(rating: f64) -> f64 {
    if !rating.is_finite() {
        return DEFAULT_MIN_RATING;
    }
    let snapped = (rating / MIN_RATING_STEP).round() * MIN_RATING_STEP;
    snapped.clamp(DEFAULT_MIN_RATING, MAX_MIN_RATING)
}

impl FilterCriteria {
    pub fn min_rating_label(&self) -> String {
        if self.min_rating == 0.0 {
            "Any".to_string()
        } else {
            format!("{:.1}", self.min_rating)
        }
    }
}

/// Derives the displayed subset: search match on name or address
/// (case-insensitive), commute at most `max_commute`, rating at least
/// `min_rating`, then ordered by drive time. Equal drive times keep their
/// input order. The source slice is never touched.
pub fn apply_filters(properties: &[Property], criteria: &FilterCriteria) -> Vec<Property> {
    let needle = criteria.search.to_lowercase();

    let mut filtered: Vec<Property> = properties
        .iter()
        .filter(|p| needle.is_empty() || p.matches_search(&needle))
        .filter(|p| p.driving_duration_minutes <= criteria.max_commute)
        .filter(|p| p.rating >= criteria.min_rating)
        .cloned()
        .collect();

    // sort_by_key is stable
    filtered.sort_by_key(|p| p.driving_duration_minutes);
    filtered
}
