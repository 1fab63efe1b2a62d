// src/photos/strategies.rs
use crate::api::{ApiError, HousingApi, PhotoLookup};
use crate::domain::Property;
use std::sync::Arc;
use tracing::debug;

/// One way of finding a representative photo for a listing.
pub trait PhotoStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// `None` means "no photo": the lookup failed or found nothing.
    fn resolve(&self, property: &Property) -> Option<String>;
}

/// Collapses a lookup result into an optional URL, logging failures.
fn photo_url(
    strategy: &'static str,
    property: &Property,
    result: Result<PhotoLookup, ApiError>,
) -> Option<String> {
    match result {
        Ok(lookup) => lookup.into_url(),
        Err(e) => {
            debug!(
                strategy,
                property = %property.property_name,
                error = %e,
                "photo lookup failed"
            );
            None
        }
    }
}

/// Keyword lookup on name and address.
pub struct KeywordPhoto {
    api: Arc<dyn HousingApi>,
}

impl KeywordPhoto {
    pub fn new(api: Arc<dyn HousingApi>) -> Self {
        Self { api }
    }
}

impl PhotoStrategy for KeywordPhoto {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn resolve(&self, property: &Property) -> Option<String> {
        photo_url(self.name(), property, self.api.keyword_photo(property))
    }
}

/// Lookup by external place id; skipped when the listing has no usable id.
pub struct PlaceIdPhoto {
    api: Arc<dyn HousingApi>,
}

impl PlaceIdPhoto {
    pub fn new(api: Arc<dyn HousingApi>) -> Self {
        Self { api }
    }
}

impl PhotoStrategy for PlaceIdPhoto {
    fn name(&self) -> &'static str {
        "place_id"
    }

    fn resolve(&self, property: &Property) -> Option<String> {
        let place_id = property.place_id()?;
        photo_url(self.name(), property, self.api.place_photo(place_id))
    }
}

/// Free-text search on name and address.
pub struct SearchPhoto {
    api: Arc<dyn HousingApi>,
}

impl SearchPhoto {
    pub fn new(api: Arc<dyn HousingApi>) -> Self {
        Self { api }
    }
}

impl PhotoStrategy for SearchPhoto {
    fn name(&self) -> &'static str {
        "search"
    }

    fn resolve(&self, property: &Property) -> Option<String> {
        photo_url(self.name(), property, self.api.search_photo(property))
    }
}
