mod fallback;
mod strategies;

pub use fallback::{fallback_image, PLACEHOLDER_IMAGE};
pub use strategies::{KeywordPhoto, PhotoStrategy, PlaceIdPhoto, SearchPhoto};

use crate::api::HousingApi;
use crate::domain::Property;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSource {
    Strategy(&'static str),
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPhoto {
    pub url: String,
    pub source: PhotoSource,
}

/// Ordered list of strategies; the first one that yields a URL wins and the
/// stock set covers the rest. Each strategy runs at most once per call and
/// nothing is cached.
pub struct PhotoResolver {
    strategies: Vec<Box<dyn PhotoStrategy>>,
}

impl PhotoResolver {
    pub fn new(strategies: Vec<Box<dyn PhotoStrategy>>) -> Self {
        Self { strategies }
    }

    /// keyword, then place id, then free-text search.
    pub fn standard(api: Arc<dyn HousingApi>) -> Self {
        Self::new(vec![
            Box::new(KeywordPhoto::new(api.clone())),
            Box::new(PlaceIdPhoto::new(api.clone())),
            Box::new(SearchPhoto::new(api)),
        ])
    }

    pub fn resolve(&self, property: &Property, position: usize) -> ResolvedPhoto {
        for strategy in &self.strategies {
            if let Some(url) = strategy.resolve(property) {
                debug!(
                    strategy = strategy.name(),
                    property = %property.property_name,
                    "photo resolved"
                );
                return ResolvedPhoto {
                    url,
                    source: PhotoSource::Strategy(strategy.name()),
                };
            }
        }

        debug!(property = %property.property_name, position, "using fallback photo");
        ResolvedPhoto {
            url: fallback_image(&property.property_name, position).to_string(),
            source: PhotoSource::Fallback,
        }
    }
}
