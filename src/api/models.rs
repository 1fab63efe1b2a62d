use crate::domain::Property;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// `GET /api/hospitals/{slug}/properties`
#[derive(Debug, Deserialize)]
pub struct PropertiesEnvelope {
    #[serde(default)]
    pub properties: Option<Vec<Value>>,
}

impl PropertiesEnvelope {
    /// Decodes each record on its own; a malformed one is logged and
    /// skipped instead of failing the whole list.
    pub fn into_properties(self) -> Vec<Property> {
        self.properties
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw)| match serde_json::from_value::<Property>(raw) {
                Ok(property) => Some(property),
                Err(e) => {
                    warn!(index, error = %e, "skipping malformed property record");
                    None
                }
            })
            .collect()
    }
}

/// Body of the keyword and free-text photo lookups.
#[derive(Debug, Serialize)]
pub struct PhotoQuery<'a> {
    pub property_name: &'a str,
    pub address: &'a str,
}

impl<'a> PhotoQuery<'a> {
    pub fn for_property(property: &'a Property) -> Self {
        Self {
            property_name: &property.property_name,
            address: &property.address,
        }
    }
}

/// Shared answer shape of all three photo services.
#[derive(Debug, Default, Deserialize)]
pub struct PhotoLookup {
    #[serde(default)]
    pub has_photo: bool,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl PhotoLookup {
    pub fn into_url(self) -> Option<String> {
        if !self.has_photo {
            return None;
        }
        self.photo_url.filter(|url| !url.trim().is_empty())
    }
}

/// `GET /api/maps-key`
#[derive(Debug, Serialize, Deserialize)]
pub struct MapsKeyPayload {
    #[serde(rename = "apiKey")]
    pub api_key: String,
}
