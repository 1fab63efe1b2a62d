// client.rs
use super::api_error::ApiError;
use super::models::{PhotoLookup, PhotoQuery, PropertiesEnvelope};
use crate::domain::{Hospital, Property};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("hospital_housing/", env!("CARGO_PKG_VERSION"));

/// The housing backend, consumed as a fixed JSON contract.
pub trait HousingApi: Send + Sync {
    /// `GET /api/hospitals`
    fn hospitals(&self) -> Result<Vec<Hospital>, ApiError>;

    /// `GET /api/hospitals/{slug}/properties`
    fn properties(&self, hospital: &Hospital) -> Result<Vec<Property>, ApiError>;

    /// `POST /api/property/maps-photo`
    fn keyword_photo(&self, property: &Property) -> Result<PhotoLookup, ApiError>;

    /// `GET /api/property/{place_id}/photo`
    fn place_photo(&self, place_id: &str) -> Result<PhotoLookup, ApiError>;

    /// `POST /api/property/search-photo`
    fn search_photo(&self, property: &Property) -> Result<PhotoLookup, ApiError>;
}

pub struct HttpHousingApi {
    client: Client,
    base_url: Url,
}

impl HttpHousingApi {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Url(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(%url, "GET");
        self.send_json(self.client.get(url.clone()), &url)
    }

    fn post_json<T, B>(&self, url: Url, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        debug!(%url, "POST");
        self.send_json(self.client.post(url.clone()).json(body), &url)
    }

    fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &Url,
    ) -> Result<T, ApiError> {
        let resp = request
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        resp.json::<T>()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl HousingApi for HttpHousingApi {
    fn hospitals(&self) -> Result<Vec<Hospital>, ApiError> {
        self.get_json(self.endpoint(&["api", "hospitals"])?)
    }

    fn properties(&self, hospital: &Hospital) -> Result<Vec<Property>, ApiError> {
        let slug = hospital.slug();
        let url = self.endpoint(&["api", "hospitals", &slug, "properties"])?;
        let envelope: PropertiesEnvelope = self.get_json(url)?;
        Ok(envelope.into_properties())
    }

    fn keyword_photo(&self, property: &Property) -> Result<PhotoLookup, ApiError> {
        let url = self.endpoint(&["api", "property", "maps-photo"])?;
        self.post_json(url, &PhotoQuery::for_property(property))
    }

    fn place_photo(&self, place_id: &str) -> Result<PhotoLookup, ApiError> {
        self.get_json(self.endpoint(&["api", "property", place_id, "photo"])?)
    }

    fn search_photo(&self, property: &Property) -> Result<PhotoLookup, ApiError> {
        let url = self.endpoint(&["api", "property", "search-photo"])?;
        self.post_json(url, &PhotoQuery::for_property(property))
    }
}
