mod api_error;
mod client;
mod models;

pub use api_error::ApiError;
pub use client::{HousingApi, HttpHousingApi};
pub use models::{MapsKeyPayload, PhotoLookup};
