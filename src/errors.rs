// errors.rs
use thiserror::Error;

/// Errors originating from the server logic
/// (routing, bad input, configuration). Backend failures never reach
/// this type; they degrade to safe defaults at the call site.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Configuration Error: {0}")]
    Config(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Config(_) | ServerError::InternalError => 500,
        }
    }
}
