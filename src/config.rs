// src/config.rs
use crate::errors::ServerError;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEV_API_BASE_URL: &str = "http://localhost:8080";
pub const PROD_API_BASE_URL: &str =
    "https://northside-housing-explorer-907131932548.us-central1.run.app";
pub const DEFAULT_HOSPITAL: &str = "Northside Hospital Gwinnett";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn parse(raw: &str) -> Result<Self, ServerError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(ServerError::Config(format!(
                "HOUSING_ENV must be development or production, got {other:?}"
            ))),
        }
    }

    pub fn default_api_base_url(self) -> &'static str {
        match self {
            Environment::Development => DEV_API_BASE_URL,
            Environment::Production => PROD_API_BASE_URL,
        }
    }
}

/// Where the maps key comes from. Production prefers the mounted secret,
/// development prefers the plain configuration value.
#[derive(Debug, Clone, Default)]
pub struct MapsKeySource {
    pub value: Option<String>,
    pub secret_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub api_base_url: Url,
    pub http_timeout: Duration,
    pub session_idle_ttl: Duration,
    pub default_hospital: String,
    pub maps_key: MapsKeySource,
}

impl Config {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value lookup so tests can feed a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = match get("HOUSING_ENV") {
            Some(raw) => Environment::parse(&raw)?,
            None => Environment::Development,
        };

        let bind_addr = get("HOUSING_BIND_ADDR")
            .unwrap_or_else(|| "127.0.0.1:3000".to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ServerError::Config(format!("HOUSING_BIND_ADDR: {e}")))?;

        let max_workers = match get("HOUSING_MAX_WORKERS") {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ServerError::Config(format!("HOUSING_MAX_WORKERS: invalid value {raw:?}"))
                })?,
            None => 8,
        };

        let base = get("HOUSING_API_BASE_URL")
            .unwrap_or_else(|| environment.default_api_base_url().to_string());
        let api_base_url = Url::parse(&base)
            .map_err(|e| ServerError::Config(format!("HOUSING_API_BASE_URL: {e}")))?;
        if api_base_url.cannot_be_a_base() {
            return Err(ServerError::Config(format!(
                "HOUSING_API_BASE_URL: {base} cannot be used as a base URL"
            )));
        }

        let http_timeout = positive_secs(&get, "HOUSING_HTTP_TIMEOUT_SECS", 30)?;
        let session_idle_ttl = positive_secs(&get, "HOUSING_SESSION_IDLE_SECS", 30 * 60)?;

        Ok(Self {
            environment,
            bind_addr,
            max_workers,
            api_base_url,
            http_timeout,
            session_idle_ttl,
            default_hospital: get("HOUSING_DEFAULT_HOSPITAL")
                .unwrap_or_else(|| DEFAULT_HOSPITAL.to_string()),
            maps_key: MapsKeySource {
                value: get("GOOGLE_MAPS_API_KEY"),
                secret_file: get("GOOGLE_MAPS_API_KEY_FILE").map(PathBuf::from),
            },
        })
    }
}

/// A whole number of seconds, at least one.
fn positive_secs<G>(get: &G, key: &str, default: u64) -> Result<Duration, ServerError>
where
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|n| *n > 0)
            .map(Duration::from_secs)
            .ok_or_else(|| ServerError::Config(format!("{key}: invalid value {raw:?}"))),
        None => Ok(Duration::from_secs(default)),
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MapsKeyError {
    NotConfigured,
    Unreadable(String),
}

impl MapsKeySource {
    pub fn resolve(&self, environment: Environment) -> Result<String, MapsKeyError> {
        let from_value = || self.value.clone().filter(|k| !k.trim().is_empty());

        match environment {
            Environment::Production => match self.read_secret()? {
                Some(key) => Ok(key),
                None => from_value().ok_or(MapsKeyError::NotConfigured),
            },
            Environment::Development => match from_value() {
                Some(key) => Ok(key),
                None => self.read_secret()?.ok_or(MapsKeyError::NotConfigured),
            },
        }
    }

    fn read_secret(&self) -> Result<Option<String>, MapsKeyError> {
        let Some(path) = &self.secret_file else {
            return Ok(None);
        };
        let raw = std::fs::read_to_string(path)
            .map_err(|e| MapsKeyError::Unreadable(format!("{}: {e}", path.display())))?;
        let key = raw.trim();
        Ok((!key.is_empty()).then(|| key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_development_backend() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.environment, Environment::Development);
        assert_eq!(cfg.api_base_url.as_str(), "http://localhost:8080/");
        assert_eq!(cfg.max_workers, 8);
        assert_eq!(cfg.default_hospital, DEFAULT_HOSPITAL);
        assert_eq!(cfg.http_timeout, Duration::from_secs(30));
        assert_eq!(cfg.session_idle_ttl, Duration::from_secs(1800));
    }

    #[test]
    fn production_switches_backend() {
        let cfg = Config::from_lookup(lookup(&[("HOUSING_ENV", "production")])).unwrap();
        assert_eq!(cfg.environment, Environment::Production);
        assert!(cfg.api_base_url.as_str().starts_with(PROD_API_BASE_URL));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::from_lookup(lookup(&[("HOUSING_ENV", "staging")])).is_err());
        assert!(Config::from_lookup(lookup(&[("HOUSING_MAX_WORKERS", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("HOUSING_BIND_ADDR", "nope")])).is_err());
        assert!(Config::from_lookup(lookup(&[("HOUSING_API_BASE_URL", "mailto:x@y")])).is_err());
    }

    #[test]
    fn durations_must_be_positive() {
        assert!(Config::from_lookup(lookup(&[("HOUSING_HTTP_TIMEOUT_SECS", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("HOUSING_HTTP_TIMEOUT_SECS", "-5")])).is_err());
        assert!(Config::from_lookup(lookup(&[("HOUSING_SESSION_IDLE_SECS", "0")])).is_err());

        let cfg = Config::from_lookup(lookup(&[
            ("HOUSING_HTTP_TIMEOUT_SECS", "5"),
            ("HOUSING_SESSION_IDLE_SECS", "120"),
        ]))
        .unwrap();
        assert_eq!(cfg.http_timeout, Duration::from_secs(5));
        assert_eq!(cfg.session_idle_ttl, Duration::from_secs(120));
    }

    #[test]
    fn maps_key_prefers_value_in_development() {
        let dir = std::env::temp_dir().join(format!("maps_key_dev_{}", std::process::id()));
        std::fs::write(&dir, "AIzaSyFromSecret\n").unwrap();

        let source = MapsKeySource {
            value: Some("AIzaSyFromEnv".into()),
            secret_file: Some(dir.clone()),
        };
        assert_eq!(
            source.resolve(Environment::Development).unwrap(),
            "AIzaSyFromEnv"
        );
        assert_eq!(
            source.resolve(Environment::Production).unwrap(),
            "AIzaSyFromSecret"
        );

        std::fs::remove_file(dir).ok();
    }

    #[test]
    fn maps_key_missing_everywhere() {
        let source = MapsKeySource::default();
        assert_eq!(
            source.resolve(Environment::Production),
            Err(MapsKeyError::NotConfigured)
        );
    }

    #[test]
    fn maps_key_unreadable_secret() {
        let source = MapsKeySource {
            value: None,
            secret_file: Some(PathBuf::from("/definitely/not/here/maps-key")),
        };
        assert!(matches!(
            source.resolve(Environment::Production),
            Err(MapsKeyError::Unreadable(_))
        ));
    }
}
