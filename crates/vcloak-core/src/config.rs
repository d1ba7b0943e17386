//! Client configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::error::CoreError;
use crate::Result;

const DEFAULT_ORIGIN: &str = "http://localhost:5000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Origin the client runs against; the API lives under `<origin>/api`
    pub origin: Url,
    /// Path to the local storage database
    pub database_path: PathBuf,
    /// How long a notice stays up unless dismissed
    pub notice_secs: u64,
    /// Delay before the expired-session redirect
    pub redirect_delay_secs: u64,
}

impl Config {
    pub fn new(origin: Url, data_dir: PathBuf) -> Self {
        Self {
            origin,
            database_path: data_dir.join("vcloak.db"),
            notice_secs: 5,
            redirect_delay_secs: 2,
        }
    }

    /// Defaults overridden by `VCLOAK_ORIGIN` and `VCLOAK_DATA_DIR`
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var("VCLOAK_ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string());
        let origin = parse_origin(&raw)?;
        let data_dir = std::env::var("VCLOAK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::data_dir());

        Ok(Self::new(origin, data_dir))
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("vcloak"))
            .unwrap_or_else(|| PathBuf::from(".vcloak"))
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_secs(self.notice_secs)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_secs(self.redirect_delay_secs)
    }

    /// Storage scope key, as the browser would scope localStorage
    pub fn storage_origin(&self) -> String {
        self.origin.origin().ascii_serialization()
    }
}

fn parse_origin(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| CoreError::Config(format!("invalid origin {:?}: {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CoreError::Config(format!(
            "origin must be http or https, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new(parse_origin(DEFAULT_ORIGIN).unwrap(), PathBuf::from("/tmp/vc"));
        assert_eq!(config.database_path, PathBuf::from("/tmp/vc/vcloak.db"));
        assert_eq!(config.notice_duration(), Duration::from_secs(5));
        assert_eq!(config.redirect_delay(), Duration::from_secs(2));
        assert_eq!(config.storage_origin(), "http://localhost:5000");
    }

    #[test]
    fn test_storage_origin_ignores_path() {
        let origin = Url::parse("https://vcloak.test/frontend/index.html").unwrap();
        let config = Config::new(origin, PathBuf::from("."));
        assert_eq!(config.storage_origin(), "https://vcloak.test");
    }

    #[test]
    fn test_parse_origin() {
        assert!(parse_origin("https://vcloak.test").is_ok());
        assert!(matches!(parse_origin("not a url"), Err(CoreError::Config(_))));
        assert!(matches!(
            parse_origin("file:///srv/vcloak"),
            Err(CoreError::Config(_))
        ));
    }

    #[test]
    fn test_from_env_overrides() {
        std::env::set_var("VCLOAK_ORIGIN", "https://staging.vcloak.test/frontend/");
        std::env::set_var("VCLOAK_DATA_DIR", "/srv/vcloak-data");

        let config = Config::from_env().unwrap();
        assert_eq!(config.origin.as_str(), "https://staging.vcloak.test/frontend/");
        assert_eq!(config.storage_origin(), "https://staging.vcloak.test");
        assert_eq!(
            config.database_path,
            PathBuf::from("/srv/vcloak-data/vcloak.db")
        );

        std::env::set_var("VCLOAK_ORIGIN", "ftp://vcloak.test");
        assert!(matches!(Config::from_env(), Err(CoreError::Config(_))));

        std::env::remove_var("VCLOAK_ORIGIN");
        std::env::remove_var("VCLOAK_DATA_DIR");
        let config = Config::from_env().unwrap();
        assert_eq!(config.origin.as_str(), "http://localhost:5000/");
        assert_eq!(config.database_path, Config::data_dir().join("vcloak.db"));
    }
}
