use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub geocoder: GeocoderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// OEM ephemeris document to load and reload from.
    #[serde(default = "default_upstream_url")]
    pub url: String,
    #[serde(default = "default_upstream_timeout")]
    pub timeout_s: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        UpstreamConfig {
            url: default_upstream_url(),
            timeout_s: default_upstream_timeout(),
        }
    }
}

fn default_upstream_url() -> String {
    "https://nasa-public-data.s3.amazonaws.com/iss-coords/current/ISS_OEM/ISS.OEM_J2K_EPH.xml"
        .to_string()
}

fn default_upstream_timeout() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocoderConfig {
    /// Nominatim-compatible reverse geocoding endpoint.
    #[serde(default = "default_geocoder_url")]
    pub base_url: String,
    /// Reverse lookup precision; 10 roughly corresponds to city level.
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    #[serde(default = "default_geocoder_timeout")]
    pub timeout_s: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        GeocoderConfig {
            base_url: default_geocoder_url(),
            zoom: default_zoom(),
            timeout_s: default_geocoder_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_geocoder_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_zoom() -> u8 {
    10
}

fn default_geocoder_timeout() -> u64 {
    5
}

fn default_user_agent() -> String {
    "iss_tracker".to_string()
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
