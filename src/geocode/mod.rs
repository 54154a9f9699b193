use std::time::Duration;

use serde_json::Value;

use crate::web::config::GeocoderConfig;

/// Substituted whenever the adapter has nothing to say about a coordinate,
/// whether because it is over open ocean or because the lookup failed.
pub const NO_COVERAGE_SENTINEL: &str = "No geolocation data available, ISS is over the ocean";

/// Reverse geocoding against a Nominatim-compatible endpoint. Strictly an
/// external collaborator: every failure mode degrades to `None`, never an
/// error, so a location result can always be produced.
pub struct Geocoder {
    http: reqwest::Client,
    base_url: String,
    zoom: u8,
}

impl Geocoder {
    pub fn new(config: &GeocoderConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_s))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            zoom: config.zoom,
        })
    }

    /// Resolves a coordinate to the endpoint's address block. `None` on
    /// timeout, transport or HTTP errors, and on "no result" responses.
    pub async fn reverse(&self, latitude_deg: f64, longitude_deg: f64) -> Option<Value> {
        let url = format!("{}/reverse", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", latitude_deg.to_string()),
                ("lon", longitude_deg.to_string()),
                ("zoom", self.zoom.to_string()),
                ("accept-language", "en".to_string()),
            ])
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(err) => {
                log::warn!("reverse geocoding request failed: {err}");
                return None;
            }
        };

        let body: Value = match response.error_for_status() {
            Ok(response) => match response.json().await {
                Ok(body) => body,
                Err(err) => {
                    log::warn!("reverse geocoding returned unreadable body: {err}");
                    return None;
                }
            },
            Err(err) => {
                log::warn!("reverse geocoding returned error status: {err}");
                return None;
            }
        };

        // Nominatim reports "unable to geocode" as an error field in an
        // otherwise successful response.
        if body.get("error").is_some() {
            return None;
        }
        body.get("address").cloned()
    }
}
