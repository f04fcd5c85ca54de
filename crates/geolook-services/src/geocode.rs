//! Reverse geocoding: convert coordinates to a postal address.
//! Uses the OpenCage JSON API.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::types::{not_available, AddressResult, Coordinates, LookupError};

const OPENCAGE_URL: &str = "https://api.opencagedata.com";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "geolook/0.1.0";

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeocodeClient {
    pub fn new(api_key: &str) -> Result<Self, LookupError> {
        Self::with_base_url(api_key, OPENCAGE_URL)
    }

    /// Client pointed at a non-default endpoint.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve coordinates to a postal address.
    ///
    /// A single GET; an empty result set maps to `NoMatch`, a non-200 status
    /// in the response body to `Service` with the upstream message.
    #[instrument(skip(self), level = "info")]
    pub async fn resolve(&self, coords: Coordinates) -> Result<AddressResult, LookupError> {
        let url = format!(
            "{}/geocode/v1/json?q={}+{}&key={}",
            self.base_url, coords.latitude, coords.longitude, self.api_key
        );

        let response = self.client.get(&url).send().await?;
        let body: GeocodeResponse = response.json().await?;

        if let Some(status) = body.status {
            if status.code != 200 {
                let message = status
                    .message
                    .unwrap_or_else(|| format!("status {}", status.code));
                return Err(LookupError::Service(message));
            }
        }

        let entry = body.results.into_iter().next().ok_or(LookupError::NoMatch)?;
        let address = map_entry(entry);
        tracing::info!("reverse geocoded to: {}", address.formatted);
        Ok(address)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeEntry>,
    status: Option<GeocodeStatus>,
}

#[derive(Debug, Deserialize)]
struct GeocodeStatus {
    code: i64,
    message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GeocodeEntry {
    formatted: Option<String>,
    #[serde(default)]
    components: Components,
}

#[derive(Debug, Default, Deserialize)]
struct Components {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    state: Option<String>,
    country: Option<String>,
    postcode: Option<String>,
    road: Option<String>,
    route: Option<String>,
}

/// Map the first result entry, filling omitted fields with the sentinel.
/// City falls back through town and village, road through route.
fn map_entry(entry: GeocodeEntry) -> AddressResult {
    let c = entry.components;
    AddressResult {
        formatted: entry.formatted.unwrap_or_else(not_available),
        city: c.city.or(c.town).or(c.village).unwrap_or_else(not_available),
        state: c.state.unwrap_or_else(not_available),
        country: c.country.unwrap_or_else(not_available),
        postal_code: c.postcode.unwrap_or_else(not_available),
        road: c.road.or(c.route).unwrap_or_else(not_available),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NOT_AVAILABLE;

    fn entry_from(value: serde_json::Value) -> GeocodeEntry {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn map_entry_keeps_explicit_city() {
        let entry = entry_from(serde_json::json!({
            "formatted": "Av. Paulista, São Paulo, Brazil",
            "components": {
                "city": "São Paulo",
                "town": "ignored",
                "state": "São Paulo",
                "country": "Brazil",
                "postcode": "01310-100",
                "road": "Avenida Paulista"
            }
        }));

        let address = map_entry(entry);
        assert_eq!(address.city, "São Paulo");
        assert_eq!(address.road, "Avenida Paulista");
        assert_eq!(address.formatted, "Av. Paulista, São Paulo, Brazil");
    }

    #[test]
    fn city_falls_back_to_town() {
        let entry = entry_from(serde_json::json!({
            "components": { "town": "X" }
        }));

        assert_eq!(map_entry(entry).city, "X");
    }

    #[test]
    fn city_falls_back_to_village_after_town() {
        let entry = entry_from(serde_json::json!({
            "components": { "village": "Y" }
        }));

        assert_eq!(map_entry(entry).city, "Y");
    }

    #[test]
    fn absent_place_fields_resolve_to_sentinel() {
        let entry = entry_from(serde_json::json!({ "components": {} }));

        let address = map_entry(entry);
        assert_eq!(address.city, NOT_AVAILABLE);
        assert_eq!(address.state, NOT_AVAILABLE);
        assert_eq!(address.country, NOT_AVAILABLE);
        assert_eq!(address.postal_code, NOT_AVAILABLE);
        assert_eq!(address.road, NOT_AVAILABLE);
        assert_eq!(address.formatted, NOT_AVAILABLE);
    }

    #[test]
    fn road_falls_back_to_route() {
        let entry = entry_from(serde_json::json!({
            "components": { "route": "BR-101" }
        }));

        assert_eq!(map_entry(entry).road, "BR-101");
    }
}
