use serde::{Deserialize, Serialize};

/// Sentinel for fields the upstream service omitted.
pub const NOT_AVAILABLE: &str = "N/A";

pub(crate) fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

/// A captured position fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Postal address resolved from coordinates.
///
/// Every field carries [`NOT_AVAILABLE`] when the geocoder had no value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressResult {
    pub formatted: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub road: String,
}

/// Current weather at a position.
///
/// Temperatures are rounded to one decimal place at mapping time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub description: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_percent: u8,
    pub wind_speed_ms: f64,
    pub city_name: String,
}

/// Position acquisition errors.
#[derive(Debug, thiserror::Error)]
pub enum PositionError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Positioning sensor unavailable: {0}")]
    SensorUnavailable(String),
}

impl PositionError {
    /// User-friendly message suitable for a notification.
    pub fn user_message(&self) -> &'static str {
        match self {
            PositionError::PermissionDenied => "Enable location permission and try again.",
            PositionError::SensorUnavailable(_) => "Could not determine the current position.",
        }
    }
}

/// Errors from the address and weather lookups.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("No coordinates available")]
    MissingCoordinates,
    #[error("No match for the given coordinates")]
    NoMatch,
    #[error("Service error: {0}")]
    Service(String),
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl LookupError {
    /// User-friendly message suitable for a notification.
    pub fn user_message(&self) -> &'static str {
        match self {
            LookupError::MissingCoordinates => "Get the current position first.",
            LookupError::NoMatch => "Nothing was found for this position.",
            LookupError::Service(_) => "The lookup service rejected the request.",
            LookupError::Transport(_) => "Network error. Check your connection.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_serialization() {
        let coords = Coordinates::new(-23.55, -46.63);
        let json = serde_json::to_string(&coords).unwrap();
        assert!(json.contains("-23.55"));
        assert!(json.contains("-46.63"));

        let back: Coordinates = serde_json::from_str(&json).unwrap();
        assert_eq!(back, coords);
    }

    #[test]
    fn position_error_user_messages() {
        assert!(PositionError::PermissionDenied
            .user_message()
            .contains("permission"));
        assert!(!PositionError::SensorUnavailable("timeout".into())
            .user_message()
            .is_empty());
    }

    #[test]
    fn lookup_error_user_messages() {
        assert!(LookupError::MissingCoordinates
            .user_message()
            .contains("position"));
        assert!(!LookupError::NoMatch.user_message().is_empty());
        assert!(!LookupError::Service("quota".into()).user_message().is_empty());
    }

    #[test]
    fn lookup_error_display_keeps_upstream_message() {
        let err = LookupError::Service("Invalid API key".into());
        assert!(err.to_string().contains("Invalid API key"));
    }
}
