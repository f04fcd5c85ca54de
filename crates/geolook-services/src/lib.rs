//! External collaborators for the location lookup workflow.
//!
//! Provides the positioning capability seam, the reverse-geocoding and
//! current-weather HTTP clients, and map links derived from coordinates.

pub mod geocode;
pub mod maps;
pub mod position;
pub mod types;
pub mod weather;

pub use geocode::GeocodeClient;
pub use position::{acquire, Accuracy, FixedPosition, PermissionStatus, PositionSource};
pub use types::*;
pub use weather::WeatherClient;
