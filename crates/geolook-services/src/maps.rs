//! Map links derived from captured coordinates.

use crate::types::Coordinates;

/// Half-width of the embedded map's bounding box, in degrees.
const EMBED_OFFSET_DEG: f64 = 0.005;

/// Deep link opening the platform map handler at the coordinates.
pub fn search_url(coords: Coordinates) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={},{}",
        coords.latitude, coords.longitude
    )
}

/// OpenStreetMap embed URL with a marker and a bbox of ±0.005°.
pub fn embed_url(coords: Coordinates) -> String {
    let (lat, lon) = (coords.latitude, coords.longitude);
    format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={}%2C{}%2C{}%2C{}&layer=mapnik&marker={}%2C{}",
        lon - EMBED_OFFSET_DEG,
        lat - EMBED_OFFSET_DEG,
        lon + EMBED_OFFSET_DEG,
        lat + EMBED_OFFSET_DEG,
        lat,
        lon
    )
}
