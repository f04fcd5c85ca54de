//! Markdown rendering of lookup results.

use geolook_services::types::{AddressResult, Coordinates, WeatherResult};

/// Single line describing the captured coordinates.
pub fn coordinates_line(coords: Coordinates) -> String {
    format!(
        "Latitude: {} | Longitude: {}",
        coords.latitude, coords.longitude
    )
}

/// Markdown card for a resolved address.
pub fn address_card(address: &AddressResult) -> String {
    format!(
        "**Address found**\n\
         - Road: {}\n\
         - City: {}\n\
         - State: {}\n\
         - Postal code: {}\n\
         - Country: {}\n",
        address.road, address.city, address.state, address.postal_code, address.country
    )
}

/// Markdown card for current weather. Temperatures and wind speed are
/// shown with one decimal.
pub fn weather_card(weather: &WeatherResult) -> String {
    format!(
        "**Weather in {}**\n\
         - Description: {}\n\
         - Temperature: {:.1}°C\n\
         - Feels like: {:.1}°C\n\
         - Humidity: {}%\n\
         - Wind: {:.1} m/s\n",
        weather.city_name,
        weather.description,
        weather.temperature_c,
        weather.feels_like_c,
        weather.humidity_percent,
        weather.wind_speed_ms
    )
}
