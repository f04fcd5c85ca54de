use anyhow::Result;

use geolook_core::{AppError, Config};
use geolook_services::maps;
use geolook_services::position::FixedPosition;
use geolook_services::{GeocodeClient, WeatherClient};
use geolook_workflow::{render, LocationWorkflow};

#[tokio::main]
async fn main() -> Result<()> {
    geolook_core::init()?;

    let (config, _validation) = Config::load_validated()?;
    tracing::info!("geolook started");

    let geocoder =
        GeocodeClient::with_base_url(&config.geocoding.api_key, &config.geocoding.base_url)?;
    let weather_client =
        WeatherClient::with_base_url(&config.weather.api_key, &config.weather.base_url)?
            .with_locale(&config.weather.units, &config.weather.lang);

    let source = match config.location.fixed_coordinates() {
        Some(coords) => FixedPosition::new(coords),
        None => anyhow::bail!(
            "no position source available; set [location] latitude/longitude in the config"
        ),
    };

    let workflow = LocationWorkflow::new();

    let coords = match workflow.acquire_position(&source).await {
        Some(Ok(coords)) => coords,
        Some(Err(e)) => {
            println!("{}", AppError::from(e).user_message());
            return Ok(());
        }
        None => return Ok(()),
    };

    println!("{}", render::coordinates_line(coords));
    println!("Open in maps: {}", maps::search_url(coords));
    println!("Embedded map: {}", maps::embed_url(coords));

    match workflow.resolve_address(&geocoder).await {
        Some(Ok(address)) => println!("\n{}", render::address_card(&address)),
        Some(Err(e)) => println!("\n{}", AppError::from(e).user_message()),
        None => {}
    }

    match workflow.resolve_weather(&weather_client).await {
        Some(Ok(current)) => println!("\n{}", render::weather_card(&current)),
        Some(Err(e)) => println!("\n{}", AppError::from(e).user_message()),
        None => {}
    }

    Ok(())
}
