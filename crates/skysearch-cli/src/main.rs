use std::time::Duration;

use anyhow::Result;
use skysearch_core::Config;
use skysearch_weather::{
    project, LocationWeatherLookup, LookupView, Theme, WeatherClient, WeatherRecord,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    skysearch_core::init()?;

    let (config, _validation) = Config::load_validated()?;

    let search_text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    let client = WeatherClient::new(
        config.weather.base_url.as_str(),
        config.weather.effective_api_key().unwrap_or_default(),
        Duration::from_secs(config.weather.timeout_secs),
    )?;
    let mut lookup = LocationWeatherLookup::new(client, config.weather.region_code.as_str());
    lookup.set_search_text(search_text);

    // The trigger gate: empty input never starts a lookup.
    if !lookup.can_execute() {
        eprintln!("Usage: skysearch <city or postal code> [more locations...]");
        return Ok(());
    }

    tracing::info!("Skysearch started");
    lookup.execute().await;

    let theme = if config.ui.dark_mode {
        Theme::Dark
    } else {
        Theme::Light
    };

    match project(lookup.state(), theme) {
        LookupView::Nothing => {}
        LookupView::Loading => println!("Loading..."),
        LookupView::Results(records) => {
            for record in records {
                print_record(record);
            }
        }
        LookupView::NotFound { message, .. } => println!("{}", message),
    }

    Ok(())
}

fn print_record(record: &WeatherRecord) {
    let name = record.location_name().unwrap_or("(unknown location)");
    match (record.temperature(), record.description()) {
        (Some(temp), Some(desc)) => println!("{}: {:.1}K, {}", name, temp, desc),
        (Some(temp), None) => println!("{}: {:.1}K", name, temp),
        _ => println!("{}: {}", name, record.as_value()),
    }
}
