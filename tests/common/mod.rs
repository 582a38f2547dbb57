//! Common test utilities for integration tests.
//!
//! Provides country fixtures, JSON payload builders for the mock server,
//! and helpers for constructing an `App` in a known phase.

use atlas::app::{App, AppMessage};
use atlas::models::{Country, CountryName, Flags};

/// Build a country record with the fields the UI reads.
pub fn country(name: &str, region: &str, population: u64, capital: Option<&str>) -> Country {
    Country {
        name: CountryName {
            common: name.to_string(),
            official: format!("Republic of {}", name),
        },
        flags: Flags {
            svg: format!("https://flagcdn.com/{}.svg", name.to_lowercase().replace(' ', "-")),
            png: String::new(),
            alt: None,
        },
        population,
        region: region.to_string(),
        subregion: String::new(),
        capital: capital.map(|c| vec![c.to_string()]).unwrap_or_default(),
    }
}

/// A small mixed-region dataset.
pub fn sample_countries() -> Vec<Country> {
    vec![
        country("France", "Europe", 67_391_582, Some("Paris")),
        country("Germany", "Europe", 83_240_525, Some("Berlin")),
        country("Japan", "Asia", 125_836_021, Some("Tokyo")),
        country("Fiji", "Oceania", 896_444, Some("Suva")),
        country("Antarctica", "Antarctic", 1_000, None),
    ]
}

/// The JSON body the mock server returns for `GET /v3.1/all`.
pub fn sample_countries_json() -> serde_json::Value {
    serde_json::json!([
        {
            "name": { "common": "France", "official": "French Republic" },
            "flags": { "svg": "https://flagcdn.com/fr.svg", "png": "https://flagcdn.com/w320/fr.png" },
            "population": 67391582,
            "region": "Europe",
            "subregion": "Western Europe",
            "capital": ["Paris"]
        },
        {
            "name": { "common": "Germany", "official": "Federal Republic of Germany" },
            "flags": { "svg": "https://flagcdn.com/de.svg" },
            "population": 83240525,
            "region": "Europe",
            "subregion": "Western Europe",
            "capital": ["Berlin"]
        },
        {
            // No capital array at all: some territories come back this way
            "name": { "common": "Antarctica" },
            "flags": { "svg": "https://flagcdn.com/aq.svg" },
            "population": 1000,
            "region": "Antarctic"
        }
    ])
}

/// Build an `App` that already holds `countries` (phase `Loaded`).
pub fn loaded_app(countries: Vec<Country>) -> App {
    let mut app = App::new();
    app.handle_message(AppMessage::CountriesLoaded(countries));
    app
}
