//! Multi-location weather lookup for Skysearch
//!
//! Resolves a free-text search string into one weather record per unique
//! token (city name or postal code), queried concurrently from the
//! provider, with all-or-nothing aggregation.

pub mod client;
pub mod lookup;
pub mod query;
pub mod types;
pub mod view;

pub use client::WeatherClient;
pub use lookup::{LocationWeatherLookup, LookupState};
pub use query::{build_requests, LookupRequest};
pub use types::{LookupError, LookupStatus, Theme, WeatherBatch, WeatherRecord};
pub use view::{project, LookupView};
