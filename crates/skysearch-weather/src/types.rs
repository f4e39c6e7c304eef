use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One provider payload, stored as-is.
///
/// The provider's response shape is opaque to this crate; it is passed
/// through to the display layer unchanged. The accessors below pull out
/// common fields for convenience and return `None` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord(Value);

impl WeatherRecord {
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// The raw JSON payload.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Location name reported by the provider, if present.
    pub fn location_name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Current temperature, if present (provider units, Kelvin by default).
    pub fn temperature(&self) -> Option<f64> {
        self.0.get("main")?.get("temp")?.as_f64()
    }

    /// Short weather description, if present.
    pub fn description(&self) -> Option<&str> {
        self.0
            .get("weather")?
            .get(0)?
            .get("description")?
            .as_str()
    }
}

/// The complete set of per-token results from one successful lookup.
///
/// Records are ordered by request-issue order, one per unique token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherBatch {
    records: Vec<WeatherRecord>,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherBatch {
    pub fn new(records: Vec<WeatherRecord>) -> Self {
        Self {
            records,
            fetched_at: Utc::now(),
        }
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Lookup lifecycle status. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LookupStatus {
    #[default]
    Idle,
    InProgress,
    Success,
    Failure,
}

/// Display theme, passed in explicitly by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Weather lookup errors.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Response parse error: {0}")]
    Parse(String),
}

impl LookupError {
    /// All lookup failures converge to a single generic user message.
    pub fn user_message(&self) -> &'static str {
        "Data Not Found"
    }
}
