//! The lookup component: state machine and fan-out/fan-in executor.

use futures::future::join_all;

use crate::client::WeatherClient;
use crate::query::build_requests;
use crate::types::{LookupStatus, WeatherBatch, WeatherRecord};

/// Lookup lifecycle state.
///
/// The batch lives inside the `Success` variant, so it exists if and
/// only if the lookup succeeded; transitioning to any other state
/// destroys it.
#[derive(Debug, Clone, Default)]
pub enum LookupState {
    #[default]
    Idle,
    InProgress,
    Success(WeatherBatch),
    Failure,
}

impl LookupState {
    pub fn status(&self) -> LookupStatus {
        match self {
            LookupState::Idle => LookupStatus::Idle,
            LookupState::InProgress => LookupStatus::InProgress,
            LookupState::Success(_) => LookupStatus::Success,
            LookupState::Failure => LookupStatus::Failure,
        }
    }

    /// The batch, present only in the `Success` state.
    pub fn batch(&self) -> Option<&WeatherBatch> {
        match self {
            LookupState::Success(batch) => Some(batch),
            _ => None,
        }
    }
}

/// Resolves a search string into one weather record per unique token.
///
/// Lookups are all-or-nothing: every token must resolve for the batch to
/// be kept, and any single failure reports the whole lookup as failed.
/// `execute` takes `&mut self`, so two lookups on one component cannot
/// overlap; a stale in-flight lookup can never overwrite a newer result.
pub struct LocationWeatherLookup {
    client: WeatherClient,
    region_code: String,
    search_text: String,
    state: LookupState,
}

impl LocationWeatherLookup {
    pub fn new(client: WeatherClient, region_code: impl Into<String>) -> Self {
        Self {
            client,
            region_code: region_code.into(),
            search_text: String::new(),
            state: LookupState::Idle,
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// The frontend's trigger gate: lookups require non-empty input.
    pub fn can_execute(&self) -> bool {
        !self.search_text.trim().is_empty()
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn status(&self) -> LookupStatus {
        self.state.status()
    }

    /// Run one lookup over the current search text.
    ///
    /// Transitions to `InProgress` synchronously before any I/O, issues
    /// all requests concurrently, then settles on `Success` (every token
    /// resolved) or `Failure` (anything else). Called on empty input it
    /// is a no-op and the state is left unchanged.
    pub async fn execute(&mut self) {
        let requests = build_requests(&self.search_text, &self.region_code);
        if requests.is_empty() {
            tracing::debug!("lookup triggered with no tokens, ignoring");
            return;
        }

        self.state = LookupState::InProgress;
        tracing::info!(tokens = requests.len(), "starting weather lookup");

        let outcomes = join_all(requests.iter().map(|r| self.client.fetch(r))).await;

        let mut records = Vec::with_capacity(outcomes.len());
        for (request, outcome) in requests.iter().zip(outcomes) {
            match outcome {
                Ok(outcome) if outcome.ok => records.push(WeatherRecord::new(outcome.body)),
                Ok(_) => {
                    tracing::debug!(token = request.token(), "provider returned non-success");
                    self.state = LookupState::Failure;
                    return;
                }
                Err(e) => {
                    tracing::debug!(token = request.token(), error = %e, "lookup transport failure");
                    self.state = LookupState::Failure;
                    return;
                }
            }
        }

        tracing::info!(records = records.len(), "weather lookup succeeded");
        self.state = LookupState::Success(WeatherBatch::new(records));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    fn component(base_url: &str) -> LocationWeatherLookup {
        let client = WeatherClient::new(base_url, "test-key", Duration::from_secs(5)).unwrap();
        LocationWeatherLookup::new(client, "in")
    }

    #[test]
    fn test_initial_state_is_idle() {
        let lookup = component("http://localhost:9");
        assert_eq!(lookup.status(), LookupStatus::Idle);
        assert!(lookup.state().batch().is_none());
    }

    #[test]
    fn test_can_execute_requires_non_empty_text() {
        let mut lookup = component("http://localhost:9");
        assert!(!lookup.can_execute());

        lookup.set_search_text("   ");
        assert!(!lookup.can_execute());

        lookup.set_search_text("London");
        assert!(lookup.can_execute());
    }

    #[tokio::test]
    async fn test_execute_on_empty_input_is_a_no_op() {
        let mut lookup = component("http://localhost:9");
        lookup.set_search_text("   ");
        lookup.execute().await;
        assert_eq!(lookup.status(), LookupStatus::Idle);
    }

    #[test]
    fn test_batch_only_in_success_state() {
        let state = LookupState::Success(WeatherBatch::new(vec![WeatherRecord::new(
            json!({ "name": "London" }),
        )]));
        assert!(state.batch().is_some());

        assert!(LookupState::Idle.batch().is_none());
        assert!(LookupState::InProgress.batch().is_none());
        assert!(LookupState::Failure.batch().is_none());
    }
}
