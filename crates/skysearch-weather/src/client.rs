//! HTTP client for the weather provider.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::query::LookupRequest;
use crate::types::LookupError;

/// Outcome of one provider request.
///
/// A non-2xx response is recorded as unsuccessful rather than raised;
/// its body is still read so the caller can aggregate uniformly.
#[derive(Debug, Clone)]
pub struct RequestOutcome {
    pub ok: bool,
    pub body: Value,
}

/// Client for the provider's current-weather endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LookupError> {
        let client = Client::builder().timeout(timeout).build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self {
            client: Arc::new(client),
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Issue one request and read its JSON body.
    ///
    /// Returns `Err` only for transport-level failures, or for a body
    /// that fails to parse under a success status. A malformed or absent
    /// body under an error status is tolerated: the request already
    /// failed, and the outcome records that with a `null` body.
    pub async fn fetch(&self, request: &LookupRequest) -> Result<RequestOutcome, LookupError> {
        let url = format!("{}/weather", self.base_url);

        let builder = match request {
            LookupRequest::PlaceName { name } => self
                .client
                .get(&url)
                .query(&[("q", name.as_str()), ("appid", self.api_key.as_str())]),
            LookupRequest::PostalCode { code, region } => {
                let zip = format!("{},{}", code, region);
                self.client
                    .get(&url)
                    .query(&[("zip", zip.as_str()), ("appid", self.api_key.as_str())])
            }
        };

        let response = builder.send().await?;
        let ok = response.status().is_success();

        match response.json::<Value>().await {
            Ok(body) => Ok(RequestOutcome { ok, body }),
            Err(e) if ok => Err(LookupError::Network(e)),
            Err(e) => {
                tracing::debug!(token = request.token(), error = %e, "unreadable body on error response");
                Ok(RequestOutcome {
                    ok: false,
                    body: Value::Null,
                })
            }
        }
    }
}
