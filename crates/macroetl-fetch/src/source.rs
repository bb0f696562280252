//! Source fetchers.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::{Endpoints, FetchClient, FetchError, SourceRequest};

/// Fetches the raw JSON payload for a source request.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Performs the request and returns the upstream payload.
    ///
    /// Service envelopes are removed, so list-shaped sources yield a JSON
    /// array.
    async fn fetch(&self, request: &SourceRequest) -> Result<Value, FetchError>;
}

/// [`SourceFetcher`] backed by the public HTTP endpoints.
#[derive(Debug, Clone)]
pub struct HttpSourceFetcher {
    client: FetchClient,
    endpoints: Endpoints,
}

impl HttpSourceFetcher {
    /// Creates a fetcher over the given client and endpoints.
    #[must_use]
    pub const fn new(client: FetchClient, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    /// Returns the configured endpoints.
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

#[async_trait]
impl SourceFetcher for HttpSourceFetcher {
    async fn fetch(&self, request: &SourceRequest) -> Result<Value, FetchError> {
        let url = self.endpoints.url_for(request)?;
        let body: Value = self.client.get_json(&url).await?;
        debug!(source = %request.source(), "fetched payload");
        Ok(unwrap_envelope(body))
    }
}

/// Strips service envelopes from a payload.
///
/// OData responses wrap rows in `{"value": [...]}` and CKAN responses in
/// `{"result": {"records": [...]}}`. Anything else is returned unchanged.
#[must_use]
pub fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) => {
            if matches!(map.get("value"), Some(Value::Array(_))) {
                return map.remove("value").unwrap_or(Value::Null);
            }
            let is_ckan = map
                .get("result")
                .and_then(|result| result.get("records"))
                .is_some_and(Value::is_array);
            if is_ckan {
                return map
                    .remove("result")
                    .and_then(|mut result| result.get_mut("records").map(Value::take))
                    .unwrap_or(Value::Null);
            }
            Value::Object(map)
        }
        other => other,
    }
}
