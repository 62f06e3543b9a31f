use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use ec_core::catalog::ResourceKind;
use ec_core::ports::{ResourceApiError, ResourceApiPort};

/// Production API gateway for the care-resources backend.
pub const DEFAULT_BASE_URL: &str = "https://3hggeubhb5.execute-api.us-east-1.amazonaws.com/prod";

#[derive(Debug, Clone)]
pub struct ResourceClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ResourceClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP implementation of the resource fetch port.
///
/// Responses arrive either as a bare JSON array or wrapped in the gateway
/// envelope `{ statusCode, body }`, where `body` may itself be a
/// JSON-encoded string; the events feed adds one more `{ "events": [...] }`
/// layer. All of that is peeled off here so callers only ever see the raw
/// record array.
pub struct ResourceClient {
    config: ResourceClientConfig,
    http: reqwest::Client,
}

impl ResourceClient {
    pub fn new(config: ResourceClientConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("build http client failed")?;

        Ok(Self { config, http })
    }

    fn url_for(&self, kind: ResourceKind) -> String {
        format!("{}{}", self.config.base_url, kind.endpoint())
    }
}

#[async_trait]
impl ResourceApiPort for ResourceClient {
    async fn fetch_raw(&self, kind: ResourceKind) -> Result<Vec<Value>, ResourceApiError> {
        let url = self.url_for(kind);
        debug!(%kind, %url, "fetching resource collection");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| ResourceApiError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%kind, status = status.as_u16(), "resource fetch returned error status");
            return Err(ResourceApiError::Status(status.as_u16()));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| ResourceApiError::Decode(err.to_string()))?;

        extract_records(payload)
    }
}

/// Peel the gateway envelope and feed wrapper, then extract the record
/// array. A payload that is not an array after unwrapping reads as an empty
/// collection; a body string that fails to parse is a decode error.
fn extract_records(payload: Value) -> Result<Vec<Value>, ResourceApiError> {
    let body = match payload {
        Value::Object(map) if map.contains_key("body") => match &map["body"] {
            Value::String(encoded) => serde_json::from_str(encoded)
                .map_err(|err| ResourceApiError::Decode(format!("envelope body: {err}")))?,
            inline => inline.clone(),
        },
        other => other,
    };

    let body = match body {
        Value::Object(map) => match map.get("events") {
            Some(events) => events.clone(),
            None => Value::Object(map),
        },
        other => other,
    };

    match body {
        Value::Array(items) => Ok(items),
        _ => Ok(Vec::new()),
    }
}
