//! GraphQL-over-HTTP transport

use super::Transport;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::types::{JsonValue, VariableMap};
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;
use url::Url;

/// Posts `{"query", "variables"}` to a GraphQL endpoint
#[derive(Debug)]
pub struct GraphQlTransport {
    client: HttpClient,
    endpoint: Url,
}

impl GraphQlTransport {
    /// Build a transport from a resolved client config
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut http = config.http.clone();
        http.default_headers
            .insert("Authorization".to_string(), format!("Bearer {}", config.token));

        Ok(Self {
            client: HttpClient::with_config(http)?,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The endpoint requests are sent to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for GraphQlTransport {
    async fn execute(&self, query: &str, variables: &VariableMap) -> Result<JsonValue> {
        let payload = json!({
            "query": query,
            "variables": variables,
        });

        let response = self.client.post_json(self.endpoint.as_str(), &payload).await?;
        let text = response.text().await?;
        let body: JsonValue = serde_json::from_str(&text)?;

        if let Some(errors) = body
            .get("errors")
            .and_then(JsonValue::as_array)
            .filter(|e| !e.is_empty())
        {
            debug!("GraphQL response carried {} error(s)", errors.len());
            return Err(Error::graphql(errors.clone()));
        }

        Ok(body)
    }
}
