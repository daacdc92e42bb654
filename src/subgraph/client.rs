use crate::errors::LiqRsError;
use crate::subgraph::types::GraphQlResponse;
use async_trait::async_trait;
use serde_json::Value;
use url::Url;

/// Remote query capability of an indexing service.
///
/// The production implementation speaks GraphQL over HTTP; tests substitute
/// a mock. Fetch functions take this as an explicit collaborator instead of
/// reaching for process-wide client state.
#[async_trait]
pub trait SubgraphQuery: Send + Sync {
    /// Executes one GraphQL query and returns the `data` payload.
    async fn query(&self, query: &str, variables: Value) -> Result<Value, LiqRsError>;
}

pub struct HttpSubgraphClient {
    endpoint: Url,
    http: reqwest::Client,
}

impl HttpSubgraphClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SubgraphQuery for HttpSubgraphClient {
    async fn query(&self, query: &str, variables: Value) -> Result<Value, LiqRsError> {
        let payload = serde_json::json!({ "query": query, "variables": variables });

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&payload)
            .send()
            .await
            .map_err(|e| LiqRsError::SubgraphError(e.to_string()))?
            .error_for_status()
            .map_err(|e| LiqRsError::SubgraphError(e.to_string()))?;

        let envelope: GraphQlResponse = response
            .json()
            .await
            .map_err(|e| LiqRsError::SubgraphError(e.to_string()))?;

        if let Some(errors) = envelope.errors {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(LiqRsError::SubgraphError(messages.join("; ")));
        }

        envelope
            .data
            .ok_or_else(|| LiqRsError::SubgraphError("response carried no data".to_string()))
    }
}
