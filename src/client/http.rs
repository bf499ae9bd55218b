// HTTP client for the agent backend
//
// One POST per query, JSON in and JSON out. No retries, and no timeout unless
// one is configured.

use crate::client::provider::AgentClient;
use crate::config::AgentConfig;
use crate::types::{AgentRequest, AgentResponse, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, info, warn};

pub struct HttpAgentClient {
    client: Client,
    endpoint: Url,
}

impl HttpAgentClient {
    pub fn new(config: &AgentConfig) -> ClientResult<Self> {
        let endpoint = config
            .endpoint()
            .map_err(|e| ClientError::Endpoint(e.to_string()))?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    /// Client posting to an explicit URL
    pub fn with_endpoint(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl AgentClient for HttpAgentClient {
    async fn query(&self, request: &AgentRequest) -> ClientResult<AgentResponse> {
        info!(endpoint = %self.endpoint, query_len = request.query.len(), "Sending agent query");

        // `.json()` sets `Content-Type: application/json`
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Agent backend returned an error status");
            return Err(ClientError::Status(status));
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "Agent response received");

        let parsed: AgentResponse = serde_json::from_slice(&body)?;
        info!(
            companies = parsed.companies().len(),
            has_analysis = parsed.analysis.is_some(),
            has_error = parsed.error.is_some(),
            "Agent query complete"
        );

        Ok(parsed)
    }

    fn endpoint(&self) -> String {
        self.endpoint.to_string()
    }
}
