use async_trait::async_trait;
use crate::config::AgentConfig;
use crate::types::{AgentRequest, AgentResponse, ClientResult};
use std::sync::Arc;

/// Anything that can answer an agent query.
///
/// The form only ever talks to this trait, so the terminal form, the prompt
/// loop and the web server can share one client and tests can stand in a
/// canned backend.
#[async_trait]
pub trait AgentClient: Send + Sync {
    async fn query(&self, request: &AgentRequest) -> ClientResult<AgentResponse>;

    /// Human-readable description of where queries go
    fn endpoint(&self) -> String;
}

/// Shared handle to a client
pub type SharedAgentClient = Arc<dyn AgentClient>;

/// Build the HTTP client for the configured endpoint.
pub fn from_config(config: &AgentConfig) -> ClientResult<SharedAgentClient> {
    Ok(Arc::new(super::HttpAgentClient::new(config)?))
}
