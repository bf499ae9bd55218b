use crate::client::SharedAgentClient;
use crate::config::Config;
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub client: SharedAgentClient,
}

/// Form post from the query page
#[derive(Debug, Clone, Deserialize)]
pub struct QueryFormInput {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub agent_endpoint: String,
    pub timestamp: String,
}
