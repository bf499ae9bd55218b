// Wire types for the agent backend and the errors around them

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Message stored as the result's `error` field when the backend call fails.
pub const AGENT_ERROR_MESSAGE: &str = "Error contacting agent backend";

/// Status line shown next to the error when the backend call fails.
pub const BACKEND_UNREACHABLE_MESSAGE: &str = "Backend is not reachable";

/// Request body sent to the agent endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRequest {
    pub query: String,
}

impl AgentRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Response body returned by the agent endpoint.
///
/// Every field is optional. Fields this client does not know about are kept
/// in `extra` so the body can be written back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companies: Option<Vec<Company>>,
    /// Echo of the submitted query, when the backend sends one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AgentResponse {
    /// Error-shaped response, as stored after a failed call.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Companies in input order; empty when the field is absent or null.
    pub fn companies(&self) -> &[Company] {
        self.companies.as_deref().unwrap_or_default()
    }
}

/// One vendor/tool returned by the agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// The backend sends `null` when it has no name for the entry
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_open_source: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_support: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_capabilities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Errors raised while talking to the agent backend.
///
/// The variants only matter for logging: the form treats all of them as
/// "backend unreachable".
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request to agent backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Agent backend returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Agent backend returned an invalid body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid agent endpoint: {0}")]
    Endpoint(String),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(AgentRequest::new("  vector dbs ")).unwrap();
        assert_eq!(body, serde_json::json!({ "query": "  vector dbs " }));
    }

    #[test]
    fn test_parse_backend_success_body() {
        let body = r#"{
            "query": "open source auth",
            "analysis": "Use Keycloak.",
            "companies": [{
                "name": "Keycloak",
                "website": "https://keycloak.org",
                "pricing_model": "Free",
                "is_open_source": true,
                "tech_stack": ["Java", "Quarkus"],
                "language_support": null,
                "api_available": null,
                "integration_capabilities": [],
                "description": null
            }]
        }"#;

        let response: AgentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.analysis.as_deref(), Some("Use Keycloak."));
        assert_eq!(response.query.as_deref(), Some("open source auth"));

        let company = &response.companies()[0];
        assert_eq!(company.name.as_deref(), Some("Keycloak"));
        assert_eq!(company.is_open_source, Some(true));
        assert_eq!(company.api_available, None);
        assert_eq!(company.language_support, None);
        assert_eq!(company.integration_capabilities, Some(vec![]));
    }

    #[test]
    fn test_unknown_fields_are_kept() {
        let body = r#"{"analysis":"x","latency_ms":42,"companies":[{"name":"A","rank":1}]}"#;
        let response: AgentResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.extra.get("latency_ms"), Some(&serde_json::json!(42)));
        assert_eq!(
            response.companies()[0].extra.get("rank"),
            Some(&serde_json::json!(1))
        );

        let written = serde_json::to_value(&response).unwrap();
        assert_eq!(written, serde_json::from_str::<Value>(body).unwrap());
    }

    #[test]
    fn test_null_company_fields_decode() {
        let body = r#"{"query":"q","analysis":"A","companies":[{"name":null,"website":null,"pricing_model":null,"is_open_source":null,"tech_stack":null,"language_support":null,"api_available":null,"integration_capabilities":null,"description":null}]}"#;
        let response: AgentResponse = serde_json::from_str(body).unwrap();

        let company = &response.companies()[0];
        assert_eq!(company.name, None);
        assert_eq!(company.website, None);

        // Nulls drop out on the way back, everything else is unchanged
        let written = serde_json::to_value(&response).unwrap();
        assert_eq!(
            written,
            serde_json::json!({ "query": "q", "analysis": "A", "companies": [{}] })
        );
    }

    #[test]
    fn test_null_companies_reads_as_empty() {
        let response: AgentResponse = serde_json::from_str(r#"{"companies":null}"#).unwrap();
        assert!(response.companies().is_empty());
    }

    #[test]
    fn test_error_response() {
        let response = AgentResponse::error(AGENT_ERROR_MESSAGE);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({ "error": "Error contacting agent backend" })
        );
    }
}
