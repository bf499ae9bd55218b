//! Query Form
//!
//! State container for one query form: the text being typed and the state of
//! the current submission. Every surface (terminal form, prompt loop, web
//! page) drives the same container and renders from it.
//!
//! ```text
//!          begin_submit            finish(Ok)
//!   Idle ───────────────▶ Submitting ──────────▶ Succeeded ─┐
//!    ▲                        │                             │
//!    │ clear                  │ finish(Err)                 │ begin_submit
//!    │                        ▼                             │
//!    └──────────────────── Failed ◀──────────────────────────┘
//! ```
//!
//! `Succeeded` and `Failed` accept a new submission just like `Idle`; the new
//! submission drops the previous result.

use crate::client::AgentClient;
use crate::types::{
    AgentRequest, AgentResponse, ClientResult, AGENT_ERROR_MESSAGE, BACKEND_UNREACHABLE_MESSAGE,
};
use chrono::{DateTime, Utc};
use std::borrow::Cow;
use tracing::{info, warn};

/// Where the current submission stands
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    /// Nothing submitted yet, or cleared
    #[default]
    Idle,
    /// Request in flight
    Submitting {
        request: AgentRequest,
        started_at: DateTime<Utc>,
    },
    /// Backend answered with a parseable body
    Succeeded(AgentResponse),
    /// Backend could not be reached, answered with an error status, or sent
    /// an unreadable body. `detail` is for logs only.
    Failed { detail: String },
}

/// The query form
#[derive(Debug, Clone, Default)]
pub struct QueryForm {
    query: String,
    state: SubmissionState,
    trim_payload: bool,
}

impl QueryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send the trimmed query instead of the text as typed.
    pub fn with_trimmed_payload(mut self, trim: bool) -> Self {
        self.trim_payload = trim;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query text (one call per keystroke)
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting { .. })
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.query.trim().is_empty()
    }

    /// Start a submission.
    ///
    /// Returns the request to send, or `None` when submitting is not allowed
    /// right now (blank query or a request already in flight).
    pub fn begin_submit(&mut self) -> Option<AgentRequest> {
        if !self.can_submit() {
            return None;
        }

        let query = if self.trim_payload {
            self.query.trim().to_string()
        } else {
            self.query.clone()
        };
        let request = AgentRequest::new(query);

        self.state = SubmissionState::Submitting {
            request: request.clone(),
            started_at: Utc::now(),
        };

        Some(request)
    }

    /// Apply the outcome of the in-flight request.
    ///
    /// Returns `false` if no request was in flight, in which case the outcome
    /// is dropped.
    pub fn finish(&mut self, outcome: ClientResult<AgentResponse>) -> bool {
        let started_at = match &self.state {
            SubmissionState::Submitting { started_at, .. } => *started_at,
            other => {
                warn!(state = ?other, "Dropping agent response with no submission in flight");
                return false;
            }
        };
        let elapsed_ms = (Utc::now() - started_at).num_milliseconds();

        self.state = match outcome {
            Ok(response) => {
                info!(elapsed_ms, "Submission succeeded");
                SubmissionState::Succeeded(response)
            }
            Err(e) => {
                warn!(elapsed_ms, error = %e, "Submission failed");
                SubmissionState::Failed {
                    detail: e.to_string(),
                }
            }
        };

        true
    }

    /// Run one full submission cycle against `client`.
    ///
    /// Returns whether a request was sent.
    pub async fn submit(&mut self, client: &dyn AgentClient) -> bool {
        let Some(request) = self.begin_submit() else {
            return false;
        };

        let outcome = client.query(&request).await;
        self.finish(outcome)
    }

    /// Reset the query and drop any result. Ignored while loading.
    pub fn clear(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.query.clear();
        self.state = SubmissionState::Idle;
        true
    }

    /// The result to display, if any.
    ///
    /// A failed submission reads as an error-shaped response.
    pub fn agent_result(&self) -> Option<Cow<'_, AgentResponse>> {
        match &self.state {
            SubmissionState::Succeeded(response) => Some(Cow::Borrowed(response)),
            SubmissionState::Failed { .. } => {
                Some(Cow::Owned(AgentResponse::error(AGENT_ERROR_MESSAGE)))
            }
            SubmissionState::Idle | SubmissionState::Submitting { .. } => None,
        }
    }

    /// Connectivity status line; only set after a failed submission.
    pub fn backend_msg(&self) -> Option<&'static str> {
        match self.state {
            SubmissionState::Failed { .. } => Some(BACKEND_UNREACHABLE_MESSAGE),
            _ => None,
        }
    }

    /// When the in-flight request started
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        match &self.state {
            SubmissionState::Submitting { started_at, .. } => Some(*started_at),
            _ => None,
        }
    }
}
