//! Query form page
//!
//! Server-rendered version of the form: the page posts back to itself and the
//! submission cycle runs on the server against the configured agent.

use axum::{
    extract::State,
    response::Html,
    routing::get,
    Form, Router,
};
use crate::form::QueryForm;
use crate::models::{AppState, QueryFormInput};
use crate::render::html::render_page;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .with_state(state)
}

async fn show_form() -> Html<String> {
    Html(render_page(&QueryForm::new()))
}

async fn submit_form(
    State(state): State<AppState>,
    Form(input): Form<QueryFormInput>,
) -> Html<String> {
    let mut form = QueryForm::new().with_trimmed_payload(state.config.agent.trim_query);
    form.set_query(input.query);

    let sent = form.submit(state.client.as_ref()).await;
    info!(sent, "Form submission handled");

    Html(render_page(&form))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::AgentClient;
    use crate::config::Config;
    use crate::types::{AgentRequest, AgentResponse, ClientError, ClientResult, Company};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    struct StubClient {
        reachable: bool,
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AgentClient for StubClient {
        async fn query(&self, request: &AgentRequest) -> ClientResult<AgentResponse> {
            self.seen.lock().unwrap().push(request.query.clone());
            if !self.reachable {
                return Err(ClientError::Status(reqwest::StatusCode::BAD_GATEWAY));
            }
            let mut company = Company::new("Unleash");
            company.website = Some("https://getunleash.io".to_string());
            company.is_open_source = Some(true);
            Ok(AgentResponse {
                analysis: Some("Unleash fits.".to_string()),
                companies: Some(vec![company]),
                ..AgentResponse::default()
            })
        }

        fn endpoint(&self) -> String {
            "stub".to_string()
        }
    }

    fn state(reachable: bool) -> (AppState, Arc<StubClient>) {
        let client = Arc::new(StubClient {
            reachable,
            seen: Mutex::new(Vec::new()),
        });
        let config = Config::from_vars(|_| None).unwrap();
        (
            AppState {
                config,
                client: client.clone(),
            },
            client,
        )
    }

    fn post(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_get_renders_empty_form() {
        let (state, _) = state(true);
        let response = router(state)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Developer Research Agent"));
        assert!(html.contains(r#"id="submit" disabled>Ask Agent"#));
        assert!(!html.contains("agent-response"));
    }

    #[tokio::test]
    async fn test_post_renders_results() {
        let (state, client) = state(true);
        let response = router(state)
            .oneshot(post("query=feature+flags"))
            .await
            .unwrap();

        let html = body_text(response).await;
        assert_eq!(*client.seen.lock().unwrap(), vec!["feature flags".to_string()]);
        assert!(html.contains("<strong>Analysis:</strong><div>Unleash fits.</div>"));
        assert!(html.contains(r#"rel="noopener noreferrer">https://getunleash.io</a>"#));
        assert!(html.contains("<strong>Open Source:</strong> Yes"));
        assert!(html.contains(r#"value="feature flags""#));
    }

    #[tokio::test]
    async fn test_post_unreachable_backend() {
        let (state, _) = state(false);
        let response = router(state).oneshot(post("query=x")).await.unwrap();

        let html = body_text(response).await;
        assert!(html.contains(r#"<div class="backend-status">Backend is not reachable</div>"#));
        assert!(html.contains("Error contacting agent backend"));
    }

    #[tokio::test]
    async fn test_blank_post_does_not_call_agent() {
        let (state, client) = state(true);
        let response = router(state).oneshot(post("query=+++")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(client.seen.lock().unwrap().is_empty());
    }
}
