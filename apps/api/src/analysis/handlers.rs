//! Axum route handlers for the Analysis API.

use anyhow::Context;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::analysis::models::AnalysisResult;
use crate::errors::AppError;
use crate::state::AppState;

pub const RESUME_TEXT_REQUIRED: &str = "Resume text is required";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume_text: Option<String>,
}

/// POST /analyze-resume
///
/// Validates `resumeText` and returns the provider's analysis.
/// The body is decoded as JSON whatever its `Content-Type`; only a missing or
/// blank `resumeText` is a client error.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalysisResult>, AppError> {
    let request: AnalyzeRequest =
        serde_json::from_slice(&body).context("Failed to decode request body")?;

    let resume_text = request
        .resume_text
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| AppError::Validation(RESUME_TEXT_REQUIRED.to_string()))?;

    let analysis = state.provider.analyze(&resume_text).await?;
    Ok(Json(analysis))
}

/// OPTIONS /analyze-resume
///
/// CORS preflight: empty body, headers come from the router layers.
pub async fn handle_preflight() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::provider::{AnalysisProvider, StaticAnalysisProvider};
    use crate::analysis::sample::sample_analysis;
    use crate::routes::build_router;

    /// Counts calls and fails on demand.
    #[derive(Default)]
    struct RecordingProvider {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl AnalysisProvider for RecordingProvider {
        fn name(&self) -> &'static str {
            "recording"
        }

        async fn analyze(&self, _resume_text: &str) -> Result<AnalysisResult, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(AppError::Llm("Hugging Face API failed".to_string()))
            } else {
                Ok(sample_analysis())
            }
        }
    }

    fn test_state(provider: Arc<dyn AnalysisProvider>) -> AppState {
        AppState { provider }
    }

    async fn send(state: AppState, method: Method, body: Body) -> Response {
        build_router(state)
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri("/analyze-resume")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn post_json(state: AppState, body: Value) -> Response {
        send(state, Method::POST, Body::from(body.to_string())).await
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn assert_cors(response: &Response) {
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "authorization, x-client-info, apikey, content-type"
        );
    }

    #[tokio::test]
    async fn test_blank_resume_text_is_rejected_without_provider_call() {
        for body in [
            json!({"resumeText": ""}),
            json!({"resumeText": "   \n\t"}),
            json!({"resumeText": null}),
            json!({}),
        ] {
            let provider = Arc::new(RecordingProvider::default());
            let response = post_json(test_state(provider.clone()), body).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_cors(&response);
            assert_eq!(body_json(response).await, json!({"error": RESUME_TEXT_REQUIRED}));
            assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn test_undecodable_body_returns_500_without_provider_call() {
        for body in ["{not json", r#"{"resumeText": 42}"#, ""] {
            let provider = Arc::new(RecordingProvider::default());
            let response = send(test_state(provider.clone()), Method::POST, Body::from(body)).await;

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{body}");
            assert_cors(&response);
            assert!(body_json(response).await["error"].is_string());
            assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn test_body_without_content_type_is_accepted() {
        let response = build_router(test_state(Arc::new(StaticAnalysisProvider)))
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/analyze-resume")
                    .body(Body::from(r#"{"resumeText": "5 years Java backend engineer"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::to_value(sample_analysis()).unwrap()
        );
    }

    #[tokio::test]
    async fn test_preflight_returns_empty_ok_with_cors() {
        let provider = Arc::new(RecordingProvider::default());
        let response = send(test_state(provider.clone()), Method::OPTIONS, Body::empty()).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_returns_500_with_cors() {
        let provider = Arc::new(RecordingProvider {
            fail: true,
            ..Default::default()
        });
        let response = post_json(
            test_state(provider.clone()),
            json!({"resumeText": "Senior data engineer"}),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_cors(&response);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Hugging Face API failed"})
        );
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_static_provider_returns_fixed_analysis() {
        let state = test_state(Arc::new(StaticAnalysisProvider));
        let response = post_json(
            state,
            json!({"resumeText": "5 years Java backend engineer"}),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(
            body_json(response).await,
            serde_json::to_value(sample_analysis()).unwrap()
        );
    }

    #[tokio::test]
    async fn test_static_provider_is_identical_across_inputs() {
        let first = post_json(
            test_state(Arc::new(StaticAnalysisProvider)),
            json!({"resumeText": "5 years Java backend engineer"}),
        )
        .await;
        let second = post_json(
            test_state(Arc::new(StaticAnalysisProvider)),
            json!({"resumeText": "Recent graduate in mechanical engineering"}),
        )
        .await;

        assert_eq!(body_json(first).await, body_json(second).await);
    }
}
