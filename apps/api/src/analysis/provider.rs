//! Analysis providers — pluggable backends that turn resume text into an
//! `AnalysisResult`.
//!
//! `AppState` holds an `Arc<dyn AnalysisProvider>`, chosen at startup via
//! `ANALYSIS_MODE`.

use async_trait::async_trait;
use tracing::{error, info};

use crate::analysis::models::AnalysisResult;
use crate::analysis::prompts::build_analysis_prompt;
use crate::analysis::sample::sample_analysis;
use crate::errors::AppError;
use crate::llm_client::{LlmClient, LlmError};

/// Message returned to callers for any transport or status failure upstream.
pub const UPSTREAM_FAILURE: &str = "Hugging Face API failed";

#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Backend label for logs and the health check.
    fn name(&self) -> &'static str;

    /// `resume_text` is already known to be non-blank.
    async fn analyze(&self, resume_text: &str) -> Result<AnalysisResult, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmAnalysisProvider — live backend
// ────────────────────────────────────────────────────────────────────────────

/// Sends the resume to the hosted model and parses the JSON it writes back.
/// Output must match the `AnalysisResult` shape; otherwise the request fails.
pub struct LlmAnalysisProvider(pub LlmClient);

#[async_trait]
impl AnalysisProvider for LlmAnalysisProvider {
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn analyze(&self, resume_text: &str) -> Result<AnalysisResult, AppError> {
        let prompt = build_analysis_prompt(resume_text);
        info!(
            "Requesting analysis from {} (resume_len={})",
            self.0.endpoint(),
            resume_text.len()
        );

        self.0
            .generate_json::<AnalysisResult>(&prompt)
            .await
            .map_err(map_llm_error)
    }
}

fn map_llm_error(err: LlmError) -> AppError {
    match err {
        LlmError::Http(e) => {
            error!("Inference request failed: {e}");
            AppError::Llm(UPSTREAM_FAILURE.to_string())
        }
        // Body already logged by the client.
        LlmError::Api { .. } => AppError::Llm(UPSTREAM_FAILURE.to_string()),
        LlmError::Parse(e) => AppError::Llm(format!("Model output was not valid analysis JSON: {e}")),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// StaticAnalysisProvider — fixed sample backend
// ────────────────────────────────────────────────────────────────────────────

/// Returns the same sample analysis for every resume. No network access.
pub struct StaticAnalysisProvider;

#[async_trait]
impl AnalysisProvider for StaticAnalysisProvider {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn analyze(&self, _resume_text: &str) -> Result<AnalysisResult, AppError> {
        Ok(sample_analysis())
    }
}
