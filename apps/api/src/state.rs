use std::sync::Arc;

use crate::analysis::provider::AnalysisProvider;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable once built at startup.
#[derive(Clone)]
pub struct AppState {
    /// Analysis backend. Default: LlmAnalysisProvider. Swap via ANALYSIS_MODE.
    pub provider: Arc<dyn AnalysisProvider>,
}
