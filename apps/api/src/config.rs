use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Default inference endpoint used when `HF_MODEL_URL` is not set.
pub const DEFAULT_HF_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct-v0.2";

/// Which analysis backend the process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    /// Forward resume text to the hosted inference model.
    Llm,
    /// Return the fixed sample analysis.
    Static,
}

impl FromStr for AnalysisMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "llm" | "live" => Ok(AnalysisMode::Llm),
            "static" | "stub" => Ok(AnalysisMode::Static),
            other => bail!("ANALYSIS_MODE must be 'llm' or 'static', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup if the live mode is selected without a credential.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: AnalysisMode,
    pub hf_api_key: Option<String>,
    pub hf_model_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mode = std::env::var("ANALYSIS_MODE")
            .unwrap_or_else(|_| "llm".to_string())
            .parse::<AnalysisMode>()?;

        let hf_api_key = require_credential(mode, std::env::var("HF_API_KEY").ok())?;

        Ok(Config {
            mode,
            hf_api_key,
            hf_model_url: optional_env("HF_MODEL_URL")
                .unwrap_or_else(|| DEFAULT_HF_MODEL_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating blank values the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    non_blank(std::env::var(key).ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// The live mode cannot start without an upstream credential; a blank value
/// counts as missing.
fn require_credential(mode: AnalysisMode, api_key: Option<String>) -> Result<Option<String>> {
    let api_key = non_blank(api_key);
    if mode == AnalysisMode::Llm && api_key.is_none() {
        bail!("HF_API_KEY not configured");
    }
    Ok(api_key)
}
