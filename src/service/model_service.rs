use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

use crate::config::environment::AppConfig;

/// Substituted for the fix plan whenever the model endpoint is unconfigured
/// or errors; a model failure never fails the audit.
pub const FIX_PLAN_PLACEHOLDER: &str =
    "[fix-plan model not available; configure AI_API_URL, AI_API_TOKEN and AI_MODEL]";

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ModelRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct ModelResult {
    #[serde(default)]
    response: String,
}

#[derive(Debug, Deserialize)]
struct ModelResponse {
    result: Option<ModelResult>,
}

pub async fn generate_fix_plan(config: &AppConfig, prompt: &str) -> String {
    match request_fix_plan(config, prompt).await {
        Ok(plan) => plan,
        Err(e) => {
            warn!(error = %e, "fix-plan model unavailable; using placeholder");
            FIX_PLAN_PLACEHOLDER.to_string()
        }
    }
}

async fn request_fix_plan(config: &AppConfig, prompt: &str) -> Result<String, String> {
    let base_url = config.ai_api_url.as_deref().ok_or("AI_API_URL is not set")?;
    let token = config
        .ai_api_token
        .as_deref()
        .ok_or("AI_API_TOKEN is not set")?;
    let model = config.ai_model.as_deref().ok_or("AI_MODEL is not set")?;

    let endpoint = format!("{}/{}", base_url.trim_end_matches('/'), model);
    let client = Client::builder()
        .timeout(Duration::from_secs(config.ai_timeout_seconds.max(1) as u64))
        .build()
        .map_err(|e| format!("failed to build http client: {e}"))?;

    let resp = client
        .post(endpoint)
        .bearer_auth(token)
        .json(&ModelRequest {
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        })
        .send()
        .await
        .map_err(|e| format!("model request failed: {e}"))?;

    if !resp.status().is_success() {
        return Err(format!(
            "model returned non-success status: {}",
            resp.status()
        ));
    }

    let payload = resp
        .json::<ModelResponse>()
        .await
        .map_err(|e| format!("failed to parse model payload: {e}"))?;

    payload
        .result
        .map(|r| r.response)
        .ok_or_else(|| "model payload missing result".to_string())
}
