use std::sync::Arc;

use completion_client::CompletionClientTrait;
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::config::ServiceConfig;
use crate::dto::AnalysisRequest;
use crate::error::{AppError, Result};
use crate::models::AnalysisResult;
use crate::services::prompt_composer;

const RAW_PREVIEW_CHARS: usize = 200;

/// Runs one analysis: compose, call upstream once, decode.
///
/// Holds no per-request state, so concurrent calls never observe each other.
pub struct AnalysisService {
    client: Arc<dyn CompletionClientTrait>,
    config: ServiceConfig,
}

impl AnalysisService {
    pub fn new(client: Arc<dyn CompletionClientTrait>, config: ServiceConfig) -> Self {
        Self { client, config }
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<Value> {
        info!(
            "Analyzing idea (stage={}, idea_len={})",
            request.stage,
            request.idea.chars().count()
        );

        let messages = prompt_composer::compose(request);
        let text = self.client.complete(messages).await.map_err(|e| {
            if e.is_timeout() {
                warn!("Completion request timed out: {}", e);
            } else {
                warn!("Completion request failed: {}", e);
            }
            AppError::from(e)
        })?;

        decode_model_output(&text, self.config.enforce_result_shape)
    }
}

/// Strict decode of the model's text. Nothing is repaired: text that is not
/// JSON is returned as `InvalidModelJson` with the raw text attached.
///
/// With `enforce_shape`, valid JSON must also be a complete
/// [`AnalysisResult`]; the decoded value, not a re-serialization, is returned.
pub fn decode_model_output(text: &str, enforce_shape: bool) -> Result<Value> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        warn!("Model returned invalid JSON: {}", e);
        debug!("Raw model output: {}", preview(text));
        AppError::InvalidModelJson {
            raw: text.to_string(),
        }
    })?;

    if enforce_shape {
        if let Err(e) = AnalysisResult::deserialize(&value) {
            warn!("Model JSON does not match the analysis shape: {}", e);
            return Err(AppError::ShapeMismatch {
                raw: text.to_string(),
            });
        }
    }

    Ok(value)
}

fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(RAW_PREVIEW_CHARS).collect();
    if text.chars().count() > RAW_PREVIEW_CHARS {
        out.push_str("...");
    }
    out
}
