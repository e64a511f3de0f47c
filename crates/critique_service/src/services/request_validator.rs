use serde_json::Value;

use crate::dto::{AnalysisRequest, AnalysisRequestBody};
use crate::error::AppError;
use crate::models::Stage;

/// Turns a raw request body into an [`AnalysisRequest`].
///
/// No `Content-Type` is required. Anything that is not a JSON object with
/// non-blank string `idea` and `stage` fields is `MissingFields`; a stage
/// outside the known set is `InvalidStage`. The idea is kept exactly as sent.
pub fn validate(body: &[u8]) -> Result<AnalysisRequest, AppError> {
    let parsed: AnalysisRequestBody = match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => {
            serde_json::from_value(value).map_err(|_| AppError::MissingFields)?
        }
        _ => return Err(AppError::MissingFields),
    };

    let idea = non_blank_string(parsed.idea).ok_or(AppError::MissingFields)?;
    let stage = non_blank_string(parsed.stage).ok_or(AppError::MissingFields)?;
    let stage = stage
        .parse::<Stage>()
        .map_err(|unknown| AppError::InvalidStage(unknown.0))?;

    Ok(AnalysisRequest { idea, stage })
}

fn non_blank_string(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}
