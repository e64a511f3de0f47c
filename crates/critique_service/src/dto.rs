use serde::Deserialize;

use crate::models::Stage;

/// Body of `POST /analyze` as it arrives on the wire.
///
/// Both fields are optional here so that a missing or mistyped field becomes a
/// 400 from the validator rather than a deserializer error.
#[derive(Debug, Default, Deserialize)]
pub struct AnalysisRequestBody {
    #[serde(default)]
    pub idea: Option<serde_json::Value>,
    #[serde(default)]
    pub stage: Option<serde_json::Value>,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub idea: String,
    pub stage: Stage,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
