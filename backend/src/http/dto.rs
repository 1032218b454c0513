//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::models::{JourneySpan, RawCoach};

/// Request body of `POST /api/find_seats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindSeatsRequest {
    #[serde(default)]
    pub train_no: Option<String>,
    /// Boarding station code
    #[serde(default)]
    pub station: Option<String>,
    #[serde(default)]
    pub dest_station: Option<String>,
    /// `ALL`, `3A`, `2A`, `1A` or `SL`
    #[serde(default)]
    pub class_pref: Option<String>,
    /// Sent by the web form; charts are always the current ones.
    #[serde(default)]
    pub date: Option<String>,
}

/// Response body of `POST /api/find_seats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindSeatsResponse {
    pub status: String,
    pub raw_data: Vec<JourneySpan>,
    pub ai_advice: String,
}

/// Request body of `POST /v1/compile`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompileRequest {
    #[serde(default)]
    pub coaches: Vec<RawCoach>,
    #[serde(default)]
    pub class_pref: Option<String>,
}

/// Response body of `POST /v1/compile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileResponse {
    pub status: String,
    pub raw_data: Vec<JourneySpan>,
    /// `"<coach>-<seat> (<from>-><to>)"`
    pub fragments: Vec<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub chart_source: String,
    pub chart_source_healthy: bool,
    pub narrative_model: String,
}
