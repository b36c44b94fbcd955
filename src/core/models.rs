//! Core data types shared across the analysis pipeline.

use serde::{Deserialize, Serialize};

/// The raw fields entered by the user. Mutable, owned by the caller and
/// passed explicitly into the orchestrator's intents.
///
/// Only `body` gates whether an analysis may be triggered; `sender_email` is
/// collected for display purposes and never transmitted to the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFields {
    pub sender_email: String,
    pub subject: String,
    pub body: String,
}

impl InputFields {
    /// Whether the body holds anything worth analyzing.
    pub fn has_content(&self) -> bool {
        !self.body.trim().is_empty()
    }

    /// Clears all fields back to their initial state.
    pub fn clear(&mut self) {
        self.sender_email.clear();
        self.subject.clear();
        self.body.clear();
    }
}

/// The immutable payload sent over the wire: the subject and body joined by a
/// single newline. Built by [`AnalysisRequest::build`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRequest {
    pub message: String,
}

/// The backend's raw verdict. External contract, deliberately loose: the
/// service may omit `confidence` and may add extra fields (it echoes the
/// input back, for instance), none of which must break deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RemoteResponse {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// The normalized, display-ready outcome of one settled analysis. Created
/// fresh for every settled request and replaced wholesale by the next one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub is_spam: bool,
    pub score: f64,
    pub reasons: Vec<String>,
}

/// Health report from the backend, as returned by its `/api/health` route.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
}
