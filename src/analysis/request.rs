//! Builds the outbound analysis payload from the raw user-entered fields.

use crate::core::models::{AnalysisRequest, InputFields};

impl AnalysisRequest {
    /// Frames the message exactly as the backend expects: subject, a single
    /// newline, then the body. The newline is kept even for an empty subject,
    /// leaving a leading blank line. No validation happens here; whether
    /// there is anything to analyze at all is the orchestrator's call.
    pub fn build(subject: &str, body: &str) -> Self {
        Self {
            message: format!("{}\n{}", subject, body),
        }
    }

    /// Convenience wrapper over [`AnalysisRequest::build`] for caller-owned
    /// input fields. The sender address is deliberately left out of the
    /// payload; the backend only classifies message text.
    pub fn from_fields(fields: &InputFields) -> Self {
        Self::build(&fields.subject, &fields.body)
    }
}
