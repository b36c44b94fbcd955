//! Maps remote outcomes, success or failure, into one display-ready shape.
//!
//! This runs on the failure path too, so it must never fail itself: missing
//! or malformed response fields degrade to a "legitimate, N/A" verdict
//! instead of propagating an error.

use crate::core::error::AppError;
use crate::core::models::{AnalysisResult, RemoteResponse};

const SPAM_LABEL: &str = "spam";
const FALLBACK_ERROR_MESSAGE: &str = "Error contacting backend API.";

impl AnalysisResult {
    /// Normalizes a decoded backend response. The label match is exact and
    /// case-sensitive; anything other than `"spam"` (including an absent
    /// label) reads as legitimate.
    pub fn from_success(response: &RemoteResponse) -> Self {
        let is_spam = response.label.as_deref() == Some(SPAM_LABEL);
        let score = response.confidence.unwrap_or(0.0);

        let prediction = if is_spam {
            "Prediction: Likely SPAM".to_string()
        } else {
            "Prediction: Appears Legitimate".to_string()
        };
        let confidence = match response.confidence {
            Some(value) => format!("Confidence: {:.1}%", value),
            None => "Confidence: N/A".to_string(),
        };

        Self {
            is_spam,
            score,
            reasons: vec![prediction, confidence],
        }
    }

    /// Normalizes a failed request into a single-reason result. The reason is
    /// the error's own message when it has one, else a generic fallback.
    pub fn from_failure(error: &AppError) -> Self {
        let message = error.to_string();
        let reason = if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        };

        Self {
            is_spam: false,
            score: 0.0,
            reasons: vec![reason],
        }
    }

    /// Normalizes either arm of a settled request.
    pub fn from_outcome(outcome: &crate::core::error::Result<RemoteResponse>) -> Self {
        match outcome {
            Ok(response) => Self::from_success(response),
            Err(error) => Self::from_failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spam_label_with_confidence() {
        let response = RemoteResponse {
            label: Some("spam".to_string()),
            confidence: Some(87.4),
        };
        let result = AnalysisResult::from_success(&response);
        assert!(result.is_spam);
        assert_eq!(result.score, 87.4);
        assert_eq!(
            result.reasons,
            vec!["Prediction: Likely SPAM", "Confidence: 87.4%"]
        );
    }

    #[test]
    fn ham_label_without_confidence() {
        let response = RemoteResponse {
            label: Some("ham".to_string()),
            confidence: None,
        };
        let result = AnalysisResult::from_success(&response);
        assert!(!result.is_spam);
        assert_eq!(result.score, 0.0);
        assert_eq!(
            result.reasons,
            vec!["Prediction: Appears Legitimate", "Confidence: N/A"]
        );
    }

    #[test]
    fn label_match_is_case_sensitive() {
        let response = RemoteResponse {
            label: Some("SPAM".to_string()),
            confidence: Some(99.0),
        };
        assert!(!AnalysisResult::from_success(&response).is_spam);
    }

    #[test]
    fn absent_label_reads_as_legitimate() {
        let result = AnalysisResult::from_success(&RemoteResponse::default());
        assert!(!result.is_spam);
        assert_eq!(result.score, 0.0);
        assert_eq!(
            result.reasons,
            vec!["Prediction: Appears Legitimate", "Confidence: N/A"]
        );
    }

    #[test]
    fn failure_carries_the_error_message() {
        let error = AppError::ApiStatus(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        let result = AnalysisResult::from_failure(&error);
        assert!(!result.is_spam);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.reasons, vec!["API error"]);
    }

    #[test]
    fn normalization_is_idempotent() {
        let response = RemoteResponse {
            label: Some("spam".to_string()),
            confidence: Some(51.2),
        };
        assert_eq!(
            AnalysisResult::from_success(&response),
            AnalysisResult::from_success(&response)
        );
    }
}
