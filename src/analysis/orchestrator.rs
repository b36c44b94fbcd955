//! The request lifecycle state machine driving one analysis at a time.
//!
//! The orchestrator owns the only mutable state in the pipeline. The caller
//! owns the input fields and passes them into each intent explicitly, so the
//! core has no hidden state container behind it. Two intents exist:
//! `Analyze` and `Reset`; everything else is a read.

use crate::analysis::client::AnalysisClient;
use crate::core::error::Result;
use crate::core::models::{AnalysisRequest, AnalysisResult, InputFields, RemoteResponse};

/// Lifecycle of the current analysis. `Settled` is terminal until the next
/// intent; a repeated `Analyze` from `Settled` simply discards the result.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OrchestratorState {
    #[default]
    Idle,
    Analyzing,
    Settled(AnalysisResult),
}

/// Handle for one issued request. Settling with a stale handle (one whose
/// sequence number no longer matches the latest issued request) is ignored,
/// so a response that raced a `Reset` or a newer `Analyze` can never
/// overwrite fresher state.
#[derive(Debug)]
pub struct PendingAnalysis {
    seq: u64,
    pub request: AnalysisRequest,
}

#[derive(Debug, Default)]
pub struct Orchestrator {
    state: OrchestratorState,
    latest_seq: u64,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &OrchestratorState {
        &self.state
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.state, OrchestratorState::Analyzing)
    }

    /// The settled result, when there is one.
    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            OrchestratorState::Settled(result) => Some(result),
            _ => None,
        }
    }

    /// The `Analyze` intent. Guard: the body must hold content and no request
    /// may already be in flight. A failed guard is a silent no-op; the
    /// triggering affordance is expected to be disabled under the same
    /// condition, so reaching it is defensive, not an error.
    pub fn begin_analysis(&mut self, fields: &InputFields) -> Option<PendingAnalysis> {
        if !fields.has_content() {
            tracing::debug!(target: "orchestrator", "Analyze ignored: nothing to analyze");
            return None;
        }
        if self.is_analyzing() {
            tracing::debug!(target: "orchestrator", "Analyze ignored: request already in flight");
            return None;
        }

        self.latest_seq += 1;
        self.state = OrchestratorState::Analyzing;
        tracing::debug!(target: "orchestrator", "Issued analysis request #{}", self.latest_seq);
        Some(PendingAnalysis {
            seq: self.latest_seq,
            request: AnalysisRequest::from_fields(fields),
        })
    }

    /// Settles an issued request with its outcome, normalizing success and
    /// failure alike into a fresh [`AnalysisResult`]. Outcomes for anything
    /// but the latest issued request are discarded.
    pub fn settle(&mut self, pending: PendingAnalysis, outcome: Result<RemoteResponse>) {
        if pending.seq != self.latest_seq {
            tracing::debug!(
                target: "orchestrator",
                "Discarding stale outcome for request #{} (latest is #{})",
                pending.seq,
                self.latest_seq
            );
            return;
        }
        self.state = OrchestratorState::Settled(AnalysisResult::from_outcome(&outcome));
    }

    /// The `Reset` intent, allowed from any state: clears the caller's input
    /// fields, drops any result, and returns to `Idle`. An in-flight request
    /// is not aborted, but its eventual outcome will no longer match the
    /// latest sequence number and is ignored.
    pub fn reset(&mut self, fields: &mut InputFields) {
        fields.clear();
        self.latest_seq += 1;
        self.state = OrchestratorState::Idle;
        tracing::debug!(target: "orchestrator", "Reset to idle");
    }

    /// Runs one full analysis cycle against the backend: guard, request,
    /// settle. No-op when the guard fails.
    pub async fn analyze(&mut self, client: &AnalysisClient, fields: &InputFields) {
        if let Some(pending) = self.begin_analysis(fields) {
            let outcome = client.analyze(&pending.request).await;
            self.settle(pending, outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;

    fn fields(body: &str) -> InputFields {
        InputFields {
            sender_email: "someone@example.com".to_string(),
            subject: "Hi".to_string(),
            body: body.to_string(),
        }
    }

    fn spam_response() -> RemoteResponse {
        RemoteResponse {
            label: Some("spam".to_string()),
            confidence: Some(92.5),
        }
    }

    #[test]
    fn analyze_is_noop_for_empty_body() {
        let mut orchestrator = Orchestrator::new();
        assert!(orchestrator.begin_analysis(&fields("")).is_none());
        assert!(orchestrator.begin_analysis(&fields("   \n\t")).is_none());
        assert_eq!(orchestrator.state(), &OrchestratorState::Idle);
    }

    #[test]
    fn analyze_is_noop_while_in_flight() {
        let mut orchestrator = Orchestrator::new();
        let pending = orchestrator.begin_analysis(&fields("body")).unwrap();
        assert!(orchestrator.is_analyzing());
        assert!(orchestrator.begin_analysis(&fields("body")).is_none());
        orchestrator.settle(pending, Ok(spam_response()));
    }

    #[test]
    fn successful_outcome_settles_with_result() {
        let mut orchestrator = Orchestrator::new();
        let pending = orchestrator.begin_analysis(&fields("win big now")).unwrap();
        orchestrator.settle(pending, Ok(spam_response()));

        let result = orchestrator.result().expect("settled result");
        assert!(result.is_spam);
        assert_eq!(result.score, 92.5);
    }

    #[test]
    fn failed_outcome_settles_with_error_reason() {
        let mut orchestrator = Orchestrator::new();
        let pending = orchestrator.begin_analysis(&fields("hello")).unwrap();
        orchestrator.settle(
            pending,
            Err(AppError::ApiStatus(reqwest::StatusCode::BAD_GATEWAY)),
        );

        let result = orchestrator.result().expect("settled result");
        assert!(!result.is_spam);
        assert_eq!(result.reasons, vec!["API error"]);
    }

    #[test]
    fn reset_clears_fields_and_returns_to_idle() {
        let mut orchestrator = Orchestrator::new();
        let mut input = fields("offer inside");
        let pending = orchestrator.begin_analysis(&input).unwrap();
        orchestrator.settle(pending, Ok(spam_response()));

        orchestrator.reset(&mut input);
        assert_eq!(orchestrator.state(), &OrchestratorState::Idle);
        assert!(orchestrator.result().is_none());
        assert_eq!(input, InputFields::default());
    }

    #[test]
    fn stale_outcome_after_reset_is_discarded() {
        let mut orchestrator = Orchestrator::new();
        let mut input = fields("still in flight");
        let pending = orchestrator.begin_analysis(&input).unwrap();

        orchestrator.reset(&mut input);
        orchestrator.settle(pending, Ok(spam_response()));

        assert_eq!(orchestrator.state(), &OrchestratorState::Idle);
    }

    #[test]
    fn stale_outcome_after_reanalysis_is_discarded() {
        let mut orchestrator = Orchestrator::new();
        let mut input = fields("first");
        let first = orchestrator.begin_analysis(&input).unwrap();

        // The settled first request allows a second Analyze, which the first
        // request's duplicate settle must not overwrite.
        orchestrator.settle(
            first,
            Err(AppError::ApiStatus(reqwest::StatusCode::BAD_GATEWAY)),
        );
        input.body = "second".to_string();
        let second = orchestrator.begin_analysis(&input).unwrap();
        orchestrator.settle(second, Ok(spam_response()));

        let result = orchestrator.result().expect("settled result");
        assert!(result.is_spam);
    }

    #[test]
    fn reanalysis_from_settled_discards_previous_result() {
        let mut orchestrator = Orchestrator::new();
        let first = orchestrator.begin_analysis(&fields("one")).unwrap();
        orchestrator.settle(first, Ok(spam_response()));
        assert!(orchestrator.result().is_some());

        let _second = orchestrator.begin_analysis(&fields("two")).unwrap();
        assert!(orchestrator.is_analyzing());
        assert!(orchestrator.result().is_none());
    }
}
