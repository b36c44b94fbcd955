//! Core library for spamshield: submits email content to a remote spam
//! classification service and normalizes the verdict for display.
//!
//! The pipeline is small and deliberately layered: a pure endpoint resolver
//! picks the backend URL for the current environment, a request builder
//! frames the payload, an HTTP client performs the single POST, and a
//! normalizer folds success and failure into one display-ready result. The
//! [`analysis::Orchestrator`] state machine ties these together and is the
//! only stateful piece.

pub mod analysis;
pub mod core;

pub use crate::analysis::{
    AnalysisClient, ClientLocation, Orchestrator, OrchestratorState, PendingAnalysis,
};
pub use crate::core::config::{Config, ConfigBuilder};
pub use crate::core::error::{AppError, Result};
pub use crate::core::models::{
    AnalysisRequest, AnalysisResult, HealthStatus, InputFields, RemoteResponse,
};
