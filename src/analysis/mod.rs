//! The analysis pipeline: endpoint resolution, request framing, the backend
//! client, result normalization, and the orchestrating state machine.

pub mod client;
pub mod endpoint;
pub mod normalize;
pub mod orchestrator;
pub mod request;

pub use client::AnalysisClient;
pub use endpoint::{resolve_endpoint, ClientLocation};
pub use orchestrator::{Orchestrator, OrchestratorState, PendingAnalysis};
