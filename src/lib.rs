//! Startup Projector - cohort and cash-flow projections for startup consultant reports
//!
//! This library provides:
//! - A deterministic month-by-month user, revenue, cost and cash-flow projection
//! - Input parsing and validation for the financial parameters form
//! - Batch and growth/churn sensitivity runs
//! - Report assembly around an injected text-generation collaborator

pub mod config;
pub mod error;
pub mod inputs;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{ProjectionError, ReportError};
pub use inputs::ProjectionInput;
pub use projection::{project, ProjectionEngine, ProjectionResult, ProjectionRow, ProjectionSummary};
pub use scenario::ScenarioRunner;
