//! Projection engine for monthly cohort and cash-flow projections

mod state;
mod engine;
mod cashflows;

pub use state::CohortState;
pub use engine::{project, ProjectionEngine};
pub use cashflows::{ProjectionResult, ProjectionRow, ProjectionSummary};
