//! Core projection engine for monthly cohort and cash-flow projections

use crate::error::ProjectionError;
use crate::inputs::ProjectionInput;
use super::state::CohortState;
use super::cashflows::{ProjectionRow, ProjectionResult};

/// Project users, revenue, cost, profit and cumulative cash flow month by month.
///
/// Rates are not range-checked here; only inputs that cannot be computed
/// (fewer than one month, non-finite numbers) are rejected. Returns exactly
/// `input.months` rows.
pub fn project(input: &ProjectionInput) -> Result<Vec<ProjectionRow>, ProjectionError> {
    ProjectionEngine::new(*input).map(|engine| engine.run().rows)
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    input: ProjectionInput,
    months: u32,
}

impl ProjectionEngine {
    /// Create a new projection engine, rejecting inputs with no month to project
    pub fn new(input: ProjectionInput) -> Result<Self, ProjectionError> {
        for (field, value) in input.numeric_fields() {
            if !value.is_finite() {
                return Err(ProjectionError::invalid(field, format!("{} is not a finite number", value)));
            }
        }

        if input.months < 1 {
            return Err(ProjectionError::invalid(
                "months",
                format!("no months to project ({})", input.months),
            ));
        }
        let months = u32::try_from(input.months)
            .map_err(|_| ProjectionError::invalid("months", format!("{} months is out of range", input.months)))?;

        Ok(Self { input, months })
    }

    /// Run the projection
    pub fn run(&self) -> ProjectionResult {
        let mut rows = Vec::new();
        let mut state = CohortState::from_input(&self.input);

        for _month in 1..=self.months {
            state.advance_month(&self.input);

            let row = self.calculate_month(&mut state);
            rows.push(row);
        }

        log::debug!(
            "projected {} months: final users {:.2}, final cash flow {:.2}",
            self.months,
            state.users,
            state.cash_flow
        );

        ProjectionResult::new(self.input, rows)
    }

    /// Calculate revenue, cost and profit for the current month
    fn calculate_month(&self, state: &mut CohortState) -> ProjectionRow {
        let users = state.users;
        let revenue = users * self.input.fee;
        let total_cost = self.input.fixed_cost + users * self.input.variable_cost;
        let net_profit = revenue - total_cost;

        state.cash_flow += net_profit;

        ProjectionRow {
            month: state.month,
            users,
            revenue,
            total_cost,
            net_profit,
            cash_flow: state.cash_flow,
        }
    }
}
