//! Cashflow output structures for projections

use serde::{Deserialize, Serialize};

use crate::inputs::ProjectionInput;

/// A single row of projection output for one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub month: u32,
    pub users: f64,
    pub revenue: f64,
    pub total_cost: f64,
    pub net_profit: f64,
    /// Cumulative net profit through this month
    pub cash_flow: f64,
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Input the rows were projected from
    pub input: ProjectionInput,

    /// Monthly rows, month ascending
    pub rows: Vec<ProjectionRow>,
}

impl ProjectionResult {
    pub fn new(input: ProjectionInput, rows: Vec<ProjectionRow>) -> Self {
        Self { input, rows }
    }

    /// `(month, cash_flow)` pairs for plotting
    pub fn cash_flow_series(&self) -> Vec<(u32, f64)> {
        self.rows.iter().map(|r| (r.month, r.cash_flow)).collect()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_revenue: f64 = self.rows.iter().map(|r| r.revenue).sum();
        let total_cost: f64 = self.rows.iter().map(|r| r.total_cost).sum();
        let total_net_profit: f64 = self.rows.iter().map(|r| r.net_profit).sum();

        let final_users = self.rows.last().map(|r| r.users).unwrap_or(0.0);
        let final_cash_flow = self.rows.last().map(|r| r.cash_flow).unwrap_or(0.0);
        // Deepest cumulative deficit; zero when cash flow never dips below zero
        let min_cash_flow = self.rows.iter().map(|r| r.cash_flow).fold(0.0, f64::min);

        let first_profitable_month = self.rows.iter().find(|r| r.net_profit > 0.0).map(|r| r.month);
        // Month after the last deficit month; none if the run ends in deficit
        let breakeven_month = match self.rows.iter().rposition(|r| r.cash_flow < 0.0) {
            None => self.rows.first().map(|r| r.month),
            Some(last_deficit) => self.rows.get(last_deficit + 1).map(|r| r.month),
        };

        ProjectionSummary {
            total_months: self.rows.len() as u32,
            total_revenue,
            total_cost,
            total_net_profit,
            final_users,
            final_cash_flow,
            min_cash_flow,
            first_profitable_month,
            breakeven_month,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub total_revenue: f64,
    pub total_cost: f64,
    pub total_net_profit: f64,
    pub final_users: f64,
    pub final_cash_flow: f64,
    /// Funding need: the lowest cumulative cash flow reached (<= 0)
    pub min_cash_flow: f64,
    pub first_profitable_month: Option<u32>,
    /// First month from which cumulative cash flow stays non-negative
    pub breakeven_month: Option<u32>,
}
