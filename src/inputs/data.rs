//! Projection input parameters matching the financial parameters form

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

pub const DEFAULT_INITIAL_USERS: f64 = 100.0;
pub const DEFAULT_FEE: f64 = 10.0;
pub const DEFAULT_CHURN_RATE: f64 = 0.1;
pub const DEFAULT_GROWTH_RATE: f64 = 0.2;
pub const DEFAULT_FIXED_COST: f64 = 1000.0;
pub const DEFAULT_VARIABLE_COST: f64 = 2.0;
pub const DEFAULT_MONTHS: i64 = 12;

/// Longest horizon accepted from user input (100 years)
pub const MAX_MONTHS: i64 = 1200;

fn default_initial_users() -> f64 { DEFAULT_INITIAL_USERS }
fn default_fee() -> f64 { DEFAULT_FEE }
fn default_churn_rate() -> f64 { DEFAULT_CHURN_RATE }
fn default_growth_rate() -> f64 { DEFAULT_GROWTH_RATE }
fn default_fixed_cost() -> f64 { DEFAULT_FIXED_COST }
fn default_variable_cost() -> f64 { DEFAULT_VARIABLE_COST }
fn default_months() -> i64 { DEFAULT_MONTHS }

/// Initial conditions and monthly rates for one projection run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Starting cohort size at month 1
    #[serde(default = "default_initial_users")]
    pub initial_users: f64,

    /// Revenue recognized per user per month
    #[serde(default = "default_fee")]
    pub fee: f64,

    /// Fraction of current users lost each month
    #[serde(default = "default_churn_rate", alias = "churn")]
    pub churn_rate: f64,

    /// Fraction of current users added each month (gross)
    #[serde(default = "default_growth_rate")]
    pub growth_rate: f64,

    /// Monthly cost independent of user count
    #[serde(default = "default_fixed_cost")]
    pub fixed_cost: f64,

    /// Cost per user per month
    #[serde(default = "default_variable_cost", alias = "var_cost")]
    pub variable_cost: f64,

    /// Number of months to project, inclusive
    #[serde(default = "default_months")]
    pub months: i64,
}

impl Default for ProjectionInput {
    fn default() -> Self {
        Self {
            initial_users: DEFAULT_INITIAL_USERS,
            fee: DEFAULT_FEE,
            churn_rate: DEFAULT_CHURN_RATE,
            growth_rate: DEFAULT_GROWTH_RATE,
            fixed_cost: DEFAULT_FIXED_COST,
            variable_cost: DEFAULT_VARIABLE_COST,
            months: DEFAULT_MONTHS,
        }
    }
}

impl ProjectionInput {
    pub fn new(
        initial_users: f64,
        fee: f64,
        churn_rate: f64,
        growth_rate: f64,
        fixed_cost: f64,
        variable_cost: f64,
        months: i64,
    ) -> Self {
        Self {
            initial_users,
            fee,
            churn_rate,
            growth_rate,
            fixed_cost,
            variable_cost,
            months,
        }
    }

    /// Net monthly multiplier applied to the cohort: 1 + growth - churn
    pub fn net_growth_factor(&self) -> f64 {
        1.0 + self.growth_rate - self.churn_rate
    }

    /// Numeric fields paired with their names, in form order
    pub(crate) fn numeric_fields(&self) -> [(&'static str, f64); 6] {
        [
            ("initial_users", self.initial_users),
            ("fee", self.fee),
            ("churn_rate", self.churn_rate),
            ("growth_rate", self.growth_rate),
            ("fixed_cost", self.fixed_cost),
            ("variable_cost", self.variable_cost),
        ]
    }

    /// Form-level validation: amounts non-negative, rates within [0, 1],
    /// between 1 and [`MAX_MONTHS`] months.
    ///
    /// The projector itself only rejects what it cannot compute, so callers
    /// that accept user input run this first.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        for (field, value) in self.numeric_fields() {
            if !value.is_finite() {
                return Err(ProjectionError::invalid(field, "must be a finite number"));
            }
        }

        for (field, value) in [
            ("initial_users", self.initial_users),
            ("fee", self.fee),
            ("fixed_cost", self.fixed_cost),
            ("variable_cost", self.variable_cost),
        ] {
            if value < 0.0 {
                return Err(ProjectionError::invalid(field, format!("must be non-negative, got {}", value)));
            }
        }

        for (field, value) in [("churn_rate", self.churn_rate), ("growth_rate", self.growth_rate)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ProjectionError::invalid(field, format!("must be within [0, 1], got {}", value)));
            }
        }

        if self.months < 1 {
            return Err(ProjectionError::invalid("months", format!("must be at least 1, got {}", self.months)));
        }
        if self.months > MAX_MONTHS {
            return Err(ProjectionError::invalid(
                "months",
                format!("must be at most {}, got {}", MAX_MONTHS, self.months),
            ));
        }

        Ok(())
    }
}
