//! Scenario runner for batch and sensitivity projections
//!
//! Each projection is independent, so batches fan out over rayon and come
//! back in input order.

use rayon::prelude::*;
use serde::Serialize;

use crate::error::ProjectionError;
use crate::inputs::{NamedScenario, ProjectionInput};
use crate::projection::{ProjectionEngine, ProjectionResult, ProjectionSummary};

/// Result of one named scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: ProjectionResult,
}

/// One combination of a sensitivity grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityCell {
    pub growth_rate: f64,
    pub churn_rate: f64,
    pub summary: ProjectionSummary,
}

/// Runs projections, optionally validating inputs the way the form does
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let cells = runner.sensitivity_grid(&base, &[0.1, 0.2], &[0.05, 0.1])?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    /// Apply form-level range checks before projecting
    strict: bool,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// Runner that rejects out-of-range rates and negative amounts
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Run a single projection
    pub fn run(&self, input: &ProjectionInput) -> Result<ProjectionResult, ProjectionError> {
        if self.strict {
            input.validate()?;
        }
        Ok(ProjectionEngine::new(*input)?.run())
    }

    /// Run every scenario; the first invalid scenario fails the batch
    pub fn run_batch(&self, scenarios: &[NamedScenario]) -> Result<Vec<ScenarioOutcome>, ProjectionError> {
        log::info!("running {} scenarios", scenarios.len());
        scenarios
            .par_iter()
            .map(|scenario| {
                self.run(&scenario.input).map(|result| ScenarioOutcome {
                    name: scenario.name.clone(),
                    result,
                })
            })
            .collect()
    }

    /// Project every growth/churn combination over a base input, growth-major
    pub fn sensitivity_grid(
        &self,
        base: &ProjectionInput,
        growth_rates: &[f64],
        churn_rates: &[f64],
    ) -> Result<Vec<SensitivityCell>, ProjectionError> {
        let combinations: Vec<(f64, f64)> = growth_rates
            .iter()
            .flat_map(|&g| churn_rates.iter().map(move |&c| (g, c)))
            .collect();

        log::info!(
            "running sensitivity grid: {} growth x {} churn",
            growth_rates.len(),
            churn_rates.len()
        );

        combinations
            .par_iter()
            .map(|&(growth_rate, churn_rate)| {
                let input = ProjectionInput {
                    growth_rate,
                    churn_rate,
                    ..*base
                };
                self.run(&input).map(|result| SensitivityCell {
                    growth_rate,
                    churn_rate,
                    summary: result.summary(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn scenario(name: &str, input: ProjectionInput) -> NamedScenario {
        NamedScenario { name: name.to_string(), input }
    }

    #[test]
    fn test_run_batch_preserves_order() {
        let runner = ScenarioRunner::new();
        let scenarios: Vec<_> = (1..=8)
            .map(|m| scenario(&format!("s{}", m), ProjectionInput { months: m, ..Default::default() }))
            .collect();

        let outcomes = runner.run_batch(&scenarios).unwrap();
        assert_eq!(outcomes.len(), 8);
        for (i, outcome) in outcomes.iter().enumerate() {
            assert_eq!(outcome.name, format!("s{}", i + 1));
            assert_eq!(outcome.result.rows.len(), i + 1);
        }
    }

    #[test]
    fn test_run_batch_fails_on_invalid_scenario() {
        let runner = ScenarioRunner::new();
        let scenarios = vec![
            scenario("ok", ProjectionInput::default()),
            scenario("empty", ProjectionInput { months: 0, ..Default::default() }),
        ];
        assert!(runner.run_batch(&scenarios).is_err());
    }

    #[test]
    fn test_strict_runner_validates_rates() {
        let input = ProjectionInput { churn_rate: 1.2, ..Default::default() };
        assert!(ScenarioRunner::new().run(&input).is_ok());
        assert_eq!(ScenarioRunner::strict().run(&input).unwrap_err().field(), "churn_rate");
    }

    #[test]
    fn test_sensitivity_grid() {
        let runner = ScenarioRunner::new();
        let base = ProjectionInput { months: 3, ..Default::default() };
        let cells = runner.sensitivity_grid(&base, &[0.1, 0.2, 0.3], &[0.1, 0.2]).unwrap();

        assert_eq!(cells.len(), 6);
        assert_eq!((cells[0].growth_rate, cells[0].churn_rate), (0.1, 0.1));
        assert_eq!((cells[1].growth_rate, cells[1].churn_rate), (0.1, 0.2));
        assert_eq!((cells[5].growth_rate, cells[5].churn_rate), (0.3, 0.2));

        // growth 0.2 / churn 0.1 is the default form
        assert_relative_eq!(cells[2].summary.final_cash_flow, -352.0, epsilon = 1e-9);

        // flat cohort when growth equals churn
        assert_relative_eq!(cells[0].summary.final_users, 100.0);
    }
}
