//! AWS Lambda handler for the financial parameters form
//!
//! Accepts the form as JSON, validates it, and returns the monthly table,
//! summary and chart series. Invalid input comes back as a response with
//! `error` set and no rows.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};

use startup_projector::inputs::ProjectionInput;
use startup_projector::report::ChartSpec;
use startup_projector::{ProjectionRow, ProjectionSummary, ScenarioRunner};

/// Input payload: the form fields, each defaulting to the form's initial value
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    #[serde(flatten)]
    pub input: ProjectionInput,
}

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub months: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ProjectionSummary>,
    pub rows: Vec<ProjectionRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartSpec>,
    pub execution_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn respond(request: &ProjectionRequest) -> ProjectionResponse {
    let start = std::time::Instant::now();
    let months = request.input.months;

    match ScenarioRunner::strict().run(&request.input) {
        Ok(result) => ProjectionResponse {
            months,
            summary: Some(result.summary()),
            chart: Some(ChartSpec::cash_flow(&result)),
            rows: result.rows,
            execution_time_ms: start.elapsed().as_millis() as u64,
            error: None,
        },
        Err(e) => {
            log::warn!("rejected projection request: {}", e);
            ProjectionResponse {
                months,
                summary: None,
                rows: Vec::new(),
                chart: None,
                execution_time_ms: start.elapsed().as_millis() as u64,
                error: Some(e.to_string()),
            }
        }
    }
}

async fn handler(event: LambdaEvent<ProjectionRequest>) -> Result<ProjectionResponse, Error> {
    Ok(respond(&event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_produce_twelve_months() {
        let request: ProjectionRequest = serde_json::from_str("{}").unwrap();
        let response = respond(&request);
        assert!(response.error.is_none());
        assert_eq!(response.rows.len(), 12);
        assert_eq!(response.chart.unwrap().points.len(), 12);
    }

    #[test]
    fn test_invalid_months_reports_error() {
        let request: ProjectionRequest = serde_json::from_str(r#"{"months": 0}"#).unwrap();
        let response = respond(&request);
        assert!(response.rows.is_empty());
        assert!(response.summary.is_none());
        assert!(response.error.unwrap().contains("months"));
    }

    #[test]
    fn test_oversized_months_reports_error() {
        let request: ProjectionRequest = serde_json::from_str(r#"{"months": 4000000000}"#).unwrap();
        let response = respond(&request);
        assert!(response.rows.is_empty());
        assert!(response.error.unwrap().contains("months"));
    }

    #[test]
    fn test_out_of_range_rate_reports_error() {
        let request: ProjectionRequest = serde_json::from_str(r#"{"churn": 1.5}"#).unwrap();
        let response = respond(&request);
        assert!(response.rows.is_empty());
        assert!(response.chart.is_none());
        assert!(response.error.unwrap().contains("churn_rate"));
    }

    #[test]
    fn test_negative_amount_reports_error() {
        let request: ProjectionRequest = serde_json::from_str(r#"{"fixed_cost": -10}"#).unwrap();
        let response = respond(&request);
        assert!(response.rows.is_empty());
        assert!(response.error.unwrap().contains("fixed_cost"));
    }

    #[test]
    fn test_canonical_names_and_form_aliases_mix() {
        let request: ProjectionRequest = serde_json::from_str(
            r#"{"initial_users": 100, "fee": 10, "churn": 0.1, "growth_rate": 0.2,
                "fixed_cost": 1000, "var_cost": 2, "months": 3}"#,
        )
        .unwrap();
        assert_eq!(request.input.churn_rate, 0.1);
        assert_eq!(request.input.variable_cost, 2.0);

        let response = respond(&request);
        assert!(response.error.is_none());
        assert_eq!(response.rows.len(), 3);
        let summary = response.summary.unwrap();
        assert!((summary.final_cash_flow - (-352.0)).abs() < 1e-9);

        let request: ProjectionRequest = serde_json::from_str(
            r#"{"churn_rate": 0.05, "variable_cost": 4.5, "months": 2}"#,
        )
        .unwrap();
        assert_eq!(request.input.churn_rate, 0.05);
        assert_eq!(request.input.variable_cost, 4.5);
        assert_eq!(respond(&request).rows.len(), 2);
    }
}
