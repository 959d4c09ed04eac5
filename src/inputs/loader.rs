//! Build projection inputs from form values, JSON files and scenario CSVs

use super::ProjectionInput;
use crate::error::ProjectionError;
use csv::Reader;
use serde::Serialize;
use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Form field names, paired with the canonical field they populate
const FORM_FIELDS: [(&str, &str); 6] = [
    ("initial_users", "initial_users"),
    ("fee", "fee"),
    ("churn", "churn_rate"),
    ("growth_rate", "growth_rate"),
    ("fixed_cost", "fixed_cost"),
    ("var_cost", "variable_cost"),
];

/// A projection input tagged with a scenario name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedScenario {
    pub name: String,
    pub input: ProjectionInput,
}

/// Raw CSV row for a scenario file
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "InitialUsers")]
    initial_users: f64,
    #[serde(rename = "Fee")]
    fee: f64,
    #[serde(rename = "Churn")]
    churn_rate: f64,
    #[serde(rename = "GrowthRate")]
    growth_rate: f64,
    #[serde(rename = "FixedCost")]
    fixed_cost: f64,
    #[serde(rename = "VarCost")]
    variable_cost: f64,
    #[serde(rename = "Months")]
    months: i64,
}

impl CsvRow {
    fn to_scenario(self) -> NamedScenario {
        NamedScenario {
            name: self.name,
            input: ProjectionInput::new(
                self.initial_users,
                self.fee,
                self.churn_rate,
                self.growth_rate,
                self.fixed_cost,
                self.variable_cost,
                self.months,
            ),
        }
    }
}

fn lookup<'a>(values: &'a HashMap<String, String>, form_name: &str, canonical: &str) -> Result<&'a str, ProjectionError> {
    values
        .get(form_name)
        .or_else(|| values.get(canonical))
        .map(|v| v.trim())
        .ok_or_else(|| ProjectionError::invalid(canonical, "missing value"))
}

fn parse_number(field: &str, raw: &str) -> Result<f64, ProjectionError> {
    let value: f64 = raw
        .parse()
        .map_err(|_| ProjectionError::invalid(field, format!("`{}` is not a number", raw)))?;
    if !value.is_finite() {
        return Err(ProjectionError::invalid(field, format!("`{}` is not a finite number", raw)));
    }
    Ok(value)
}

/// Month counts arrive either as integers or as integral decimals ("12.0")
fn parse_months(raw: &str) -> Result<i64, ProjectionError> {
    if let Ok(months) = raw.parse::<i64>() {
        return Ok(months);
    }
    let value = parse_number("months", raw)?;
    if value.fract() != 0.0 || value.abs() >= i64::MAX as f64 {
        return Err(ProjectionError::invalid("months", format!("`{}` is not a whole number", raw)));
    }
    Ok(value as i64)
}

impl ProjectionInput {
    /// Parse the string values submitted by the financial parameters form.
    ///
    /// Accepts the form's field names (`churn`, `var_cost`) as well as the
    /// canonical ones. Does not range-check; see [`ProjectionInput::validate`].
    pub fn from_form(values: &HashMap<String, String>) -> Result<Self, ProjectionError> {
        let mut parsed = [0.0_f64; 6];
        for (slot, (form_name, canonical)) in parsed.iter_mut().zip(FORM_FIELDS) {
            *slot = parse_number(canonical, lookup(values, form_name, canonical)?)?;
        }
        let months = parse_months(lookup(values, "months", "months")?)?;

        let [initial_users, fee, churn_rate, growth_rate, fixed_cost, variable_cost] = parsed;
        Ok(Self::new(initial_users, fee, churn_rate, growth_rate, fixed_cost, variable_cost, months))
    }
}

/// Load a single projection input from a JSON file; absent fields take form defaults
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<ProjectionInput, Box<dyn Error>> {
    let file = File::open(path)?;
    let input = serde_json::from_reader(file)?;
    Ok(input)
}

/// Load named scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>, Box<dyn Error>> {
    let file = File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load named scenarios from any reader (e.g., string buffer, request body)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<NamedScenario>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario());
    }

    log::debug!("loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}
