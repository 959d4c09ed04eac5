//! Projection inputs: the financial parameters form and its loaders

mod data;
pub mod loader;

pub use data::{
    ProjectionInput, DEFAULT_CHURN_RATE, DEFAULT_FEE, DEFAULT_FIXED_COST, DEFAULT_GROWTH_RATE,
    DEFAULT_INITIAL_USERS, DEFAULT_MONTHS, DEFAULT_VARIABLE_COST, MAX_MONTHS,
};
pub use loader::{load_input, load_scenarios, load_scenarios_from_reader, NamedScenario};
