//! Cohort state carried from one projected month to the next

use crate::inputs::ProjectionInput;

/// State of the user cohort at a point in time during projection
#[derive(Debug, Clone)]
pub struct CohortState {
    /// Current projection month (1-indexed, 0 before the first advance)
    pub month: u32,

    /// Active users this month
    pub users: f64,

    /// Cumulative net profit through the prior month
    pub cash_flow: f64,
}

impl CohortState {
    /// Initialize state at projection start
    pub fn from_input(input: &ProjectionInput) -> Self {
        Self {
            month: 0,
            users: input.initial_users,
            cash_flow: 0.0,
        }
    }

    /// Advance to next month
    ///
    /// Month 1 keeps the initial cohort; later months add gross growth and
    /// remove churn, both measured against the prior month's users.
    pub fn advance_month(&mut self, input: &ProjectionInput) {
        self.month += 1;

        if self.month > 1 {
            let prior = self.users;
            let new_users = prior * input.growth_rate;
            let churned_users = prior * input.churn_rate;
            self.users = prior + new_users - churned_users;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_advance_keeps_initial_users() {
        let input = ProjectionInput::default();
        let mut state = CohortState::from_input(&input);
        state.advance_month(&input);
        assert_eq!(state.month, 1);
        assert_eq!(state.users, input.initial_users);
    }

    #[test]
    fn test_advance_applies_growth_then_churn() {
        let input = ProjectionInput::default();
        let mut state = CohortState::from_input(&input);
        state.advance_month(&input);
        state.advance_month(&input);
        assert_eq!(state.month, 2);
        assert!((state.users - 110.0).abs() < 1e-9);
    }
}
