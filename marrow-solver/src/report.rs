use std::fmt::Display;
use std::time::Duration;

use crate::SolveStatus;
use crate::SolverOutcome;

/// The one-line summary of a [`SolverOutcome`]:
///
/// ```text
/// status: OPTIMAL | total time: 0.12s | objective: 62 (best lb: 62)
/// ```
///
/// The objective part is only present for models with an objective.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    pub status: SolveStatus,
    pub wall_time: Duration,
    pub objective_value: Option<i64>,
    pub best_objective_bound: Option<i64>,
    pub num_solutions: u64,
}

impl<S> From<&SolverOutcome<S>> for Report {
    fn from(outcome: &SolverOutcome<S>) -> Self {
        Report {
            status: outcome.status,
            wall_time: outcome.wall_time,
            objective_value: outcome.objective_value,
            best_objective_bound: outcome.best_objective_bound,
            num_solutions: outcome.num_solutions,
        }
    }
}

impl<S> SolverOutcome<S> {
    pub fn report(&self) -> Report {
        Report::from(self)
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "status: {} | total time: {:.2}s",
            self.status,
            self.wall_time.as_secs_f64()
        )?;

        match (self.objective_value, self.best_objective_bound) {
            (Some(objective), Some(bound)) => {
                write!(f, " | objective: {objective} (best lb: {bound})")?
            }
            (Some(objective), None) => write!(f, " | objective: {objective}")?,
            (None, Some(bound)) => write!(f, " | objective: - (best lb: {bound})")?,
            (None, None) => {}
        }

        if self.num_solutions > 1 {
            write!(f, " | solutions: {}", self.num_solutions)?;
        }

        Ok(())
    }
}

/// Draws a solution of a problem family. Implemented outside the library, for instance by the
/// command-line binary.
pub trait SolutionRenderer<S> {
    fn render(&self, solution: &S, out: &mut dyn std::fmt::Write) -> std::fmt::Result;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(status: SolveStatus) -> Report {
        Report {
            status,
            wall_time: Duration::from_millis(1234),
            objective_value: None,
            best_objective_bound: None,
            num_solutions: 0,
        }
    }

    #[test]
    fn satisfaction_reports_have_no_objective() {
        assert_eq!(
            "status: INFEASIBLE | total time: 1.23s",
            report(SolveStatus::Infeasible).to_string()
        );
    }

    #[test]
    fn optimisation_reports_show_the_best_bound() {
        let report = Report {
            objective_value: Some(62),
            best_objective_bound: Some(58),
            num_solutions: 1,
            ..report(SolveStatus::Feasible)
        };

        assert_eq!(
            "status: FEASIBLE | total time: 1.23s | objective: 62 (best lb: 58)",
            report.to_string()
        );
    }

    #[test]
    fn unknown_outcomes_only_show_the_bound() {
        let report = Report {
            best_objective_bound: Some(10),
            ..report(SolveStatus::Unknown)
        };

        assert_eq!(
            "status: UNKNOWN | total time: 1.23s | objective: - (best lb: 10)",
            report.to_string()
        );
    }

    #[test]
    fn enumerations_show_the_number_of_solutions() {
        let report = Report {
            num_solutions: 92,
            ..report(SolveStatus::Optimal)
        };

        assert_eq!(
            "status: OPTIMAL | total time: 1.23s | solutions: 92",
            report.to_string()
        );
    }
}
