use std::fmt::Display;
use std::time::Duration;

/// How a solve ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolveStatus {
    /// The solution is optimal, the only one asked for, or the last of an exhausted enumeration.
    Optimal,
    /// A solution was found, but the search stopped before proving anything about it.
    Feasible,
    /// There is no solution.
    Infeasible,
    /// The search stopped before finding a solution or proving there is none.
    Unknown,
}

impl SolveStatus {
    pub fn has_solution(self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::Feasible)
    }
}

impl Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveStatus::Optimal => write!(f, "OPTIMAL"),
            SolveStatus::Feasible => write!(f, "FEASIBLE"),
            SolveStatus::Infeasible => write!(f, "INFEASIBLE"),
            SolveStatus::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// The result of a solve.
///
/// The engine produces a `SolverOutcome<Assignment>`; the solve functions map it to the solution
/// type of the problem family. `solution` is present exactly when the status
/// [has a solution](SolveStatus::has_solution).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverOutcome<S> {
    pub status: SolveStatus,
    pub wall_time: Duration,
    pub objective_value: Option<i64>,
    pub best_objective_bound: Option<i64>,
    pub solution: Option<S>,
    pub num_solutions: u64,
}

impl<S> SolverOutcome<S> {
    pub(crate) fn without_solution(status: SolveStatus, wall_time: Duration) -> SolverOutcome<S> {
        SolverOutcome {
            status,
            wall_time,
            objective_value: None,
            best_objective_bound: None,
            solution: None,
            num_solutions: 0,
        }
    }

    /// Replaces the solution, keeping the status and statistics.
    pub fn try_map_solution<T, E>(
        self,
        f: impl FnOnce(S) -> Result<T, E>,
    ) -> Result<SolverOutcome<T>, E> {
        Ok(SolverOutcome {
            status: self.status,
            wall_time: self.wall_time,
            objective_value: self.objective_value,
            best_objective_bound: self.best_objective_bound,
            solution: self.solution.map(f).transpose()?,
            num_solutions: self.num_solutions,
        })
    }
}
