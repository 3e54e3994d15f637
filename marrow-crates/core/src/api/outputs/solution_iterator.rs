//! Contains the structures corresponding to solution iterations.

use crate::branching::Brancher;
use crate::engine::CSPSolverExecutionFlag;
use crate::results::SolutionReference;
use crate::termination::TerminationCondition;
use crate::Solver;

/// A struct which allows the retrieval of multiple solutions to a satisfaction problem.
///
/// Every solution is reported exactly once. Once the iterator reports [`IteratedSolution::Finished`]
/// or [`IteratedSolution::Unsatisfiable`] it keeps doing so; it cannot be restarted.
#[derive(Debug)]
pub struct SolutionIterator<'solver, 'brancher, 'termination, B: Brancher, T> {
    solver: &'solver mut Solver,
    brancher: &'brancher mut B,
    termination: &'termination mut T,
    state: IteratorState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IteratorState {
    NotStarted,
    Running,
    Exhausted { found_solution: bool },
    Stopped,
}

impl<'solver, 'brancher, 'termination, B: Brancher, T: TerminationCondition>
    SolutionIterator<'solver, 'brancher, 'termination, B, T>
{
    pub(crate) fn new(
        solver: &'solver mut Solver,
        brancher: &'brancher mut B,
        termination: &'termination mut T,
    ) -> Self {
        SolutionIterator {
            solver,
            brancher,
            termination,
            state: IteratorState::NotStarted,
        }
    }

    /// Find the next solution. The search continues from the point where the previous solution
    /// was found, treating that solution as a dead end. Also calls the [`Brancher::on_solution`]
    /// method from the provided [`Brancher`].
    pub fn next_solution(&mut self) -> IteratedSolution<'_> {
        let flag = match self.state {
            IteratorState::NotStarted => self
                .solver
                .satisfaction_solver
                .solve(self.termination, self.brancher),
            IteratorState::Running => self
                .solver
                .satisfaction_solver
                .resume_search(self.termination, self.brancher),
            IteratorState::Exhausted {
                found_solution: true,
            } => return IteratedSolution::Finished,
            IteratorState::Exhausted {
                found_solution: false,
            } => return IteratedSolution::Unsatisfiable,
            IteratorState::Stopped => return IteratedSolution::Unknown,
        };

        match flag {
            CSPSolverExecutionFlag::Feasible => {
                self.state = IteratorState::Running;
                self.brancher
                    .on_solution(self.solver.get_solution_reference());
                IteratedSolution::Solution(self.solver.get_solution_reference())
            }
            CSPSolverExecutionFlag::Infeasible => {
                let found_solution = self.state == IteratorState::Running;
                self.state = IteratorState::Exhausted { found_solution };
                self.solver.satisfaction_solver.restore_state_at_root();

                if found_solution {
                    IteratedSolution::Finished
                } else {
                    IteratedSolution::Unsatisfiable
                }
            }
            CSPSolverExecutionFlag::Timeout => {
                self.state = IteratorState::Stopped;
                self.solver.satisfaction_solver.restore_state_at_root();
                IteratedSolution::Unknown
            }
        }
    }
}

/// Enum which specifies the status of the call to [`SolutionIterator::next_solution`].
#[derive(Debug)]
pub enum IteratedSolution<'solver> {
    /// A new solution was identified.
    Solution(SolutionReference<'solver>),

    /// No more solutions exist.
    Finished,

    /// The solver was terminated during search.
    Unknown,

    /// There exists no solution
    Unsatisfiable,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints;
    use crate::results::ProblemSolution;
    use crate::termination::DecisionBudget;
    use crate::termination::Indefinite;

    #[test]
    fn every_permutation_is_found_once() {
        let mut solver = Solver::default();
        let variables = (0..3)
            .map(|_| solver.new_bounded_integer(1, 3))
            .collect::<Vec<_>>();
        solver
            .add_constraint(constraints::all_different(variables.clone()))
            .post()
            .expect("consistent at the root");

        let mut brancher = solver.default_brancher();
        let mut termination = Indefinite;
        let mut iterator = solver.get_solution_iterator(&mut brancher, &mut termination);

        let mut permutations = vec![];
        loop {
            match iterator.next_solution() {
                IteratedSolution::Solution(solution) => permutations.push(
                    variables
                        .iter()
                        .map(|&variable| solution.get_integer_value(variable))
                        .collect::<Vec<_>>(),
                ),
                IteratedSolution::Finished => break,
                other => panic!("unexpected {other:?}"),
            }
        }

        permutations.sort();
        permutations.dedup();
        assert_eq!(6, permutations.len());
        assert!(matches!(
            iterator.next_solution(),
            IteratedSolution::Finished
        ));
    }

    #[test]
    fn infeasible_problem_is_unsatisfiable() {
        let mut solver = Solver::default();
        let variables = (0..3)
            .map(|_| solver.new_bounded_integer(1, 2))
            .collect::<Vec<_>>();
        let _ = solver
            .add_constraint(constraints::all_different(variables))
            .post();

        let mut brancher = solver.default_brancher();
        let mut termination = Indefinite;
        let mut iterator = solver.get_solution_iterator(&mut brancher, &mut termination);

        assert!(matches!(
            iterator.next_solution(),
            IteratedSolution::Unsatisfiable
        ));
    }

    #[test]
    fn exhausted_budget_reports_unknown() {
        let mut solver = Solver::default();
        let _ = (0..4)
            .map(|_| solver.new_bounded_integer(0, 5))
            .collect::<Vec<_>>();

        let mut brancher = solver.default_brancher();
        let mut termination = DecisionBudget::new(0);
        let mut iterator = solver.get_solution_iterator(&mut brancher, &mut termination);

        assert!(matches!(iterator.next_solution(), IteratedSolution::Unknown));
        assert!(matches!(iterator.next_solution(), IteratedSolution::Unknown));
    }
}
