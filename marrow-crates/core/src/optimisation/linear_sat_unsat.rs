use log::debug;

use super::solution_callback::SolutionCallback;
use super::OptimisationProcedure;
use crate::branching::Brancher;
use crate::constraints;
use crate::optimisation::OptimisationDirection;
use crate::results::OptimisationResult;
use crate::results::ProblemSolution;
use crate::results::SatisfactionResult;
use crate::results::Solution;
use crate::termination::TerminationCondition;
use crate::variables::IntegerVariable;
use crate::Solver;

/// Implements the linear SAT-UNSAT (LSU) optimisation procedure.
///
/// After every solution the objective is constrained to improve on it, until the solver proves
/// that no better solution exists.
#[derive(Debug, Clone, Copy)]
pub struct LinearSatUnsat<Var, Callback> {
    direction: OptimisationDirection,
    objective: Var,
    solution_callback: Callback,
}

impl<Var, Callback> LinearSatUnsat<Var, Callback> {
    /// Create a new instance of [`LinearSatUnsat`].
    pub fn new(
        direction: OptimisationDirection,
        objective: Var,
        solution_callback: Callback,
    ) -> Self {
        Self {
            direction,
            objective,
            solution_callback,
        }
    }
}

impl<Var, Callback, B> OptimisationProcedure<B, Callback> for LinearSatUnsat<Var, Callback>
where
    Var: IntegerVariable + 'static,
    B: Brancher,
    Callback: SolutionCallback<B>,
{
    fn optimise(
        &mut self,
        brancher: &mut B,
        termination: &mut impl TerminationCondition,
        solver: &mut Solver,
    ) -> OptimisationResult {
        let objective = match self.direction {
            OptimisationDirection::Maximise => self.objective.scaled(-1),
            OptimisationDirection::Minimise => self.objective.scaled(1),
        };

        // First we will solve the satisfaction problem without constraining the objective.
        let mut best_solution: Solution = match solver.satisfy(brancher, termination) {
            SatisfactionResult::Satisfiable(solution) => solution,
            SatisfactionResult::Unsatisfiable => return OptimisationResult::Unsatisfiable,
            SatisfactionResult::Unknown => return OptimisationResult::Unknown,
        };

        loop {
            self.solution_callback.on_solution_callback(
                solver,
                best_solution.as_reference(),
                brancher,
            );

            let best_objective_value = best_solution.get_integer_value(objective.clone());
            debug!("Found solution with objective {best_objective_value}");

            let Some(improving_bound) = best_objective_value.checked_sub(1) else {
                return OptimisationResult::Optimal(best_solution);
            };
            if solver
                .add_constraint(constraints::less_than_or_equals(
                    [objective.clone()],
                    improving_bound,
                ))
                .post()
                .is_err()
            {
                return OptimisationResult::Optimal(best_solution);
            }

            match solver.satisfy(brancher, termination) {
                SatisfactionResult::Satisfiable(solution) => best_solution = solution,
                SatisfactionResult::Unsatisfiable => {
                    return OptimisationResult::Optimal(best_solution)
                }
                SatisfactionResult::Unknown => {
                    return OptimisationResult::Satisfiable(best_solution)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::SolutionReference;
    use crate::termination::DecisionBudget;
    use crate::termination::Indefinite;
    use crate::variables::DomainId;
    use crate::variables::TransformableVariable;
    use crate::DefaultBrancher;

    fn objective_of_weighted_pair(solver: &mut Solver) -> (DomainId, DomainId, DomainId) {
        let x = solver.new_bounded_integer(0, 4);
        let y = solver.new_bounded_integer(0, 4);
        let objective = solver.new_bounded_integer(0, 20);

        // objective = 2x + 3y, subject to x + y >= 3
        solver
            .add_constraint(constraints::equals(
                [x.scaled(2), y.scaled(3), objective.scaled(-1)],
                0,
            ))
            .post()
            .expect("consistent at the root");
        solver
            .add_constraint(constraints::greater_than_or_equals([x, y], 3))
            .post()
            .expect("consistent at the root");

        (x, y, objective)
    }

    #[test]
    fn minimisation_finds_the_optimum() {
        let mut solver = Solver::default();
        let (x, y, objective) = objective_of_weighted_pair(&mut solver);
        let mut brancher: DefaultBrancher = solver.default_brancher();

        let mut objective_values = vec![];
        let result = solver.optimise(
            &mut brancher,
            &mut Indefinite,
            LinearSatUnsat::new(
                OptimisationDirection::Minimise,
                objective,
                |_: &Solver, solution: SolutionReference<'_>, _: &DefaultBrancher| {
                    objective_values.push(solution.get_integer_value(objective));
                },
            ),
        );

        let OptimisationResult::Optimal(solution) = result else {
            panic!("the optimum is reachable");
        };
        assert_eq!(6, solution.get_integer_value(objective));
        assert_eq!(3, solution.get_integer_value(x));
        assert_eq!(0, solution.get_integer_value(y));
        assert!(objective_values.windows(2).all(|pair| pair[1] < pair[0]));
        assert_eq!(Some(&6), objective_values.last());
    }

    #[test]
    fn maximisation_finds_the_optimum() {
        let mut solver = Solver::default();
        let (_, y, objective) = objective_of_weighted_pair(&mut solver);
        let mut brancher = solver.default_brancher();

        let result = solver.optimise(
            &mut brancher,
            &mut Indefinite,
            LinearSatUnsat::new(
                OptimisationDirection::Maximise,
                objective,
                None::<fn(&Solver, SolutionReference<'_>, &DefaultBrancher)>,
            ),
        );

        let OptimisationResult::Optimal(solution) = result else {
            panic!("the optimum is reachable");
        };
        assert_eq!(20, solution.get_integer_value(objective));
        assert_eq!(4, solution.get_integer_value(y));
    }

    #[test]
    fn infeasible_problem_is_reported() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 2);
        let y = solver.new_bounded_integer(0, 2);
        let _ = solver
            .add_constraint(constraints::greater_than_or_equals([x, y], 5))
            .post();
        let mut brancher = solver.default_brancher();

        let result = solver.optimise(
            &mut brancher,
            &mut Indefinite,
            LinearSatUnsat::new(
                OptimisationDirection::Minimise,
                x,
                None::<fn(&Solver, SolutionReference<'_>, &DefaultBrancher)>,
            ),
        );

        assert!(matches!(result, OptimisationResult::Unsatisfiable));
    }

    #[test]
    fn budget_without_solution_is_unknown() {
        let mut solver = Solver::default();
        let (_, _, objective) = objective_of_weighted_pair(&mut solver);
        let mut brancher = solver.default_brancher();

        let result = solver.optimise(
            &mut brancher,
            &mut DecisionBudget::new(0),
            LinearSatUnsat::new(
                OptimisationDirection::Minimise,
                objective,
                None::<fn(&Solver, SolutionReference<'_>, &DefaultBrancher)>,
            ),
        );

        assert!(matches!(result, OptimisationResult::Unknown));
    }
}
