use std::ops::ControlFlow;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use log::info;
use log::warn;
use marrow_core::branching::branchers::dynamic_brancher::DynamicBrancher;
use marrow_core::branching::branchers::independent_variable_value_brancher::IndependentVariableValueBrancher;
use marrow_core::branching::value_selection::InDomainMin;
use marrow_core::branching::variable_selection::FirstFail;
use marrow_core::branching::variable_selection::InputOrder;
use marrow_core::branching::variable_selection::Smallest;
use marrow_core::branching::Brancher;
use marrow_core::optimisation::linear_sat_unsat::LinearSatUnsat;
use marrow_core::optimisation::OptimisationDirection;
use marrow_core::results::solution_iterator::IteratedSolution;
use marrow_core::results::OptimisationResult;
use marrow_core::results::ProblemSolution;
use marrow_core::results::SatisfactionResult;
use marrow_core::results::SolutionReference;
use marrow_core::termination::Combinator;
use marrow_core::termination::DecisionBudget;
use marrow_core::termination::StopFlag;
use marrow_core::termination::TerminationCondition;
use marrow_core::termination::TimeBudget;
use marrow_core::variables::DomainId;
use marrow_core::Solver;

use super::translation::Translation;
use super::SolveOptions;
use super::SolvingEngine;
use crate::model::Assignment;
use crate::model::Model;
use crate::model::VariableSelection;
use crate::EngineError;
use crate::SolveStatus;
use crate::SolverOutcome;

/// The [`SolvingEngine`] backed by the `marrow-core` propagation and search engine.
///
/// Every call to [`SolvingEngine::solve`] starts from a fresh solver. An optional stop flag, shared
/// with for instance a signal handler, ends the search early when it is raised.
#[derive(Clone, Debug, Default)]
pub struct MarrowEngine {
    stop_flag: Option<Arc<AtomicBool>>,
}

impl MarrowEngine {
    pub fn new() -> MarrowEngine {
        MarrowEngine::default()
    }

    pub fn with_stop_flag(stop_flag: Arc<AtomicBool>) -> MarrowEngine {
        MarrowEngine {
            stop_flag: Some(stop_flag),
        }
    }
}

impl SolvingEngine for MarrowEngine {
    fn solve<F>(
        &mut self,
        model: &Model,
        options: &SolveOptions,
        mut on_solution: F,
    ) -> Result<SolverOutcome<Assignment>, EngineError>
    where
        F: FnMut(&Assignment) -> ControlFlow<()>,
    {
        let started_at = Instant::now();
        let mut translation = Translation::new(model)?;

        if translation.solver.is_infeasible() {
            info!("the model is infeasible at the root");
            return Ok(SolverOutcome::without_solution(
                SolveStatus::Infeasible,
                started_at.elapsed(),
            ));
        }

        let mut brancher = brancher(model, &translation);
        let callback_stop = StopFlag::default();
        let mut termination = Combinator::new(
            Combinator::new(
                options.time_budget.map(TimeBudget::starting_now),
                options.decision_budget.map(DecisionBudget::new),
            ),
            Combinator::new(self.stop_flag.clone().map(StopFlag::new), callback_stop.clone()),
        );

        let mut outcome = match translation.objective() {
            Some(objective) => {
                if options.enumerate_all_solutions {
                    warn!("ignoring the request to enumerate all solutions of an optimisation model");
                }
                optimise(
                    &mut translation,
                    objective,
                    &mut brancher,
                    &mut termination,
                    callback_stop,
                    &mut on_solution,
                )
            }
            None if options.enumerate_all_solutions => enumerate(
                &mut translation,
                &mut brancher,
                &mut termination,
                &mut on_solution,
            ),
            None => satisfy(
                &mut translation,
                &mut brancher,
                &mut termination,
                &mut on_solution,
            ),
        };
        outcome.wall_time = started_at.elapsed();

        match outcome.objective_value {
            Some(objective_value) => translation
                .solver
                .log_statistics_with_objective(objective_value),
            None => translation.solver.log_statistics(),
        }
        info!(
            "{} after {:?} with {} solution(s)",
            outcome.status, outcome.wall_time, outcome.num_solutions
        );

        Ok(outcome)
    }
}

/// The suggested decision strategy of the model first, then every remaining variable by smallest
/// domain.
fn brancher(model: &Model, translation: &Translation) -> DynamicBrancher {
    let mut branchers: Vec<Box<dyn Brancher>> = vec![];

    if let Some(strategy) = model.decision_strategy() {
        let variables = strategy
            .variables
            .iter()
            .map(|&var| translation.domains.get(var))
            .collect::<Vec<DomainId>>();

        branchers.push(match strategy.selection {
            VariableSelection::InputOrder => Box::new(IndependentVariableValueBrancher::new(
                InputOrder::new(&variables),
                InDomainMin,
            )),
            VariableSelection::FirstFail => Box::new(IndependentVariableValueBrancher::new(
                FirstFail::new(&variables),
                InDomainMin,
            )),
            VariableSelection::SmallestLowerBound => Box::new(
                IndependentVariableValueBrancher::new(Smallest::new(&variables), InDomainMin),
            ),
        });
    }

    branchers.push(Box::new(translation.solver.default_brancher()));
    DynamicBrancher::new(branchers)
}

fn satisfy(
    translation: &mut Translation,
    brancher: &mut DynamicBrancher,
    termination: &mut impl TerminationCondition,
    on_solution: &mut impl FnMut(&Assignment) -> ControlFlow<()>,
) -> SolverOutcome<Assignment> {
    match translation.solver.satisfy(brancher, termination) {
        SatisfactionResult::Satisfiable(solution) => {
            let assignment = translation.domains.assignment(&solution);
            let _ = on_solution(&assignment);

            SolverOutcome {
                solution: Some(assignment),
                num_solutions: 1,
                ..SolverOutcome::without_solution(SolveStatus::Optimal, Duration::ZERO)
            }
        }
        SatisfactionResult::Unsatisfiable => {
            SolverOutcome::without_solution(SolveStatus::Infeasible, Duration::ZERO)
        }
        SatisfactionResult::Unknown => {
            SolverOutcome::without_solution(SolveStatus::Unknown, Duration::ZERO)
        }
    }
}

/// Reports every solution until the search space is exhausted, the termination condition
/// triggers, or `on_solution` breaks. The last solution is kept in the outcome.
fn enumerate(
    translation: &mut Translation,
    brancher: &mut DynamicBrancher,
    termination: &mut impl TerminationCondition,
    on_solution: &mut impl FnMut(&Assignment) -> ControlFlow<()>,
) -> SolverOutcome<Assignment> {
    let Translation {
        solver, domains, ..
    } = translation;

    let mut last_solution = None;
    let mut num_solutions = 0;
    let mut solution_iterator = solver.get_solution_iterator(brancher, termination);

    let exhausted = loop {
        match solution_iterator.next_solution() {
            IteratedSolution::Solution(solution) => {
                let assignment = domains.assignment(&solution);
                num_solutions += 1;

                let flow = on_solution(&assignment);
                last_solution = Some(assignment);
                if flow.is_break() {
                    break false;
                }
            }
            IteratedSolution::Finished | IteratedSolution::Unsatisfiable => break true,
            IteratedSolution::Unknown => break false,
        }
    };

    let status = match (exhausted, num_solutions) {
        (true, 0) => SolveStatus::Infeasible,
        (true, _) => SolveStatus::Optimal,
        (false, 0) => SolveStatus::Unknown,
        (false, _) => SolveStatus::Feasible,
    };
    SolverOutcome {
        solution: last_solution,
        num_solutions,
        ..SolverOutcome::without_solution(status, Duration::ZERO)
    }
}

/// Minimises `objective` by linear SAT-UNSAT search, reporting every improving solution.
fn optimise(
    translation: &mut Translation,
    objective: DomainId,
    brancher: &mut DynamicBrancher,
    termination: &mut impl TerminationCondition,
    callback_stop: StopFlag,
    on_solution: &mut impl FnMut(&Assignment) -> ControlFlow<()>,
) -> SolverOutcome<Assignment> {
    let Translation {
        solver, domains, ..
    } = translation;

    let mut num_solutions = 0;
    let callback = |_: &Solver, solution: SolutionReference<'_>, _: &DynamicBrancher| {
        num_solutions += 1;
        if on_solution(&domains.assignment(&solution)).is_break() {
            callback_stop.raise();
        }
    };

    let result = solver.optimise(
        brancher,
        termination,
        LinearSatUnsat::new(OptimisationDirection::Minimise, objective, callback),
    );

    let (status, solution) = match result {
        OptimisationResult::Optimal(solution) => (SolveStatus::Optimal, Some(solution)),
        OptimisationResult::Satisfiable(solution) => (SolveStatus::Feasible, Some(solution)),
        OptimisationResult::Unsatisfiable => (SolveStatus::Infeasible, None),
        OptimisationResult::Unknown => (SolveStatus::Unknown, None),
    };

    let objective_value = solution
        .as_ref()
        .map(|solution| i64::from(solution.get_integer_value(objective)));
    let best_objective_bound = match status {
        SolveStatus::Optimal => objective_value,
        SolveStatus::Infeasible => None,
        SolveStatus::Feasible | SolveStatus::Unknown => {
            let root_bound = i64::from(solver.lower_bound(&objective));
            Some(objective_value.map_or(root_bound, |value| value.min(root_bound)))
        }
    };

    SolverOutcome {
        objective_value,
        best_objective_bound,
        solution: solution.map(|solution| domains.assignment(&solution)),
        num_solutions,
        ..SolverOutcome::without_solution(status, Duration::ZERO)
    }
}
