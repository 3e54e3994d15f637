//! Contains structures related to optimissation.
use std::fmt::Display;

use solution_callback::SolutionCallback;

use crate::branching::Brancher;
use crate::results::OptimisationResult;
use crate::termination::TerminationCondition;
use crate::Solver;

pub mod linear_sat_unsat;
pub mod solution_callback;

/// A search procedure which finds a solution and proves it optimal, given a [`Solver`] that
/// contains the constraints of the problem.
pub trait OptimisationProcedure<B: Brancher, Callback: SolutionCallback<B>> {
    fn optimise(
        &mut self,
        brancher: &mut B,
        termination: &mut impl TerminationCondition,
        solver: &mut Solver,
    ) -> OptimisationResult;
}

/// The direction of the optimisation, either maximising or minimising.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimisationDirection {
    Maximise,
    Minimise,
}

impl Display for OptimisationDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptimisationDirection::Maximise => write!(f, "maximise"),
            OptimisationDirection::Minimise => write!(f, "minimise"),
        }
    }
}
