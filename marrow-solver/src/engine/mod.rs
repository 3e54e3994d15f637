//! The boundary between models and the engine that solves them.
//!
//! A [`SolvingEngine`] receives a finished [`Model`] and reports a [`SolverOutcome`] holding the
//! raw [`Assignment`] of the best (or last) solution it found. [`MarrowEngine`] is the
//! implementation backed by `marrow-core`.
mod marrow_engine;
mod translation;

use std::ops::ControlFlow;
use std::time::Duration;

pub use marrow_engine::MarrowEngine;

use crate::model::Assignment;
use crate::model::Model;
use crate::EngineError;
use crate::SolverOutcome;
#[cfg(doc)]
use crate::SolveStatus;

/// The options of a single solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveOptions {
    /// The wall-clock budget of the solve; `None` searches until the search is complete.
    pub time_budget: Option<Duration>,
    /// The maximum number of search decisions; `None` imposes no limit.
    pub decision_budget: Option<u64>,
    /// Report every solution of a satisfaction model instead of the first one. Ignored for models
    /// with an objective.
    pub enumerate_all_solutions: bool,
}

impl SolveOptions {
    pub fn with_time_budget(mut self, time_budget: Duration) -> SolveOptions {
        self.time_budget = Some(time_budget);
        self
    }

    pub fn with_decision_budget(mut self, decision_budget: u64) -> SolveOptions {
        self.decision_budget = Some(decision_budget);
        self
    }

    pub fn enumerating_all_solutions(mut self) -> SolveOptions {
        self.enumerate_all_solutions = true;
        self
    }
}

/// Solves a [`Model`].
///
/// `on_solution` is called synchronously:
/// * for a satisfaction model, with the solution found, or with every solution when
///   [`SolveOptions::enumerate_all_solutions`] is set;
/// * for a model with an objective, with every improving solution.
///
/// Returning [`ControlFlow::Break`] stops the search; the outcome then has status
/// [`SolveStatus::Feasible`] unless the search was already complete.
pub trait SolvingEngine {
    fn solve<F>(
        &mut self,
        model: &Model,
        options: &SolveOptions,
        on_solution: F,
    ) -> Result<SolverOutcome<Assignment>, EngineError>
    where
        F: FnMut(&Assignment) -> ControlFlow<()>;
}
