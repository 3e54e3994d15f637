//! A [`Brancher`] which asks a list of [`Brancher`]s for a decision in turn.
//!
//! This is the way to combine a problem-specific strategy for some variables with a fallback for
//! all remaining variables, while still handing a single sized object to the solver.
use std::fmt::Debug;

use crate::basic_types::SolutionReference;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::engine::predicates::predicate::Predicate;

/// Queries the wrapped branchers in order and returns the first decision any of them makes.
///
/// Backtracking can unfix variables of an earlier brancher, so every call starts again from the
/// first brancher.
pub struct DynamicBrancher {
    branchers: Vec<Box<dyn Brancher>>,
}

impl Debug for DynamicBrancher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicBrancher")
            .field("num_branchers", &self.branchers.len())
            .finish()
    }
}

impl DynamicBrancher {
    pub fn new(branchers: Vec<Box<dyn Brancher>>) -> Self {
        DynamicBrancher { branchers }
    }

    pub fn add_brancher(&mut self, brancher: Box<dyn Brancher>) {
        self.branchers.push(brancher)
    }
}

impl Brancher for DynamicBrancher {
    fn next_decision(&mut self, context: &mut SelectionContext) -> Option<Predicate> {
        self.branchers
            .iter_mut()
            .find_map(|brancher| brancher.next_decision(context))
    }

    fn on_conflict(&mut self) {
        self.branchers
            .iter_mut()
            .for_each(|brancher| brancher.on_conflict());
    }

    fn on_backtrack(&mut self) {
        self.branchers
            .iter_mut()
            .for_each(|brancher| brancher.on_backtrack());
    }

    fn on_solution(&mut self, solution: SolutionReference) {
        self.branchers
            .iter_mut()
            .for_each(|brancher| brancher.on_solution(solution));
    }
}
