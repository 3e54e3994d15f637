use crate::basic_types::SolutionReference;
use crate::branching::SelectionContext;
use crate::engine::predicates::predicate::Predicate;

/// A trait for definining a branching strategy.
///
/// The solver asks for a decision after every propagation fixpoint. Refuting a decision posts its
/// negation, so a [`Brancher`] never has to remember which alternatives were tried.
pub trait Brancher {
    /// Returns the next decision, or [`None`] if all variables under consideration are fixed.
    fn next_decision(&mut self, context: &mut SelectionContext) -> Option<Predicate>;

    /// Called when a conflict is encountered.
    fn on_conflict(&mut self) {}

    /// Called whenever the solver backtracks.
    fn on_backtrack(&mut self) {}

    /// Called when a solution is found.
    fn on_solution(&mut self, _solution: SolutionReference) {}
}
