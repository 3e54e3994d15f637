//! Strategies for choosing how to split the domain of the selected variable.
mod in_domain_min;

pub use in_domain_min::InDomainMin;

use crate::basic_types::SolutionReference;
use crate::branching::SelectionContext;
use crate::engine::predicates::predicate::Predicate;

/// A trait containing the interface for [`ValueSelector`]s, specifying the appropriate hooks and
/// methods for selecting the value of a variable.
pub trait ValueSelector<Var> {
    /// Determines which value in the domain of `decision_variable` to branch next on. The
    /// returned [`Predicate`] is the decision; its negation is posted when the decision is
    /// refuted.
    fn select_value(&mut self, context: &mut SelectionContext, decision_variable: Var)
        -> Predicate;

    /// Called when a solution is found.
    fn on_solution(&mut self, _solution: SolutionReference) {}
}
