//! Strategies for choosing the next variable to branch on.
mod first_fail;
mod input_order;
mod smallest;

pub use first_fail::FirstFail;
pub use input_order::InputOrder;
pub use smallest::Smallest;

use crate::branching::SelectionContext;

/// A trait containing the interface for [`VariableSelector`]s, specifying the appropriate hooks
/// and methods for selecting variables.
pub trait VariableSelector<Var> {
    /// Determines which variable to select next if there are any left to branch on.
    /// Should only return [`None`] when all variables which have been passed to the
    /// [`VariableSelector`] have been assigned. Otherwise it should return the variable to branch
    /// on next.
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<Var>;
}
