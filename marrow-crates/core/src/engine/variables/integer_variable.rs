use std::fmt::Debug;

use enumset::EnumSet;

use super::TransformableVariable;
use crate::engine::domain_events::IntDomainEvent;
use crate::engine::watch_lists::Watchers;
use crate::engine::Assignments;
use crate::engine::EmptyDomain;

/// A trait specifying the required behaviour of an integer variable such as retrieving a
/// lower-bound ([`IntegerVariable::lower_bound`]).
pub trait IntegerVariable: Clone + Debug + TransformableVariable<Self::AffineView> {
    type AffineView: IntegerVariable;

    /// Get the lower bound of the variable.
    fn lower_bound(&self, assignments: &Assignments) -> i32;

    /// Get the upper bound of the variable.
    fn upper_bound(&self, assignments: &Assignments) -> i32;

    /// Determine whether the value is in the domain of this variable.
    fn contains(&self, assignments: &Assignments, value: i32) -> bool;

    /// Iterate over the values of the domain in increasing order.
    fn iterate_domain(&self, assignments: &Assignments) -> impl Iterator<Item = i32>;

    /// Tighten the lower bound of the variable to `value`.
    fn set_lower_bound(&self, assignments: &mut Assignments, value: i32) -> Result<(), EmptyDomain>;

    /// Tighten the upper bound of the variable to `value`.
    fn set_upper_bound(&self, assignments: &mut Assignments, value: i32) -> Result<(), EmptyDomain>;

    /// Remove `value` from the domain of the variable.
    fn remove(&self, assignments: &mut Assignments, value: i32) -> Result<(), EmptyDomain>;

    /// Register a watch for this variable on the given domain events.
    fn watch_all(&self, watchers: &mut Watchers<'_>, events: EnumSet<IntDomainEvent>);
}
