//! Reasoning shared by the one- and two-dimensional non-overlap propagators: along one axis, can
//! one object end before another starts, and what follows if it must.
use crate::engine::propagation::PropagationContext;
use crate::engine::propagation::ReadDomains;
use crate::engine::variables::IntegerVariable;
use crate::engine::EmptyDomain;

/// Whether the object starting at `first_start` with length `first_size` can still end before
/// `second_start`.
pub(super) fn can_precede<Var: IntegerVariable>(
    domains: &impl ReadDomains,
    first_start: &Var,
    first_size: i32,
    second_start: &Var,
) -> bool {
    domains.lower_bound(first_start) + first_size <= domains.upper_bound(second_start)
}

/// Enforce that the first object ends before the second starts.
pub(super) fn enforce_precedence<Var: IntegerVariable>(
    context: &mut PropagationContext<'_>,
    first_start: &Var,
    first_size: i32,
    second_start: &Var,
) -> Result<(), EmptyDomain> {
    let earliest_second_start = context.lower_bound(first_start) + first_size;
    context.set_lower_bound(second_start, earliest_second_start)?;

    let latest_first_start = context.upper_bound(second_start) - first_size;
    context.set_upper_bound(first_start, latest_first_start)
}
