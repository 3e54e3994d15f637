use super::Domains;
use super::InitialisationContext;
use super::PropagationContext;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatusCP;

/// All propagators implement the [`Propagator`] trait.
///
/// The solver calls [`Propagator::initialise_at_root`] once, after which the propagator is
/// enqueued every time one of the domains it registered for changes. Propagators recompute their
/// inferences from the current domains, so they carry no trailed state of their own.
pub(crate) trait Propagator {
    /// Return the name of the propagator, used in logging and error messages.
    fn name(&self) -> &'static str;

    /// Propagators with a higher priority are run first.
    fn priority(&self) -> Priority {
        Priority::VeryLow
    }

    /// Register the domain events this propagator is interested in. Returns an error if the
    /// constraint is already violated at the root.
    fn initialise_at_root(
        &mut self,
        context: &mut InitialisationContext<'_>,
    ) -> Result<(), Inconsistency>;

    /// Remove all values which are inconsistent with the constraint, given the current domains.
    fn propagate_from_scratch(&self, context: PropagationContext<'_>) -> PropagationStatusCP;

    fn propagate(&mut self, context: PropagationContext<'_>) -> PropagationStatusCP {
        self.propagate_from_scratch(context)
    }

    /// Check whether the constraint can no longer be satisfied without changing any domain. Used
    /// by the half-reification wrapper.
    fn detect_inconsistency(&self, _domains: Domains<'_>) -> Option<Inconsistency> {
        None
    }
}

/// The order in which enqueued propagators are run.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Priority {
    High = 0,
    Medium = 1,
    Low = 2,
    #[default]
    VeryLow = 3,
}
