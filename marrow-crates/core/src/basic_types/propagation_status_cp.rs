use crate::engine::EmptyDomain;

/// The result of invoking a propagator.
pub(crate) type PropagationStatusCP = Result<(), Inconsistency>;

/// The reasons a propagator can give up on the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Inconsistency {
    /// A domain was emptied while applying an inference.
    EmptyDomain,
    /// The propagator detected that its constraint cannot be satisfied any more.
    Conflict,
}

impl From<EmptyDomain> for Inconsistency {
    fn from(_: EmptyDomain) -> Self {
        Inconsistency::EmptyDomain
    }
}
