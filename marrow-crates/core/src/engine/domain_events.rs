use enumset::enum_set;
use enumset::EnumSet;
use enumset::EnumSetType;

/// The kinds of change a propagator can subscribe to on an integer domain.
#[derive(Debug, EnumSetType)]
pub enum IntDomainEvent {
    /// The domain became a single value.
    Assign,
    LowerBound,
    UpperBound,
    /// A value strictly between the bounds was removed.
    Removal,
}

/// Commonly used sets of [`IntDomainEvent`]s.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DomainEvents;

impl DomainEvents {
    pub(crate) const ANY_INT: EnumSet<IntDomainEvent> = enum_set!(
        IntDomainEvent::Assign
            | IntDomainEvent::LowerBound
            | IntDomainEvent::UpperBound
            | IntDomainEvent::Removal
    );
    pub(crate) const BOUNDS: EnumSet<IntDomainEvent> = enum_set!(
        IntDomainEvent::Assign | IntDomainEvent::LowerBound | IntDomainEvent::UpperBound
    );
    pub(crate) const LOWER_BOUND: EnumSet<IntDomainEvent> =
        enum_set!(IntDomainEvent::Assign | IntDomainEvent::LowerBound);
}

/// Exchange lower-bound and upper-bound events, as seen through a view with a negative scale.
pub(crate) fn mirror_bound_events(events: EnumSet<IntDomainEvent>) -> EnumSet<IntDomainEvent> {
    let mut mirrored = events - (IntDomainEvent::LowerBound | IntDomainEvent::UpperBound);
    if events.contains(IntDomainEvent::LowerBound) {
        let _ = mirrored.insert(IntDomainEvent::UpperBound);
    }
    if events.contains(IntDomainEvent::UpperBound) {
        let _ = mirrored.insert(IntDomainEvent::LowerBound);
    }
    mirrored
}
