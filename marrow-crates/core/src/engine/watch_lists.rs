use enumset::EnumSet;

use crate::containers::KeyedVec;
use crate::engine::domain_events::IntDomainEvent;
use crate::engine::propagation::PropagatorId;
use crate::engine::variables::DomainId;

/// For every domain, the propagators watching it and the events they care about.
#[derive(Debug, Default)]
pub(crate) struct WatchLists {
    watchers: KeyedVec<DomainId, Vec<(PropagatorId, EnumSet<IntDomainEvent>)>>,
}

impl WatchLists {
    pub(crate) fn grow(&mut self, domain_id: DomainId) {
        self.watchers.accomodate(domain_id, Vec::new());
    }

    pub(crate) fn watch(
        &mut self,
        domain_id: DomainId,
        propagator_id: PropagatorId,
        events: EnumSet<IntDomainEvent>,
    ) {
        self.grow(domain_id);
        let watch_list = &mut self.watchers[domain_id];
        match watch_list
            .iter_mut()
            .find(|(watcher, _)| *watcher == propagator_id)
        {
            Some((_, watched_events)) => *watched_events |= events,
            None => watch_list.push((propagator_id, events)),
        }
    }

    /// The propagators which subscribed to at least one of `events` on `domain_id`.
    pub(crate) fn get_affected_propagators(
        &self,
        domain_id: DomainId,
        events: EnumSet<IntDomainEvent>,
    ) -> impl Iterator<Item = PropagatorId> + '_ {
        self.watchers
            .get(domain_id)
            .into_iter()
            .flatten()
            .filter(move |(_, watched_events)| !watched_events.is_disjoint(events))
            .map(|(propagator_id, _)| *propagator_id)
    }
}

/// Handed to [`IntegerVariable::watch_all`] so views can translate the events they subscribe to.
///
/// [`IntegerVariable::watch_all`]: crate::variables::IntegerVariable::watch_all
#[derive(Debug)]
pub struct Watchers<'a> {
    propagator_id: PropagatorId,
    watch_lists: &'a mut WatchLists,
}

impl<'a> Watchers<'a> {
    pub(crate) fn new(propagator_id: PropagatorId, watch_lists: &'a mut WatchLists) -> Self {
        Watchers {
            propagator_id,
            watch_lists,
        }
    }

    pub(crate) fn watch_all(&mut self, domain_id: DomainId, events: EnumSet<IntDomainEvent>) {
        self.watch_lists
            .watch(domain_id, self.propagator_id, events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_matching_events_wake_a_watcher() {
        let mut watch_lists = WatchLists::default();
        let x = DomainId::new(0);
        watch_lists.watch(x, PropagatorId(0), IntDomainEvent::LowerBound.into());
        watch_lists.watch(x, PropagatorId(1), IntDomainEvent::Removal.into());
        watch_lists.watch(x, PropagatorId(1), IntDomainEvent::Assign.into());

        let woken = watch_lists
            .get_affected_propagators(x, IntDomainEvent::UpperBound | IntDomainEvent::Assign)
            .collect::<Vec<_>>();

        assert_eq!(vec![PropagatorId(1)], woken);
    }
}
