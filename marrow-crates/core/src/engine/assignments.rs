use enumset::EnumSet;

use crate::asserts::marrow_assert_simple;
use crate::basic_types::Trail;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::engine::domain_events::IntDomainEvent;
use crate::engine::predicates::predicate::Predicate;
use crate::engine::variables::DomainId;

/// Returned when a domain operation would leave a domain without values. The domain is left
/// untouched in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyDomain;

/// The current domains of all integer variables, together with the trail that allows them to be
/// restored when backtracking.
#[derive(Clone, Debug, Default)]
pub struct Assignments {
    domains: KeyedVec<DomainId, IntegerDomain>,
    trail: Trail<DomainChange>,
    /// Changes made since the watchers were last notified.
    events: Vec<(DomainId, EnumSet<IntDomainEvent>)>,
}

#[derive(Clone, Debug)]
struct IntegerDomain {
    initial_lower_bound: i32,
    lower_bound: i32,
    upper_bound: i32,
    /// Values strictly between the bounds that have been removed, offset by the initial lower
    /// bound. The current bounds are never marked as removed.
    holes: Vec<bool>,
}

impl IntegerDomain {
    fn new(lower_bound: i32, upper_bound: i32) -> IntegerDomain {
        let width = (upper_bound as i64 - lower_bound as i64 + 1) as usize;
        IntegerDomain {
            initial_lower_bound: lower_bound,
            lower_bound,
            upper_bound,
            holes: vec![false; width],
        }
    }

    fn offset_of(&self, value: i32) -> usize {
        (value as i64 - self.initial_lower_bound as i64) as usize
    }

    fn is_hole(&self, value: i32) -> bool {
        self.holes[self.offset_of(value)]
    }

    fn contains(&self, value: i32) -> bool {
        self.lower_bound <= value && value <= self.upper_bound && !self.is_hole(value)
    }
}

#[derive(Clone, Copy, Debug)]
enum DomainChange {
    LowerBound { domain_id: DomainId, old_bound: i32 },
    UpperBound { domain_id: DomainId, old_bound: i32 },
    Removal { domain_id: DomainId, value: i32 },
}

impl Assignments {
    pub(crate) fn grow(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        marrow_assert_simple!(lower_bound <= upper_bound, "cannot create an empty domain");
        marrow_assert_simple!(
            self.trail.get_decision_level() == 0,
            "variables are only created at the root"
        );
        self.domains
            .push(IntegerDomain::new(lower_bound, upper_bound))
    }

    pub fn num_domains(&self) -> u32 {
        self.domains.len() as u32
    }

    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> {
        self.domains.keys()
    }

    pub fn get_lower_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].lower_bound
    }

    pub fn get_upper_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].upper_bound
    }

    pub fn get_initial_lower_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].initial_lower_bound
    }

    pub fn is_value_in_domain(&self, domain_id: DomainId, value: i32) -> bool {
        self.domains[domain_id].contains(value)
    }

    pub fn is_domain_assigned(&self, domain_id: DomainId) -> bool {
        self.get_lower_bound(domain_id) == self.get_upper_bound(domain_id)
    }

    pub fn get_assigned_value(&self, domain_id: DomainId) -> Option<i32> {
        self.is_domain_assigned(domain_id)
            .then(|| self.get_lower_bound(domain_id))
    }

    pub fn get_domain_iterator(&self, domain_id: DomainId) -> impl Iterator<Item = i32> + '_ {
        let domain = &self.domains[domain_id];
        (domain.lower_bound..=domain.upper_bound).filter(move |&value| !domain.is_hole(value))
    }

    pub fn get_domain_size(&self, domain_id: DomainId) -> u32 {
        self.get_domain_iterator(domain_id).count() as u32
    }

    pub(crate) fn get_decision_level(&self) -> usize {
        self.trail.get_decision_level()
    }

    pub(crate) fn increase_decision_level(&mut self) {
        self.trail.increase_decision_level()
    }

    /// Undo every change made after `new_decision_level`.
    pub(crate) fn synchronise(&mut self, new_decision_level: usize) {
        let Assignments { domains, trail, .. } = self;
        for change in trail.synchronise(new_decision_level) {
            match change {
                DomainChange::LowerBound {
                    domain_id,
                    old_bound,
                } => domains[domain_id].lower_bound = old_bound,
                DomainChange::UpperBound {
                    domain_id,
                    old_bound,
                } => domains[domain_id].upper_bound = old_bound,
                DomainChange::Removal { domain_id, value } => {
                    let offset = domains[domain_id].offset_of(value);
                    domains[domain_id].holes[offset] = false;
                }
            }
        }
        self.events.clear();
    }

    pub(crate) fn take_events(&mut self) -> Vec<(DomainId, EnumSet<IntDomainEvent>)> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
    }

    pub(crate) fn tighten_lower_bound(
        &mut self,
        domain_id: DomainId,
        new_lower_bound: i32,
    ) -> Result<(), EmptyDomain> {
        let domain = &mut self.domains[domain_id];
        if new_lower_bound <= domain.lower_bound {
            return Ok(());
        }
        if new_lower_bound > domain.upper_bound {
            return Err(EmptyDomain);
        }

        let old_bound = domain.lower_bound;
        let mut lower_bound = new_lower_bound;
        // The upper bound is never a hole, so this stops at the latest there.
        while domain.is_hole(lower_bound) {
            lower_bound += 1;
        }
        domain.lower_bound = lower_bound;

        let mut events: EnumSet<IntDomainEvent> = IntDomainEvent::LowerBound.into();
        if domain.lower_bound == domain.upper_bound {
            events |= IntDomainEvent::Assign;
        }

        self.trail.push(DomainChange::LowerBound {
            domain_id,
            old_bound,
        });
        self.events.push((domain_id, events));
        Ok(())
    }

    pub(crate) fn tighten_upper_bound(
        &mut self,
        domain_id: DomainId,
        new_upper_bound: i32,
    ) -> Result<(), EmptyDomain> {
        let domain = &mut self.domains[domain_id];
        if new_upper_bound >= domain.upper_bound {
            return Ok(());
        }
        if new_upper_bound < domain.lower_bound {
            return Err(EmptyDomain);
        }

        let old_bound = domain.upper_bound;
        let mut upper_bound = new_upper_bound;
        while domain.is_hole(upper_bound) {
            upper_bound -= 1;
        }
        domain.upper_bound = upper_bound;

        let mut events: EnumSet<IntDomainEvent> = IntDomainEvent::UpperBound.into();
        if domain.lower_bound == domain.upper_bound {
            events |= IntDomainEvent::Assign;
        }

        self.trail.push(DomainChange::UpperBound {
            domain_id,
            old_bound,
        });
        self.events.push((domain_id, events));
        Ok(())
    }

    pub(crate) fn make_assignment(
        &mut self,
        domain_id: DomainId,
        value: i32,
    ) -> Result<(), EmptyDomain> {
        if !self.is_value_in_domain(domain_id, value) {
            return Err(EmptyDomain);
        }
        self.tighten_lower_bound(domain_id, value)?;
        self.tighten_upper_bound(domain_id, value)
    }

    pub(crate) fn remove_value_from_domain(
        &mut self,
        domain_id: DomainId,
        value: i32,
    ) -> Result<(), EmptyDomain> {
        let domain = &self.domains[domain_id];
        if !domain.contains(value) {
            return Ok(());
        }
        if domain.lower_bound == domain.upper_bound {
            return Err(EmptyDomain);
        }
        if value == domain.lower_bound {
            return self.tighten_lower_bound(domain_id, value + 1);
        }
        if value == domain.upper_bound {
            return self.tighten_upper_bound(domain_id, value - 1);
        }

        let domain = &mut self.domains[domain_id];
        let offset = domain.offset_of(value);
        domain.holes[offset] = true;

        self.trail.push(DomainChange::Removal { domain_id, value });
        self.events.push((domain_id, IntDomainEvent::Removal.into()));
        Ok(())
    }

    /// Apply the domain reduction described by `predicate`.
    pub(crate) fn post_predicate(&mut self, predicate: Predicate) -> Result<(), EmptyDomain> {
        match predicate {
            Predicate::LowerBound {
                domain_id,
                lower_bound,
            } => self.tighten_lower_bound(domain_id, lower_bound),
            Predicate::UpperBound {
                domain_id,
                upper_bound,
            } => self.tighten_upper_bound(domain_id, upper_bound),
            Predicate::Equal {
                domain_id,
                equality_constant,
            } => self.make_assignment(domain_id, equality_constant),
            Predicate::NotEqual {
                domain_id,
                not_equal_constant,
            } => self.remove_value_from_domain(domain_id, not_equal_constant),
        }
    }

    /// Whether the predicate holds for every value left in its domain.
    pub fn is_predicate_satisfied(&self, predicate: Predicate) -> bool {
        match predicate {
            Predicate::LowerBound {
                domain_id,
                lower_bound,
            } => self.get_lower_bound(domain_id) >= lower_bound,
            Predicate::UpperBound {
                domain_id,
                upper_bound,
            } => self.get_upper_bound(domain_id) <= upper_bound,
            Predicate::Equal {
                domain_id,
                equality_constant,
            } => self.get_assigned_value(domain_id) == Some(equality_constant),
            Predicate::NotEqual {
                domain_id,
                not_equal_constant,
            } => !self.is_value_in_domain(domain_id, not_equal_constant),
        }
    }

    pub(crate) fn bounds_are_values_of_their_domain(&self) -> bool {
        self.domains.keys().all(|domain_id| {
            let domain = &self.domains[domain_id];
            !domain.is_hole(domain.lower_bound) && !domain.is_hole(domain.upper_bound)
        })
    }
}

impl StorageKey for DomainId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        DomainId { id: index as u32 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asserts::marrow_assert_moderate;

    #[test]
    fn removing_a_bound_moves_past_holes() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(1, 5);

        assignments.remove_value_from_domain(x, 2).unwrap();
        assignments.remove_value_from_domain(x, 1).unwrap();

        assert_eq!(3, assignments.get_lower_bound(x));
        assert_eq!(vec![3, 4, 5], assignments.get_domain_iterator(x).collect::<Vec<_>>());
        assert!(assignments.bounds_are_values_of_their_domain());
    }

    #[test]
    fn emptying_a_domain_leaves_it_untouched() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(1, 5);

        assert_eq!(Err(EmptyDomain), assignments.tighten_lower_bound(x, 6));
        assignments.make_assignment(x, 3).unwrap();
        assert_eq!(Err(EmptyDomain), assignments.remove_value_from_domain(x, 3));

        assert_eq!(Some(3), assignments.get_assigned_value(x));
    }

    #[test]
    fn synchronise_restores_the_earlier_domain() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 9);
        assignments.tighten_upper_bound(x, 8).unwrap();

        assignments.increase_decision_level();
        assignments.remove_value_from_domain(x, 4).unwrap();
        assignments.tighten_lower_bound(x, 3).unwrap();
        assignments.synchronise(0);

        assert_eq!(0, assignments.get_lower_bound(x));
        assert_eq!(8, assignments.get_upper_bound(x));
        assert!(assignments.is_value_in_domain(x, 4));
        assert_eq!(9, assignments.get_domain_size(x));
    }

    #[test]
    fn changes_are_reported_as_events() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 2);

        assignments.remove_value_from_domain(x, 1).unwrap();
        assignments.tighten_upper_bound(x, 1).unwrap();

        let events = assignments.take_events();
        assert_eq!(
            vec![
                (x, EnumSet::only(IntDomainEvent::Removal)),
                (x, IntDomainEvent::UpperBound | IntDomainEvent::Assign),
            ],
            events
        );
        assert_eq!(Some(0), assignments.get_assigned_value(x));
    }

    #[test]
    fn predicates_are_posted_and_evaluated() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 10);

        let predicate = Predicate::UpperBound {
            domain_id: x,
            upper_bound: 4,
        };
        assert!(!assignments.is_predicate_satisfied(predicate));
        assignments.post_predicate(predicate).unwrap();
        assert!(assignments.is_predicate_satisfied(predicate));
        assert!(assignments.is_predicate_satisfied(!Predicate::LowerBound {
            domain_id: x,
            lower_bound: 5,
        }));
    }

    #[test]
    fn moderate_checks_hold_after_mixed_operations() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(-3, 3);
        assignments.remove_value_from_domain(x, 0).unwrap();
        assignments.tighten_lower_bound(x, -1).unwrap();
        assignments.tighten_upper_bound(x, 0).unwrap();

        marrow_assert_moderate!(assignments.bounds_are_values_of_their_domain());
        assert_eq!(Some(-1), assignments.get_assigned_value(x));
    }
}
