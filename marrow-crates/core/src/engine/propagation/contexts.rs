use enumset::EnumSet;

use super::PropagatorId;
use crate::engine::domain_events::IntDomainEvent;
use crate::engine::variables::IntegerVariable;
use crate::engine::variables::Literal;
use crate::engine::watch_lists::WatchLists;
use crate::engine::watch_lists::Watchers;
use crate::engine::Assignments;
use crate::engine::EmptyDomain;

/// Read access to the current domains, shared by all contexts handed to propagators.
pub(crate) trait ReadDomains {
    fn assignments(&self) -> &Assignments;

    fn lower_bound<Var: IntegerVariable>(&self, var: &Var) -> i32 {
        var.lower_bound(self.assignments())
    }

    fn upper_bound<Var: IntegerVariable>(&self, var: &Var) -> i32 {
        var.upper_bound(self.assignments())
    }

    fn is_fixed<Var: IntegerVariable>(&self, var: &Var) -> bool {
        self.lower_bound(var) == self.upper_bound(var)
    }

    fn iterate_domain<Var: IntegerVariable>(&self, var: &Var) -> impl Iterator<Item = i32> {
        var.iterate_domain(self.assignments()).collect::<Vec<_>>().into_iter()
    }

    fn is_literal_true(&self, literal: &Literal) -> bool {
        literal.is_true(self.assignments())
    }

    fn is_literal_false(&self, literal: &Literal) -> bool {
        literal.is_false(self.assignments())
    }
}

/// A read-only view on the domains.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Domains<'a> {
    assignments: &'a Assignments,
}

impl<'a> Domains<'a> {
    pub(crate) fn new(assignments: &'a Assignments) -> Self {
        Domains { assignments }
    }
}

impl ReadDomains for Domains<'_> {
    fn assignments(&self) -> &Assignments {
        self.assignments
    }
}

/// The context a propagator receives when it is invoked. Every domain change goes through here so
/// that watchers can be notified afterwards.
#[derive(Debug)]
pub(crate) struct PropagationContext<'a> {
    assignments: &'a mut Assignments,
}

impl<'a> PropagationContext<'a> {
    pub(crate) fn new(assignments: &'a mut Assignments) -> Self {
        PropagationContext { assignments }
    }

    pub(crate) fn as_readonly(&self) -> Domains<'_> {
        Domains::new(self.assignments)
    }

    pub(crate) fn set_lower_bound<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        var.set_lower_bound(self.assignments, bound)
    }

    pub(crate) fn set_upper_bound<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        var.set_upper_bound(self.assignments, bound)
    }

    pub(crate) fn fix<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        value: i32,
    ) -> Result<(), EmptyDomain> {
        if !var.contains(self.assignments, value) {
            return Err(EmptyDomain);
        }
        var.set_lower_bound(self.assignments, value)?;
        var.set_upper_bound(self.assignments, value)
    }

    pub(crate) fn remove<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        value: i32,
    ) -> Result<(), EmptyDomain> {
        var.remove(self.assignments, value)
    }

    pub(crate) fn assign_literal(
        &mut self,
        literal: &Literal,
        truth_value: bool,
    ) -> Result<(), EmptyDomain> {
        if truth_value {
            literal.set_lower_bound(self.assignments, 1)
        } else {
            literal.set_upper_bound(self.assignments, 0)
        }
    }
}

impl ReadDomains for PropagationContext<'_> {
    fn assignments(&self) -> &Assignments {
        self.assignments
    }
}

/// Used by a propagator to subscribe to domain events when it is added to the solver.
#[derive(Debug)]
pub(crate) struct InitialisationContext<'a> {
    watch_lists: &'a mut WatchLists,
    propagator_id: PropagatorId,
}

impl<'a> InitialisationContext<'a> {
    pub(crate) fn new(
        watch_lists: &'a mut WatchLists,
        propagator_id: PropagatorId,
    ) -> Self {
        InitialisationContext {
            watch_lists,
            propagator_id,
        }
    }

    /// Subscribes the propagator to the given [`IntDomainEvent`]s of `var`.
    pub(crate) fn register<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        events: EnumSet<IntDomainEvent>,
    ) {
        let mut watchers = Watchers::new(self.propagator_id, self.watch_lists);
        var.watch_all(&mut watchers, events);
    }
}
