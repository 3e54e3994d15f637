//! A harness for testing a single propagator without the search around it.
use super::domain_events::IntDomainEvent;
use super::propagation::InitialisationContext;
use super::propagation::PropagationContext;
use super::propagation::Propagator;
use super::propagation::PropagatorId;
use super::variables::DomainId;
use super::variables::IntegerVariable;
use super::variables::Literal;
use super::watch_lists::WatchLists;
use super::Assignments;
use super::EmptyDomain;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatusCP;

/// Owns domains and hands them to one propagator at a time.
#[derive(Debug, Default)]
pub(crate) struct TestSolver {
    assignments: Assignments,
    watch_lists: WatchLists,
    num_propagators: u32,
}

impl TestSolver {
    pub(crate) fn new_variable(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        let domain_id = self.assignments.grow(lower_bound, upper_bound);
        self.watch_lists.grow(domain_id);
        domain_id
    }

    pub(crate) fn new_literal(&mut self) -> Literal {
        Literal::new(self.new_variable(0, 1))
    }

    /// Initialise the propagator and propagate it to its fixpoint.
    pub(crate) fn new_propagator<P: Propagator>(
        &mut self,
        mut propagator: P,
    ) -> Result<P, Inconsistency> {
        let propagator_id = PropagatorId(self.num_propagators);
        self.num_propagators += 1;

        let mut context = InitialisationContext::new(&mut self.watch_lists, propagator_id);
        propagator.initialise_at_root(&mut context)?;
        self.propagate_until_fixed_point(&mut propagator)?;

        Ok(propagator)
    }

    pub(crate) fn propagate(&mut self, propagator: &mut impl Propagator) -> PropagationStatusCP {
        propagator.propagate(PropagationContext::new(&mut self.assignments))
    }

    pub(crate) fn propagate_until_fixed_point(
        &mut self,
        propagator: &mut impl Propagator,
    ) -> PropagationStatusCP {
        loop {
            self.assignments.clear_events();
            self.propagate(propagator)?;
            if self.assignments.take_events().is_empty() {
                return Ok(());
            }
        }
    }

    /// Whether the propagator with the given index subscribed to `event` on `domain_id`.
    pub(crate) fn is_watching(
        &self,
        propagator_index: u32,
        domain_id: DomainId,
        event: IntDomainEvent,
    ) -> bool {
        self.watch_lists
            .get_affected_propagators(domain_id, event.into())
            .any(|propagator_id| propagator_id == PropagatorId(propagator_index))
    }

    pub(crate) fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    pub(crate) fn contains<Var: IntegerVariable>(&self, var: Var, value: i32) -> bool {
        var.contains(&self.assignments, value)
    }

    pub(crate) fn lower_bound<Var: IntegerVariable>(&self, var: Var) -> i32 {
        var.lower_bound(&self.assignments)
    }

    pub(crate) fn upper_bound<Var: IntegerVariable>(&self, var: Var) -> i32 {
        var.upper_bound(&self.assignments)
    }

    pub(crate) fn set_lower_bound<Var: IntegerVariable>(
        &mut self,
        var: Var,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        var.set_lower_bound(&mut self.assignments, bound)
    }

    pub(crate) fn set_upper_bound<Var: IntegerVariable>(
        &mut self,
        var: Var,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        var.set_upper_bound(&mut self.assignments, bound)
    }

    pub(crate) fn set_literal(
        &mut self,
        literal: Literal,
        truth_value: bool,
    ) -> Result<(), EmptyDomain> {
        let value = i32::from(truth_value);
        literal.set_lower_bound(&mut self.assignments, value)?;
        literal.set_upper_bound(&mut self.assignments, value)
    }

    pub(crate) fn is_literal_true(&self, literal: Literal) -> bool {
        literal.is_true(&self.assignments)
    }

    pub(crate) fn is_literal_false(&self, literal: Literal) -> bool {
        literal.is_false(&self.assignments)
    }

    pub(crate) fn assert_bounds<Var: IntegerVariable>(
        &self,
        var: Var,
        lower_bound: i32,
        upper_bound: i32,
    ) {
        let actual_lower_bound = self.lower_bound(var.clone());
        let actual_upper_bound = self.upper_bound(var.clone());

        assert_eq!(
            (lower_bound, upper_bound),
            (actual_lower_bound, actual_upper_bound),
            "The expected bounds [{lower_bound}..{upper_bound}] did not match the actual bounds [{actual_lower_bound}..{actual_upper_bound}] of {var:?}"
        );
    }
}
