use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatusCP;
use crate::engine::domain_events::DomainEvents;
use crate::engine::propagation::Domains;
use crate::engine::propagation::InitialisationContext;
use crate::engine::propagation::Priority;
use crate::engine::propagation::PropagationContext;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::ReadDomains;
use crate::engine::variables::Literal;

/// Propagator for the constraint `r -> p`, where `r` is a Boolean literal and `p` is an arbitrary
/// propagator.
///
/// When a propagator is reified, it will only propagate whenever `r` is set to true. However, if
/// the propagator implements [`Propagator::detect_inconsistency`], the result of that method may
/// be used to propagate `r` to false. If that method is not implemented, `r` will never be
/// propagated to false.
#[derive(Clone, Debug)]
pub(crate) struct ReifiedPropagator<WrappedPropagator> {
    propagator: WrappedPropagator,
    reification_literal: Literal,
}

impl<WrappedPropagator: Propagator> ReifiedPropagator<WrappedPropagator> {
    pub(crate) fn new(propagator: WrappedPropagator, reification_literal: Literal) -> Self {
        ReifiedPropagator {
            propagator,
            reification_literal,
        }
    }

    fn propagate_reification(&self, context: &mut PropagationContext<'_>) -> PropagationStatusCP {
        if context.is_literal_true(&self.reification_literal)
            || context.is_literal_false(&self.reification_literal)
        {
            return Ok(());
        }

        if self
            .propagator
            .detect_inconsistency(context.as_readonly())
            .is_some()
        {
            context.assign_literal(&self.reification_literal, false)?;
        }

        Ok(())
    }
}

impl<WrappedPropagator: Propagator> Propagator for ReifiedPropagator<WrappedPropagator> {
    fn name(&self) -> &'static str {
        self.propagator.name()
    }

    fn priority(&self) -> Priority {
        self.propagator.priority()
    }

    fn initialise_at_root(
        &mut self,
        context: &mut InitialisationContext<'_>,
    ) -> Result<(), Inconsistency> {
        context.register(&self.reification_literal, DomainEvents::BOUNDS);
        self.propagator.initialise_at_root(context)
    }

    fn detect_inconsistency(&self, domains: Domains<'_>) -> Option<Inconsistency> {
        if domains.is_literal_true(&self.reification_literal) {
            self.propagator.detect_inconsistency(domains)
        } else {
            None
        }
    }

    fn propagate_from_scratch(&self, mut context: PropagationContext<'_>) -> PropagationStatusCP {
        self.propagate_reification(&mut context)?;

        if context.is_literal_true(&self.reification_literal) {
            self.propagator.propagate_from_scratch(context)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::domain_events::IntDomainEvent;
    use crate::engine::test_solver::TestSolver;
    use crate::engine::variables::TransformableVariable;
    use crate::propagators::arithmetic::LinearLessOrEqualPropagator;

    #[test]
    fn wrapped_propagator_is_silent_while_literal_is_unassigned() {
        let mut solver = TestSolver::default();
        let reification_literal = solver.new_literal();
        let x = solver.new_variable(0, 10);

        let _ = solver
            .new_propagator(ReifiedPropagator::new(
                LinearLessOrEqualPropagator::new([x.scaled(1)].into(), 4),
                reification_literal,
            ))
            .expect("no empty domains");

        solver.assert_bounds(x, 0, 10);
        assert!(!solver.is_literal_true(reification_literal));
        assert!(!solver.is_literal_false(reification_literal));
    }

    #[test]
    fn true_literal_enables_the_wrapped_propagator() {
        let mut solver = TestSolver::default();
        let reification_literal = solver.new_literal();
        let x = solver.new_variable(0, 10);

        let mut propagator = solver
            .new_propagator(ReifiedPropagator::new(
                LinearLessOrEqualPropagator::new([x.scaled(1)].into(), 4),
                reification_literal,
            ))
            .expect("no empty domains");

        solver
            .set_literal(reification_literal, true)
            .expect("non-empty domain");
        solver
            .propagate_until_fixed_point(&mut propagator)
            .expect("no empty domains");

        solver.assert_bounds(x, 0, 4);
    }

    #[test]
    fn detected_inconsistency_falsifies_the_literal() {
        let mut solver = TestSolver::default();
        let reification_literal = solver.new_literal();
        let x = solver.new_variable(5, 10);

        let _ = solver
            .new_propagator(ReifiedPropagator::new(
                LinearLessOrEqualPropagator::new([x.scaled(1)].into(), 4),
                reification_literal,
            ))
            .expect("no empty domains");

        assert!(solver.is_literal_false(reification_literal));
        solver.assert_bounds(x, 5, 10);
    }

    #[test]
    fn literal_registration_is_added_to_the_wrapped_watchers() {
        let mut solver = TestSolver::default();
        let reification_literal = solver.new_literal();
        let x = solver.new_variable(0, 10);

        let _ = solver
            .new_propagator(ReifiedPropagator::new(
                LinearLessOrEqualPropagator::new([x.scaled(1)].into(), 4),
                reification_literal,
            ))
            .expect("no empty domains");

        let domain = *reification_literal.get_integer_variable().inner();
        assert!(solver.is_watching(0, domain, IntDomainEvent::UpperBound));
        assert!(solver.is_watching(0, x, IntDomainEvent::LowerBound));
    }
}
