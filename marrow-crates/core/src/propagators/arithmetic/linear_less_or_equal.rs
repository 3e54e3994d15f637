use crate::asserts::marrow_assert_simple;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatusCP;
use crate::engine::domain_events::DomainEvents;
use crate::engine::propagation::Domains;
use crate::engine::propagation::InitialisationContext;
use crate::engine::propagation::Priority;
use crate::engine::propagation::PropagationContext;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::ReadDomains;
use crate::engine::variables::IntegerVariable;

/// Propagator for the constraint `\sum x_i <= c`.
///
/// Coefficients are expressed through views on the terms, so a term `-3 * y` is an
/// [`AffineView`] of `y` with scale `-3`.
///
/// [`AffineView`]: crate::variables::AffineView
#[derive(Clone, Debug)]
pub(crate) struct LinearLessOrEqualPropagator<Var> {
    x: Box<[Var]>,
    c: i32,
}

impl<Var: IntegerVariable> LinearLessOrEqualPropagator<Var> {
    pub(crate) fn new(x: Box<[Var]>, c: i32) -> Self {
        LinearLessOrEqualPropagator { x, c }
    }

    /// The sum of the lower bounds of the terms, computed without overflow.
    fn lower_bound_left_hand_side(&self, domains: &impl ReadDomains) -> i64 {
        self.x
            .iter()
            .map(|x_i| domains.lower_bound(x_i) as i64)
            .sum()
    }
}

impl<Var: IntegerVariable + 'static> Propagator for LinearLessOrEqualPropagator<Var> {
    fn name(&self) -> &'static str {
        "LinearLeq"
    }

    fn priority(&self) -> Priority {
        Priority::High
    }

    fn initialise_at_root(
        &mut self,
        context: &mut InitialisationContext<'_>,
    ) -> Result<(), Inconsistency> {
        for x_i in self.x.iter() {
            context.register(x_i, DomainEvents::LOWER_BOUND);
        }
        Ok(())
    }

    fn detect_inconsistency(&self, domains: Domains<'_>) -> Option<Inconsistency> {
        (self.lower_bound_left_hand_side(&domains) > self.c as i64)
            .then_some(Inconsistency::Conflict)
    }

    fn propagate_from_scratch(&self, mut context: PropagationContext<'_>) -> PropagationStatusCP {
        let lower_bound_left_hand_side = self.lower_bound_left_hand_side(&context);
        if lower_bound_left_hand_side > self.c as i64 {
            return Err(Inconsistency::Conflict);
        }

        // Tightening an upper bound leaves the lower-bound sum unchanged, so one pass suffices.
        for x_i in self.x.iter() {
            let bound =
                self.c as i64 - (lower_bound_left_hand_side - context.lower_bound(x_i) as i64);

            if (context.upper_bound(x_i) as i64) > bound {
                marrow_assert_simple!(bound >= context.lower_bound(x_i) as i64);
                context.set_upper_bound(x_i, bound as i32)?;
            }
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

    #[test]
    fn bounds_are_propagated() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(1, 5);
        let y = solver.new_variable(0, 10);

        let _ = solver
            .new_propagator(LinearLessOrEqualPropagator::new([x, y].into(), 7))
            .expect("no empty domains");

        solver.assert_bounds(x, 1, 5);
        solver.assert_bounds(y, 0, 6);
    }

    #[test]
    fn negative_coefficients_raise_lower_bounds() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 10);
        let y = solver.new_variable(0, 5);

        // x - y <= -2
        let _ = solver
            .new_propagator(LinearLessOrEqualPropagator::new(
                [x.scaled(1), y.scaled(-1)].into(),
                -2,
            ))
            .expect("no empty domains");

        solver.assert_bounds(x, 0, 3);
        solver.assert_bounds(y, 2, 5);
    }

    #[test]
    fn later_bound_changes_are_picked_up() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 10);
        let y = solver.new_variable(0, 10);

        let mut propagator = solver
            .new_propagator(LinearLessOrEqualPropagator::new(
                [x.scaled(2), y.scaled(1)].into(),
                12,
            ))
            .expect("no empty domains");
        solver.assert_bounds(x, 0, 6);

        solver.set_lower_bound(y, 5).expect("non-empty domain");
        solver
            .propagate_until_fixed_point(&mut propagator)
            .expect("non-empty domain");

        solver.assert_bounds(x, 0, 3);
        assert!(solver.is_watching(0, y, IntDomainEvent::LowerBound));
    }

    #[test]
    fn overloaded_sum_is_a_conflict() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(1, 3);
        let y = solver.new_variable(1, 3);

        let result = solver.new_propagator(LinearLessOrEqualPropagator::new([x, y].into(), 1));

        assert_eq!(Some(Inconsistency::Conflict), result.err());
    }
}
