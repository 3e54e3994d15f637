use crate::constraints::Constraint;
use crate::propagators::arithmetic::LinearLessOrEqualPropagator;
use crate::variables::IntegerVariable;
use crate::variables::Literal;
use crate::ConstraintOperationError;
use crate::Solver;

/// Create the [`Constraint`] `\sum terms_i <= rhs`.
pub fn less_than_or_equals<Var: IntegerVariable + 'static>(
    terms: impl Into<Box<[Var]>>,
    rhs: i32,
) -> impl Constraint {
    Inequality {
        terms: terms.into(),
        rhs,
    }
}

/// Create the [`Constraint`] `\sum terms_i >= rhs`.
pub fn greater_than_or_equals<Var: IntegerVariable + 'static>(
    terms: impl Into<Box<[Var]>>,
    rhs: i32,
) -> impl Constraint {
    let terms: Box<[Var]> = terms.into();
    less_than_or_equals(
        terms
            .iter()
            .map(|term| term.scaled(-1))
            .collect::<Box<[_]>>(),
        -rhs,
    )
}

/// Creates the [`Constraint`] `lhs <= rhs`.
pub fn binary_less_than_or_equals<Var: IntegerVariable + 'static>(
    lhs: Var,
    rhs: Var,
) -> impl Constraint {
    less_than_or_equals([lhs.scaled(1), rhs.scaled(-1)], 0)
}

struct Inequality<Var> {
    terms: Box<[Var]>,
    rhs: i32,
}

impl<Var: IntegerVariable + 'static> Constraint for Inequality<Var> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        LinearLessOrEqualPropagator::new(self.terms, self.rhs).post(solver)
    }

    fn implied_by(
        self,
        solver: &mut Solver,
        reification_literal: Literal,
    ) -> Result<(), ConstraintOperationError> {
        LinearLessOrEqualPropagator::new(self.terms, self.rhs)
            .implied_by(solver, reification_literal)
    }
}
