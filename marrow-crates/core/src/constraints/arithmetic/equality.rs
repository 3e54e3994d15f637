use super::less_than_or_equals;
use crate::constraints::Constraint;
use crate::variables::IntegerVariable;
use crate::variables::Literal;
use crate::ConstraintOperationError;
use crate::Solver;

/// Creates the [`Constraint`] `\sum terms_i = rhs`.
///
/// The equality is decomposed into `\sum terms_i <= rhs` and `\sum -terms_i <= -rhs`.
pub fn equals<Var: IntegerVariable + 'static>(
    terms: impl Into<Box<[Var]>>,
    rhs: i32,
) -> impl Constraint
where
    Var::AffineView: 'static,
{
    EqualConstraint {
        terms: terms.into(),
        rhs,
    }
}

/// Creates the [`Constraint`] `lhs = rhs`.
pub fn binary_equals<Var: IntegerVariable + 'static>(lhs: Var, rhs: Var) -> impl Constraint
where
    Var::AffineView: 'static,
{
    equals([lhs.scaled(1), rhs.scaled(-1)], 0)
}

struct EqualConstraint<Var> {
    terms: Box<[Var]>,
    rhs: i32,
}

impl<Var> EqualConstraint<Var>
where
    Var: IntegerVariable + 'static,
    Var::AffineView: 'static,
{
    fn decompose(self) -> Vec<impl Constraint> {
        let negated = self
            .terms
            .iter()
            .map(|term| term.scaled(-1))
            .collect::<Box<[_]>>();
        let positive = self
            .terms
            .iter()
            .map(|term| term.scaled(1))
            .collect::<Box<[_]>>();

        vec![
            less_than_or_equals(positive, self.rhs),
            less_than_or_equals(negated, -self.rhs),
        ]
    }
}

impl<Var> Constraint for EqualConstraint<Var>
where
    Var: IntegerVariable + 'static,
    Var::AffineView: 'static,
{
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        self.decompose().post(solver)
    }

    fn implied_by(
        self,
        solver: &mut Solver,
        reification_literal: Literal,
    ) -> Result<(), ConstraintOperationError> {
        self.decompose().implied_by(solver, reification_literal)
    }
}
