use super::AffineExpr;
use super::BoolVar;
use super::IntervalVar;
use super::LinearExpr;

/// The relation between the two sides of a [`LinearConstraint`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparator {
    Eq,
    Le,
}

/// The constraint `expr <comparator> rhs`, enforced only when all enforcement literals are true.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearConstraint {
    expr: LinearExpr,
    comparator: Comparator,
    rhs: i64,
    enforcement: Vec<BoolVar>,
}

impl LinearConstraint {
    pub fn new(expr: impl Into<LinearExpr>, comparator: Comparator, rhs: i64) -> LinearConstraint {
        LinearConstraint {
            expr: expr.into(),
            comparator,
            rhs,
            enforcement: vec![],
        }
    }

    /// Only enforce the constraint when `literal` is true. Can be called several times; the
    /// constraint is then enforced when all the literals are true.
    pub fn only_enforce_if(mut self, literal: BoolVar) -> LinearConstraint {
        self.enforcement.push(literal);
        self
    }

    pub fn expr(&self) -> &LinearExpr {
        &self.expr
    }

    pub fn comparator(&self) -> Comparator {
        self.comparator
    }

    pub fn rhs(&self) -> i64 {
        self.rhs
    }

    pub fn enforcement(&self) -> &[BoolVar] {
        &self.enforcement
    }
}

/// The constraints a [`Model`](super::Model) can hold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Constraint {
    /// The expressions take pairwise distinct values.
    AllDifferent(Vec<AffineExpr>),
    /// No two intervals with a positive size overlap.
    NoOverlap1D(Vec<IntervalVar>),
    /// Rectangle `i` spans `x_intervals[i]` horizontally and `y_intervals[i]` vertically; no two
    /// rectangles overlap in both dimensions.
    NoOverlap2D {
        x_intervals: Vec<IntervalVar>,
        y_intervals: Vec<IntervalVar>,
    },
    Linear(LinearConstraint),
}
