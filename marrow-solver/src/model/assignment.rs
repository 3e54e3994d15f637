use super::AffineExpr;
use super::BoolVar;
use super::IntVar;
use super::LinearExpr;

/// A value for every variable of a model, as produced by a solving engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
    values: Vec<i64>,
}

impl Assignment {
    /// Creates an assignment where variable `i` (see [`IntVar::index`]) takes `values[i]`.
    pub fn new(values: Vec<i64>) -> Assignment {
        Assignment { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value(&self, var: IntVar) -> Option<i64> {
        self.values.get(var.index()).copied()
    }

    pub fn literal_value(&self, literal: BoolVar) -> Option<bool> {
        self.value(literal.var())
            .map(|value| (value == 1) != literal.is_negated())
    }

    pub fn evaluate_affine(&self, expr: &AffineExpr) -> Option<i64> {
        self.value(expr.var()).map(|value| expr.evaluate(value))
    }

    pub fn evaluate(&self, expr: &LinearExpr) -> Option<i64> {
        expr.terms()
            .iter()
            .try_fold(expr.constant(), |sum, &(coefficient, var)| {
                Some(sum + coefficient * self.value(var)?)
            })
    }
}
