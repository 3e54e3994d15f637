use itertools::Itertools;

use super::IntVar;
use crate::ModelError;

/// The expression `scale * var + offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AffineExpr {
    var: IntVar,
    scale: i64,
    offset: i64,
}

impl AffineExpr {
    pub fn new(var: IntVar, scale: i64, offset: i64) -> AffineExpr {
        AffineExpr { var, scale, offset }
    }

    pub fn var(&self) -> IntVar {
        self.var
    }

    pub fn scale(&self) -> i64 {
        self.scale
    }

    pub fn offset_value(&self) -> i64 {
        self.offset
    }

    /// The expression `self + offset`.
    pub fn offset(self, offset: i64) -> AffineExpr {
        AffineExpr {
            offset: self.offset + offset,
            ..self
        }
    }

    /// The value of the expression when its variable takes `value`.
    pub fn evaluate(&self, value: i64) -> i64 {
        self.scale * value + self.offset
    }
}

impl From<IntVar> for AffineExpr {
    fn from(var: IntVar) -> Self {
        AffineExpr::new(var, 1, 0)
    }
}

/// The expression `sum coefficient_i * var_i + constant`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinearExpr {
    terms: Vec<(i64, IntVar)>,
    constant: i64,
}

impl LinearExpr {
    pub fn new() -> LinearExpr {
        LinearExpr::default()
    }

    /// The weighted sum `sum coefficient_i * var_i`.
    pub fn weighted_sum(terms: impl IntoIterator<Item = (i64, IntVar)>) -> LinearExpr {
        LinearExpr {
            terms: terms.into_iter().collect(),
            constant: 0,
        }
    }

    pub fn add_term(&mut self, coefficient: i64, var: IntVar) {
        self.terms.push((coefficient, var));
    }

    /// Adds `coefficient * expr` to this expression. Fails without changing the expression when
    /// the scaled coefficient or the constant leaves the `i64` range.
    pub fn add_affine(&mut self, coefficient: i64, expr: AffineExpr) -> Result<(), ModelError> {
        let scale = coefficient
            .checked_mul(expr.scale())
            .ok_or(ModelError::Overflow("coefficient"))?;
        let constant = coefficient
            .checked_mul(expr.offset_value())
            .and_then(|offset| self.constant.checked_add(offset))
            .ok_or(ModelError::Overflow("constant"))?;

        self.terms.push((scale, expr.var()));
        self.constant = constant;
        Ok(())
    }

    pub fn add_constant(&mut self, constant: i64) {
        self.constant += constant;
    }

    pub fn with_term(mut self, coefficient: i64, var: IntVar) -> LinearExpr {
        self.add_term(coefficient, var);
        self
    }

    pub fn with_constant(mut self, constant: i64) -> LinearExpr {
        self.add_constant(constant);
        self
    }

    pub fn terms(&self) -> &[(i64, IntVar)] {
        &self.terms
    }

    pub fn constant(&self) -> i64 {
        self.constant
    }

    /// The variables of the expression, without duplicates.
    pub fn variables(&self) -> impl Iterator<Item = IntVar> + '_ {
        self.terms.iter().map(|&(_, var)| var).unique()
    }

    /// The same expression as a single affine term, if it mentions exactly one variable with a
    /// non-zero coefficient.
    pub fn as_affine(&self) -> Option<AffineExpr> {
        let mut variables = self
            .terms
            .iter()
            .filter(|(coefficient, _)| *coefficient != 0)
            .map(|&(_, var)| var)
            .unique();
        let var = variables.next()?;
        if variables.next().is_some() {
            return None;
        }

        let scale = self
            .terms
            .iter()
            .filter(|(_, other)| *other == var)
            .map(|(coefficient, _)| coefficient)
            .sum::<i64>();
        (scale != 0).then(|| AffineExpr::new(var, scale, self.constant))
    }

    /// The number of distinct variables with a non-zero coefficient.
    pub(crate) fn num_variables(&self) -> usize {
        self.terms
            .iter()
            .filter(|(coefficient, _)| *coefficient != 0)
            .map(|&(_, var)| var)
            .unique()
            .count()
    }
}

impl From<IntVar> for LinearExpr {
    fn from(var: IntVar) -> Self {
        LinearExpr::new().with_term(1, var)
    }
}

impl From<AffineExpr> for LinearExpr {
    fn from(expr: AffineExpr) -> Self {
        LinearExpr {
            terms: vec![(expr.scale(), expr.var())],
            constant: expr.offset_value(),
        }
    }
}

impl FromIterator<(i64, IntVar)> for LinearExpr {
    fn from_iter<T: IntoIterator<Item = (i64, IntVar)>>(iter: T) -> Self {
        LinearExpr::weighted_sum(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(index: u32) -> IntVar {
        IntVar { model: 0, index }
    }

    #[test]
    fn affine_terms_are_recognised() {
        let expr = LinearExpr::new()
            .with_term(2, var(0))
            .with_term(1, var(0))
            .with_term(0, var(1))
            .with_constant(-4);

        assert_eq!(Some(AffineExpr::new(var(0), 3, -4)), expr.as_affine());
    }

    #[test]
    fn sums_of_two_variables_are_not_affine() {
        let expr = LinearExpr::weighted_sum([(1, var(0)), (1, var(1))]);

        assert_eq!(None, expr.as_affine());
        assert_eq!(2, expr.num_variables());
    }

    #[test]
    fn cancelled_terms_are_not_affine() {
        let expr = LinearExpr::weighted_sum([(1, var(0)), (-1, var(0))]);

        assert_eq!(None, expr.as_affine());
    }

    #[test]
    fn adding_an_affine_expression_scales_its_offset() {
        let mut expr = LinearExpr::new();
        expr.add_affine(3, var(2).offset(5)).unwrap();

        assert_eq!(&[(3, var(2))], expr.terms());
        assert_eq!(15, expr.constant());
    }

    #[test]
    fn scaling_beyond_the_integer_range_is_rejected() {
        let mut expr = LinearExpr::new().with_constant(7);

        assert_eq!(
            Err(ModelError::Overflow("constant")),
            expr.add_affine(i64::MAX / 4, var(0).offset(1000))
        );
        assert_eq!(
            Err(ModelError::Overflow("coefficient")),
            expr.add_affine(i64::MAX, AffineExpr::new(var(0), 2, 0))
        );
        assert!(expr.terms().is_empty());
        assert_eq!(7, expr.constant());
    }
}
