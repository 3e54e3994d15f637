use std::fmt::Display;
use std::ops::Not;

use super::AffineExpr;

/// A handle to a bounded integer variable of a [`Model`](super::Model).
///
/// Handles are only meaningful for the model that created them; using one in another model is
/// reported as a [`ModelError::ForeignVariable`](crate::ModelError::ForeignVariable).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntVar {
    pub(crate) model: u32,
    pub(crate) index: u32,
}

impl IntVar {
    /// The position of the variable in its model, in order of creation.
    pub fn index(self) -> usize {
        self.index as usize
    }

    /// The expression `scale * self`.
    pub fn scaled(self, scale: i64) -> AffineExpr {
        AffineExpr::new(self, scale, 0)
    }

    /// The expression `self + offset`.
    pub fn offset(self, offset: i64) -> AffineExpr {
        AffineExpr::new(self, 1, offset)
    }
}

impl Display for IntVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.index)
    }
}

/// A 0-1 variable, or the negation of one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoolVar {
    var: IntVar,
    negated: bool,
}

impl BoolVar {
    pub(crate) fn new(var: IntVar) -> BoolVar {
        BoolVar {
            var,
            negated: false,
        }
    }

    /// The underlying 0-1 variable.
    pub fn var(self) -> IntVar {
        self.var
    }

    pub fn is_negated(self) -> bool {
        self.negated
    }
}

impl Not for BoolVar {
    type Output = BoolVar;

    fn not(self) -> Self::Output {
        BoolVar {
            var: self.var,
            negated: !self.negated,
        }
    }
}
