use super::AffineExpr;
use super::IntVar;

/// The length of an interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntervalSize {
    Fixed(i64),
    Variable(IntVar),
}

/// An interval `[start, end)` with `end = start + size`.
///
/// For a fixed size the end is a view on the start. For a variable size the model owns an end
/// variable, and the solving engine links the three.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntervalVar {
    start: IntVar,
    size: IntervalSize,
    end: AffineExpr,
}

impl IntervalVar {
    pub(crate) fn new(start: IntVar, size: IntervalSize, end: AffineExpr) -> IntervalVar {
        IntervalVar { start, size, end }
    }

    pub fn start(&self) -> IntVar {
        self.start
    }

    pub fn size(&self) -> IntervalSize {
        self.size
    }

    pub fn end(&self) -> AffineExpr {
        self.end
    }
}
