use crate::engine::variables::IntegerVariable;
use crate::engine::Assignments;

/// The context provided to the [`Brancher`](crate::branching::Brancher); it gives read access to
/// the current domains.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    assignments: &'a Assignments,
}

impl<'a> SelectionContext<'a> {
    pub fn new(assignments: &'a Assignments) -> Self {
        SelectionContext { assignments }
    }

    /// Returns the number of values in the domain of the provided [`IntegerVariable`], holes
    /// excluded.
    pub fn get_size_of_domain<Var: IntegerVariable>(&self, var: Var) -> usize {
        var.iterate_domain(self.assignments).count()
    }

    /// Returns the lower bound of the provided [`IntegerVariable`]
    pub fn lower_bound<Var: IntegerVariable>(&self, var: Var) -> i32 {
        var.lower_bound(self.assignments)
    }

    /// Returns the upper bound of the provided [`IntegerVariable`]
    pub fn upper_bound<Var: IntegerVariable>(&self, var: Var) -> i32 {
        var.upper_bound(self.assignments)
    }

    pub fn contains<Var: IntegerVariable>(&self, var: Var, value: i32) -> bool {
        var.contains(self.assignments, value)
    }

    /// Determines whether the provided [`IntegerVariable`] has a unit domain (i.e. a domain of
    /// size 1)
    pub fn is_integer_fixed<Var: IntegerVariable>(&self, var: Var) -> bool {
        self.lower_bound(var.clone()) == self.upper_bound(var)
    }
}
