use crate::asserts::marrow_assert_simple;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::variables::Literal;
use crate::engine::Assignments;

/// The common behaviour of [`Solution`] and [`SolutionReference`].
pub trait ProblemSolution {
    /// Returns the number of defined [`DomainId`]s.
    fn num_domains(&self) -> usize;

    /// The value of `var` in this solution.
    ///
    /// Every variable is fixed in a solution, so this is never ambiguous.
    fn get_integer_value<Var: IntegerVariable>(&self, var: Var) -> i32;

    fn get_literal_value(&self, literal: Literal) -> bool;
}

pub(crate) trait HasAssignments {
    fn assignments(&self) -> &Assignments;
}

impl<T: HasAssignments> ProblemSolution for T {
    fn num_domains(&self) -> usize {
        self.assignments().num_domains() as usize
    }

    fn get_integer_value<Var: IntegerVariable>(&self, var: Var) -> i32 {
        let value = var.lower_bound(self.assignments());
        marrow_assert_simple!(
            value == var.upper_bound(self.assignments()),
            "variables in a solution are fixed"
        );
        value
    }

    fn get_literal_value(&self, literal: Literal) -> bool {
        self.get_integer_value(literal) == 1
    }
}

/// A solution which borrows the state of the solver that found it.
#[derive(Debug, Copy, Clone)]
pub struct SolutionReference<'a> {
    assignments: &'a Assignments,
}

impl<'a> SolutionReference<'a> {
    pub(crate) fn new(assignments: &'a Assignments) -> SolutionReference<'a> {
        SolutionReference { assignments }
    }

    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> + 'a {
        self.assignments.get_domains()
    }
}

/// A solution which owns a copy of the assignments it was taken from.
#[derive(Clone, Debug, Default)]
pub struct Solution {
    assignments: Assignments,
}

impl Solution {
    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> + '_ {
        self.assignments.get_domains()
    }

    pub fn as_reference(&self) -> SolutionReference<'_> {
        SolutionReference {
            assignments: &self.assignments,
        }
    }

    pub fn contains_domain_id(&self, domain_id: DomainId) -> bool {
        domain_id.id() < self.assignments.num_domains()
    }
}

impl From<SolutionReference<'_>> for Solution {
    fn from(value: SolutionReference<'_>) -> Self {
        Self {
            assignments: value.assignments.clone(),
        }
    }
}

impl HasAssignments for SolutionReference<'_> {
    fn assignments(&self) -> &Assignments {
        self.assignments
    }
}

impl HasAssignments for Solution {
    fn assignments(&self) -> &Assignments {
        &self.assignments
    }
}
