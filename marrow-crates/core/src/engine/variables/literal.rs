use std::ops::Not;

use enumset::EnumSet;

use super::DomainId;
use super::IntegerVariable;
use super::TransformableVariable;
use crate::engine::domain_events::IntDomainEvent;
use crate::engine::variables::AffineView;
use crate::engine::watch_lists::Watchers;
use crate::engine::Assignments;
use crate::engine::EmptyDomain;

/// A Boolean variable, represented as a view on a 0-1 integer domain. Negating a literal does not
/// create a new domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal {
    integer_variable: AffineView<DomainId>,
}

impl Literal {
    /// Creates a new literal wrapping the provided [`DomainId`].
    ///
    /// Note: the provided `domain_id` should have a domain between 0 and 1.
    pub fn new(domain_id: DomainId) -> Literal {
        Literal {
            integer_variable: domain_id.scaled(1),
        }
    }

    pub fn get_integer_variable(&self) -> AffineView<DomainId> {
        self.integer_variable
    }

    pub(crate) fn is_true(&self, assignments: &Assignments) -> bool {
        self.integer_variable.lower_bound(assignments) == 1
    }

    pub(crate) fn is_false(&self, assignments: &Assignments) -> bool {
        self.integer_variable.upper_bound(assignments) == 0
    }
}

impl Not for Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        Literal {
            integer_variable: self.integer_variable.scaled(-1).offset(1),
        }
    }
}

/// Forwards a function implementation to the wrapped view.
macro_rules! forward {
    (
        $field:ident,
        fn $(<$($lt:lifetime),+>)? $name:ident(
            & $($lt_self:lifetime)? self,
            $($param_name:ident : $param_type:ty),*
        ) -> $return_type:ty
    ) => {
        fn $name$(<$($lt),+>)?(
            & $($lt_self)? self,
            $($param_name: $param_type),*
        ) -> $return_type {
            self.$field.$name($($param_name),*)
        }
    };
}

impl IntegerVariable for Literal {
    type AffineView = AffineView<DomainId>;

    forward!(integer_variable, fn lower_bound(&self, assignments: &Assignments) -> i32);
    forward!(integer_variable, fn upper_bound(&self, assignments: &Assignments) -> i32);
    forward!(integer_variable, fn contains(&self, assignments: &Assignments, value: i32) -> bool);
    forward!(
        integer_variable,
        fn set_lower_bound(&self, assignments: &mut Assignments, value: i32) -> Result<(), EmptyDomain>
    );
    forward!(
        integer_variable,
        fn set_upper_bound(&self, assignments: &mut Assignments, value: i32) -> Result<(), EmptyDomain>
    );
    forward!(
        integer_variable,
        fn remove(&self, assignments: &mut Assignments, value: i32) -> Result<(), EmptyDomain>
    );

    fn iterate_domain(&self, assignments: &Assignments) -> impl Iterator<Item = i32> {
        self.integer_variable.iterate_domain(assignments)
    }

    fn watch_all(&self, watchers: &mut Watchers<'_>, events: EnumSet<IntDomainEvent>) {
        self.integer_variable.watch_all(watchers, events)
    }
}

impl TransformableVariable<AffineView<DomainId>> for Literal {
    fn scaled(&self, scale: i32) -> AffineView<DomainId> {
        self.integer_variable.scaled(scale)
    }

    fn offset(&self, offset: i32) -> AffineView<DomainId> {
        self.integer_variable.offset(offset)
    }
}
