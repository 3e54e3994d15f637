//! Contains structures and traits to define the decision making procedure of the [`Solver`].
//!
//! A [`Brancher`] produces the next decision as a [`Predicate`]; when it returns [`None`] every
//! variable it is responsible for is fixed. The usual way to build one is an
//! [`IndependentVariableValueBrancher`], which combines a [`VariableSelector`] with a
//! [`ValueSelector`]:
//!
//! ```rust
//! # use marrow_core::branching::branchers::independent_variable_value_brancher::IndependentVariableValueBrancher;
//! # use marrow_core::branching::value_selection::InDomainMin;
//! # use marrow_core::branching::variable_selection::FirstFail;
//! # use marrow_core::results::SatisfactionResult;
//! # use marrow_core::termination::Indefinite;
//! # use marrow_core::Solver;
//! let mut solver = Solver::default();
//! let variables = vec![solver.new_bounded_integer(0, 3), solver.new_bounded_integer(2, 4)];
//!
//! let mut brancher =
//!     IndependentVariableValueBrancher::new(FirstFail::new(&variables), InDomainMin);
//! let result = solver.satisfy(&mut brancher, &mut Indefinite);
//! assert!(matches!(result, SatisfactionResult::Satisfiable(_)));
//! ```
//!
//! [`Solver`]: crate::Solver
//! [`Predicate`]: crate::predicates::Predicate
//! [`IndependentVariableValueBrancher`]: branchers::independent_variable_value_brancher::IndependentVariableValueBrancher
//! [`VariableSelector`]: variable_selection::VariableSelector
//! [`ValueSelector`]: value_selection::ValueSelector
mod brancher;
pub mod branchers;
mod selection_context;
pub mod value_selection;
pub mod variable_selection;

pub use brancher::Brancher;
pub use selection_context::SelectionContext;
