//! # Marrow core
//! A compact constraint programming solver: integer variables with trailed domains, propagators
//! run to a fixpoint through a priority queue, and a chronological depth-first search over
//! decisions produced by a [`Brancher`].
//!
//! The solver supports the following constraints:
//! * [All-different][crate::constraints::all_different].
//! * Linear integer [(in)equalities][crate::constraints::less_than_or_equals], which can be
//!   half-reified through [`ConstraintPoster::implied_by`].
//! * [Disjunctive][crate::constraints::disjunctive], i.e. non-overlapping tasks on one machine.
//! * [Two-dimensional non-overlap][crate::constraints::no_overlap_2d] of rectangles.
//!
//! # Using the solver
//! The first step to solving a problem is **adding variables** and then **adding constraints**:
//! ```rust
//! # use marrow_core::Solver;
//! # use marrow_core::constraints;
//! let mut solver = Solver::default();
//!
//! let x = solver.new_bounded_integer(5, 10);
//! let y = solver.new_bounded_integer(-3, 15);
//! let z = solver.new_bounded_integer(7, 25);
//!
//! // x + y + z = 17
//! solver
//!     .add_constraint(constraints::equals(vec![x, y, z], 17))
//!     .post()
//!     .expect("no root-level conflict");
//! ```
//!
//! **Finding a solution** requires a [`Brancher`] and a [`TerminationCondition`]:
//! ```rust
//! # use marrow_core::Solver;
//! # use marrow_core::constraints;
//! # use marrow_core::results::ProblemSolution;
//! # use marrow_core::results::SatisfactionResult;
//! # use marrow_core::termination::Indefinite;
//! # let mut solver = Solver::default();
//! # let x = solver.new_bounded_integer(5, 10);
//! # let y = solver.new_bounded_integer(-3, 15);
//! # let z = solver.new_bounded_integer(7, 25);
//! # solver.add_constraint(constraints::equals(vec![x, y, z], 17)).post().unwrap();
//! let mut brancher = solver.default_brancher();
//! match solver.satisfy(&mut brancher, &mut Indefinite) {
//!     SatisfactionResult::Satisfiable(solution) => {
//!         let sum = solution.get_integer_value(x)
//!             + solution.get_integer_value(y)
//!             + solution.get_integer_value(z);
//!         assert_eq!(17, sum);
//!     }
//!     _ => panic!("the problem has a solution"),
//! }
//! ```
//!
//! **Optimising** works the same way, through [`Solver::optimise`] and an
//! [`OptimisationProcedure`]; **enumerating** every solution goes through
//! [`Solver::get_solution_iterator`].
//!
//! [`ConstraintPoster::implied_by`]: crate::constraints::ConstraintPoster::implied_by
//! [`OptimisationProcedure`]: crate::optimisation::OptimisationProcedure
pub(crate) mod asserts;
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;
pub(crate) mod math;
pub(crate) mod propagators;

#[cfg(doc)]
use crate::branching::Brancher;
#[cfg(doc)]
use crate::termination::TerminationCondition;

pub mod branching;
pub mod constraints;
pub mod optimisation;
pub mod statistics;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
//
// Example:
// `use marrow_core::Solver;`
// vs.
// `use marrow_core::api::Solver;`
mod api;

pub use api::*;

pub use crate::api::solver::DefaultBrancher;
pub use crate::api::solver::Solver;
pub use crate::engine::Assignments;
pub use crate::engine::EmptyDomain;
