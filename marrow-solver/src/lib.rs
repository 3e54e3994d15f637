//! # Marrow
//! Constraint models for a handful of classic combinatorial problems, and the machinery to solve
//! them and read the answers back:
//! * [N-Queens](families::Queens): one queen per row, columns and diagonals all different.
//! * [Sudoku](families::Sudoku): a 9x9 grid with all-different rows, columns and blocks.
//! * [Rectangle and square packing](families::Packing), including perfect squared squares.
//! * [Single-machine scheduling](families::Scheduling) with release times, minimising the weighted
//!   sum of completion times.
//! * [Cryptarithms](families::Cryptarithm) such as `SEND + MORE = MONEY`.
//!
//! Every family follows the same path: an instance is validated when it is created, a
//! [`ModelBuilder`] turns it into a [`Model`](model::Model), a [`SolvingEngine`] solves the model,
//! and a [`SolutionExtractor`] reads the solution from the resulting assignment and checks it.
//!
//! # Solving
//! The `solve_*` functions run the whole path with the [`MarrowEngine`]:
//! ```rust
//! # use marrow_solver::solve_queens;
//! # use marrow_solver::QueensInstance;
//! # use marrow_solver::SolveOptions;
//! # use marrow_solver::SolveStatus;
//! let instance = QueensInstance::new(8).unwrap();
//! let outcome = solve_queens(&instance, &SolveOptions::default()).unwrap();
//!
//! assert_eq!(SolveStatus::Optimal, outcome.status);
//! let columns = outcome.solution.unwrap().columns;
//! assert_eq!(8, columns.len());
//! ```
//!
//! Infeasibility is a status rather than an error:
//! ```rust
//! # use marrow_solver::solve_queens;
//! # use marrow_solver::QueensInstance;
//! # use marrow_solver::SolveOptions;
//! # use marrow_solver::SolveStatus;
//! let instance = QueensInstance::new(3).unwrap();
//! let outcome = solve_queens(&instance, &SolveOptions::default()).unwrap();
//!
//! assert_eq!(SolveStatus::Infeasible, outcome.status);
//! assert!(outcome.solution.is_none());
//! ```
//!
//! # Enumerating
//! Satisfaction models can report every solution through a callback, which can stop the search by
//! returning [`ControlFlow::Break`](std::ops::ControlFlow::Break):
//! ```rust
//! # use std::ops::ControlFlow;
//! # use marrow_solver::enumerate_queens;
//! # use marrow_solver::SolveOptions;
//! let mut count = 0;
//! let outcome = enumerate_queens(6, &SolveOptions::default(), |_| {
//!     count += 1;
//!     ControlFlow::Continue(())
//! })
//! .unwrap();
//!
//! assert_eq!(4, count);
//! assert_eq!(4, outcome.num_solutions);
//! ```
//!
//! # Other engines and families
//! [`solve_with`] accepts any family and any [`SolvingEngine`]; [`MarrowEngine::with_stop_flag`]
//! ties the search to an externally controlled flag, such as one raised by a signal handler.
pub mod engine;
mod errors;
pub mod families;
pub mod instances;
pub mod model;
mod outcome;
mod report;
mod solve;

pub use engine::MarrowEngine;
pub use engine::SolveOptions;
pub use engine::SolvingEngine;
pub use errors::*;
pub use families::*;
pub use outcome::*;
pub use report::*;
pub use solve::*;
