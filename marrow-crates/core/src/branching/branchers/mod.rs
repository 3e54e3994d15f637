//! Provides several implementations of [`Brancher`]s.
//!
//! [`Brancher`]: crate::branching::Brancher
pub mod dynamic_brancher;
pub mod independent_variable_value_brancher;
