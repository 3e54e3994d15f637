//! Contains propagator implementations that are used in the solver.
//!
//! All propagators recompute their inferences from the current domains; the solver re-runs them
//! until no domain changes.
pub(crate) mod all_different;
pub(crate) mod arithmetic;
pub(crate) mod disjunctive;
pub(crate) mod no_overlap_2d;
pub(crate) mod reified_propagator;

mod precedence;
