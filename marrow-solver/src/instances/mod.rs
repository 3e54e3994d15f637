//! Ready-made instances: a seeded generator for single-machine scheduling and catalogues of
//! packing puzzles.
mod catalogue;
mod generator;

pub use catalogue::*;
pub use generator::*;
