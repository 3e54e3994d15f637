mod disjunctive_propagator;
mod disjunctive_task;

pub(crate) use disjunctive_propagator::DisjunctivePropagator;
pub(crate) use disjunctive_task::DisjunctiveTask;
