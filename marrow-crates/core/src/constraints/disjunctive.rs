use super::Constraint;
use crate::asserts::marrow_assert_simple;
use crate::propagators::disjunctive::DisjunctivePropagator;
use crate::propagators::disjunctive::DisjunctiveTask;
use crate::variables::IntegerVariable;

/// Creates the [Disjunctive](https://sofdem.github.io/gccat/gccat/Cdisjunctive.html) [`Constraint`].
///
/// This constraint ensures that at no point in time the provided tasks can overlap. This can be
/// seen as a special case of the `cumulative` constraint with capacity 1. Tasks whose processing
/// time is zero never conflict with any other task.
///
/// The length of `start_times` and `processing_times` should be the same; if this is not the case
/// then this method will panic.
pub fn disjunctive<StartTimes, ProcessingTimes, Var>(
    start_times: StartTimes,
    processing_times: ProcessingTimes,
) -> impl Constraint
where
    StartTimes: IntoIterator<Item = Var>,
    ProcessingTimes: IntoIterator<Item = Var>,
    Var: IntegerVariable + 'static,
{
    let start_times = start_times.into_iter().collect::<Vec<_>>();
    let processing_times = processing_times.into_iter().collect::<Vec<_>>();

    marrow_assert_simple!(start_times.len() == processing_times.len());

    DisjunctivePropagator::new(start_times.into_iter().zip(processing_times).map(
        |(start_time, processing_time)| DisjunctiveTask {
            start_time,
            processing_time,
        },
    ))
}
