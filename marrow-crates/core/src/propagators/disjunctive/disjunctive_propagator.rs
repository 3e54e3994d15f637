use itertools::Itertools;

use super::DisjunctiveTask;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatusCP;
use crate::engine::domain_events::DomainEvents;
use crate::engine::propagation::Domains;
use crate::engine::propagation::InitialisationContext;
use crate::engine::propagation::Priority;
use crate::engine::propagation::PropagationContext;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::ReadDomains;
use crate::engine::variables::IntegerVariable;
use crate::propagators::precedence::can_precede;
use crate::propagators::precedence::enforce_precedence;

/// Propagator for the disjunctive constraint: no two tasks with a positive processing time may
/// overlap in time.
///
/// Two rules are applied:
/// * overload checking: for every set of tasks whose windows lie in `[est, lct]`, the summed
///   processing time has to fit in that window;
/// * detectable precedences: if task `a` cannot end before task `b` starts, then `b` has to end
///   before `a` starts, and both start times are adjusted accordingly.
#[derive(Clone, Debug)]
pub(crate) struct DisjunctivePropagator<Var> {
    tasks: Box<[DisjunctiveTask<Var>]>,
}

/// The time window of a task in the current domains.
#[derive(Clone, Copy, Debug)]
struct TaskWindow {
    earliest_start: i64,
    latest_completion: i64,
    processing_time: i64,
}

impl<Var: IntegerVariable> DisjunctivePropagator<Var> {
    pub(crate) fn new(tasks: impl IntoIterator<Item = DisjunctiveTask<Var>>) -> Self {
        DisjunctivePropagator {
            tasks: tasks.into_iter().collect(),
        }
    }

    fn processing_time(&self, domains: &impl ReadDomains, task: &DisjunctiveTask<Var>) -> i32 {
        domains.lower_bound(&task.processing_time).max(0)
    }

    fn is_overloaded(&self, domains: &impl ReadDomains) -> bool {
        let windows = self
            .tasks
            .iter()
            .map(|task| {
                let processing_time = self.processing_time(domains, task) as i64;
                TaskWindow {
                    earliest_start: domains.lower_bound(&task.start_time) as i64,
                    latest_completion: domains.upper_bound(&task.start_time) as i64
                        + processing_time,
                    processing_time,
                }
            })
            .filter(|window| window.processing_time > 0)
            .collect::<Vec<_>>();

        windows.iter().map(|window| window.earliest_start).unique().any(|window_start| {
            let mut contained = windows
                .iter()
                .filter(|window| window.earliest_start >= window_start)
                .collect::<Vec<_>>();
            contained.sort_unstable_by_key(|window| window.latest_completion);

            let mut energy = 0;
            contained.iter().any(|window| {
                energy += window.processing_time;
                window_start + energy > window.latest_completion
            })
        })
    }
}

impl<Var: IntegerVariable + 'static> Propagator for DisjunctivePropagator<Var> {
    fn name(&self) -> &'static str {
        "Disjunctive"
    }

    fn priority(&self) -> Priority {
        Priority::Low
    }

    fn initialise_at_root(
        &mut self,
        context: &mut InitialisationContext<'_>,
    ) -> Result<(), Inconsistency> {
        for task in self.tasks.iter() {
            context.register(&task.start_time, DomainEvents::BOUNDS);
            context.register(&task.processing_time, DomainEvents::LOWER_BOUND);
        }
        Ok(())
    }

    fn detect_inconsistency(&self, domains: Domains<'_>) -> Option<Inconsistency> {
        self.is_overloaded(&domains)
            .then_some(Inconsistency::Conflict)
    }

    fn propagate_from_scratch(&self, mut context: PropagationContext<'_>) -> PropagationStatusCP {
        if self.is_overloaded(&context) {
            return Err(Inconsistency::Conflict);
        }

        for (first, second) in self.tasks.iter().tuple_combinations() {
            let first_duration = self.processing_time(&context, first);
            let second_duration = self.processing_time(&context, second);
            if first_duration == 0 || second_duration == 0 {
                continue;
            }

            let first_can_precede =
                can_precede(&context, &first.start_time, first_duration, &second.start_time);
            let second_can_precede =
                can_precede(&context, &second.start_time, second_duration, &first.start_time);

            match (first_can_precede, second_can_precede) {
                (false, false) => return Err(Inconsistency::Conflict),
                (true, false) => enforce_precedence(
                    &mut context,
                    &first.start_time,
                    first_duration,
                    &second.start_time,
                )?,
                (false, true) => enforce_precedence(
                    &mut context,
                    &second.start_time,
                    second_duration,
                    &first.start_time,
                )?,
                (true, true) => {}
            }
        }

        Ok(())
    }
}
