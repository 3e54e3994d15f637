use itertools::Itertools;

use super::value_in_range;
use super::ModelBuilder;
use super::SolutionExtractor;
use crate::model::Assignment;
use crate::model::IntVar;
use crate::model::IntervalSize;
use crate::model::LinearExpr;
use crate::model::Model;
use crate::model::VariableSelection;
use crate::InstanceError;
use crate::MarrowError;
use crate::ValidationError;

/// Jobs with processing times, weights and release times to be scheduled on machines that process
/// one job at a time, minimising the weighted sum of completion times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchedulingInstance {
    processing_times: Vec<i64>,
    weights: Vec<i64>,
    release_times: Vec<i64>,
    due_dates: Option<Vec<i64>>,
    machines: usize,
    horizon: i64,
}

impl SchedulingInstance {
    /// A single-machine instance; all three vectors hold one entry per job.
    pub fn new(
        processing_times: Vec<i64>,
        weights: Vec<i64>,
        release_times: Vec<i64>,
    ) -> Result<SchedulingInstance, InstanceError> {
        if processing_times.len() != weights.len() || processing_times.len() != release_times.len()
        {
            return Err(InstanceError::MismatchedJobData {
                processing_times: processing_times.len(),
                weights: weights.len(),
                release_times: release_times.len(),
            });
        }
        if processing_times.is_empty() {
            return Err(InstanceError::Empty("job"));
        }

        for (field, values) in [
            ("processing time", &processing_times),
            ("weight", &weights),
            ("release time", &release_times),
        ] {
            if let Some((job, &value)) = values.iter().find_position(|&&value| value < 0) {
                return Err(InstanceError::NegativeJobData { job, field, value });
            }
        }

        let horizon = processing_times
            .iter()
            .try_fold(release_times.iter().max().copied().unwrap_or_default(), |end, &time| {
                end.checked_add(time)
            })
            .ok_or(InstanceError::Overflow("horizon"))?;

        Ok(SchedulingInstance {
            processing_times,
            weights,
            release_times,
            due_dates: None,
            machines: 1,
            horizon,
        })
    }

    /// Sets the number of identical machines. Only a single machine is supported by the
    /// [`Scheduling`] model.
    pub fn with_machines(mut self, machines: usize) -> Result<SchedulingInstance, InstanceError> {
        if machines == 0 {
            return Err(InstanceError::NoMachines);
        }
        self.machines = machines;
        Ok(self)
    }

    /// Attaches due dates. They are kept with the instance but do not affect the objective.
    pub fn with_due_dates(
        mut self,
        due_dates: Vec<i64>,
    ) -> Result<SchedulingInstance, InstanceError> {
        if due_dates.len() != self.num_jobs() {
            return Err(InstanceError::MismatchedJobData {
                processing_times: self.num_jobs(),
                weights: self.num_jobs(),
                release_times: due_dates.len(),
            });
        }
        self.due_dates = Some(due_dates);
        Ok(self)
    }

    pub fn num_jobs(&self) -> usize {
        self.processing_times.len()
    }

    pub fn processing_times(&self) -> &[i64] {
        &self.processing_times
    }

    pub fn weights(&self) -> &[i64] {
        &self.weights
    }

    pub fn release_times(&self) -> &[i64] {
        &self.release_times
    }

    pub fn due_dates(&self) -> Option<&[i64]> {
        self.due_dates.as_deref()
    }

    pub fn machines(&self) -> usize {
        self.machines
    }

    /// The latest time any job needs to start: all jobs fit after the last release.
    pub fn horizon(&self) -> i64 {
        self.horizon
    }
}

/// The start time of every job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchedulingHandles {
    pub starts: Vec<IntVar>,
}

/// The start time of every job, in the order of the instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Schedule {
    pub starts: Vec<i64>,
}

impl Schedule {
    /// # Panics
    /// If `job` is not a job of both the schedule and the instance.
    pub fn completion_time(&self, instance: &SchedulingInstance, job: usize) -> i64 {
        self.starts[job] + instance.processing_times[job]
    }

    fn completion_times<'a>(
        &'a self,
        instance: &'a SchedulingInstance,
    ) -> impl Iterator<Item = i64> + 'a {
        self.starts
            .iter()
            .zip(&instance.processing_times)
            .map(|(start, processing_time)| start + processing_time)
    }

    /// The jobs in the order they are processed.
    pub fn job_order(&self) -> Vec<usize> {
        (0..self.starts.len())
            .sorted_by_key(|&job| (self.starts[job], job))
            .collect()
    }

    /// `sum w_j * C_j`.
    pub fn weighted_completion_time(&self, instance: &SchedulingInstance) -> i64 {
        self.completion_times(instance)
            .zip(&instance.weights)
            .map(|(completion_time, weight)| weight * completion_time)
            .sum()
    }

    /// The completion time of the last job.
    pub fn makespan(&self, instance: &SchedulingInstance) -> i64 {
        self.completion_times(instance).max().unwrap_or_default()
    }
}

/// `1 | r_j | sum w_j C_j`: one start variable per job from its release time up to the horizon,
/// the jobs may not overlap, and the weighted sum of the interval ends is minimised.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scheduling;

impl ModelBuilder for Scheduling {
    type Instance = SchedulingInstance;
    type Handles = SchedulingHandles;

    fn build(
        &self,
        instance: &SchedulingInstance,
    ) -> Result<(Model, SchedulingHandles), MarrowError> {
        if instance.machines > 1 {
            return Err(MarrowError::Unsupported("scheduling on more than one machine"));
        }

        let horizon = instance.horizon();
        let mut model = Model::default();
        let mut starts = Vec::with_capacity(instance.num_jobs());
        let mut jobs = Vec::with_capacity(instance.num_jobs());
        let mut objective = LinearExpr::new();

        for job in 0..instance.num_jobs() {
            let start =
                model.new_int_var(instance.release_times[job], horizon, format!("start[{job}]"))?;
            let interval =
                model.new_interval(start, IntervalSize::Fixed(instance.processing_times[job]))?;

            objective.add_affine(instance.weights[job], interval.end())?;
            starts.push(start);
            jobs.push(interval);
        }

        model.add_no_overlap(jobs)?;
        model.minimise(objective)?;
        model.suggest_decision_strategy(
            starts.iter().copied(),
            VariableSelection::SmallestLowerBound,
        )?;

        Ok((model, SchedulingHandles { starts }))
    }
}

impl SolutionExtractor for Scheduling {
    type Solution = Schedule;

    fn extract(
        &self,
        instance: &SchedulingInstance,
        handles: &SchedulingHandles,
        assignment: &Assignment,
    ) -> Result<Schedule, ValidationError> {
        let starts = handles
            .starts
            .iter()
            .enumerate()
            .map(|(job, &start)| {
                value_in_range(assignment, start, 0, instance.horizon(), || {
                    format!("start[{job}]")
                })
            })
            .collect::<Result<_, _>>()?;

        Ok(Schedule { starts })
    }

    fn validate(
        &self,
        instance: &SchedulingInstance,
        solution: &Schedule,
    ) -> Result<(), ValidationError> {
        if solution.starts.len() != instance.num_jobs() {
            return Err(ValidationError::MissingValue(format!(
                "start[{}]",
                solution.starts.len().min(instance.num_jobs())
            )));
        }

        if let Some(job) = (0..instance.num_jobs())
            .find(|&job| solution.starts[job] < instance.release_times[job])
        {
            return Err(ValidationError::ReleaseTimeViolated(job));
        }

        let busy = |job: usize| instance.processing_times[job] > 0;
        for (first, second) in (0..instance.num_jobs())
            .filter(|&job| busy(job))
            .tuple_combinations()
        {
            if solution.starts[first] < solution.completion_time(instance, second)
                && solution.starts[second] < solution.completion_time(instance, first)
            {
                return Err(ValidationError::JobsOverlap { first, second });
            }
        }

        Ok(())
    }

    fn check_objective(
        &self,
        instance: &SchedulingInstance,
        solution: &Schedule,
        objective_value: Option<i64>,
    ) -> Result<(), ValidationError> {
        let recomputed = solution.weighted_completion_time(instance);
        match objective_value {
            Some(reported) if reported != recomputed => {
                Err(ValidationError::ObjectiveMismatch {
                    reported,
                    recomputed,
                })
            }
            _ => Ok(()),
        }
    }
}
