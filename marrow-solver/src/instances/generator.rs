use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

use crate::families::SchedulingInstance;
use crate::InstanceError;

/// The centre of the due-date range, relative to the total processing time.
const TARDINESS_FACTOR: f64 = 0.5;
/// The width of the due-date range, relative to the total processing time.
const DUE_DATE_RANGE: f64 = 0.8;
/// The width of the release-date range, relative to the total processing time.
const RELEASE_RANGE: f64 = 0.4;

/// Generates a single-machine instance with `num_jobs` jobs after Keha, Khowala and Fowler (2009),
/// "Mixed integer programming formulations for single machine scheduling problems".
///
/// Processing times are drawn from `[1, 100]` and weights from `[1, 10]`. With `P` the total
/// processing time, due dates are drawn from `[P(L - R/2), P(L + R/2)]` with `L = 0.5` and
/// `R = 0.8`, and release dates from `[0, PQ]` with `Q = 0.4`. The same seed always yields the
/// same instance.
pub fn random_single_machine_instance(
    num_jobs: usize,
    seed: u64,
) -> Result<SchedulingInstance, InstanceError> {
    let mut rng = SmallRng::seed_from_u64(seed);

    let processing_times = (0..num_jobs)
        .map(|_| rng.gen_range(1..=100))
        .collect::<Vec<i64>>();
    let weights = (0..num_jobs)
        .map(|_| rng.gen_range(1..=10))
        .collect::<Vec<i64>>();

    let total_processing_time = processing_times.iter().sum::<i64>() as f64;
    let earliest_due_date =
        (total_processing_time * (TARDINESS_FACTOR - DUE_DATE_RANGE / 2.0)) as i64;
    let latest_due_date =
        (total_processing_time * (TARDINESS_FACTOR + DUE_DATE_RANGE / 2.0)) as i64;
    let due_dates = (0..num_jobs)
        .map(|_| rng.gen_range(earliest_due_date..=latest_due_date))
        .collect::<Vec<i64>>();

    let latest_release = (total_processing_time * RELEASE_RANGE) as i64;
    let release_times = (0..num_jobs)
        .map(|_| rng.gen_range(0..=latest_release))
        .collect::<Vec<i64>>();

    SchedulingInstance::new(processing_times, weights, release_times)?.with_due_dates(due_dates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_same_seed_gives_the_same_instance() {
        let first = random_single_machine_instance(12, 7).unwrap();
        let second = random_single_machine_instance(12, 7).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn values_are_drawn_from_their_ranges() {
        let instance = random_single_machine_instance(50, 3).unwrap();
        let total = instance.processing_times().iter().sum::<i64>();

        assert_eq!(50, instance.num_jobs());
        assert!(instance
            .processing_times()
            .iter()
            .all(|p| (1..=100).contains(p)));
        assert!(instance.weights().iter().all(|w| (1..=10).contains(w)));
        assert!(instance
            .release_times()
            .iter()
            .all(|&r| 0 <= r && r as f64 <= total as f64 * 0.4));
        let due_dates = instance.due_dates().unwrap();
        assert!(due_dates
            .iter()
            .all(|&d| d as f64 >= total as f64 * 0.1 - 1.0 && d as f64 <= total as f64 * 0.9));
    }

    #[test]
    fn an_instance_without_jobs_is_rejected() {
        assert_eq!(
            Err(InstanceError::Empty("job")),
            random_single_machine_instance(0, 0)
        );
    }
}
