#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use std::time::Duration;

use itertools::Itertools;
use marrow_solver::instances::random_single_machine_instance;
use marrow_solver::solve_scheduling;
use marrow_solver::Schedule;
use marrow_solver::Scheduling;
use marrow_solver::SchedulingInstance;
use marrow_solver::SolutionExtractor;
use marrow_solver::SolveOptions;
use marrow_solver::SolveStatus;
use marrow_solver::ValidationError;

fn assert_valid_schedule(instance: &SchedulingInstance, schedule: &Schedule) {
    for (job, &start) in schedule.starts.iter().enumerate() {
        assert!(start >= instance.release_times()[job]);
    }
    for (a, b) in schedule.job_order().into_iter().tuple_windows() {
        assert!(schedule.completion_time(instance, a) <= schedule.starts[b]);
    }
}

#[test]
fn three_jobs_are_scheduled_optimally() {
    let instance = SchedulingInstance::new(vec![3, 2, 4], vec![1, 5, 2], vec![0, 4, 1]).unwrap();
    let outcome = solve_scheduling(&instance, &SolveOptions::default()).unwrap();

    assert_eq!(SolveStatus::Optimal, outcome.status);
    assert_eq!(Some(53), outcome.objective_value);
    assert_eq!(Some(53), outcome.best_objective_bound);

    let schedule = outcome.solution.unwrap();
    assert_valid_schedule(&instance, &schedule);
    assert_eq!(53, schedule.weighted_completion_time(&instance));
}

#[test]
fn four_jobs_are_scheduled_optimally() {
    let instance =
        SchedulingInstance::new(vec![2, 3, 1, 4], vec![3, 1, 4, 2], vec![0, 1, 5, 2]).unwrap();
    let outcome = solve_scheduling(&instance, &SolveOptions::default()).unwrap();

    assert_eq!(SolveStatus::Optimal, outcome.status);
    assert_eq!(Some(55), outcome.objective_value);
    let schedule = outcome.solution.unwrap();
    assert_valid_schedule(&instance, &schedule);
    assert_eq!(55, schedule.weighted_completion_time(&instance));
}

#[test]
fn the_reported_objective_matches_the_schedule() {
    let instance = random_single_machine_instance(8, 7).unwrap();
    let outcome = solve_scheduling(&instance, &SolveOptions::default()).unwrap();

    assert_eq!(SolveStatus::Optimal, outcome.status);
    let schedule = outcome.solution.unwrap();
    assert_valid_schedule(&instance, &schedule);
    assert_eq!(
        outcome.objective_value,
        Some(schedule.weighted_completion_time(&instance))
    );
}

#[test]
fn a_decision_budget_ends_the_search_early() {
    let instance = random_single_machine_instance(30, 42).unwrap();
    let options = SolveOptions::default().with_decision_budget(5);

    let outcome = solve_scheduling(&instance, &options).unwrap();

    match outcome.status {
        SolveStatus::Unknown => {
            assert!(outcome.solution.is_none());
            assert!(outcome.best_objective_bound.is_some());
        }
        SolveStatus::Feasible => {
            let schedule = outcome.solution.unwrap();
            assert_valid_schedule(&instance, &schedule);
            assert!(outcome.best_objective_bound <= outcome.objective_value);
        }
        status => panic!("unexpected status {status}"),
    }
}

#[test]
fn an_expired_time_budget_reports_unknown_with_a_bound() {
    let instance = random_single_machine_instance(30, 42).unwrap();
    let options = SolveOptions::default().with_time_budget(Duration::ZERO);

    let outcome = solve_scheduling(&instance, &options).unwrap();

    assert_eq!(SolveStatus::Unknown, outcome.status);
    assert!(outcome.solution.is_none());
    assert_eq!(None, outcome.objective_value);
    assert!(outcome.best_objective_bound.is_some());
}

#[test]
fn a_schedule_with_too_few_starts_is_rejected() {
    let instance = SchedulingInstance::new(vec![3, 2], vec![1, 1], vec![0, 0]).unwrap();
    let schedule = Schedule { starts: vec![0] };

    assert_eq!(
        Err(ValidationError::MissingValue("start[1]".to_owned())),
        Scheduling.validate(&instance, &schedule)
    );
}

#[test]
fn a_single_job_starts_at_its_release_time() {
    let instance = SchedulingInstance::new(vec![4], vec![3], vec![6]).unwrap();
    let outcome = solve_scheduling(&instance, &SolveOptions::default()).unwrap();

    assert_eq!(SolveStatus::Optimal, outcome.status);
    assert_eq!(Some(30), outcome.objective_value);
    assert_eq!(vec![6], outcome.solution.unwrap().starts);
}
