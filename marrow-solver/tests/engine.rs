#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use std::ops::ControlFlow;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use marrow_solver::model::Assignment;
use marrow_solver::model::Comparator;
use marrow_solver::model::IntervalSize;
use marrow_solver::model::LinearConstraint;
use marrow_solver::model::LinearExpr;
use marrow_solver::model::Model;
use marrow_solver::EngineError;
use marrow_solver::MarrowEngine;
use marrow_solver::SolveOptions;
use marrow_solver::SolveStatus;
use marrow_solver::SolverOutcome;
use marrow_solver::SolvingEngine;

fn solve(model: &Model, options: &SolveOptions) -> SolverOutcome<Assignment> {
    MarrowEngine::default()
        .solve(model, options, |_| ControlFlow::Continue(()))
        .unwrap()
}

#[test]
fn linear_equalities_are_solved() {
    let mut model = Model::default();
    let x = model.new_int_var(0, 10, "x").unwrap();
    let y = model.new_int_var(0, 10, "y").unwrap();
    model
        .add_linear_eq(LinearExpr::weighted_sum([(1, x), (1, y)]), 10)
        .unwrap();
    model
        .add_linear_eq(LinearExpr::weighted_sum([(1, x), (-1, y)]), 2)
        .unwrap();

    let outcome = solve(&model, &SolveOptions::default());

    assert_eq!(SolveStatus::Optimal, outcome.status);
    let assignment = outcome.solution.unwrap();
    assert_eq!(Some(6), assignment.value(x));
    assert_eq!(Some(4), assignment.value(y));
}

#[test]
fn the_objective_is_minimised() {
    let mut model = Model::default();
    let x = model.new_int_var(0, 9, "x").unwrap();
    let y = model.new_int_var(0, 9, "y").unwrap();
    model.add_all_different([x, y]).unwrap();
    model
        .add_linear_le(LinearExpr::weighted_sum([(-1, x), (-1, y)]), -7)
        .unwrap();
    model
        .minimise(LinearExpr::weighted_sum([(2, x), (3, y)]).with_constant(1))
        .unwrap();

    let outcome = solve(&model, &SolveOptions::default());

    assert_eq!(SolveStatus::Optimal, outcome.status);
    assert_eq!(Some(15), outcome.objective_value);
    assert_eq!(Some(15), outcome.best_objective_bound);
    let assignment = outcome.solution.unwrap();
    assert_eq!(Some(7), assignment.value(x));
    assert_eq!(Some(0), assignment.value(y));
}

#[test]
fn enforced_constraints_only_hold_when_their_literal_is_true() {
    let mut model = Model::default();
    let x = model.new_int_var(0, 5, "x").unwrap();
    let b = model.new_bool_var("b");
    model
        .add_linear(LinearConstraint::new(x, Comparator::Le, 2).only_enforce_if(b))
        .unwrap();
    model
        .add_linear(LinearConstraint::new(x, Comparator::Le, 4).only_enforce_if(!b))
        .unwrap();
    model.minimise(LinearExpr::weighted_sum([(-1, x)])).unwrap();

    let outcome = solve(&model, &SolveOptions::default());

    assert_eq!(SolveStatus::Optimal, outcome.status);
    assert_eq!(Some(-4), outcome.objective_value);
    let assignment = outcome.solution.unwrap();
    assert_eq!(Some(4), assignment.value(x));
    assert_eq!(Some(false), assignment.literal_value(b));
}

#[test]
fn intervals_of_one_machine_do_not_overlap() {
    let mut model = Model::default();
    let a = model.new_int_var(0, 10, "a").unwrap();
    let b = model.new_int_var(0, 10, "b").unwrap();
    let first = model.new_interval(a, IntervalSize::Fixed(4)).unwrap();
    let second = model.new_interval(b, IntervalSize::Fixed(3)).unwrap();
    model.add_no_overlap([first, second]).unwrap();
    model.minimise(LinearExpr::weighted_sum([(1, a), (1, b)])).unwrap();

    let outcome = solve(&model, &SolveOptions::default());

    assert_eq!(SolveStatus::Optimal, outcome.status);
    assert_eq!(Some(3), outcome.objective_value);
}

#[test]
fn enumeration_reports_every_solution() {
    let mut model = Model::default();
    let x = model.new_int_var(1, 3, "x").unwrap();
    let y = model.new_int_var(1, 3, "y").unwrap();
    model.add_all_different([x, y]).unwrap();

    let mut seen = vec![];
    let outcome = MarrowEngine::default()
        .solve(
            &model,
            &SolveOptions::default().enumerating_all_solutions(),
            |assignment| {
                seen.push((assignment.value(x).unwrap(), assignment.value(y).unwrap()));
                ControlFlow::Continue(())
            },
        )
        .unwrap();

    assert_eq!(SolveStatus::Optimal, outcome.status);
    assert_eq!(6, outcome.num_solutions);
    seen.sort_unstable();
    assert_eq!(
        vec![(1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2)],
        seen
    );
}

#[test]
fn a_raised_stop_flag_ends_the_search_before_it_starts() {
    let mut model = Model::default();
    let columns = (0..8)
        .map(|i| model.new_int_var(0, 7, format!("q{i}")).unwrap())
        .collect::<Vec<_>>();
    model.add_all_different(columns.iter().copied()).unwrap();

    let stop_flag = Arc::new(AtomicBool::new(true));
    let outcome = MarrowEngine::with_stop_flag(stop_flag)
        .solve(&model, &SolveOptions::default(), |_| ControlFlow::Continue(()))
        .unwrap();

    assert_eq!(SolveStatus::Unknown, outcome.status);
    assert!(outcome.solution.is_none());
}

#[test]
fn values_outside_the_engine_range_are_rejected() {
    let mut model = Model::default();
    let _ = model.new_int_var(0, i64::from(i32::MAX) + 1, "x").unwrap();

    let result = MarrowEngine::default().solve(&model, &SolveOptions::default(), |_| {
        ControlFlow::Continue(())
    });

    assert!(matches!(result, Err(EngineError::Overflow { .. })));
}
