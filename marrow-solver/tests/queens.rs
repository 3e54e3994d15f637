#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use std::collections::HashSet;
use std::ops::ControlFlow;

use marrow_solver::enumerate_queens;
use marrow_solver::solve_queens;
use marrow_solver::QueensInstance;
use marrow_solver::QueensSolution;
use marrow_solver::SolveOptions;
use marrow_solver::SolveStatus;

fn is_placement(solution: &QueensSolution) -> bool {
    let n = solution.columns.len();
    (0..n).all(|i| {
        (i + 1..n).all(|j| {
            let (ci, cj) = (solution.columns[i], solution.columns[j]);
            ci != cj && ci.abs_diff(cj) != j - i
        })
    })
}

#[test]
fn eight_queens_has_a_placement() {
    let instance = QueensInstance::new(8).unwrap();
    let outcome = solve_queens(&instance, &SolveOptions::default()).unwrap();

    assert_eq!(SolveStatus::Optimal, outcome.status);
    assert_eq!(1, outcome.num_solutions);
    assert!(is_placement(&outcome.solution.unwrap()));
}

#[test]
fn eight_queens_has_92_distinct_placements() {
    let mut placements = HashSet::new();
    let outcome = enumerate_queens(8, &SolveOptions::default(), |solution| {
        assert!(is_placement(solution));
        let _ = placements.insert(solution.columns.clone());
        ControlFlow::Continue(())
    })
    .unwrap();

    assert_eq!(SolveStatus::Optimal, outcome.status);
    assert_eq!(92, outcome.num_solutions);
    assert_eq!(92, placements.len());
}

#[test]
fn one_queen_fits_on_a_single_square() {
    let outcome = enumerate_queens(1, &SolveOptions::default(), |_| ControlFlow::Continue(()))
        .unwrap();

    assert_eq!(SolveStatus::Optimal, outcome.status);
    assert_eq!(1, outcome.num_solutions);
    assert_eq!(Some(vec![0]), outcome.solution.map(|solution| solution.columns));
}

#[test]
fn two_and_three_queens_are_infeasible() {
    for n in [2, 3] {
        let instance = QueensInstance::new(n).unwrap();
        let outcome = solve_queens(&instance, &SolveOptions::default()).unwrap();

        assert_eq!(SolveStatus::Infeasible, outcome.status);
        assert_eq!(0, outcome.num_solutions);
        assert!(outcome.solution.is_none());
    }
}

#[test]
fn enumerating_an_infeasible_board_reports_nothing() {
    let mut count = 0;
    let outcome = enumerate_queens(3, &SolveOptions::default(), |_| {
        count += 1;
        ControlFlow::Continue(())
    })
    .unwrap();

    assert_eq!(SolveStatus::Infeasible, outcome.status);
    assert_eq!(0, count);
}

#[test]
fn breaking_from_the_callback_stops_the_enumeration() {
    let mut count = 0;
    let outcome = enumerate_queens(8, &SolveOptions::default(), |_| {
        count += 1;
        if count == 3 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
    .unwrap();

    assert_eq!(SolveStatus::Feasible, outcome.status);
    assert_eq!(3, count);
    assert_eq!(3, outcome.num_solutions);
    assert!(is_placement(&outcome.solution.unwrap()));
}
