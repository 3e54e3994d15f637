#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use itertools::Itertools;
use marrow_solver::instances::demo_packing_instance;
use marrow_solver::solve_packing;
use marrow_solver::solve_perfect_squared_square;
use marrow_solver::solve_square_packing;
use marrow_solver::Dimensions;
use marrow_solver::InstanceError;
use marrow_solver::MarrowError;
use marrow_solver::PackingInstance;
use marrow_solver::PackingSolution;
use marrow_solver::PerfectSquaredSquareInstance;
use marrow_solver::SolveOptions;
use marrow_solver::SolveStatus;
use marrow_solver::SquarePackingInstance;

fn assert_valid_packing(solution: &PackingSolution) {
    let container = solution.container;
    for placement in &solution.placements {
        assert!(placement.x >= 0 && placement.x + placement.width <= container.width);
        assert!(placement.y >= 0 && placement.y + placement.height <= container.height);
    }
    for (a, b) in solution.placements.iter().tuple_combinations() {
        let apart = a.x + a.width <= b.x
            || b.x + b.width <= a.x
            || a.y + a.height <= b.y
            || b.y + b.height <= a.y;
        assert!(apart, "{a:?} and {b:?} overlap");
    }
}

#[test]
fn the_demo_instance_is_packed() {
    let instance = demo_packing_instance().unwrap();
    let outcome = solve_packing(&instance, &SolveOptions::default()).unwrap();

    assert_eq!(SolveStatus::Optimal, outcome.status);
    let solution = outcome.solution.unwrap();
    assert_eq!(5, solution.placements.len());
    assert_valid_packing(&solution);
}

#[test]
fn two_large_squares_do_not_fit_together() {
    let instance = PackingInstance::new(
        Dimensions::new(4, 4),
        vec![Dimensions::new(3, 3), Dimensions::new(2, 2)],
    )
    .unwrap();

    let outcome = solve_packing(&instance, &SolveOptions::default()).unwrap();

    assert_eq!(SolveStatus::Infeasible, outcome.status);
    assert!(outcome.solution.is_none());
}

#[test]
fn rectangles_which_need_rotation_do_not_fit() {
    let instance = PackingInstance::new(
        Dimensions::new(4, 4),
        vec![Dimensions::new(2, 4), Dimensions::new(4, 2)],
    )
    .unwrap();

    let outcome = solve_packing(&instance, &SolveOptions::default()).unwrap();

    assert_eq!(SolveStatus::Infeasible, outcome.status);
}

#[test]
fn rotation_is_not_supported() {
    let instance = PackingInstance::new(Dimensions::new(4, 4), vec![Dimensions::new(2, 4)])
        .unwrap()
        .with_rotation();

    assert_eq!(
        Err(MarrowError::Unsupported("packing with rotation")),
        solve_packing(&instance, &SolveOptions::default()).map(|_| ())
    );
}

#[test]
fn four_unit_squares_tile_a_square_of_side_two() {
    let instance = SquarePackingInstance::new(Dimensions::square(2), [1, 1, 1, 1]).unwrap();
    let outcome = solve_square_packing(&instance, &SolveOptions::default()).unwrap();

    assert_eq!(SolveStatus::Optimal, outcome.status);
    let solution = outcome.solution.unwrap();
    assert_valid_packing(&solution);
    let corners = solution
        .placements
        .iter()
        .map(|placement| (placement.x, placement.y))
        .sorted()
        .collect::<Vec<_>>();
    assert_eq!(vec![(0, 0), (0, 1), (1, 0), (1, 1)], corners);
}

#[test]
fn a_square_tiling_derives_its_side_from_the_area() {
    let instance = PerfectSquaredSquareInstance::new(vec![2, 1, 1, 1, 1, 1]).unwrap();
    assert_eq!(3, instance.side());

    let outcome = solve_perfect_squared_square(&instance, &SolveOptions::default()).unwrap();

    assert_eq!(SolveStatus::Optimal, outcome.status);
    let solution = outcome.solution.unwrap();
    assert_eq!(Dimensions::square(3), solution.container);
    assert_valid_packing(&solution);
}

#[test]
fn squares_whose_area_is_not_a_square_are_rejected() {
    assert_eq!(
        Err(InstanceError::NotAPerfectSquare { area: 5 }),
        PerfectSquaredSquareInstance::new(vec![1, 2])
    );
}

#[test]
fn rectangles_larger_than_the_container_are_rejected() {
    assert!(matches!(
        PackingInstance::new(Dimensions::new(4, 4), vec![Dimensions::new(5, 1)]),
        Err(InstanceError::RectangleTooLarge { index: 0, .. })
    ));
}
