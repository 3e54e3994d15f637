#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use marrow_solver::solve_sudoku;
use marrow_solver::InstanceError;
use marrow_solver::SolveOptions;
use marrow_solver::SolveStatus;
use marrow_solver::SudokuInstance;

fn grid(rows: [&str; 9]) -> Vec<Vec<Option<u8>>> {
    rows.iter()
        .map(|row| {
            row.bytes()
                .map(|cell| (cell != b'.').then(|| cell - b'0'))
                .collect()
        })
        .collect()
}

#[test]
fn the_classic_puzzle_has_its_unique_solution() {
    let instance = SudokuInstance::new(grid([
        "53..7....",
        "6..195...",
        ".98....6.",
        "8...6...3",
        "4..8.3..1",
        "7...2...6",
        ".6....28.",
        "...419..5",
        "....8..79",
    ]))
    .unwrap();

    let outcome = solve_sudoku(&instance, &SolveOptions::default()).unwrap();

    assert_eq!(SolveStatus::Optimal, outcome.status);
    let expected = grid([
        "534678912",
        "672195348",
        "198342567",
        "859761423",
        "426853791",
        "713924856",
        "961537284",
        "287419635",
        "345286179",
    ]);
    let solution = outcome.solution.unwrap();
    for (row, expected_row) in expected.iter().enumerate() {
        let expected_row = expected_row.iter().flatten().copied().collect::<Vec<_>>();
        assert_eq!(expected_row, solution.grid[row].to_vec());
    }
}

#[test]
fn the_empty_grid_is_completed() {
    let outcome = solve_sudoku(&SudokuInstance::empty(), &SolveOptions::default()).unwrap();

    assert_eq!(SolveStatus::Optimal, outcome.status);
    let solution = outcome.solution.unwrap();
    for row in solution.grid {
        let mut digits = row.to_vec();
        digits.sort_unstable();
        assert_eq!((1..=9).collect::<Vec<u8>>(), digits);
    }
}

#[test]
fn contradicting_clues_are_infeasible() {
    let mut rows = vec![vec![None; 9]; 9];
    rows[0][0] = Some(5);
    rows[0][8] = Some(5);
    let instance = SudokuInstance::new(rows).unwrap();

    let outcome = solve_sudoku(&instance, &SolveOptions::default()).unwrap();

    assert_eq!(SolveStatus::Infeasible, outcome.status);
    assert!(outcome.solution.is_none());
}

#[test]
fn clues_outside_the_digits_are_rejected() {
    let mut rows = vec![vec![None; 9]; 9];
    rows[4][2] = Some(10);

    assert_eq!(
        Err(InstanceError::ClueOutOfRange {
            row: 4,
            column: 2,
            value: 10
        }),
        SudokuInstance::new(rows)
    );
}
