#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use marrow_solver::solve_cryptarithm;
use marrow_solver::CryptarithmInstance;
use marrow_solver::InstanceError;
use marrow_solver::SolveOptions;
use marrow_solver::SolveStatus;

#[test]
fn send_more_money_has_its_unique_solution() {
    let instance = "SEND + MORE = MONEY".parse::<CryptarithmInstance>().unwrap();
    let outcome = solve_cryptarithm(&instance, &SolveOptions::default()).unwrap();

    assert_eq!(SolveStatus::Optimal, outcome.status);
    let solution = outcome.solution.unwrap();
    assert_eq!(Some(9567), solution.word_value("SEND"));
    assert_eq!(Some(1085), solution.word_value("MORE"));
    assert_eq!(Some(10652), solution.word_value("MONEY"));
}

#[test]
fn puzzles_with_more_than_two_addends_are_solved() {
    let instance = CryptarithmInstance::new(["SO", "SO", "SO", "SO"], "TOO").unwrap();
    let outcome = solve_cryptarithm(&instance, &SolveOptions::default()).unwrap();

    assert_eq!(SolveStatus::Optimal, outcome.status);
    let solution = outcome.solution.unwrap();
    let so = solution.word_value("SO").unwrap();
    assert_eq!(Some(4 * so), solution.word_value("TOO"));
}

#[test]
fn a_sum_without_solution_is_infeasible() {
    let instance = "A + A = A".parse::<CryptarithmInstance>().unwrap();
    let outcome = solve_cryptarithm(&instance, &SolveOptions::default()).unwrap();

    assert_eq!(SolveStatus::Infeasible, outcome.status);
}

#[test]
fn eleven_letters_are_too_many() {
    assert_eq!(
        Err(InstanceError::TooManyLetters(11)),
        CryptarithmInstance::new(["ABCDE", "FGHIJ"], "K")
    );
}
