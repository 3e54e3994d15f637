use std::ops::ControlFlow;

use log::debug;

use crate::engine::MarrowEngine;
use crate::engine::SolveOptions;
use crate::engine::SolvingEngine;
use crate::families::Cryptarithm;
use crate::families::CryptarithmInstance;
use crate::families::CryptarithmSolution;
use crate::families::Packing;
use crate::families::PackingInstance;
use crate::families::PackingSolution;
use crate::families::PerfectSquaredSquareInstance;
use crate::families::Queens;
use crate::families::QueensInstance;
use crate::families::QueensSolution;
use crate::families::Schedule;
use crate::families::Scheduling;
use crate::families::SchedulingInstance;
use crate::families::SolutionExtractor;
use crate::families::SquarePackingInstance;
use crate::families::Sudoku;
use crate::families::SudokuInstance;
use crate::families::SudokuSolution;
use crate::MarrowError;
use crate::SolverOutcome;
use crate::ValidationError;

/// Builds the model of `instance`, solves it with `engine` and returns the extracted and
/// validated solution.
///
/// Every solution reported by the engine is extracted and validated before it is passed to
/// `on_solution`; returning [`ControlFlow::Break`] stops the search. A solution which fails
/// validation ends the solve with [`MarrowError::Validation`].
pub fn solve_with<Family, Engine, F>(
    family: &Family,
    instance: &Family::Instance,
    engine: &mut Engine,
    options: &SolveOptions,
    mut on_solution: F,
) -> Result<SolverOutcome<Family::Solution>, MarrowError>
where
    Family: SolutionExtractor,
    Engine: SolvingEngine,
    F: FnMut(&Family::Solution) -> ControlFlow<()>,
{
    let (model, handles) = family.build(instance)?;
    debug!(
        "built a model with {} variables and {} constraints",
        model.num_variables(),
        model.constraints().len()
    );

    let mut invalid_solution = None;
    let outcome = engine.solve(&model, options, |assignment| {
        let solution = family
            .extract(instance, &handles, assignment)
            .and_then(|solution| family.validate(instance, &solution).map(|_| solution));

        match solution {
            Ok(solution) => on_solution(&solution),
            Err(error) => {
                invalid_solution = Some(error);
                ControlFlow::Break(())
            }
        }
    })?;

    if let Some(error) = invalid_solution {
        return Err(error.into());
    }

    let objective_value = outcome.objective_value;
    let outcome = outcome.try_map_solution(|assignment| {
        let solution = family.extract(instance, &handles, &assignment)?;
        family.validate(instance, &solution)?;
        family.check_objective(instance, &solution, objective_value)?;
        Ok::<_, ValidationError>(solution)
    })?;

    Ok(outcome)
}

fn solve_family<Family: SolutionExtractor>(
    family: Family,
    instance: &Family::Instance,
    options: &SolveOptions,
) -> Result<SolverOutcome<Family::Solution>, MarrowError> {
    solve_with(&family, instance, &mut MarrowEngine::default(), options, |_| {
        ControlFlow::Continue(())
    })
}

pub fn solve_queens(
    instance: &QueensInstance,
    options: &SolveOptions,
) -> Result<SolverOutcome<QueensSolution>, MarrowError> {
    solve_family(Queens, instance, options)
}

/// Calls `on_solution` for every placement of `n` queens until the search is complete, the time
/// budget runs out, or `on_solution` breaks. The outcome holds the last placement.
pub fn enumerate_queens(
    n: usize,
    options: &SolveOptions,
    on_solution: impl FnMut(&QueensSolution) -> ControlFlow<()>,
) -> Result<SolverOutcome<QueensSolution>, MarrowError> {
    let instance = QueensInstance::new(n)?;
    let options = options.enumerating_all_solutions();
    solve_with(
        &Queens,
        &instance,
        &mut MarrowEngine::default(),
        &options,
        on_solution,
    )
}

pub fn solve_sudoku(
    instance: &SudokuInstance,
    options: &SolveOptions,
) -> Result<SolverOutcome<SudokuSolution>, MarrowError> {
    solve_family(Sudoku, instance, options)
}

pub fn solve_packing(
    instance: &PackingInstance,
    options: &SolveOptions,
) -> Result<SolverOutcome<PackingSolution>, MarrowError> {
    solve_family(Packing, instance, options)
}

pub fn solve_square_packing(
    instance: &SquarePackingInstance,
    options: &SolveOptions,
) -> Result<SolverOutcome<PackingSolution>, MarrowError> {
    solve_family(Packing, instance.as_packing(), options)
}

pub fn solve_perfect_squared_square(
    instance: &PerfectSquaredSquareInstance,
    options: &SolveOptions,
) -> Result<SolverOutcome<PackingSolution>, MarrowError> {
    solve_family(Packing, instance.as_packing(), options)
}

pub fn solve_scheduling(
    instance: &SchedulingInstance,
    options: &SolveOptions,
) -> Result<SolverOutcome<Schedule>, MarrowError> {
    solve_family(Scheduling, instance, options)
}

pub fn solve_cryptarithm(
    instance: &CryptarithmInstance,
    options: &SolveOptions,
) -> Result<SolverOutcome<CryptarithmSolution>, MarrowError> {
    solve_family(Cryptarithm, instance, options)
}
