use itertools::iproduct;
use itertools::Itertools;

use super::value_in_range;
use super::ModelBuilder;
use super::SolutionExtractor;
use crate::model::Assignment;
use crate::model::IntVar;
use crate::model::Model;
use crate::InstanceError;
use crate::MarrowError;
use crate::ValidationError;

/// The number of rows, columns and digits of the grid.
pub const SUDOKU_SIZE: usize = 9;
const BLOCK_SIZE: usize = 3;

/// A 9x9 grid of clues; `None` marks an empty cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SudokuInstance {
    clues: [[Option<u8>; SUDOKU_SIZE]; SUDOKU_SIZE],
}

impl SudokuInstance {
    /// A grid without any clue.
    pub fn empty() -> SudokuInstance {
        SudokuInstance {
            clues: [[None; SUDOKU_SIZE]; SUDOKU_SIZE],
        }
    }

    pub fn new(grid: Vec<Vec<Option<u8>>>) -> Result<SudokuInstance, InstanceError> {
        if grid.len() != SUDOKU_SIZE {
            return Err(InstanceError::WrongRowCount {
                expected: SUDOKU_SIZE,
                found: grid.len(),
            });
        }

        let mut clues = [[None; SUDOKU_SIZE]; SUDOKU_SIZE];
        for (row, cells) in grid.into_iter().enumerate() {
            if cells.len() != SUDOKU_SIZE {
                return Err(InstanceError::WrongColumnCount {
                    row,
                    expected: SUDOKU_SIZE,
                    found: cells.len(),
                });
            }

            for (column, clue) in cells.into_iter().enumerate() {
                if let Some(value) = clue.filter(|value| !(1..=9).contains(value)) {
                    return Err(InstanceError::ClueOutOfRange { row, column, value });
                }
                clues[row][column] = clue;
            }
        }

        Ok(SudokuInstance { clues })
    }

    /// The clue in the given cell; `None` for empty cells and cells outside the grid.
    pub fn clue(&self, row: usize, column: usize) -> Option<u8> {
        self.clues.get(row)?.get(column).copied().flatten()
    }

    pub fn num_clues(&self) -> usize {
        self.clues.iter().flatten().flatten().count()
    }
}

/// The digit variable of every cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SudokuHandles {
    pub cells: Vec<Vec<IntVar>>,
}

/// A completely filled grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SudokuSolution {
    pub grid: [[u8; SUDOKU_SIZE]; SUDOKU_SIZE],
}

/// A digit variable per cell, pinned for the clues, and an all-different constraint per row,
/// column and block.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sudoku;

impl ModelBuilder for Sudoku {
    type Instance = SudokuInstance;
    type Handles = SudokuHandles;

    fn build(&self, instance: &SudokuInstance) -> Result<(Model, SudokuHandles), MarrowError> {
        let mut model = Model::default();

        let cells = (0..SUDOKU_SIZE)
            .map(|row| {
                (0..SUDOKU_SIZE)
                    .map(|column| model.new_int_var(1, 9, format!("x[{row}][{column}]")))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (row, column) in iproduct!(0..SUDOKU_SIZE, 0..SUDOKU_SIZE) {
            if let Some(value) = instance.clue(row, column) {
                model.add_linear_eq(cells[row][column], i64::from(value))?;
            }
        }

        for unit in units() {
            model.add_all_different(unit.cells.iter().map(|&(row, column)| cells[row][column]))?;
        }

        Ok((model, SudokuHandles { cells }))
    }
}

impl SolutionExtractor for Sudoku {
    type Solution = SudokuSolution;

    fn extract(
        &self,
        _: &SudokuInstance,
        handles: &SudokuHandles,
        assignment: &Assignment,
    ) -> Result<SudokuSolution, ValidationError> {
        let mut grid = [[0; SUDOKU_SIZE]; SUDOKU_SIZE];
        for (row, column) in iproduct!(0..SUDOKU_SIZE, 0..SUDOKU_SIZE) {
            let value = value_in_range(assignment, handles.cells[row][column], 1, 9, || {
                format!("x[{row}][{column}]")
            })?;
            grid[row][column] = value as u8;
        }

        Ok(SudokuSolution { grid })
    }

    fn validate(
        &self,
        instance: &SudokuInstance,
        solution: &SudokuSolution,
    ) -> Result<(), ValidationError> {
        for (row, column) in iproduct!(0..SUDOKU_SIZE, 0..SUDOKU_SIZE) {
            let found = solution.grid[row][column];
            if !(1..=9).contains(&found) {
                return Err(ValidationError::ValueOutOfRange {
                    variable: format!("x[{row}][{column}]"),
                    value: i64::from(found),
                });
            }

            if let Some(expected) = instance.clue(row, column) {
                if expected != found {
                    return Err(ValidationError::ClueChanged {
                        row,
                        column,
                        expected,
                        found,
                    });
                }
            }
        }

        for unit in units() {
            let digits = unit
                .cells
                .iter()
                .map(|&(row, column)| solution.grid[row][column]);
            if let Some(digit) = digits.duplicates().next() {
                return Err(ValidationError::DuplicateDigit {
                    unit: unit.name,
                    digit,
                });
            }
        }

        Ok(())
    }
}

/// A row, column or block.
struct Unit {
    name: String,
    cells: Vec<(usize, usize)>,
}

fn units() -> impl Iterator<Item = Unit> {
    let rows = (0..SUDOKU_SIZE).map(|row| Unit {
        name: format!("row {row}"),
        cells: (0..SUDOKU_SIZE).map(|column| (row, column)).collect(),
    });
    let columns = (0..SUDOKU_SIZE).map(|column| Unit {
        name: format!("column {column}"),
        cells: (0..SUDOKU_SIZE).map(|row| (row, column)).collect(),
    });
    let blocks = iproduct!(0..BLOCK_SIZE, 0..BLOCK_SIZE).map(|(block_row, block_column)| Unit {
        name: format!("block ({block_row}, {block_column})"),
        cells: iproduct!(0..BLOCK_SIZE, 0..BLOCK_SIZE)
            .map(|(row, column)| {
                (
                    block_row * BLOCK_SIZE + row,
                    block_column * BLOCK_SIZE + column,
                )
            })
            .collect(),
    });

    rows.chain(columns).chain(blocks)
}
