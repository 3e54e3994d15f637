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

/// Place `n` queens on an `n x n` board such that no two attack each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueensInstance {
    n: usize,
}

impl QueensInstance {
    pub fn new(n: usize) -> Result<QueensInstance, InstanceError> {
        if n == 0 {
            return Err(InstanceError::EmptyBoard);
        }
        Ok(QueensInstance { n })
    }

    pub fn n(&self) -> usize {
        self.n
    }
}

/// The column of the queen in every row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueensHandles {
    pub columns: Vec<IntVar>,
}

/// `columns[row]` is the column of the queen in `row`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueensSolution {
    pub columns: Vec<usize>,
}

/// One queen per row; the columns and both diagonals are all different.
#[derive(Clone, Copy, Debug, Default)]
pub struct Queens;

impl ModelBuilder for Queens {
    type Instance = QueensInstance;
    type Handles = QueensHandles;

    fn build(&self, instance: &QueensInstance) -> Result<(Model, QueensHandles), MarrowError> {
        let n = instance.n as i64;
        let mut model = Model::default();

        let columns = (0..instance.n)
            .map(|row| model.new_int_var(0, n - 1, format!("x[{row}]")))
            .collect::<Result<Vec<_>, _>>()?;

        model.add_all_different(columns.iter().copied())?;
        model.add_all_different(
            columns
                .iter()
                .enumerate()
                .map(|(row, column)| column.offset(row as i64)),
        )?;
        model.add_all_different(
            columns
                .iter()
                .enumerate()
                .map(|(row, column)| column.offset(-(row as i64))),
        )?;

        Ok((model, QueensHandles { columns }))
    }
}

impl SolutionExtractor for Queens {
    type Solution = QueensSolution;

    fn extract(
        &self,
        instance: &QueensInstance,
        handles: &QueensHandles,
        assignment: &Assignment,
    ) -> Result<QueensSolution, ValidationError> {
        let columns = handles
            .columns
            .iter()
            .enumerate()
            .map(|(row, &column)| {
                value_in_range(assignment, column, 0, instance.n as i64 - 1, || {
                    format!("x[{row}]")
                })
                .map(|column| column as usize)
            })
            .collect::<Result<_, _>>()?;

        Ok(QueensSolution { columns })
    }

    fn validate(
        &self,
        instance: &QueensInstance,
        solution: &QueensSolution,
    ) -> Result<(), ValidationError> {
        if solution.columns.len() != instance.n {
            return Err(ValidationError::MissingValue(format!(
                "x[{}]",
                solution.columns.len().min(instance.n)
            )));
        }

        for ((first, &first_column), (second, &second_column)) in
            solution.columns.iter().enumerate().tuple_combinations()
        {
            let same_diagonal = first_column.abs_diff(second_column) == second - first;
            if first_column == second_column || same_diagonal {
                return Err(ValidationError::QueensAttack { first, second });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Constraint;

    #[test]
    fn empty_boards_are_rejected() {
        assert_eq!(Err(InstanceError::EmptyBoard), QueensInstance::new(0));
    }

    #[test]
    fn the_model_has_one_variable_per_row_and_three_all_different_constraints() {
        let instance = QueensInstance::new(5).unwrap();

        let (model, handles) = Queens.build(&instance).unwrap();

        assert_eq!(5, model.num_variables());
        assert_eq!(5, handles.columns.len());
        assert_eq!(3, model.constraints().len());
        assert!(model.constraints().iter().all(|constraint| matches!(
            constraint,
            Constraint::AllDifferent(terms) if terms.len() == 5
        )));
        assert!(model.objective().is_none());
    }

    #[test]
    fn the_diagonals_are_offset_by_the_row() {
        let instance = QueensInstance::new(3).unwrap();

        let (model, handles) = Queens.build(&instance).unwrap();

        let Constraint::AllDifferent(anti_diagonals) = &model.constraints()[2] else {
            panic!("expected an all-different constraint");
        };
        assert_eq!(handles.columns[2].offset(-2), anti_diagonals[2]);
    }

    #[test]
    fn attacking_queens_are_detected() {
        let instance = QueensInstance::new(4).unwrap();
        let solution = QueensSolution {
            columns: vec![1, 3, 0, 1],
        };

        assert_eq!(
            Err(ValidationError::QueensAttack {
                first: 0,
                second: 3
            }),
            Queens.validate(&instance, &solution)
        );
    }

    #[test]
    fn diagonal_attacks_are_detected() {
        let instance = QueensInstance::new(4).unwrap();
        let solution = QueensSolution {
            columns: vec![0, 2, 3, 1],
        };

        assert_eq!(
            Err(ValidationError::QueensAttack {
                first: 1,
                second: 2
            }),
            Queens.validate(&instance, &solution)
        );
    }

    #[test]
    fn a_valid_placement_is_accepted() {
        let instance = QueensInstance::new(4).unwrap();
        let solution = QueensSolution {
            columns: vec![1, 3, 0, 2],
        };

        assert_eq!(Ok(()), Queens.validate(&instance, &solution));
    }

    #[test]
    fn values_outside_the_board_are_rejected() {
        let instance = QueensInstance::new(2).unwrap();
        let (_, handles) = Queens.build(&instance).unwrap();
        let assignment = Assignment::new(vec![0, 2]);

        assert_eq!(
            Err(ValidationError::ValueOutOfRange {
                variable: "x[1]".to_owned(),
                value: 2
            }),
            Queens.extract(&instance, &handles, &assignment)
        );
    }
}
