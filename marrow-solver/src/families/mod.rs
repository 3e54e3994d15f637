//! The supported problem families.
//!
//! Every family is a unit struct implementing [`ModelBuilder`], which turns a validated instance
//! into a [`Model`], and [`SolutionExtractor`], which reads the solution back from an
//! [`Assignment`] and checks it independently of the model.
mod cryptarithm;
mod packing;
mod queens;
mod scheduling;
mod sudoku;

pub use cryptarithm::*;
pub use packing::*;
pub use queens::*;
pub use scheduling::*;
pub use sudoku::*;

use crate::model::Assignment;
use crate::model::IntVar;
use crate::model::Model;
use crate::MarrowError;
use crate::ValidationError;

/// Translates an instance of a problem family into a [`Model`].
///
/// Building is pure: it never solves and never prints. Along with the model it returns the
/// handles of the variables that hold the solution.
pub trait ModelBuilder {
    type Instance;
    type Handles;

    fn build(&self, instance: &Self::Instance) -> Result<(Model, Self::Handles), MarrowError>;
}

/// Reads and checks the solution of a model built by the same family.
pub trait SolutionExtractor: ModelBuilder {
    type Solution;

    fn extract(
        &self,
        instance: &Self::Instance,
        handles: &Self::Handles,
        assignment: &Assignment,
    ) -> Result<Self::Solution, ValidationError>;

    /// Checks the structure of the problem on the solution, without looking at the model.
    fn validate(
        &self,
        instance: &Self::Instance,
        solution: &Self::Solution,
    ) -> Result<(), ValidationError>;

    /// Checks the objective value reported by the engine against the solution.
    fn check_objective(
        &self,
        _instance: &Self::Instance,
        _solution: &Self::Solution,
        _objective_value: Option<i64>,
    ) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// The value of `var`, which must lie in `[lower_bound, upper_bound]`.
fn value_in_range(
    assignment: &Assignment,
    var: IntVar,
    lower_bound: i64,
    upper_bound: i64,
    name: impl FnOnce() -> String,
) -> Result<i64, ValidationError> {
    let Some(value) = assignment.value(var) else {
        return Err(ValidationError::MissingValue(name()));
    };

    if value < lower_bound || value > upper_bound {
        return Err(ValidationError::ValueOutOfRange {
            variable: name(),
            value,
        });
    }

    Ok(value)
}
