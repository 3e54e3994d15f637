use thiserror::Error;

/// Errors related to adding constraints to the [`Solver`].
///
/// [`Solver`]: crate::Solver
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    #[error("Adding the propagator `{0}` led to a root-level conflict")]
    InfeasiblePropagator(&'static str),
    #[error("The solver is already in an infeasible state")]
    InfeasibleState,
}
