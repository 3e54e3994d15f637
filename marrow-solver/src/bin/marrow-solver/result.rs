use marrow_solver::InstanceError;
use marrow_solver::MarrowError;
use thiserror::Error;

pub(crate) type MarrowCliResult<T> = Result<T, MarrowCliError>;

#[derive(Error, Debug)]
pub(crate) enum MarrowCliError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Failed to render a solution")]
    Render(#[from] std::fmt::Error),
    #[error("The instance is invalid, more details: {0}")]
    InvalidInstance(#[from] InstanceError),
    #[error("Failed to solve the model, more details: {0}")]
    Solve(#[from] MarrowError),
    #[error("The {catalogue} catalogue has {len} entries, there is no entry {index}.")]
    UnknownCatalogueEntry {
        catalogue: &'static str,
        index: usize,
        len: usize,
    },
}
