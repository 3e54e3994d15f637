use crate::branching::Brancher;
use crate::results::SolutionReference;
use crate::Solver;

/// Called by an [`OptimisationProcedure`] for every improving solution.
///
/// [`OptimisationProcedure`]: crate::optimisation::OptimisationProcedure
pub trait SolutionCallback<B: Brancher> {
    fn on_solution_callback(
        &mut self,
        solver: &Solver,
        solution: SolutionReference<'_>,
        brancher: &B,
    );
}

impl<T: FnMut(&Solver, SolutionReference<'_>, &B), B: Brancher> SolutionCallback<B> for T {
    fn on_solution_callback(
        &mut self,
        solver: &Solver,
        solution: SolutionReference<'_>,
        brancher: &B,
    ) {
        (self)(solver, solution, brancher)
    }
}

impl<T: SolutionCallback<B>, B: Brancher> SolutionCallback<B> for Option<T> {
    fn on_solution_callback(
        &mut self,
        solver: &Solver,
        solution: SolutionReference<'_>,
        brancher: &B,
    ) {
        if let Some(callback) = self {
            callback.on_solution_callback(solver, solution, brancher)
        }
    }
}
