pub(crate) mod assignments;
pub(crate) mod constraint_satisfaction_solver;
pub(crate) mod domain_events;
pub(crate) mod predicates;
pub(crate) mod propagation;
pub(crate) mod propagator_queue;
pub(crate) mod solver_statistics;
pub(crate) mod termination;
#[cfg(test)]
pub(crate) mod test_solver;
pub(crate) mod variable_names;
pub(crate) mod variables;
pub(crate) mod watch_lists;

pub use assignments::Assignments;
pub use assignments::EmptyDomain;
pub(crate) use constraint_satisfaction_solver::CSPSolverExecutionFlag;
pub(crate) use constraint_satisfaction_solver::ConstraintSatisfactionSolver;
