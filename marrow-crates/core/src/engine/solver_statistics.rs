use crate::statistics::log_statistic;

/// Counters of the search, logged at the end of a solve.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolverStatistics {
    /// The number of decisions taken by the solver
    pub num_decisions: u64,
    /// The number of conflicts encountered by the solver
    pub num_conflicts: u64,
    /// The number of propagator invocations
    pub num_propagations: u64,
    /// The number of solutions found
    pub num_solutions: u64,
}

impl SolverStatistics {
    pub(crate) fn log(&self) {
        log_statistic("numberOfDecisions", self.num_decisions);
        log_statistic("numberOfConflicts", self.num_conflicts);
        log_statistic("numberOfPropagations", self.num_propagations);
        log_statistic("numberOfSolutions", self.num_solutions);
    }
}
