use super::outputs::OptimisationResult;
use super::outputs::SatisfactionResult;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::Solution;
use crate::basic_types::SolutionReference;
use crate::branching::branchers::independent_variable_value_brancher::IndependentVariableValueBrancher;
use crate::branching::value_selection::InDomainMin;
use crate::branching::variable_selection::FirstFail;
use crate::branching::Brancher;
use crate::constraints::ConstraintPoster;
use crate::engine::propagation::Propagator;
use crate::engine::solver_statistics::SolverStatistics;
use crate::engine::termination::TerminationCondition;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::variables::Literal;
use crate::engine::CSPSolverExecutionFlag;
use crate::engine::ConstraintSatisfactionSolver;
#[cfg(doc)]
use crate::optimisation::linear_sat_unsat::LinearSatUnsat;
use crate::optimisation::solution_callback::SolutionCallback;
use crate::optimisation::OptimisationProcedure;
use crate::results::solution_iterator::SolutionIterator;
use crate::statistics::log_statistic;
use crate::statistics::log_statistic_postfix;

/// The main interaction point which allows the creation of variables, the addition of constraints,
/// and solving problems.
///
/// # Creating Variables
/// ```rust
/// # use marrow_core::Solver;
/// # use marrow_core::variables::TransformableVariable;
/// let mut solver = Solver::default();
///
/// // We can create an integer variable with a domain in the range [0, 10]
/// let integer_between_bounds = solver.new_bounded_integer(0, 10);
///
/// // We can also create such a variable with a name
/// let named_integer_between_bounds = solver.new_named_bounded_integer(0, 10, "x");
///
/// // Additionally, we can also create an affine view over a variable with both a scale and an
/// // offset (or either)
/// let view_over_integer = integer_between_bounds.scaled(-1).offset(15);
///
/// // We can create a literal
/// let literal = solver.new_literal();
/// ```
#[derive(Debug, Default)]
pub struct Solver {
    /// The internal [`ConstraintSatisfactionSolver`] which is used to solve the problems.
    pub(crate) satisfaction_solver: ConstraintSatisfactionSolver,
}

impl Solver {
    /// Logs the statistics currently present in the solver with the provided objective value.
    pub fn log_statistics_with_objective(&self, objective_value: i64) {
        log_statistic("objective", objective_value);
        self.log_statistics();
    }

    /// Logs the statistics currently present in the solver.
    pub fn log_statistics(&self) {
        self.satisfaction_solver.log_statistics();
        log_statistic_postfix();
    }

    /// The counters of all searches performed by this solver so far.
    pub fn statistics(&self) -> SolverStatistics {
        self.satisfaction_solver.statistics()
    }

    pub(crate) fn get_solution_reference(&self) -> SolutionReference<'_> {
        self.satisfaction_solver.get_solution_reference()
    }
}

/// Methods to retrieve information about variables
impl Solver {
    /// Get the lower-bound of the given [`IntegerVariable`] at the root level (after propagation).
    pub fn lower_bound(&self, variable: &impl IntegerVariable) -> i32 {
        self.satisfaction_solver.get_lower_bound(variable)
    }

    /// Get the upper-bound of the given [`IntegerVariable`] at the root level (after propagation).
    pub fn upper_bound(&self, variable: &impl IntegerVariable) -> i32 {
        self.satisfaction_solver.get_upper_bound(variable)
    }

    /// The name given to `domain_id` when it was created, if any.
    pub fn variable_name(&self, domain_id: DomainId) -> Option<&str> {
        self.satisfaction_solver.variable_name(domain_id)
    }

    /// Whether a root-level conflict has been found; no constraint can be added any more and every
    /// solve reports that there is no solution.
    pub fn is_infeasible(&self) -> bool {
        self.satisfaction_solver.is_infeasible()
    }
}

/// Functions to create and retrieve integer and propositional variables.
impl Solver {
    /// Create a fresh propositional variable and return the literal with positive polarity.
    pub fn new_literal(&mut self) -> Literal {
        Literal::new(self.new_bounded_integer(0, 1))
    }

    /// Create a fresh propositional variable with a given name and return the literal with positive
    /// polarity.
    pub fn new_named_literal(&mut self, name: impl Into<String>) -> Literal {
        Literal::new(self.new_named_bounded_integer(0, 1, name))
    }

    /// Create a new integer variable with the given bounds.
    ///
    /// The caller ensures `lower_bound <= upper_bound`.
    pub fn new_bounded_integer(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.satisfaction_solver
            .create_new_integer_variable(lower_bound, upper_bound, None)
    }

    /// Create a new named integer variable with the given bounds.
    pub fn new_named_bounded_integer(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
        name: impl Into<String>,
    ) -> DomainId {
        self.satisfaction_solver.create_new_integer_variable(
            lower_bound,
            upper_bound,
            Some(name.into()),
        )
    }
}

/// Functions for solving with the constraints that have been added to the [`Solver`].
impl Solver {
    /// Solves the current model in the [`Solver`] until it finds a solution (or is indicated to
    /// terminate by the provided [`TerminationCondition`]) and returns a [`SatisfactionResult`]
    /// which can be used to obtain the found solution.
    pub fn satisfy<B: Brancher, T: TerminationCondition>(
        &mut self,
        brancher: &mut B,
        termination: &mut T,
    ) -> SatisfactionResult {
        match self.satisfaction_solver.solve(termination, brancher) {
            CSPSolverExecutionFlag::Feasible => {
                let solution: Solution = self.satisfaction_solver.get_solution_reference().into();
                self.satisfaction_solver.restore_state_at_root();

                brancher.on_solution(solution.as_reference());

                SatisfactionResult::Satisfiable(solution)
            }
            CSPSolverExecutionFlag::Infeasible => {
                // Reset the state whenever we return a result
                self.satisfaction_solver.restore_state_at_root();
                SatisfactionResult::Unsatisfiable
            }
            CSPSolverExecutionFlag::Timeout => {
                // Reset the state whenever we return a result
                self.satisfaction_solver.restore_state_at_root();
                SatisfactionResult::Unknown
            }
        }
    }

    /// Returns a [`SolutionIterator`] which enumerates every solution of the current model.
    pub fn get_solution_iterator<
        'this,
        'brancher,
        'termination,
        B: Brancher,
        T: TerminationCondition,
    >(
        &'this mut self,
        brancher: &'brancher mut B,
        termination: &'termination mut T,
    ) -> SolutionIterator<'this, 'brancher, 'termination, B, T> {
        SolutionIterator::new(self, brancher, termination)
    }

    /// Solves the model currently in the [`Solver`] to optimality (or until it is indicated to
    /// terminate by the provided [`TerminationCondition`]). The search strategy is given by the
    /// provided [`OptimisationProcedure`], e.g. [`LinearSatUnsat`].
    ///
    /// It returns an [`OptimisationResult`] which can be used to retrieve the optimal solution if
    /// it exists.
    pub fn optimise<B, Callback>(
        &mut self,
        brancher: &mut B,
        termination: &mut impl TerminationCondition,
        mut optimisation_procedure: impl OptimisationProcedure<B, Callback>,
    ) -> OptimisationResult
    where
        B: Brancher,
        Callback: SolutionCallback<B>,
    {
        optimisation_procedure.optimise(brancher, termination, self)
    }
}

/// Functions for adding new constraints to the solver.
impl Solver {
    /// Add a constraint to the solver. This returns a [`ConstraintPoster`] which enables control
    /// on whether to add the constraint as-is, or whether to half-reify it.
    ///
    /// If none of the methods on [`ConstraintPoster`] are used, the constraint _is not_ actually
    /// added to the solver. In this case, a warning is emitted.
    ///
    /// # Example
    /// ```
    /// # use marrow_core::constraints;
    /// # use marrow_core::Solver;
    /// let mut solver = Solver::default();
    ///
    /// let a = solver.new_bounded_integer(0, 3);
    /// let b = solver.new_bounded_integer(0, 3);
    ///
    /// let result = solver.add_constraint(constraints::equals([a, b], 0)).post();
    /// assert!(result.is_ok());
    /// ```
    pub fn add_constraint<Constraint>(
        &mut self,
        constraint: Constraint,
    ) -> ConstraintPoster<'_, Constraint> {
        ConstraintPoster::new(self, constraint)
    }

    /// Post a new propagator to the solver. If unsatisfiability can be immediately determined
    /// through propagation, this will return a [`ConstraintOperationError`].
    ///
    /// If the solver is already in a conflicting state, calling this again will not alter the
    /// solver in any way, and an error is returned again.
    pub(crate) fn add_propagator(
        &mut self,
        propagator: impl Propagator + 'static,
    ) -> Result<(), ConstraintOperationError> {
        self.satisfaction_solver.add_propagator(propagator)
    }
}

/// Default brancher implementation
impl Solver {
    /// Creates an instance of the [`DefaultBrancher`], which branches over all variables created
    /// so far.
    pub fn default_brancher(&self) -> DefaultBrancher {
        let variables = self
            .satisfaction_solver
            .assignments()
            .get_domains()
            .collect::<Vec<_>>();
        IndependentVariableValueBrancher::new(FirstFail::new(&variables), InDomainMin)
    }
}

/// A brancher which selects the unfixed variable with the smallest domain and assigns it its
/// lowest value.
pub type DefaultBrancher = IndependentVariableValueBrancher<DomainId, FirstFail<DomainId>, InDomainMin>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints;
    use crate::results::ProblemSolution;
    use crate::termination::Indefinite;

    #[test]
    fn satisfy_respects_the_posted_constraints() {
        let mut solver = Solver::default();
        let x = solver.new_named_bounded_integer(0, 5, "x");
        let y = solver.new_bounded_integer(0, 5);

        solver
            .add_constraint(constraints::equals([x, y], 7))
            .post()
            .expect("consistent at the root");
        solver
            .add_constraint(constraints::binary_less_than_or_equals(y, x))
            .post()
            .expect("consistent at the root");

        let mut brancher = solver.default_brancher();
        let SatisfactionResult::Satisfiable(solution) = solver.satisfy(&mut brancher, &mut Indefinite)
        else {
            panic!("a solution exists");
        };

        let x_value = solution.get_integer_value(x);
        let y_value = solution.get_integer_value(y);
        assert_eq!(7, x_value + y_value);
        assert!(y_value <= x_value);
        assert_eq!(Some("x"), solver.variable_name(x));
        assert_eq!(1, solver.statistics().num_solutions);
    }

    #[test]
    fn root_conflict_makes_the_solver_infeasible() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(3, 5);

        let result = solver
            .add_constraint(constraints::less_than_or_equals([x], 2))
            .post();

        assert_eq!(
            Err(ConstraintOperationError::InfeasiblePropagator("LinearLeq")),
            result
        );
        assert!(solver.is_infeasible());
        assert_eq!(
            Err(ConstraintOperationError::InfeasibleState),
            solver
                .add_constraint(constraints::less_than_or_equals([x], 10))
                .post()
        );

        let mut brancher = solver.default_brancher();
        assert!(matches!(
            solver.satisfy(&mut brancher, &mut Indefinite),
            SatisfactionResult::Unsatisfiable
        ));
    }

    #[test]
    fn half_reified_constraint_is_only_enforced_when_the_literal_holds() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 10);
        let literal = solver.new_literal();

        solver
            .add_constraint(constraints::greater_than_or_equals([x], 8))
            .implied_by(literal)
            .expect("consistent at the root");
        solver
            .add_constraint(constraints::less_than_or_equals([x], 5))
            .post()
            .expect("consistent at the root");

        assert_eq!(5, solver.upper_bound(&x));
        assert_eq!(0, solver.upper_bound(&literal));
    }

    #[test]
    fn root_bounds_reflect_propagation() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 10);
        let y = solver.new_bounded_integer(4, 10);

        solver
            .add_constraint(constraints::binary_less_than_or_equals(y, x))
            .post()
            .expect("consistent at the root");

        assert_eq!(4, solver.lower_bound(&x));
        assert_eq!(10, solver.upper_bound(&y));
    }
}
