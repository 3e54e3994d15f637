pub(crate) mod outputs;
pub(crate) mod solver;

pub mod results {
    //! Contains the outputs of solving using the [`Solver`].
    //!
    //! We differentiate between 2 different types of results:
    //! - For a **satisfaction** problem ([`SatisfactionResult`])
    //! - For an **optimisation** problem ([`OptimisationResult`])
    //!
    //! On these results, different methods can be called which ensure that the solver is in the
    //! right state for these operations. For example,
    //! [`SatisfactionResult::Satisfiable`] allows you to retrieve the solution.
    //!
    //! [`Solver`]: crate::Solver
    pub use crate::api::outputs::solution_iterator;
    pub use crate::api::outputs::OptimisationResult;
    pub use crate::api::outputs::SatisfactionResult;
    pub use crate::basic_types::ProblemSolution;
    pub use crate::basic_types::Solution;
    pub use crate::basic_types::SolutionReference;
}

pub mod variables {
    //! Contains the variables which can be used by the [`Solver`].
    //!
    //! A variable, in the context of the solver, is a view onto a domain. It may forward domain
    //! information unaltered, or apply transformations which can be performed without the need of
    //! constraints.
    //!
    //! We define 2 types of variables:
    //! - Integer Variables ([`IntegerVariable`]) - These are represented by [`DomainId`]s when
    //!   interacting with the [`Solver`]. These variables can be created using
    //!   [`Solver::new_bounded_integer`]. Views on them are created with
    //!   [`TransformableVariable::scaled`] and [`TransformableVariable::offset`], which yield an
    //!   [`AffineView`].
    //! - Literals ([`Literal`]) - These specify booleans, represented by a 0-1 integer domain.
    //!   They can be created using [`Solver::new_literal`].
    //!
    //! [`Solver`]: crate::Solver
    //! [`Solver::new_bounded_integer`]: crate::Solver::new_bounded_integer
    //! [`Solver::new_literal`]: crate::Solver::new_literal
    pub use crate::engine::variables::AffineView;
    pub use crate::engine::variables::DomainId;
    pub use crate::engine::variables::IntegerVariable;
    pub use crate::engine::variables::Literal;
    pub use crate::engine::variables::TransformableVariable;
}

pub mod termination {
    //! Contains the conditions which are used to determine when the [`Solver`] should terminate
    //! even when the state of the satisfaction/optimization problem is unknown.
    //!
    //! The main [`TerminationCondition`] is a condition which polls whether the solver should
    //! stop. They can be combined with the [`Combinator`], and an externally controlled
    //! [`StopFlag`] allows another thread to end the search.
    //!
    //! [`Solver`]: crate::Solver
    pub use crate::engine::termination::budgets::DecisionBudget;
    pub use crate::engine::termination::budgets::TimeBudget;
    pub use crate::engine::termination::combinator::Combinator;
    pub use crate::engine::termination::stop_flag::StopFlag;
    pub use crate::engine::termination::Indefinite;
    pub use crate::engine::termination::TerminationCondition;
}

pub mod predicates {
    //! Containts structures which represent certain [predicates](https://en.wikipedia.org/wiki/Predicate_(mathematical_logic)).
    //!
    //! The solver only utilizes the following types of predicates:
    //! - **Predicates over integers** - These [`Predicate`]s specify atomic constraints of the form
    //!   `[x >= v]`, `[x <= v]`, `[x == v]`, and `[x != v]`.
    //!
    //! Decisions of the search are predicates; they are created with the
    //! [`predicate!`](crate::predicate) macro.
    pub use crate::engine::predicates::predicate::Predicate;
    pub use crate::engine::predicates::predicate_constructor::PredicateConstructor;
}

pub use crate::basic_types::ConstraintOperationError;
pub use crate::engine::solver_statistics::SolverStatistics;
