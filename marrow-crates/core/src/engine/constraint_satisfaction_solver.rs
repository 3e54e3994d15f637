//! Houses the solver which runs propagation to a fixpoint and explores the search space
//! depth-first.
use log::debug;

use crate::asserts::marrow_assert_moderate;
use crate::asserts::marrow_assert_simple;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::PropagationStatusCP;
use crate::basic_types::SolutionReference;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::containers::KeyedVec;
use crate::engine::predicates::predicate::Predicate;
use crate::engine::propagation::InitialisationContext;
use crate::engine::propagation::Priority;
use crate::engine::propagation::PropagationContext;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorId;
use crate::engine::propagation::PropagatorStore;
use crate::engine::propagator_queue::PropagatorQueue;
use crate::engine::solver_statistics::SolverStatistics;
use crate::engine::termination::TerminationCondition;
use crate::engine::variable_names::VariableNames;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::watch_lists::WatchLists;
use crate::engine::Assignments;

/// The outcome of a call to [`ConstraintSatisfactionSolver::solve`] or
/// [`ConstraintSatisfactionSolver::resume_search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CSPSolverExecutionFlag {
    /// Every variable is fixed and no propagator objects.
    Feasible,
    /// The (remaining) search space contains no solution.
    Infeasible,
    /// The termination condition triggered first.
    Timeout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum CSPSolverState {
    #[default]
    Ready,
    ContainsSolution,
    Infeasible,
    Timeout,
}

/// A constraint satisfaction solver without learning: it alternates propagation and decisions,
/// and on a conflict it undoes the most recent decision and posts its negation instead.
///
/// The decision stack and the decision level of the [`Assignments`] always have the same height.
#[derive(Debug, Default)]
pub(crate) struct ConstraintSatisfactionSolver {
    assignments: Assignments,
    propagators: PropagatorStore,
    propagator_priorities: KeyedVec<PropagatorId, Priority>,
    watch_lists: WatchLists,
    propagator_queue: PropagatorQueue,
    decisions: Vec<Predicate>,
    state: CSPSolverState,
    statistics: SolverStatistics,
    variable_names: VariableNames,
}

impl ConstraintSatisfactionSolver {
    pub(crate) fn create_new_integer_variable(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
        name: Option<String>,
    ) -> DomainId {
        marrow_assert_simple!(
            self.decisions.is_empty(),
            "variables can only be created at the root"
        );

        let domain_id = self.assignments.grow(lower_bound, upper_bound);
        self.watch_lists.grow(domain_id);
        if let Some(name) = name {
            self.variable_names.add_integer(domain_id, name);
        }
        domain_id
    }

    pub(crate) fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    pub(crate) fn variable_name(&self, domain_id: DomainId) -> Option<&str> {
        self.variable_names.get_int_name(domain_id)
    }

    pub(crate) fn statistics(&self) -> SolverStatistics {
        self.statistics
    }

    pub(crate) fn is_infeasible(&self) -> bool {
        self.state == CSPSolverState::Infeasible
    }

    pub(crate) fn get_lower_bound<Var: IntegerVariable>(&self, var: &Var) -> i32 {
        var.lower_bound(&self.assignments)
    }

    pub(crate) fn get_upper_bound<Var: IntegerVariable>(&self, var: &Var) -> i32 {
        var.upper_bound(&self.assignments)
    }

    /// Adds the propagator at the root and propagates. A root-level conflict makes the solver
    /// infeasible for good.
    pub(crate) fn add_propagator(
        &mut self,
        propagator: impl Propagator + 'static,
    ) -> Result<(), ConstraintOperationError> {
        if self.state == CSPSolverState::Infeasible {
            return Err(ConstraintOperationError::InfeasibleState);
        }
        self.restore_state_at_root();

        let name = propagator.name();
        let priority = propagator.priority();
        let propagator_id = self.propagators.alloc(Box::new(propagator));
        self.propagator_priorities
            .accomodate(propagator_id, Priority::default());
        self.propagator_priorities[propagator_id] = priority;

        let mut context = InitialisationContext::new(&mut self.watch_lists, propagator_id);
        let initialisation_status = self.propagators[propagator_id].initialise_at_root(&mut context);

        if initialisation_status.is_ok() {
            self.propagator_queue
                .enqueue_propagator(propagator_id, priority);
            if self.propagate().is_ok() {
                return Ok(());
            }
        }

        debug!("Adding propagator {name} led to a root-level conflict");
        self.state = CSPSolverState::Infeasible;
        Err(ConstraintOperationError::InfeasiblePropagator(name))
    }

    /// Search for a solution from the root.
    pub(crate) fn solve(
        &mut self,
        termination: &mut impl TerminationCondition,
        brancher: &mut impl Brancher,
    ) -> CSPSolverExecutionFlag {
        if self.state == CSPSolverState::Infeasible {
            return CSPSolverExecutionFlag::Infeasible;
        }
        self.restore_state_at_root();
        self.search(termination, brancher)
    }

    /// Continue the search after the solution which was last found, treating that solution as a
    /// conflict. Repeated calls enumerate every solution exactly once.
    pub(crate) fn resume_search(
        &mut self,
        termination: &mut impl TerminationCondition,
        brancher: &mut impl Brancher,
    ) -> CSPSolverExecutionFlag {
        marrow_assert_simple!(self.state == CSPSolverState::ContainsSolution);

        if !self.backtrack_after_failure(brancher) {
            self.state = CSPSolverState::Infeasible;
            return CSPSolverExecutionFlag::Infeasible;
        }
        self.search(termination, brancher)
    }

    pub(crate) fn get_solution_reference(&self) -> SolutionReference<'_> {
        marrow_assert_simple!(self.state == CSPSolverState::ContainsSolution);
        SolutionReference::new(&self.assignments)
    }

    /// Undo all decisions. A solver that proved infeasibility stays infeasible.
    pub(crate) fn restore_state_at_root(&mut self) {
        if self.assignments.get_decision_level() > 0 {
            self.assignments.synchronise(0);
        }
        self.decisions.clear();
        self.propagator_queue.clear();
        self.assignments.clear_events();

        if self.state != CSPSolverState::Infeasible {
            self.state = CSPSolverState::Ready;
        }
    }

    pub(crate) fn log_statistics(&self) {
        self.statistics.log();
    }

    fn search(
        &mut self,
        termination: &mut impl TerminationCondition,
        brancher: &mut impl Brancher,
    ) -> CSPSolverExecutionFlag {
        loop {
            if termination.should_stop() {
                self.state = CSPSolverState::Timeout;
                return CSPSolverExecutionFlag::Timeout;
            }

            if self.propagate().is_ok() {
                let mut context = SelectionContext::new(&self.assignments);
                let Some(decision) = brancher.next_decision(&mut context) else {
                    self.state = CSPSolverState::ContainsSolution;
                    self.statistics.num_solutions += 1;
                    return CSPSolverExecutionFlag::Feasible;
                };
                marrow_assert_simple!(
                    !self.assignments.is_predicate_satisfied(decision),
                    "decision {decision} does not change the domains"
                );

                self.statistics.num_decisions += 1;
                termination.decision_has_been_made();
                self.assignments.increase_decision_level();
                self.decisions.push(decision);

                if self.assignments.post_predicate(decision).is_ok() {
                    continue;
                }
            }

            self.statistics.num_conflicts += 1;
            brancher.on_conflict();
            if !self.backtrack_after_failure(brancher) {
                self.state = CSPSolverState::Infeasible;
                return CSPSolverExecutionFlag::Infeasible;
            }
        }
    }

    /// Undo decisions until the negation of the undone decision can be posted. Returns `false`
    /// when the decision stack runs empty, i.e. the search space is exhausted.
    fn backtrack_after_failure(&mut self, brancher: &mut impl Brancher) -> bool {
        while let Some(decision) = self.decisions.pop() {
            self.assignments.synchronise(self.decisions.len());
            self.propagator_queue.clear();
            brancher.on_backtrack();

            if self.assignments.post_predicate(!decision).is_ok() {
                return true;
            }
        }
        false
    }

    /// Runs the enqueued propagators until no domain changes any more.
    fn propagate(&mut self) -> PropagationStatusCP {
        self.enqueue_watchers();

        while let Some(propagator_id) = self.propagator_queue.pop() {
            self.statistics.num_propagations += 1;

            let context = PropagationContext::new(&mut self.assignments);
            if let Err(inconsistency) = self.propagators[propagator_id].propagate(context) {
                self.propagator_queue.clear();
                self.assignments.clear_events();
                return Err(inconsistency);
            }

            self.enqueue_watchers();
        }

        marrow_assert_moderate!(self.assignments.bounds_are_values_of_their_domain());
        Ok(())
    }

    fn enqueue_watchers(&mut self) {
        for (domain_id, events) in self.assignments.take_events() {
            for propagator_id in self.watch_lists.get_affected_propagators(domain_id, events) {
                self.propagator_queue
                    .enqueue_propagator(propagator_id, self.propagator_priorities[propagator_id]);
            }
        }
    }
}
