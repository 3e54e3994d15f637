//! Conditions polled by the search to decide whether to give up before reaching a conclusion.
//!
//! A solve that is stopped this way reports an unknown outcome, or the best solution found so far.

pub(crate) mod budgets;
pub(crate) mod combinator;
pub(crate) mod stop_flag;

/// Decides when the solver should give up searching.
pub trait TerminationCondition {
    /// Polled before every propagation round; returning `true` stops the search.
    fn should_stop(&mut self) -> bool;

    /// Called after every decision of the search.
    fn decision_has_been_made(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        self.as_mut().is_some_and(|condition| condition.should_stop())
    }

    fn decision_has_been_made(&mut self) {
        if let Some(condition) = self {
            condition.decision_has_been_made()
        }
    }
}

/// A [`TerminationCondition`] which never triggers; the search runs until it is complete.
#[derive(Clone, Copy, Debug, Default)]
pub struct Indefinite;

impl TerminationCondition for Indefinite {
    fn should_stop(&mut self) -> bool {
        false
    }
}
