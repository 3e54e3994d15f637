use super::TerminationCondition;

/// Triggers as soon as either of the two wrapped conditions triggers.
#[derive(Clone, Copy, Debug)]
pub struct Combinator<T1, T2> {
    first: T1,
    second: T2,
}

impl<T1, T2> Combinator<T1, T2> {
    pub fn new(first: T1, second: T2) -> Self {
        Combinator { first, second }
    }
}

impl<T1: TerminationCondition, T2: TerminationCondition> TerminationCondition
    for Combinator<T1, T2>
{
    fn should_stop(&mut self) -> bool {
        self.first.should_stop() || self.second.should_stop()
    }

    fn decision_has_been_made(&mut self) {
        self.first.decision_has_been_made();
        self.second.decision_has_been_made();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::termination::budgets::DecisionBudget;
    use crate::engine::termination::Indefinite;

    #[test]
    fn either_side_stops_the_search() {
        let mut combined = Combinator::new(Indefinite, Some(DecisionBudget::new(1)));
        assert!(!combined.should_stop());
        combined.decision_has_been_made();
        assert!(combined.should_stop());

        let mut never: Combinator<Indefinite, Option<DecisionBudget>> =
            Combinator::new(Indefinite, None);
        never.decision_has_been_made();
        assert!(!never.should_stop());
    }
}
