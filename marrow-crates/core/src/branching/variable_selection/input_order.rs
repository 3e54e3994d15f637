use log::warn;

use super::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;

/// Selects the first unfixed variable in the order in which the variables were provided.
#[derive(Debug)]
pub struct InputOrder<Var> {
    variables: Vec<Var>,
}

impl<Var: Clone> InputOrder<Var> {
    pub fn new(variables: &[Var]) -> Self {
        if variables.is_empty() {
            warn!("The InputOrder variable selector was not provided with any variables");
        }
        InputOrder {
            variables: variables.to_vec(),
        }
    }
}

impl VariableSelector<DomainId> for InputOrder<DomainId> {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<DomainId> {
        self.variables
            .iter()
            .find(|variable| !context.is_integer_fixed(**variable))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Assignments;

    #[test]
    fn fixed_variables_are_skipped() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(3, 3);
        let y = assignments.grow(0, 9);
        let z = assignments.grow(0, 1);

        let mut selector = InputOrder::new(&[x, y, z]);
        let mut context = SelectionContext::new(&assignments);
        assert_eq!(Some(y), selector.select_variable(&mut context));
    }
}
