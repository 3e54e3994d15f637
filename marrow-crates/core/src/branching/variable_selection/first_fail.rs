use log::warn;

use super::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;

/// Selects the unfixed variable with the fewest values left in its domain. Ties go to the variable
/// provided first.
#[derive(Debug)]
pub struct FirstFail<Var> {
    variables: Vec<Var>,
}

impl<Var: Clone> FirstFail<Var> {
    pub fn new(variables: &[Var]) -> Self {
        if variables.is_empty() {
            warn!("The FirstFail variable selector was not provided with any variables");
        }
        FirstFail {
            variables: variables.to_vec(),
        }
    }
}

impl VariableSelector<DomainId> for FirstFail<DomainId> {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<DomainId> {
        let mut selected: Option<(DomainId, usize)> = None;
        for &variable in self.variables.iter() {
            if context.is_integer_fixed(variable) {
                continue;
            }
            let size = context.get_size_of_domain(variable);
            if selected.map_or(true, |(_, smallest)| size < smallest) {
                selected = Some((variable, size));
                if size == 2 {
                    break;
                }
            }
        }
        selected.map(|(variable, _)| variable)
    }
}
