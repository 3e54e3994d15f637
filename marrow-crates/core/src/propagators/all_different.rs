use fnv::FnvHashMap;

use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatusCP;
use crate::engine::domain_events::DomainEvents;
use crate::engine::propagation::Domains;
use crate::engine::propagation::InitialisationContext;
use crate::engine::propagation::Priority;
use crate::engine::propagation::PropagationContext;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::ReadDomains;
use crate::engine::variables::IntegerVariable;

/// Propagator for the constraint that all variables take pairwise distinct values.
///
/// It removes the value of every fixed variable from the other domains. On top of that it looks
/// at the union of the domains: fewer values than variables is a conflict, and when there are
/// exactly as many values as variables, a value that only one variable can take is assigned to
/// that variable.
#[derive(Clone, Debug)]
pub(crate) struct AllDifferentPropagator<Var> {
    variables: Box<[Var]>,
}

/// For a value in the union of the domains: how many variables can take it, and the last of them.
#[derive(Clone, Copy, Debug)]
struct Support {
    count: usize,
    variable_index: usize,
}

impl<Var: IntegerVariable> AllDifferentPropagator<Var> {
    pub(crate) fn new(variables: Box<[Var]>) -> Self {
        AllDifferentPropagator { variables }
    }

    fn collect_supports(&self, domains: &impl ReadDomains) -> FnvHashMap<i32, Support> {
        let mut supports: FnvHashMap<i32, Support> = FnvHashMap::default();
        for (variable_index, variable) in self.variables.iter().enumerate() {
            for value in domains.iterate_domain(variable) {
                let support = supports.entry(value).or_insert(Support {
                    count: 0,
                    variable_index,
                });
                support.count += 1;
                support.variable_index = variable_index;
            }
        }
        supports
    }

    fn has_duplicate_fixed_value(&self, domains: &impl ReadDomains) -> bool {
        let mut fixed_values = self
            .variables
            .iter()
            .filter(|variable| domains.is_fixed(*variable))
            .map(|variable| domains.lower_bound(variable))
            .collect::<Vec<_>>();
        let num_fixed = fixed_values.len();
        fixed_values.sort_unstable();
        fixed_values.dedup();
        fixed_values.len() < num_fixed
    }
}

impl<Var: IntegerVariable + 'static> Propagator for AllDifferentPropagator<Var> {
    fn name(&self) -> &'static str {
        "AllDifferent"
    }

    fn priority(&self) -> Priority {
        Priority::Medium
    }

    fn initialise_at_root(
        &mut self,
        context: &mut InitialisationContext<'_>,
    ) -> Result<(), Inconsistency> {
        for variable in self.variables.iter() {
            context.register(variable, DomainEvents::ANY_INT);
        }
        Ok(())
    }

    fn detect_inconsistency(&self, domains: Domains<'_>) -> Option<Inconsistency> {
        let too_few_values = self.collect_supports(&domains).len() < self.variables.len();
        (too_few_values || self.has_duplicate_fixed_value(&domains))
            .then_some(Inconsistency::Conflict)
    }

    fn propagate_from_scratch(&self, mut context: PropagationContext<'_>) -> PropagationStatusCP {
        for (index, variable) in self.variables.iter().enumerate() {
            if !context.is_fixed(variable) {
                continue;
            }

            let value = context.lower_bound(variable);
            for (other_index, other) in self.variables.iter().enumerate() {
                if other_index != index {
                    context.remove(other, value)?;
                }
            }
        }

        let supports = self.collect_supports(&context);
        if supports.len() < self.variables.len() {
            return Err(Inconsistency::Conflict);
        }

        if supports.len() == self.variables.len() {
            let forced_assignments = supports
                .iter()
                .filter(|(_, support)| support.count == 1)
                .map(|(value, support)| (support.variable_index, *value))
                .collect::<Vec<_>>();

            for (variable_index, value) in forced_assignments {
                context.fix(&self.variables[variable_index], value)?;
            }
        }

        Ok(())
    }
}
