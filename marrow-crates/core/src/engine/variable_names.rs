use fnv::FnvHashMap;

use crate::engine::variables::DomainId;

/// Names given to domains when they were created, used when logging.
#[derive(Debug, Default)]
pub(crate) struct VariableNames {
    integers: FnvHashMap<DomainId, String>,
}

impl VariableNames {
    pub(crate) fn get_int_name(&self, domain_id: DomainId) -> Option<&str> {
        self.integers.get(&domain_id).map(String::as_str)
    }

    pub(crate) fn add_integer(&mut self, domain_id: DomainId, name: String) {
        let _ = self.integers.insert(domain_id, name);
    }
}
