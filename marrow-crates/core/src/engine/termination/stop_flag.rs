use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use super::TerminationCondition;

/// Stops the search once a shared flag is raised, for instance by a signal handler on another
/// thread or by a solution callback.
#[derive(Clone, Debug, Default)]
pub struct StopFlag {
    raised: Arc<AtomicBool>,
}

impl StopFlag {
    pub fn new(raised: Arc<AtomicBool>) -> StopFlag {
        StopFlag { raised }
    }

    /// Raise the flag; every clone observes it.
    pub fn raise(&self) {
        self.raised.store(true, Ordering::Relaxed);
    }
}

impl TerminationCondition for StopFlag {
    fn should_stop(&mut self) -> bool {
        self.raised.load(Ordering::Relaxed)
    }
}
