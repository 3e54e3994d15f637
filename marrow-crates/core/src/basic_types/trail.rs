use std::iter::Rev;
use std::ops::Deref;
use std::vec::Drain;

use crate::asserts::marrow_assert_simple;

/// A stack of changes partitioned by decision level. Backtracking to a level hands back the undone
/// changes, most recent first, so the owner can restore its state.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    decision_level: usize,
    /// At index i is the position where decision level i ends (exclusive) on the trail
    level_delimiter: Vec<usize>,
    trail: Vec<T>,
}

// Implemented by hand to avoid imposing `Default` on `T`.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            decision_level: 0,
            level_delimiter: Vec::new(),
            trail: Vec::new(),
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn increase_decision_level(&mut self) {
        self.decision_level += 1;
        self.level_delimiter.push(self.trail.len());
    }

    pub(crate) fn get_decision_level(&self) -> usize {
        self.decision_level
    }

    pub(crate) fn synchronise(&mut self, new_decision_level: usize) -> Rev<Drain<'_, T>> {
        marrow_assert_simple!(new_decision_level < self.decision_level);

        let new_trail_len = self.level_delimiter[new_decision_level];

        self.decision_level = new_decision_level;
        self.level_delimiter.truncate(new_decision_level);
        self.trail.drain(new_trail_len..).rev()
    }

    pub(crate) fn push(&mut self, elem: T) {
        self.trail.push(elem)
    }
}

impl<T> Deref for Trail<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.trail
    }
}
