use std::fmt::Debug;

use enumset::EnumSet;

use super::TransformableVariable;
use crate::engine::domain_events::mirror_bound_events;
use crate::engine::domain_events::IntDomainEvent;
use crate::engine::variables::IntegerVariable;
use crate::engine::watch_lists::Watchers;
use crate::engine::Assignments;
use crate::engine::EmptyDomain;
use crate::math::num_ext::NumExt;

/// Models the constraint `y = ax + b`, by expressing the domain of `y` as a transformation of the
/// domain of `x`.
#[derive(Clone, Copy, Hash, Eq, PartialEq)]
pub struct AffineView<Inner> {
    inner: Inner,
    scale: i32,
    offset: i32,
}

impl<Inner> AffineView<Inner> {
    pub fn new(inner: Inner, scale: i32, offset: i32) -> Self {
        assert_ne!(scale, 0, "Multiplication by zero is not invertable");
        AffineView {
            inner,
            scale,
            offset,
        }
    }

    pub fn inner(&self) -> &Inner {
        &self.inner
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    pub fn offset_value(&self) -> i32 {
        self.offset
    }

    fn map(&self, value: i32) -> i32 {
        self.scale * value + self.offset
    }

    /// The value of the inner variable mapping onto `value`, if any.
    fn invert_exact(&self, value: i32) -> Option<i32> {
        let translated = value - self.offset;
        (translated % self.scale == 0).then_some(translated / self.scale)
    }
}

impl<Inner: IntegerVariable> IntegerVariable for AffineView<Inner> {
    type AffineView = Self;

    fn lower_bound(&self, assignments: &Assignments) -> i32 {
        if self.scale < 0 {
            self.map(self.inner.upper_bound(assignments))
        } else {
            self.map(self.inner.lower_bound(assignments))
        }
    }

    fn upper_bound(&self, assignments: &Assignments) -> i32 {
        if self.scale < 0 {
            self.map(self.inner.lower_bound(assignments))
        } else {
            self.map(self.inner.upper_bound(assignments))
        }
    }

    fn contains(&self, assignments: &Assignments, value: i32) -> bool {
        self.invert_exact(value)
            .is_some_and(|inverted| self.inner.contains(assignments, inverted))
    }

    fn iterate_domain(&self, assignments: &Assignments) -> impl Iterator<Item = i32> {
        let mut values = self
            .inner
            .iterate_domain(assignments)
            .map(|value| self.map(value))
            .collect::<Vec<_>>();
        if self.scale < 0 {
            values.reverse();
        }
        values.into_iter()
    }

    fn set_lower_bound(&self, assignments: &mut Assignments, value: i32) -> Result<(), EmptyDomain> {
        let translated = value - self.offset;
        if self.scale < 0 {
            self.inner
                .set_upper_bound(assignments, translated.floor_div(self.scale))
        } else {
            self.inner
                .set_lower_bound(assignments, translated.ceil_div(self.scale))
        }
    }

    fn set_upper_bound(&self, assignments: &mut Assignments, value: i32) -> Result<(), EmptyDomain> {
        let translated = value - self.offset;
        if self.scale < 0 {
            self.inner
                .set_lower_bound(assignments, translated.ceil_div(self.scale))
        } else {
            self.inner
                .set_upper_bound(assignments, translated.floor_div(self.scale))
        }
    }

    fn remove(&self, assignments: &mut Assignments, value: i32) -> Result<(), EmptyDomain> {
        match self.invert_exact(value) {
            Some(inverted) => self.inner.remove(assignments, inverted),
            None => Ok(()),
        }
    }

    fn watch_all(&self, watchers: &mut Watchers<'_>, events: EnumSet<IntDomainEvent>) {
        let events = if self.scale < 0 {
            mirror_bound_events(events)
        } else {
            events
        };
        self.inner.watch_all(watchers, events);
    }
}

impl<Inner: Clone> TransformableVariable<AffineView<Inner>> for AffineView<Inner> {
    fn scaled(&self, scale: i32) -> AffineView<Inner> {
        let mut result = self.clone();
        result.scale *= scale;
        result.offset *= scale;
        result
    }

    fn offset(&self, offset: i32) -> AffineView<Inner> {
        let mut result = self.clone();
        result.offset += offset;
        result
    }
}

impl<Var: Debug> Debug for AffineView<Var> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.scale == -1 {
            write!(f, "-")?;
        } else if self.scale != 1 {
            write!(f, "{} * ", self.scale)?;
        }

        write!(f, "({:?})", self.inner)?;

        match self.offset.cmp(&0) {
            std::cmp::Ordering::Less => write!(f, " - {}", -self.offset)?,
            std::cmp::Ordering::Equal => {}
            std::cmp::Ordering::Greater => write!(f, " + {}", self.offset)?,
        }

        Ok(())
    }
}
