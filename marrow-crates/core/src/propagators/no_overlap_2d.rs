//! Propagation for two-dimensional non-overlap: placed rectangles may not share any area.
use itertools::Itertools;

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
use crate::propagators::precedence::can_precede;
use crate::propagators::precedence::enforce_precedence;

/// A rectangle whose lower-left corner is `(x, y)`. The sizes are variables; their lower bounds
/// are used for reasoning.
#[derive(Clone, Debug)]
pub(crate) struct Rectangle<Var> {
    pub(crate) x: Var,
    pub(crate) width: Var,
    pub(crate) y: Var,
    pub(crate) height: Var,
}

/// One of the four ways in which two rectangles can be apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Separation {
    FirstLeftOfSecond,
    SecondLeftOfFirst,
    FirstBelowSecond,
    SecondBelowFirst,
}

const SEPARATIONS: [Separation; 4] = [
    Separation::FirstLeftOfSecond,
    Separation::SecondLeftOfFirst,
    Separation::FirstBelowSecond,
    Separation::SecondBelowFirst,
];

/// For every pair of rectangles, the propagator determines which of the four separations are still
/// possible. If none is, the constraint is violated; if exactly one is, it is enforced.
#[derive(Clone, Debug)]
pub(crate) struct NoOverlap2DPropagator<Var> {
    rectangles: Box<[Rectangle<Var>]>,
}

/// The sizes of a rectangle in the current domains.
#[derive(Clone, Copy, Debug)]
struct Extent {
    width: i32,
    height: i32,
}

impl Extent {
    fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl<Var: IntegerVariable> NoOverlap2DPropagator<Var> {
    pub(crate) fn new(rectangles: impl IntoIterator<Item = Rectangle<Var>>) -> Self {
        NoOverlap2DPropagator {
            rectangles: rectangles.into_iter().collect(),
        }
    }

    fn extent(domains: &impl ReadDomains, rectangle: &Rectangle<Var>) -> Extent {
        Extent {
            width: domains.lower_bound(&rectangle.width),
            height: domains.lower_bound(&rectangle.height),
        }
    }

    fn is_possible(
        domains: &impl ReadDomains,
        separation: Separation,
        (first, first_extent): (&Rectangle<Var>, Extent),
        (second, second_extent): (&Rectangle<Var>, Extent),
    ) -> bool {
        match separation {
            Separation::FirstLeftOfSecond => {
                can_precede(domains, &first.x, first_extent.width, &second.x)
            }
            Separation::SecondLeftOfFirst => {
                can_precede(domains, &second.x, second_extent.width, &first.x)
            }
            Separation::FirstBelowSecond => {
                can_precede(domains, &first.y, first_extent.height, &second.y)
            }
            Separation::SecondBelowFirst => {
                can_precede(domains, &second.y, second_extent.height, &first.y)
            }
        }
    }

    /// The separations that are still possible for every pair of non-empty rectangles.
    fn possible_separations<'a>(
        &'a self,
        domains: &'a impl ReadDomains,
    ) -> impl Iterator<Item = (usize, usize, Vec<Separation>)> + 'a {
        self.rectangles
            .iter()
            .enumerate()
            .tuple_combinations()
            .filter_map(move |((first_index, first), (second_index, second))| {
                let first_extent = Self::extent(domains, first);
                let second_extent = Self::extent(domains, second);
                if first_extent.is_empty() || second_extent.is_empty() {
                    return None;
                }

                let possible = SEPARATIONS
                    .into_iter()
                    .filter(|&separation| {
                        Self::is_possible(
                            domains,
                            separation,
                            (first, first_extent),
                            (second, second_extent),
                        )
                    })
                    .collect::<Vec<_>>();

                Some((first_index, second_index, possible))
            })
    }
}

impl<Var: IntegerVariable + 'static> Propagator for NoOverlap2DPropagator<Var> {
    fn name(&self) -> &'static str {
        "NoOverlap2D"
    }

    fn priority(&self) -> Priority {
        Priority::Low
    }

    fn initialise_at_root(
        &mut self,
        context: &mut InitialisationContext<'_>,
    ) -> Result<(), Inconsistency> {
        for rectangle in self.rectangles.iter() {
            context.register(&rectangle.x, DomainEvents::BOUNDS);
            context.register(&rectangle.y, DomainEvents::BOUNDS);
            context.register(&rectangle.width, DomainEvents::LOWER_BOUND);
            context.register(&rectangle.height, DomainEvents::LOWER_BOUND);
        }
        Ok(())
    }

    fn detect_inconsistency(&self, domains: Domains<'_>) -> Option<Inconsistency> {
        self.possible_separations(&domains)
            .any(|(_, _, possible)| possible.is_empty())
            .then_some(Inconsistency::Conflict)
    }

    fn propagate_from_scratch(&self, mut context: PropagationContext<'_>) -> PropagationStatusCP {
        let forced = self
            .possible_separations(&context)
            .filter(|(_, _, possible)| possible.len() <= 1)
            .collect::<Vec<_>>();

        for (first_index, second_index, possible) in forced {
            let Some(&separation) = possible.first() else {
                return Err(Inconsistency::Conflict);
            };

            let first = &self.rectangles[first_index];
            let second = &self.rectangles[second_index];
            let first_extent = Self::extent(&context, first);
            let second_extent = Self::extent(&context, second);

            match separation {
                Separation::FirstLeftOfSecond => {
                    enforce_precedence(&mut context, &first.x, first_extent.width, &second.x)?
                }
                Separation::SecondLeftOfFirst => {
                    enforce_precedence(&mut context, &second.x, second_extent.width, &first.x)?
                }
                Separation::FirstBelowSecond => {
                    enforce_precedence(&mut context, &first.y, first_extent.height, &second.y)?
                }
                Separation::SecondBelowFirst => {
                    enforce_precedence(&mut context, &second.y, second_extent.height, &first.y)?
                }
            }
        }

        Ok(())
    }
}
