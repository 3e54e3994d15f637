//! The interface between the solver and the propagators.
//!
//! A propagator is registered once through [`InitialisationContext`], after which it is invoked
//! with a [`PropagationContext`] whenever one of the domains it watches changes.
mod contexts;
mod propagator;
mod store;

pub(crate) use contexts::Domains;
pub(crate) use contexts::InitialisationContext;
pub(crate) use contexts::PropagationContext;
pub(crate) use contexts::ReadDomains;
pub(crate) use propagator::Priority;
pub(crate) use propagator::Propagator;
pub(crate) use store::PropagatorId;
pub(crate) use store::PropagatorStore;
