/// A task on a unary resource. The processing time is a variable so that the same propagator
/// serves fixed and variable lengths; its lower bound is used for reasoning.
#[derive(Clone, Debug)]
pub(crate) struct DisjunctiveTask<Var> {
    pub(crate) start_time: Var,
    pub(crate) processing_time: Var,
}
