use super::Constraint;
use crate::asserts::marrow_assert_simple;
use crate::propagators::no_overlap_2d::NoOverlap2DPropagator;
use crate::propagators::no_overlap_2d::Rectangle;
use crate::variables::IntegerVariable;

/// Creates the [`Constraint`] that no two rectangles overlap.
///
/// Rectangle `i` covers `[x_starts[i], x_starts[i] + x_sizes[i])` on the horizontal axis and
/// `[y_starts[i], y_starts[i] + y_sizes[i])` on the vertical axis. Two rectangles may touch, and
/// rectangles with an empty side never conflict.
///
/// All four inputs should have the same length; if this is not the case then this method will
/// panic.
pub fn no_overlap_2d<Var: IntegerVariable + 'static>(
    x_starts: impl IntoIterator<Item = Var>,
    x_sizes: impl IntoIterator<Item = Var>,
    y_starts: impl IntoIterator<Item = Var>,
    y_sizes: impl IntoIterator<Item = Var>,
) -> impl Constraint {
    let x_starts = x_starts.into_iter().collect::<Vec<_>>();
    let x_sizes = x_sizes.into_iter().collect::<Vec<_>>();
    let y_starts = y_starts.into_iter().collect::<Vec<_>>();
    let y_sizes = y_sizes.into_iter().collect::<Vec<_>>();

    marrow_assert_simple!(
        x_starts.len() == x_sizes.len()
            && x_starts.len() == y_starts.len()
            && x_starts.len() == y_sizes.len()
    );

    NoOverlap2DPropagator::new(
        x_starts
            .into_iter()
            .zip(x_sizes)
            .zip(y_starts.into_iter().zip(y_sizes))
            .map(|((x, width), (y, height))| Rectangle {
                x,
                width,
                y,
                height,
            }),
    )
}
