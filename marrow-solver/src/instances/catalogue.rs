use crate::families::Dimensions;
use crate::families::PackingInstance;
use crate::families::PerfectSquaredSquareInstance;
use crate::families::SquarePackingInstance;
use crate::InstanceError;

/// Five rectangles in a 6x7 container.
pub fn demo_packing_instance() -> Result<PackingInstance, InstanceError> {
    let rectangles = [(2, 3), (3, 2), (1, 4), (5, 1), (3, 5)]
        .into_iter()
        .map(|(width, height)| Dimensions::new(width, height))
        .collect();
    PackingInstance::new(Dimensions::new(6, 7), rectangles)
}

/// Rectangles tiled exactly by squares of distinct sides: the container and the sides.
pub const PERFECT_RECTANGLES: [((i64, i64), &[i64]); 2] = [
    ((32, 33), &[1, 4, 7, 8, 9, 10, 14, 15, 18]),
    ((65, 47), &[3, 5, 6, 11, 17, 19, 22, 24, 23, 25]),
];

/// Simple perfect squared squares of orders 21 to 25, from Bouwkamp and Duijvestijn (1992),
/// "Catalogue of simple perfect squared squares of orders 21 through 25".
pub const PERFECT_SQUARED_SQUARES: [&[i64]; 10] = [
    &[2, 4, 6, 7, 8, 9, 11, 15, 16, 17, 18, 19, 24, 25, 27, 29, 33, 35, 37, 42, 50],
    &[2, 3, 4, 6, 7, 8, 12, 13, 14, 15, 16, 17, 18, 21, 22, 23, 24, 26, 27, 28, 50, 60],
    &[1, 2, 3, 4, 6, 8, 9, 12, 14, 16, 17, 18, 19, 21, 22, 23, 24, 26, 27, 28, 50, 60],
    &[4, 8, 9, 10, 12, 14, 17, 19, 26, 28, 31, 35, 36, 37, 41, 47, 49, 57, 59, 62, 71, 86],
    &[1, 2, 3, 4, 5, 7, 8, 10, 12, 13, 14, 15, 16, 19, 21, 28, 29, 31, 32, 37, 38, 41, 44],
    &[1, 2, 7, 8, 12, 13, 14, 15, 16, 18, 19, 20, 21, 22, 24, 26, 27, 28, 32, 33, 38, 59, 80],
    &[
        1, 15, 17, 24, 26, 30, 31, 38, 47, 48, 49, 50, 53, 56, 58, 68, 83, 89, 91, 112, 120, 123,
        129,
    ],
    &[3, 4, 5, 6, 8, 9, 10, 12, 13, 14, 15, 16, 17, 19, 20, 23, 25, 32, 33, 34, 40, 41, 46, 47],
    &[1, 2, 3, 4, 5, 8, 9, 14, 16, 18, 20, 29, 30, 31, 33, 35, 38, 39, 43, 51, 55, 56, 64, 81],
    &[
        3, 4, 5, 6, 8, 9, 10, 12, 13, 14, 15, 16, 17, 19, 20, 23, 25, 27, 32, 33, 34, 40, 41, 73,
        74,
    ],
];

/// The perfect rectangle at `index` of [`PERFECT_RECTANGLES`].
pub fn perfect_rectangle(index: usize) -> Option<Result<SquarePackingInstance, InstanceError>> {
    PERFECT_RECTANGLES
        .get(index)
        .map(|&((width, height), sides)| {
            SquarePackingInstance::new(Dimensions::new(width, height), sides.iter().copied())
        })
}

/// The perfect squared square at `index` of [`PERFECT_SQUARED_SQUARES`].
pub fn perfect_squared_square(
    index: usize,
) -> Option<Result<PerfectSquaredSquareInstance, InstanceError>> {
    PERFECT_SQUARED_SQUARES
        .get(index)
        .map(|sides| PerfectSquaredSquareInstance::new(sides.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_perfect_squared_square_has_a_square_area() {
        let sides = (0..PERFECT_SQUARED_SQUARES.len())
            .map(|index| perfect_squared_square(index).unwrap().unwrap().side())
            .collect::<Vec<_>>();

        assert_eq!(vec![112, 110, 110, 192, 110, 139, 332, 120, 175, 147], sides);
        assert!(perfect_squared_square(PERFECT_SQUARED_SQUARES.len()).is_none());
    }

    #[test]
    fn perfect_rectangles_fill_their_container() {
        for ((width, height), sides) in PERFECT_RECTANGLES {
            assert_eq!(width * height, sides.iter().map(|side| side * side).sum::<i64>());
        }
        assert!(perfect_rectangle(0).unwrap().is_ok());
    }

    #[test]
    fn the_demo_instance_has_five_rectangles() {
        let instance = demo_packing_instance().unwrap();

        assert_eq!(Dimensions::new(6, 7), instance.container());
        assert_eq!(5, instance.rectangles().len());
    }
}
