use std::cmp::Reverse;

use itertools::Itertools;

use super::value_in_range;
use super::ModelBuilder;
use super::SolutionExtractor;
use crate::model::Assignment;
use crate::model::IntVar;
use crate::model::IntervalSize;
use crate::model::Model;
use crate::model::VariableSelection;
use crate::InstanceError;
use crate::MarrowError;
use crate::ValidationError;

/// The width and height of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: i64,
    pub height: i64,
}

impl Dimensions {
    pub fn new(width: i64, height: i64) -> Dimensions {
        Dimensions { width, height }
    }

    pub fn square(side: i64) -> Dimensions {
        Dimensions::new(side, side)
    }

    /// `None` when the area does not fit in an `i64`.
    pub fn area(&self) -> Option<i64> {
        self.width.checked_mul(self.height)
    }
}

/// Pack rectangles into a container without overlap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackingInstance {
    container: Dimensions,
    rectangles: Vec<Dimensions>,
    allow_rotation: bool,
}

impl PackingInstance {
    pub fn new(
        container: Dimensions,
        rectangles: Vec<Dimensions>,
    ) -> Result<PackingInstance, InstanceError> {
        if container.width <= 0 || container.height <= 0 {
            return Err(InstanceError::InvalidContainer {
                width: container.width,
                height: container.height,
            });
        }
        if container.area().is_none() {
            return Err(InstanceError::Overflow("container area"));
        }

        for (index, rectangle) in rectangles.iter().enumerate() {
            if rectangle.width <= 0 || rectangle.height <= 0 {
                return Err(InstanceError::InvalidRectangle {
                    index,
                    width: rectangle.width,
                    height: rectangle.height,
                });
            }

            if rectangle.width > container.width || rectangle.height > container.height {
                return Err(InstanceError::RectangleTooLarge {
                    index,
                    width: rectangle.width,
                    height: rectangle.height,
                    container_width: container.width,
                    container_height: container.height,
                });
            }
        }

        Ok(PackingInstance {
            container,
            rectangles,
            allow_rotation: false,
        })
    }

    /// Allows rectangles to be turned by 90 degrees. Not supported by the [`Packing`] model.
    pub fn with_rotation(mut self) -> PackingInstance {
        self.allow_rotation = true;
        self
    }

    pub fn container(&self) -> Dimensions {
        self.container
    }

    pub fn rectangles(&self) -> &[Dimensions] {
        &self.rectangles
    }

    pub fn allows_rotation(&self) -> bool {
        self.allow_rotation
    }
}

/// Pack squares into a rectangular container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquarePackingInstance {
    packing: PackingInstance,
}

impl SquarePackingInstance {
    pub fn new(
        container: Dimensions,
        sides: impl IntoIterator<Item = i64>,
    ) -> Result<SquarePackingInstance, InstanceError> {
        let packing =
            PackingInstance::new(container, sides.into_iter().map(Dimensions::square).collect())?;
        Ok(SquarePackingInstance { packing })
    }

    pub fn as_packing(&self) -> &PackingInstance {
        &self.packing
    }
}

/// Tile a square with squares of the given sides; the side of the container follows from the
/// total area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PerfectSquaredSquareInstance {
    side: i64,
    packing: PackingInstance,
}

impl PerfectSquaredSquareInstance {
    pub fn new(sides: Vec<i64>) -> Result<PerfectSquaredSquareInstance, InstanceError> {
        if sides.is_empty() {
            return Err(InstanceError::Empty("square"));
        }
        if let Some((index, &side)) = sides.iter().find_position(|&&side| side <= 0) {
            return Err(InstanceError::InvalidRectangle {
                index,
                width: side,
                height: side,
            });
        }

        let area = sides
            .iter()
            .try_fold(0_i64, |area, &side| {
                side.checked_mul(side)
                    .and_then(|square| area.checked_add(square))
            })
            .ok_or(InstanceError::Overflow("summed area"))?;
        let side = integer_square_root(area);
        if side * side != area {
            return Err(InstanceError::NotAPerfectSquare { area });
        }

        let packing = PackingInstance::new(
            Dimensions::square(side),
            sides.into_iter().map(Dimensions::square).collect(),
        )?;
        Ok(PerfectSquaredSquareInstance { side, packing })
    }

    /// The side of the tiled square.
    pub fn side(&self) -> i64 {
        self.side
    }

    pub fn as_packing(&self) -> &PackingInstance {
        &self.packing
    }
}

/// The largest `root` with `root * root <= value`, for `value >= 0`.
fn integer_square_root(value: i64) -> i64 {
    let square_at_most = |root: i64| root.checked_mul(root).is_some_and(|square| square <= value);

    let mut root = (value as f64).sqrt() as i64;
    while !square_at_most(root) {
        root -= 1;
    }
    while square_at_most(root + 1) {
        root += 1;
    }
    root
}

/// The lower-left corner of every rectangle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackingHandles {
    pub x: Vec<IntVar>,
    pub y: Vec<IntVar>,
}

/// Where a rectangle was placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Placement {
    fn overlaps(&self, other: &Placement) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// One placement per rectangle, in the order of the instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PackingSolution {
    pub container: Dimensions,
    pub placements: Vec<Placement>,
}

/// The lower-left corner of every rectangle ranges over the positions where it fits in the
/// container; the x- and y-projections of the rectangles may not overlap both at once.
#[derive(Clone, Copy, Debug, Default)]
pub struct Packing;

impl ModelBuilder for Packing {
    type Instance = PackingInstance;
    type Handles = PackingHandles;

    fn build(&self, instance: &PackingInstance) -> Result<(Model, PackingHandles), MarrowError> {
        if instance.allow_rotation {
            return Err(MarrowError::Unsupported("packing with rotation"));
        }

        let container = instance.container;
        let mut model = Model::default();
        let mut x = Vec::with_capacity(instance.rectangles.len());
        let mut y = Vec::with_capacity(instance.rectangles.len());
        let mut x_intervals = Vec::with_capacity(instance.rectangles.len());
        let mut y_intervals = Vec::with_capacity(instance.rectangles.len());

        for (index, rectangle) in instance.rectangles.iter().enumerate() {
            let x_k =
                model.new_int_var(0, container.width - rectangle.width, format!("x[{index}]"))?;
            let y_k =
                model.new_int_var(0, container.height - rectangle.height, format!("y[{index}]"))?;

            x_intervals.push(model.new_interval(x_k, IntervalSize::Fixed(rectangle.width))?);
            y_intervals.push(model.new_interval(y_k, IntervalSize::Fixed(rectangle.height))?);
            x.push(x_k);
            y.push(y_k);
        }

        model.add_no_overlap_2d(x_intervals, y_intervals)?;

        // Largest rectangles first, each placed as low and as far left as possible.
        let by_decreasing_area = (0..instance.rectangles.len())
            .sorted_by_key(|&index| Reverse(instance.rectangles[index].area()));
        model.suggest_decision_strategy(
            by_decreasing_area.flat_map(|index| [y[index], x[index]]),
            VariableSelection::InputOrder,
        )?;

        Ok((model, PackingHandles { x, y }))
    }
}

impl SolutionExtractor for Packing {
    type Solution = PackingSolution;

    fn extract(
        &self,
        instance: &PackingInstance,
        handles: &PackingHandles,
        assignment: &Assignment,
    ) -> Result<PackingSolution, ValidationError> {
        let placements = instance
            .rectangles
            .iter()
            .enumerate()
            .map(|(index, rectangle)| {
                Ok(Placement {
                    x: value_in_range(assignment, handles.x[index], 0, i64::MAX, || {
                        format!("x[{index}]")
                    })?,
                    y: value_in_range(assignment, handles.y[index], 0, i64::MAX, || {
                        format!("y[{index}]")
                    })?,
                    width: rectangle.width,
                    height: rectangle.height,
                })
            })
            .collect::<Result<_, ValidationError>>()?;

        Ok(PackingSolution {
            container: instance.container,
            placements,
        })
    }

    fn validate(
        &self,
        instance: &PackingInstance,
        solution: &PackingSolution,
    ) -> Result<(), ValidationError> {
        if solution.placements.len() != instance.rectangles.len() {
            return Err(ValidationError::MissingValue(format!(
                "x[{}]",
                solution.placements.len().min(instance.rectangles.len())
            )));
        }

        let container = instance.container;
        for (index, placement) in solution.placements.iter().enumerate() {
            if placement.x < 0
                || placement.y < 0
                || placement.x.saturating_add(placement.width) > container.width
                || placement.y.saturating_add(placement.height) > container.height
            {
                return Err(ValidationError::PlacementOutOfBounds(index));
            }
        }

        for ((first, first_placement), (second, second_placement)) in
            solution.placements.iter().enumerate().tuple_combinations()
        {
            if first_placement.overlaps(second_placement) {
                return Err(ValidationError::RectanglesOverlap { first, second });
            }
        }

        Ok(())
    }
}
