//! Placement of shapes on a flat plane for drawing.
//!
//! Cells map to points with a flat-top hex layout in which [`UP`] points up
//! the page (toward smaller y). Shapes are then arranged on a uniform grid,
//! [`GRID_WIDTH`] to a row, each centered horizontally in its slot.
//!
//! [`UP`]: constellation_hex::UP

use std::ops::{Add, Mul, Sub};

use constellation_hex::Hex;
use constellation_shape::Shape;

/// Pixels per plane unit.
pub const SCALE: f64 = 10.0;

/// Blank space around and between shapes, in plane units.
pub const PAD: f64 = 3.0;

/// Shapes per grid row.
pub const GRID_WIDTH: usize = 20;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

/// Center of `cell` on the plane. Adjacent cells are √3 apart.
pub fn hex_to_point(cell: Hex) -> Point {
    let (q, r) = (cell.q() as f64, cell.r() as f64);
    Point::new(1.5 * r, -(SQRT_3 * q + SQRT_3 / 2.0 * r))
}

/// Smallest axis-aligned box holding every point, as (min, max).
///
/// The empty set has a zero box at the origin.
pub fn bounding_box(points: &[Point]) -> (Point, Point) {
    let Some(&first) = points.first() else {
        return (Point::ORIGIN, Point::ORIGIN);
    };
    points.iter().fold((first, first), |(min, max), p| {
        (
            Point::new(min.x.min(p.x), min.y.min(p.y)),
            Point::new(max.x.max(p.x), max.y.max(p.y)),
        )
    })
}

/// Shapes placed on a shared canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    /// Cell centers of each shape, in input order
    pub shapes: Vec<Vec<Point>>,
    /// Canvas width in plane units
    pub width: f64,
    /// Canvas height in plane units
    pub height: f64,
}

impl Sheet {
    /// Canvas size in whole pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.width * SCALE).round() as u32,
            (self.height * SCALE).round() as u32,
        )
    }
}

/// Lay `shapes` out without overlap in the positive quadrant.
pub fn layout_shapes<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> Sheet {
    let placed: Vec<Vec<Point>> = shapes
        .into_iter()
        .map(|s| s.iter().map(|&h| hex_to_point(h)).collect())
        .collect();
    if placed.is_empty() {
        return Sheet::default();
    }

    let boxes: Vec<(Point, Point)> = placed.iter().map(|p| bounding_box(p)).collect();
    let max_width = boxes.iter().map(|(min, max)| max.x - min.x).fold(0.0, f64::max);
    let max_height = boxes.iter().map(|(min, max)| max.y - min.y).fold(0.0, f64::max);
    let slot_width = max_width + PAD;
    let slot_height = max_height + PAD;

    let mut shapes = Vec::with_capacity(placed.len());
    let (mut column, mut row) = (0usize, 0usize);
    for (points, (min, max)) in placed.into_iter().zip(boxes) {
        let centering = (max_width - (max.x - min.x)) / 2.0;
        let corner = Point::new(
            PAD + slot_width * column as f64 + centering,
            PAD + slot_height * row as f64,
        );
        let offset = corner - min;
        shapes.push(points.into_iter().map(|p| p + offset).collect());

        column += 1;
        if column >= GRID_WIDTH {
            column = 0;
            row += 1;
        }
    }

    let rows = row + usize::from(column > 0);
    let columns = if row > 0 { GRID_WIDTH } else { column };
    Sheet {
        shapes,
        width: PAD + columns as f64 * slot_width,
        height: PAD + rows as f64 * slot_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constellation_hex::{DN, UP, UR};

    const EPSILON: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    fn length(p: Point) -> f64 {
        (p.x * p.x + p.y * p.y).sqrt()
    }

    #[test]
    fn up_points_up_the_page() {
        assert!(close(hex_to_point(Hex::ORIGIN), Point::ORIGIN));
        let up = hex_to_point(UP);
        assert!(up.x.abs() < EPSILON && up.y < 0.0);
        assert!(close(hex_to_point(DN), up * -1.0));
        assert!(hex_to_point(UR).x > 0.0);
    }

    #[test]
    fn neighbors_are_equidistant() {
        for d in Hex::DIRECTIONS {
            assert!((length(hex_to_point(d)) - SQRT_3).abs() < EPSILON);
        }
    }

    #[test]
    fn empty_layout() {
        let sheet = layout_shapes(std::iter::empty());
        assert!(sheet.shapes.is_empty());
        assert_eq!(sheet.pixel_size(), (0, 0));
    }

    #[test]
    fn grid_wraps_after_a_full_row() {
        let domino = Shape::of([Hex::ORIGIN, UP]).into_shape();
        let shapes = vec![domino; GRID_WIDTH + 1];
        let sheet = layout_shapes(&shapes);
        assert_eq!(sheet.shapes.len(), GRID_WIDTH + 1);

        let slot_width = PAD;
        let slot_height = SQRT_3 + PAD;
        assert!((sheet.width - (PAD + GRID_WIDTH as f64 * slot_width)).abs() < EPSILON);
        assert!((sheet.height - (PAD + 2.0 * slot_height)).abs() < EPSILON);

        // First shape of the second row sits under the first of the first row
        let first = bounding_box(&sheet.shapes[0]).0;
        let wrapped = bounding_box(&sheet.shapes[GRID_WIDTH]).0;
        assert!((first.x - wrapped.x).abs() < EPSILON);
        assert!((wrapped.y - first.y - slot_height).abs() < EPSILON);
    }

    #[test]
    fn shapes_stay_on_the_canvas_without_overlap() {
        let shapes = [
            Shape::of([Hex::ORIGIN, UP, UP * 2]).into_shape(),
            Shape::of([Hex::ORIGIN, UP, UR]).into_shape(),
            Shape::of([Hex::ORIGIN, UR, UR * 2, UR * 3]).into_shape(),
        ];
        let sheet = layout_shapes(&shapes);
        let boxes: Vec<_> = sheet.shapes.iter().map(|p| bounding_box(p)).collect();
        for (min, max) in &boxes {
            assert!(min.x >= PAD - EPSILON && min.y >= PAD - EPSILON);
            assert!(max.x <= sheet.width && max.y <= sheet.height);
        }
        for pair in boxes.windows(2) {
            assert!(pair[0].1.x < pair[1].0.x);
        }
    }
}
