//! Geometric admissibility filters and triangle counting.

use std::collections::BTreeMap;

use constellation_hex::{Hex, UL, UP, UR};
use constellation_shape::Shape;

/// Largest bounding extent of `shape` over the three pairs of axes.
///
/// Lengths are doubled so they stay integral: a single cell measures 2 and
/// half a cell measures 1. The empty shape measures 0.
pub fn max_extent(shape: &Shape) -> i64 {
    let span = |coord: fn(&Hex) -> i64| {
        let min = shape.iter().map(coord).min().unwrap_or(0);
        let max = shape.iter().map(coord).max().unwrap_or(0);
        max - min
    };
    let (q, r, s) = (span(Hex::q), span(Hex::r), span(Hex::s));
    (q + r).max(q + s).max(r + s)
}

/// Length of the longest run of adjacent cells along one grid axis.
///
/// Cells sharing one coordinate lie on a line; a run is a stretch of such
/// cells whose second coordinate increases by one at each step.
pub fn longest_line(shape: &Shape) -> usize {
    let axes: [(fn(&Hex) -> i64, fn(&Hex) -> i64); 3] =
        [(Hex::q, Hex::r), (Hex::r, Hex::s), (Hex::s, Hex::q)];

    let mut longest = 0;
    for (line, along) in axes {
        let mut lines: BTreeMap<i64, Vec<i64>> = BTreeMap::new();
        for cell in shape {
            lines.entry(line(cell)).or_default().push(along(cell));
        }
        for positions in lines.values_mut() {
            positions.sort_unstable();
            let mut run = 0;
            let mut last = None;
            for &p in positions.iter() {
                run = match last {
                    Some(prev) if p - prev == 1 => run + 1,
                    _ => 1,
                };
                last = Some(p);
                longest = longest.max(run);
            }
        }
    }
    longest
}

/// Number of unit triangles: three mutually adjacent cells.
///
/// Each triangle is counted once, from the cell whose up neighbor closes it
/// with either the up-right or the up-left neighbor.
pub fn num_triangles(shape: &Shape) -> usize {
    shape
        .iter()
        .filter(|&&h| shape.contains(&(h + UP)))
        .map(|&h| usize::from(shape.contains(&(h + UR))) + usize::from(shape.contains(&(h + UL))))
        .sum()
}

/// Size and spindliness bounds a shape must meet to be kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admissibility {
    /// Largest allowed [`max_extent`]
    pub max_extent: i64,
    /// [`longest_line`] must be below this
    pub max_line: usize,
    /// [`longest_line`] must be at least this...
    pub min_line: usize,
    /// ...for shapes of at least this many cells
    pub min_line_from_size: usize,
}

impl Admissibility {
    /// Whether `shape` passes every filter.
    pub fn admits(&self, shape: &Shape) -> bool {
        if max_extent(shape) > self.max_extent {
            return false;
        }
        let line = longest_line(shape);
        if line >= self.max_line {
            return false;
        }
        shape.len() < self.min_line_from_size || line >= self.min_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constellation_hex::{DL, DN, DR};

    fn shape(cells: &[Hex]) -> Shape {
        cells.iter().copied().collect()
    }

    fn flower() -> Shape {
        shape(&[Hex::ORIGIN, UP, UR, DR, DN, DL, UL])
    }

    #[test]
    fn extent_of_small_shapes() {
        assert_eq!(max_extent(&Shape::new()), 0);
        assert_eq!(max_extent(&shape(&[Hex::ORIGIN])), 0);
        assert_eq!(max_extent(&shape(&[Hex::ORIGIN, UP])), 2);
        assert_eq!(max_extent(&shape(&[Hex::ORIGIN, UP, UP * 2])), 4);
        assert_eq!(max_extent(&flower()), 4);
    }

    #[test]
    fn extent_ignores_translation() {
        let s = shape(&[Hex::ORIGIN, UP, UR, UR * 2 + DR]);
        assert_eq!(max_extent(&s), max_extent(&s.translate(Hex::axial(-9, 4))));
    }

    #[test]
    fn longest_line_along_each_axis() {
        assert_eq!(longest_line(&shape(&[Hex::ORIGIN])), 1);
        for d in [UP, UR, DR] {
            let line = shape(&[Hex::ORIGIN, d, d * 2, d * 3]);
            assert_eq!(longest_line(&line), 4, "direction {d}");
        }
        assert_eq!(longest_line(&flower()), 3);
    }

    #[test]
    fn gaps_break_lines() {
        let s = shape(&[Hex::ORIGIN, UP, UP * 3, UP * 4, UP * 5]);
        assert_eq!(longest_line(&s), 3);
    }

    #[test]
    fn triangles() {
        assert_eq!(num_triangles(&shape(&[Hex::ORIGIN, UP, UR])), 1);
        assert_eq!(num_triangles(&shape(&[Hex::ORIGIN, UP, UL])), 1);
        assert_eq!(num_triangles(&shape(&[Hex::ORIGIN, UP, UP * 2])), 0);
        assert_eq!(num_triangles(&flower()), 6);
    }

    #[test]
    fn admissibility_bounds() {
        let rules = Admissibility {
            max_extent: 8,
            max_line: 5,
            min_line: 3,
            min_line_from_size: 4,
        };
        // Too long a line
        assert!(!rules.admits(&shape(&[Hex::ORIGIN, UP, UP * 2, UP * 3, UP * 4])));
        // Small shapes skip the minimum line check
        assert!(rules.admits(&shape(&[Hex::ORIGIN, UP, UR])));
        // A zig-zag of four cells has no run of three
        let zigzag = shape(&[Hex::ORIGIN, UP, UP + UR, UP * 2 + UR]);
        assert_eq!(longest_line(&zigzag), 2);
        assert!(!rules.admits(&zigzag));
        // A wide spread exceeds the extent bound
        let wide = shape(&[
            Hex::ORIGIN,
            UP,
            UP + UR,
            UP + UR * 2,
            UP * 2 + UR * 2,
            UP * 3 + UR * 2,
            UP * 3 + UR * 3,
        ]);
        assert!(max_extent(&wide) > 8);
        assert!(!rules.admits(&wide));
    }
}
