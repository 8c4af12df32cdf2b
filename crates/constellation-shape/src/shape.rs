//! Shapes: finite sets of hex cells.
//!
//! A [`Shape`] is an unordered, duplicate-free set of cells. Cells are kept
//! in a `BTreeSet`, so iteration always follows the (q, r, s) ordering and
//! two shapes with the same cells iterate identically.
//!
//! A [`CanonicalShape`] is a shape known to be in normal form (see
//! [`Shape::normalize`]). It dereferences to [`Shape`] for every read-only
//! operation.

use std::collections::BTreeSet;
use std::ops::Deref;

use constellation_hex::{Axis, Hex};

use crate::Result;

/// A finite set of hex cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Shape {
    cells: BTreeSet<Hex>,
}

impl Shape {
    /// The empty shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized shape of the given cells.
    pub fn of(cells: impl IntoIterator<Item = Hex>) -> CanonicalShape {
        cells.into_iter().collect::<Shape>().normalize()
    }

    /// Build a shape from raw (q, r, s) triples, validating each one.
    pub fn from_coords(coords: impl IntoIterator<Item = [i64; 3]>) -> Result<Self> {
        let mut cells = BTreeSet::new();
        for coord in coords {
            cells.insert(Hex::try_from(coord)?);
        }
        Ok(Self { cells })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: &Hex) -> bool {
        self.cells.contains(cell)
    }

    /// Cells in (q, r, s) order.
    pub fn iter(&self) -> impl Iterator<Item = &Hex> + '_ {
        self.cells.iter()
    }

    pub fn cells(&self) -> &BTreeSet<Hex> {
        &self.cells
    }

    /// The lowest cell in (q, r, s) order.
    pub fn first(&self) -> Option<Hex> {
        self.cells.first().copied()
    }

    /// This shape plus one more cell.
    pub fn with(&self, cell: Hex) -> Self {
        let mut cells = self.cells.clone();
        cells.insert(cell);
        Self { cells }
    }

    /// Every cell translated by `offset`.
    pub fn translate(&self, offset: Hex) -> Self {
        self.map(|h| h + offset)
    }

    /// Clockwise rotation around the origin (not normalized).
    pub fn rotate(&self, steps: i64) -> Self {
        self.map(|h| h.rotate(steps))
    }

    /// Reflection across an axis through the origin (not normalized).
    pub fn reflect(&self, axis: Axis) -> Self {
        self.map(|h| h.reflect(axis))
    }

    /// Every cell multiplied by `factor`.
    pub fn scale_up(&self, factor: i64) -> Self {
        self.map(|h| h * factor)
    }

    /// Every cell floor-divided by `factor`.
    ///
    /// Fails if any divided cell breaks the cube invariant.
    pub fn scale_down(&self, factor: i64) -> Result<Self> {
        let mut cells = BTreeSet::new();
        for h in &self.cells {
            cells.insert(h.div_floor(factor)?);
        }
        Ok(Self { cells })
    }

    /// Vector sum of all cells.
    pub fn sum(&self) -> Hex {
        self.cells.iter().fold(Hex::ORIGIN, |acc, &h| acc + h)
    }

    /// Largest ring occupied by any cell.
    pub fn outer_ring(&self) -> u64 {
        self.cells.iter().map(Hex::ring).max().unwrap_or(0)
    }

    /// Cells adjacent to the shape but not part of it, in (q, r, s) order.
    pub fn neighbors(&self) -> BTreeSet<Hex> {
        self.cells
            .iter()
            .flat_map(Hex::neighbors)
            .filter(|n| !self.cells.contains(n))
            .collect()
    }

    /// Whether every cell can reach every other through adjacent cells.
    ///
    /// The empty shape counts as connected.
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.first() else {
            return true;
        };
        let mut seen = BTreeSet::from([start]);
        let mut stack = vec![start];
        while let Some(cell) = stack.pop() {
            for n in cell.neighbors() {
                if self.cells.contains(&n) && seen.insert(n) {
                    stack.push(n);
                }
            }
        }
        seen.len() == self.cells.len()
    }

    fn map(&self, f: impl Fn(Hex) -> Hex) -> Self {
        Self {
            cells: self.cells.iter().map(|&h| f(h)).collect(),
        }
    }
}

impl FromIterator<Hex> for Shape {
    fn from_iter<I: IntoIterator<Item = Hex>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Shape {
    type Item = &'a Hex;
    type IntoIter = std::collections::btree_set::Iter<'a, Hex>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "}}")
    }
}

/// A shape in normal form: unique per translation and rotation class.
///
/// Only [`Shape::normalize`] creates these, so equality of two canonical
/// shapes is equality of the pieces they describe.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Shape", into = "Shape"))]
pub struct CanonicalShape(Shape);

impl CanonicalShape {
    /// Wrap a shape already known to be normalized.
    pub(crate) fn new_unchecked(shape: Shape) -> Self {
        Self(shape)
    }

    pub fn as_shape(&self) -> &Shape {
        &self.0
    }

    pub fn into_shape(self) -> Shape {
        self.0
    }
}

impl Deref for CanonicalShape {
    type Target = Shape;

    fn deref(&self) -> &Shape {
        &self.0
    }
}

impl AsRef<Shape> for CanonicalShape {
    fn as_ref(&self) -> &Shape {
        &self.0
    }
}

impl From<Shape> for CanonicalShape {
    fn from(shape: Shape) -> Self {
        shape.normalize()
    }
}

impl From<CanonicalShape> for Shape {
    fn from(shape: CanonicalShape) -> Self {
        shape.0
    }
}

impl std::fmt::Display for CanonicalShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
