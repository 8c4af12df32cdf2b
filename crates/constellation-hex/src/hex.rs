//! Hexagonal cells in cube coordinates.
//!
//! Cube coordinates use three axes (q, r, s) at 120 degrees with the
//! constraint q + r + s = 0. Every constructor either enforces the
//! constraint or derives s from the other two components, so a `Hex`
//! value is always a valid cell.
//!
//! Directions are named for a flat-topped layout in which "up" is
//! (1, 0, -1). One clockwise step of rotation maps (q, r, s) to
//! (-r, -s, -q), so the six directions are "up" rotated 0..6 times.

use std::ops::{Add, Mul, Neg, Sub};

use crate::{Error, Result};

/// A single cell of the hex grid.
///
/// Ordering is lexicographic on (q, r, s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[i64; 3]", into = "[i64; 3]"))]
pub struct Hex {
    q: i64,
    r: i64,
    s: i64,
}

/// The straight up direction.
pub const UP: Hex = Hex::axial(1, 0);
/// Up and to the right.
pub const UR: Hex = Hex::axial(0, 1);
/// Down and to the right.
pub const DR: Hex = Hex::axial(-1, 1);
/// Straight down.
pub const DN: Hex = Hex::axial(-1, 0);
/// Down and to the left.
pub const DL: Hex = Hex::axial(0, -1);
/// Up and to the left.
pub const UL: Hex = Hex::axial(1, -1);

/// One of the three mirror axes through the origin.
///
/// Each axis is named for the component it leaves untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Q,
    R,
    S,
}

impl Axis {
    /// All three axes.
    pub const ALL: [Axis; 3] = [Axis::Q, Axis::R, Axis::S];
}

impl Hex {
    /// The origin cell.
    pub const ORIGIN: Self = Self { q: 0, r: 0, s: 0 };

    /// The six unit directions, clockwise from up.
    ///
    /// `DIRECTIONS[k]` is `UP.rotate(k)`.
    pub const DIRECTIONS: [Self; 6] = [UP, UR, DR, DN, DL, UL];

    /// Create a cell from all three cube components.
    ///
    /// Fails with [`Error::InvalidCoordinate`] unless q + r + s = 0.
    pub fn new(q: i64, r: i64, s: i64) -> Result<Self> {
        if q + r + s != 0 {
            return Err(Error::InvalidCoordinate { q, r, s });
        }
        Ok(Self { q, r, s })
    }

    /// Create a cell from two components, deriving s = -q - r.
    pub const fn axial(q: i64, r: i64) -> Self {
        Self { q, r, s: -q - r }
    }

    #[inline]
    pub const fn q(&self) -> i64 {
        self.q
    }

    #[inline]
    pub const fn r(&self) -> i64 {
        self.r
    }

    #[inline]
    pub const fn s(&self) -> i64 {
        self.s
    }

    pub const fn is_origin(&self) -> bool {
        self.q == 0 && self.r == 0 && self.s == 0
    }

    /// Multiply every component by `factor`.
    pub const fn scale(self, factor: i64) -> Self {
        Self {
            q: self.q * factor,
            r: self.r * factor,
            s: self.s * factor,
        }
    }

    /// Floor-divide every component by `divisor`.
    ///
    /// The result is only a cell when the division keeps the components
    /// summing to zero; otherwise this fails with
    /// [`Error::InvalidCoordinate`].
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn div_floor(self, divisor: i64) -> Result<Self> {
        Self::new(
            floor_div(self.q, divisor),
            floor_div(self.r, divisor),
            floor_div(self.s, divisor),
        )
    }

    /// Rotate clockwise around the origin by `steps` sixths of a turn.
    ///
    /// Steps are taken modulo 6, so negative steps rotate anticlockwise.
    pub const fn rotate(self, steps: i64) -> Self {
        let Self { q, r, s } = self;
        match steps.rem_euclid(6) {
            0 => self,
            1 => Self { q: -r, r: -s, s: -q },
            2 => Self { q: s, r: q, s: r },
            3 => Self { q: -q, r: -r, s: -s },
            4 => Self { q: r, r: s, s: q },
            _ => Self { q: -s, r: -q, s: -r },
        }
    }

    /// Reflect across one of the three axes through the origin.
    pub const fn reflect(self, axis: Axis) -> Self {
        let Self { q, r, s } = self;
        match axis {
            Axis::Q => Self { q, r: s, s: r },
            Axis::R => Self { q: s, r, s: q },
            Axis::S => Self { q: r, r: q, s },
        }
    }

    /// Distance from the origin in cells: max(|q|, |r|, |s|).
    pub const fn ring(&self) -> u64 {
        let q = self.q.unsigned_abs();
        let r = self.r.unsigned_abs();
        let s = self.s.unsigned_abs();
        let max = if q > r { q } else { r };
        if max > s {
            max
        } else {
            s
        }
    }

    /// Position of this cell on its ring, clockwise from up.
    ///
    /// Ring n has 6n positions: `UP * n` is position 0, `UR * n` is
    /// position n, and so on. The origin is position 0 of ring 0.
    pub fn ring_index(&self) -> u64 {
        let n = self.ring() as i64;
        let Self { q, r, s } = *self;
        // Sector k runs from DIRECTIONS[k] * n towards DIRECTIONS[k + 1] * n,
        // stepping along DIRECTIONS[k + 2].
        let (sector, offset) = if s == -n && q > 0 {
            (0, r)
        } else if r == n && s < 0 {
            (1, -q)
        } else if q == -n && r > 0 {
            (2, s)
        } else if s == n && q < 0 {
            (3, -r)
        } else if r == -n && s > 0 {
            (4, q)
        } else if q == n && r < 0 {
            (5, -s)
        } else {
            // Only the origin falls through every sector test.
            debug_assert!(self.is_origin());
            return 0;
        };
        (sector * n + offset) as u64
    }

    /// Distance in cells between two cells.
    pub fn distance(&self, other: &Self) -> u64 {
        (*self - *other).ring()
    }

    /// The six cells adjacent to this one, clockwise from up.
    pub fn neighbors(&self) -> [Self; 6] {
        Self::DIRECTIONS.map(|d| *self + d)
    }
}

/// Distance in cells between two cells.
pub fn distance(a: Hex, b: Hex) -> u64 {
    a.distance(&b)
}

const fn floor_div(a: i64, b: i64) -> i64 {
    let d = a / b;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        d - 1
    } else {
        d
    }
}

impl Add for Hex {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            q: self.q + other.q,
            r: self.r + other.r,
            s: self.s + other.s,
        }
    }
}

impl Sub for Hex {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            q: self.q - other.q,
            r: self.r - other.r,
            s: self.s - other.s,
        }
    }
}

impl Neg for Hex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            q: -self.q,
            r: -self.r,
            s: -self.s,
        }
    }
}

impl Mul<i64> for Hex {
    type Output = Self;

    #[inline]
    fn mul(self, factor: i64) -> Self {
        self.scale(factor)
    }
}

impl TryFrom<[i64; 3]> for Hex {
    type Error = Error;

    fn try_from([q, r, s]: [i64; 3]) -> Result<Self> {
        Self::new(q, r, s)
    }
}

impl From<Hex> for [i64; 3] {
    fn from(h: Hex) -> Self {
        [h.q, h.r, h.s]
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s)
    }
}
