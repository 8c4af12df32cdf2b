//! Constellation Hex Algebra
//!
//! Exact integer arithmetic on a hexagonal grid in cube coordinates.
//!
//! # Coordinates
//!
//! Every cell is a triple (q, r, s) with q + r + s = 0. Cells form a
//! lattice: they add, subtract, negate and scale like vectors, and the
//! twelve-element symmetry group of the hexagon acts on them through six
//! rotations and reflections across three axes.
//!
//! # Rings
//!
//! Cells at the same distance from the origin form a ring. Each cell has a
//! clockwise position on its ring, which lets a whole ring be summarized
//! as one [`RingSignature`]. Canonical shape forms are built by comparing
//! those signatures ring by ring.

mod error;
mod hex;
mod ring;

pub use error::{Error, Result};
pub use hex::{distance, Axis, Hex, DL, DN, DR, UL, UP, UR};
pub use ring::{ring_cell, slots_in_ring, Ring, RingSignature};

/// Number of distinct rotations of the grid (including the identity)
pub const ROTATIONS: usize = 6;

/// Number of mirror axes through the origin
pub const MIRROR_AXES: usize = 3;

const _: () = assert!(ROTATIONS == Hex::DIRECTIONS.len());
const _: () = assert!(MIRROR_AXES == Axis::ALL.len());
