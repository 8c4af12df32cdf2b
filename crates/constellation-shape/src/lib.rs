//! Constellation Shapes
//!
//! Finite sets of hex cells, their canonical forms, and a geometric
//! distance between them.
//!
//! # Canonical Form
//!
//! Two shapes describe the same piece when one is a translation and
//! rotation of the other. [`Shape::normalize`] maps every member of such a
//! class to one representative, a [`CanonicalShape`], whose lowest cell is
//! the origin. Mirror images are different pieces.
//!
//! # Similarity
//!
//! [`shape_distance`] pairs the cells of two equal-size shapes one to one
//! so that the sum of squared cell distances is minimal. The asymmetry of a
//! shape is the smallest such distance between the shape and one of its
//! own rotations or reflections; a [`Similarity`] value memoizes both.

mod assignment;
mod canonical;
mod error;
mod shape;
mod similarity;

pub use assignment::{min_cost_assignment, Assignment, CostMatrix};
pub use canonical::normalize;
pub use error::{Error, Result};
pub use shape::{CanonicalShape, Shape};
pub use similarity::{asymmetry, min_shape_distance, shape_distance, Similarity};
