//! Geometric similarity between shapes of equal size.
//!
//! The distance between two shapes is the cost of the cheapest one-to-one
//! pairing of their cells, where pairing two cells costs the square of
//! their hex distance. From that come the translation-minimized distance
//! and the asymmetry score used to rank pieces.
//!
//! Every function here is pure. [`Similarity`] memoizes distances and
//! asymmetry scores for the lifetime of one caller-owned value; the free
//! functions compute from scratch.

use std::collections::HashMap;

use constellation_hex::{Axis, Hex, ROTATIONS};

use crate::assignment::{min_cost_assignment, CostMatrix};
use crate::{Error, Result, Shape};

/// Caller-owned memo of distances and asymmetry scores.
#[derive(Debug, Default)]
pub struct Similarity {
    distances: HashMap<(Shape, Shape), u64>,
    asymmetries: HashMap<Shape, u64>,
}

impl Similarity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum total squared cell distance over all pairings of `a` with `b`.
    ///
    /// Fails with [`Error::SizeMismatch`] if the shapes differ in size.
    pub fn shape_distance(&mut self, a: &Shape, b: &Shape) -> Result<u64> {
        check_sizes(a, b)?;
        Ok(self.cached_cost(a, b))
    }

    /// [`Self::shape_distance`] minimized over unit translations of `a`.
    ///
    /// Greedy descent: move `a` one cell in whichever direction lowers the
    /// distance most, until no direction improves it.
    pub fn min_shape_distance(&mut self, a: &Shape, b: &Shape) -> Result<u64> {
        check_sizes(a, b)?;
        Ok(self.descend(a, b))
    }

    /// Smallest distance between the normalized shape and any of its three
    /// reflections.
    pub fn mirror_asymmetry(&mut self, shape: &Shape) -> u64 {
        let norm = shape.normalize();
        Axis::ALL
            .iter()
            .map(|&axis| self.descend(&norm, &norm.reflect(axis)))
            .min()
            .unwrap_or(0)
    }

    /// Smallest distance between the normalized shape and any of its five
    /// non-trivial rotations.
    pub fn rotational_asymmetry(&mut self, shape: &Shape) -> u64 {
        let norm = shape.normalize();
        (1..ROTATIONS as i64)
            .map(|steps| self.descend(&norm, &norm.rotate(steps)))
            .min()
            .unwrap_or(0)
    }

    /// The lesser of mirror and rotational asymmetry. Zero for any shape
    /// with a rotational or mirror symmetry.
    pub fn asymmetry(&mut self, shape: &Shape) -> u64 {
        if let Some(&a) = self.asymmetries.get(shape) {
            return a;
        }
        let a = self
            .mirror_asymmetry(shape)
            .min(self.rotational_asymmetry(shape));
        self.asymmetries.insert(shape.clone(), a);
        a
    }

    /// Number of memoized shape pairs.
    pub fn cached_distances(&self) -> usize {
        self.distances.len()
    }

    fn cached_cost(&mut self, a: &Shape, b: &Shape) -> u64 {
        let key = (a.clone(), b.clone());
        if let Some(&d) = self.distances.get(&key) {
            return d;
        }
        let d = assignment_cost(a, b);
        self.distances.insert(key, d);
        d
    }

    /// Translation descent for shapes already known to be the same size.
    fn descend(&mut self, a: &Shape, b: &Shape) -> u64 {
        debug_assert_eq!(a.len(), b.len());
        let mut current = a.clone();
        let mut best = self.cached_cost(&current, b);
        loop {
            let mut improved = None;
            for d in Hex::DIRECTIONS {
                let moved = current.translate(d);
                let dist = self.cached_cost(&moved, b);
                if dist < best {
                    best = dist;
                    improved = Some(moved);
                }
            }
            match improved {
                Some(next) => current = next,
                None => return best,
            }
        }
    }
}

fn check_sizes(a: &Shape, b: &Shape) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::SizeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

fn assignment_cost(a: &Shape, b: &Shape) -> u64 {
    let left: Vec<Hex> = a.iter().copied().collect();
    let right: Vec<Hex> = b.iter().copied().collect();
    let matrix = CostMatrix::from_fn(left.len(), |i, j| {
        let d = left[i].distance(&right[j]) as i64;
        d * d
    });
    min_cost_assignment(&matrix).cost as u64
}

/// See [`Similarity::shape_distance`].
pub fn shape_distance(a: &Shape, b: &Shape) -> Result<u64> {
    Similarity::new().shape_distance(a, b)
}

/// See [`Similarity::min_shape_distance`].
pub fn min_shape_distance(a: &Shape, b: &Shape) -> Result<u64> {
    Similarity::new().min_shape_distance(a, b)
}

/// See [`Similarity::asymmetry`].
pub fn asymmetry(shape: &Shape) -> u64 {
    Similarity::new().asymmetry(shape)
}
