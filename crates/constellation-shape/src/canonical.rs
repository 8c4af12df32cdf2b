//! Canonical forms of shapes under translation and rotation.
//!
//! # Algorithm
//!
//! 1. Scale every cell up by N, the cell count. The vector mean of the
//!    scaled shape is then the plain sum of the input cells, an exact
//!    integer cell.
//! 2. Translate so that mean is the origin. The centered shape is now
//!    independent of the input's translation.
//! 3. Generate the six rotations of the centered shape.
//! 4. Walk the rings outward from ring 1. On each ring, keep only the
//!    rotations whose [`RingSignature`] is minimal. Stop once a single
//!    rotation remains or every ring has been compared.
//! 5. Translate the surviving rotation so its lowest cell is the origin and
//!    scale back down by N.
//!
//! Rotations that survive every ring have identical cells on every ring,
//! so they are the same set and the choice between them does not matter.
//!
//! Reflections are not applied: a shape and its mirror image have
//! different canonical forms unless the shape is itself symmetric.

use constellation_hex::{Hex, RingSignature, ROTATIONS};

use crate::{CanonicalShape, Shape};

impl Shape {
    /// The canonical form of this shape.
    ///
    /// Independent of the translation, rotation and input order of the
    /// cells. Idempotent: normalizing a canonical shape returns it
    /// unchanged. The empty shape is its own canonical form.
    pub fn normalize(&self) -> CanonicalShape {
        if self.is_empty() {
            return CanonicalShape::new_unchecked(Shape::new());
        }
        let centered = Centered::of(self);
        let chosen = centered.min_rotation();
        CanonicalShape::new_unchecked(centered.restore(&chosen))
    }
}

/// Canonical form of `shape`. Equivalent to [`Shape::normalize`].
pub fn normalize(shape: &Shape) -> CanonicalShape {
    shape.normalize()
}

/// A shape scaled by its own cell count and translated so its mean is the
/// origin.
struct Centered {
    cells: Shape,
    scale: i64,
}

impl Centered {
    fn of(shape: &Shape) -> Self {
        let scale = shape.len() as i64;
        // mean(scale * cells) == sum(cells)
        let mean = shape.sum();
        Self {
            cells: shape.scale_up(scale).translate(-mean),
            scale,
        }
    }

    /// The rotation preferred by ring-by-ring signature comparison.
    fn min_rotation(&self) -> Shape {
        let mut candidates: Vec<Shape> = (0..ROTATIONS as i64)
            .map(|steps| self.cells.rotate(steps))
            .collect();
        let outer_ring = self.cells.outer_ring();

        let mut ring = 1;
        while candidates.len() > 1 && ring <= outer_ring {
            let signatures: Vec<RingSignature> = candidates
                .iter()
                .map(|c| RingSignature::of(c, ring))
                .collect();
            let Some(min) = signatures.iter().min().cloned() else {
                break;
            };
            candidates = candidates
                .into_iter()
                .zip(signatures)
                .filter(|(_, sig)| *sig == min)
                .map(|(c, _)| c)
                .collect();
            ring += 1;
        }

        debug_assert!(
            candidates.windows(2).all(|pair| pair[0] == pair[1]),
            "rotations with equal signatures on every ring must be equal"
        );
        candidates.swap_remove(0)
    }

    /// Move the lowest cell of `rotation` to the origin and undo the scaling.
    fn restore(&self, rotation: &Shape) -> Shape {
        let lowest = rotation.first().unwrap_or(Hex::ORIGIN);
        // Differences between centered cells are multiples of the scale
        rotation
            .iter()
            .map(|&h| {
                let d = h - lowest;
                debug_assert!(d.q() % self.scale == 0 && d.r() % self.scale == 0);
                Hex::axial(d.q() / self.scale, d.r() / self.scale)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constellation_hex::{Axis, DL, DN, DR, UL, UP, UR};
    use proptest::prelude::*;

    fn shape(cells: &[Hex]) -> Shape {
        cells.iter().copied().collect()
    }

    #[test]
    fn empty_shape_is_canonical() {
        assert_eq!(Shape::new().normalize().into_shape(), Shape::new());
    }

    #[test]
    fn single_cell_moves_to_origin() {
        let s = shape(&[Hex::axial(4, -7)]);
        assert_eq!(s.normalize().into_shape(), shape(&[Hex::ORIGIN]));
    }

    #[test]
    fn domino_canonical_form() {
        let s = Shape::from_coords([[0, 0, 0], [0, 1, -1]]).unwrap();
        let expected = Shape::from_coords([[0, 0, 0], [1, 0, -1]]).unwrap();
        assert_eq!(s.normalize().into_shape(), expected);
    }

    #[test]
    fn every_domino_is_the_same_piece() {
        let canon = shape(&[Hex::ORIGIN, UP]).normalize();
        for d in Hex::DIRECTIONS {
            assert_eq!(shape(&[Hex::ORIGIN, d]).normalize(), canon);
        }
    }

    #[test]
    fn canonical_form_contains_origin() {
        let s = shape(&[UP * 3, UP * 3 + UR, UP * 3 + UR + DR, UP * 3 + UR * 2]);
        let canon = s.normalize();
        assert_eq!(canon.first(), Some(Hex::ORIGIN));
        assert_eq!(canon.len(), 4);
    }

    #[test]
    fn bent_lines_normalize_together() {
        // The same bent line of four cells, drawn from two different starting directions
        let a = shape(&[Hex::ORIGIN, DR, DR + UR, DR + UR * 2]);
        let b = shape(&[Hex::ORIGIN, UP, UP + UR, UP + UR * 2]);
        assert_eq!(a.normalize(), a.rotate(2).translate(DL).normalize());
        assert_ne!(a.normalize(), b.normalize());
        assert_eq!(b.normalize(), b.rotate(-1).normalize());
    }

    #[test]
    fn symmetric_shape_survives_every_ring() {
        let flower = shape(&[Hex::ORIGIN, UP, UR, DR, DN, DL, UL]);
        let canon = flower.normalize();
        assert_eq!(canon.len(), 7);
        assert_eq!(canon.normalize(), canon);
    }

    #[test]
    fn mirror_images_stay_distinct() {
        let hook = shape(&[Hex::ORIGIN, UP, UP * 2, UP * 2 + UR]);
        let mirrored = hook.reflect(Axis::R);
        assert_ne!(hook.normalize(), mirrored.normalize());
    }

    fn any_shape() -> impl Strategy<Value = Shape> {
        proptest::collection::vec((-4i64..4, -4i64..4), 1..9)
            .prop_map(|coords| coords.into_iter().map(|(q, r)| Hex::axial(q, r)).collect())
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in any_shape()) {
            let once = s.normalize();
            prop_assert_eq!(once.normalize(), once.clone());
        }

        #[test]
        fn normalize_ignores_rotation(s in any_shape(), steps in 0i64..6) {
            prop_assert_eq!(s.rotate(steps).normalize(), s.normalize());
        }

        #[test]
        fn normalize_ignores_translation(s in any_shape(), q in -20i64..20, r in -20i64..20) {
            prop_assert_eq!(s.translate(Hex::axial(q, r)).normalize(), s.normalize());
        }

        #[test]
        fn normalize_keeps_cell_count(s in any_shape()) {
            let canon = s.normalize();
            prop_assert_eq!(canon.len(), s.len());
            prop_assert_eq!(canon.first(), Some(Hex::ORIGIN));
        }
    }
}
