//! Rings around the origin.
//!
//! Ring n is the set of cells at distance n from the origin. Every ring
//! n > 0 holds 6n cells, enumerated clockwise starting from `UP * n`:
//!
//! - Ring 0: just the origin (1 slot)
//! - Ring 1: the six directions (6 slots)
//! - Ring n: six edges of n cells each, edge k starting at `DIRECTIONS[k] * n`
//!
//! A [`RingSignature`] packs the occupied positions of one ring into a
//! single comparable number, the sum of 2^index over every occupied cell.

use std::cmp::Ordering;

use crate::Hex;

/// Number of cells on ring n.
///
/// - Ring 0: 1 slot (origin)
/// - Ring n > 0: 6n slots
#[inline]
pub const fn slots_in_ring(ring: u64) -> u64 {
    if ring == 0 {
        1
    } else {
        6 * ring
    }
}

/// The cell at position `index` of ring `ring`.
///
/// Inverse of [`Hex::ring_index`]. Returns `None` when `index` is outside
/// the ring.
pub fn ring_cell(ring: u64, index: u64) -> Option<Hex> {
    if index >= slots_in_ring(ring) {
        return None;
    }
    if ring == 0 {
        return Some(Hex::ORIGIN);
    }

    let edge = (index / ring) as usize;
    let pos_on_edge = (index % ring) as i64;

    let corner = Hex::DIRECTIONS[edge] * ring as i64;
    let step = Hex::DIRECTIONS[(edge + 2) % 6];
    Some(corner + step * pos_on_edge)
}

/// Iterator over the cells of one ring, clockwise from up.
pub struct Ring {
    ring: u64,
    current: u64,
}

impl Ring {
    /// Iterate over ring `ring`.
    pub fn new(ring: u64) -> Self {
        Self { ring, current: 0 }
    }
}

impl Iterator for Ring {
    type Item = Hex;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = ring_cell(self.ring, self.current)?;
        self.current += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = slots_in_ring(self.ring).saturating_sub(self.current) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ring {}

/// The occupied positions of one ring, as an arbitrary-width bit set.
///
/// Ordering is numeric: the signature with the highest differing bit is
/// greater. Ring indices grow with the ring number, so the set is stored
/// as little-endian 64-bit words with no trailing zero words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RingSignature {
    words: Vec<u64>,
}

impl RingSignature {
    /// The empty signature (numeric value 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Signature of every cell of `cells` lying on ring `ring`.
    pub fn of<'a>(cells: impl IntoIterator<Item = &'a Hex>, ring: u64) -> Self {
        let mut sig = Self::new();
        for cell in cells {
            if cell.ring() == ring {
                sig.insert(cell.ring_index());
            }
        }
        sig
    }

    /// Set bit `index`.
    pub fn insert(&mut self, index: u64) {
        let word = (index / 64) as usize;
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= 1u64 << (index % 64);
    }

    /// Whether bit `index` is set.
    pub fn contains(&self, index: u64) -> bool {
        self.words
            .get((index / 64) as usize)
            .is_some_and(|w| w & (1u64 << (index % 64)) != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Ord for RingSignature {
    fn cmp(&self, other: &Self) -> Ordering {
        // No trailing zero words, so a longer word vector is a larger number
        self.words
            .len()
            .cmp(&other.words.len())
            .then_with(|| self.words.iter().rev().cmp(other.words.iter().rev()))
    }
}

impl PartialOrd for RingSignature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DN, UP, UR};

    #[test]
    fn slots_in_ring_formula() {
        assert_eq!(slots_in_ring(0), 1);
        assert_eq!(slots_in_ring(1), 6);
        assert_eq!(slots_in_ring(2), 12);
        assert_eq!(slots_in_ring(10), 60);
    }

    #[test]
    fn ring_zero_is_origin() {
        assert_eq!(ring_cell(0, 0), Some(Hex::ORIGIN));
        assert_eq!(ring_cell(0, 1), None);
        assert_eq!(Ring::new(0).collect::<Vec<_>>(), vec![Hex::ORIGIN]);
    }

    #[test]
    fn ring_one_is_directions() {
        let ring_one: Vec<_> = Ring::new(1).collect();
        assert_eq!(ring_one, Hex::DIRECTIONS.to_vec());
    }

    #[test]
    fn ring_bijection_rings_0_to_6() {
        for ring in 0..=6 {
            let cells: Vec<_> = Ring::new(ring).collect();
            assert_eq!(cells.len() as u64, slots_in_ring(ring));
            for (i, cell) in cells.iter().enumerate() {
                assert_eq!(cell.ring(), ring, "cell {} should be on ring {}", cell, ring);
                assert_eq!(cell.ring_index(), i as u64, "round trip failed for {}", cell);
            }
        }
    }

    #[test]
    fn out_of_range_index() {
        assert_eq!(ring_cell(3, 18), None);
        assert!(ring_cell(3, 17).is_some());
    }

    #[test]
    fn signature_sums_powers_of_two() {
        let cells = [UP, DN, UR * 2];
        let sig = RingSignature::of(&cells, 1);
        assert!(sig.contains(0));
        assert!(sig.contains(3));
        assert!(!sig.contains(2));

        let mut expected = RingSignature::new();
        expected.insert(0);
        expected.insert(3);
        assert_eq!(sig, expected);
    }

    #[test]
    fn signature_ordering_is_numeric() {
        let mut low = RingSignature::new();
        low.insert(0);
        low.insert(5);
        let mut high = RingSignature::new();
        high.insert(6);
        assert!(low < high);

        // Bits beyond the first word dominate
        let mut wide = RingSignature::new();
        wide.insert(64);
        let mut narrow = RingSignature::new();
        for i in 0..64 {
            narrow.insert(i);
        }
        assert!(narrow < wide);

        assert!(RingSignature::new() < low);
        assert_eq!(low.cmp(&low.clone()), Ordering::Equal);
    }
}
