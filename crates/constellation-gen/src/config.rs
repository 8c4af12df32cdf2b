//! Generator configuration.

use crate::filters::Admissibility;

/// How many shapes to select with a given triangle count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quota {
    /// Triangle count of the shapes in this bucket
    pub triangles: usize,
    /// Number of shapes wanted from this bucket
    pub count: usize,
}

impl Quota {
    pub const fn new(triangles: usize, count: usize) -> Self {
        Self { triangles, count }
    }
}

/// Default buckets, filled in this order. More triangles means a smaller
/// quota.
pub const DEFAULT_QUOTAS: [Quota; 5] = [
    Quota::new(4, 28),
    Quota::new(3, 24),
    Quota::new(2, 18),
    Quota::new(1, 14),
    Quota::new(0, 10),
];

/// Configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Cell count of the selected shapes
    pub target_size: usize,
    /// Largest bounding extent, in doubled lengths (one cell is 2)
    pub max_extent: i64,
    /// Straight runs must be shorter than this
    pub max_line: usize,
    /// Straight runs must reach at least this length...
    pub min_line: usize,
    /// ...once shapes have this many cells
    pub min_line_from_size: usize,
    /// Buckets in the order they are filled
    pub quotas: Vec<Quota>,
    /// Seed for the shuffle that breaks asymmetry ties
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            target_size: 9,
            max_extent: 8,
            max_line: 5,
            min_line: 3,
            min_line_from_size: 9,
            quotas: DEFAULT_QUOTAS.to_vec(),
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration for shapes of `target_size` cells.
    #[must_use]
    pub fn with_target_size(target_size: usize) -> Self {
        Self {
            target_size,
            ..Default::default()
        }
    }

    /// The geometric filters this configuration applies.
    pub fn admissibility(&self) -> Admissibility {
        Admissibility {
            max_extent: self.max_extent,
            max_line: self.max_line,
            min_line: self.min_line,
            min_line_from_size: self.min_line_from_size,
        }
    }
}
