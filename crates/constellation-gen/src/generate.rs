//! Breadth-first shape growth and quota selection.
//!
//! Generation starts from the two-cell shape and grows every shape by one
//! cell per layer, keeping the admissible canonical forms. Selection then
//! grows the layer below the target size once more, groups the results by
//! triangle count, and fills each quota bucket with the most symmetric
//! shapes whose parent shapes have not been used yet.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use constellation_hex::{Hex, UR};
use constellation_shape::{CanonicalShape, Shape, Similarity};

use crate::collection::ShapeSet;
use crate::config::{GeneratorConfig, Quota};
use crate::filters::num_triangles;
use crate::{Error, Result};

/// Every distinct shape made by adding one adjacent cell to `base`.
///
/// Results are canonical and deduplicated. Order follows the added cell's
/// (q, r, s) order, skipping shapes already produced.
pub fn extensions(base: &Shape) -> Vec<CanonicalShape> {
    let mut seen = ShapeSet::new();
    for cell in base.neighbors() {
        seen.add(&base.with(cell));
    }
    seen.into_shapes()
}

/// All admissible shapes of `size` cells under the default configuration.
pub fn generate_all(size: usize) -> Result<Vec<CanonicalShape>> {
    Generator::new(GeneratorConfig::default()).generate_all(size)
}

/// A bucket that could not be filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuotaUnmet {
    pub triangles: usize,
    pub wanted: usize,
    pub found: usize,
}

impl std::fmt::Display for QuotaUnmet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "found {} of {} shapes with {} triangles",
            self.found, self.wanted, self.triangles
        )
    }
}

/// Outcome of a selection run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    /// Selected shapes, bucket by bucket in quota order
    pub shapes: Vec<CanonicalShape>,
    /// Buckets that ran out of candidates
    pub shortfalls: Vec<QuotaUnmet>,
}

impl Selection {
    /// Whether every quota was met.
    pub fn is_complete(&self) -> bool {
        self.shortfalls.is_empty()
    }
}

/// A candidate of the target size and the parents it grew from.
struct Candidate {
    shape: CanonicalShape,
    /// Indices into the parent layer
    sources: BTreeSet<usize>,
}

/// Candidates sharing one triangle count, in discovery order.
#[derive(Default)]
struct Bucket {
    candidates: Vec<Candidate>,
    index: HashMap<CanonicalShape, usize>,
}

impl Bucket {
    fn record(&mut self, shape: CanonicalShape, source: usize) {
        let slot = match self.index.get(&shape) {
            Some(&slot) => slot,
            None => {
                self.index.insert(shape.clone(), self.candidates.len());
                self.candidates.push(Candidate {
                    shape,
                    sources: BTreeSet::new(),
                });
                self.candidates.len() - 1
            }
        };
        self.candidates[slot].sources.insert(source);
    }
}

/// Runs generation and selection for one configuration.
///
/// Owns the similarity cache for the run, so asymmetry scores computed
/// while filling one bucket are reused by later calls.
pub struct Generator {
    config: GeneratorConfig,
    similarity: Similarity,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            similarity: Similarity::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// All admissible shapes of `size` cells, grown layer by layer from
    /// the two-cell shape.
    pub fn generate_all(&self, size: usize) -> Result<Vec<CanonicalShape>> {
        match size {
            0 => return Err(Error::InvalidTargetSize { size }),
            1 => return Ok(vec![Shape::of([Hex::ORIGIN])]),
            _ => {}
        }
        let rules = self.config.admissibility();
        let mut layer = vec![Shape::of([Hex::ORIGIN, UR])];

        for cells in 3..=size {
            let mut next = ShapeSet::new();
            for shape in &layer {
                for ext in extensions(shape) {
                    if rules.admits(&ext) {
                        next.add(&ext);
                    }
                }
            }
            debug!("Layer {}: {} shapes", cells, next.len());
            layer = next.into_shapes();
        }
        Ok(layer)
    }

    /// Select shapes of the target size according to the quotas.
    ///
    /// Unmet quotas are reported in [`Selection::shortfalls`], not as errors.
    pub fn run(&mut self) -> Result<Selection> {
        let size = self.config.target_size;
        if size < 2 {
            return Err(Error::InvalidTargetSize { size });
        }

        let parents = self.generate_all(size - 1)?;
        let mut buckets = self.bucket_by_triangles(&parents);
        debug!(
            "{} parents produced {} candidates of size {}",
            parents.len(),
            buckets.values().map(|b| b.candidates.len()).sum::<usize>(),
            size
        );

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut sources_seen = BTreeSet::new();
        let mut selection = Selection::default();

        for quota in self.config.quotas.clone() {
            let bucket = buckets.remove(&quota.triangles).unwrap_or_default();
            let ranked = self.rank(bucket.candidates, &mut rng);
            let found = fill(quota, ranked, &mut sources_seen, &mut selection.shapes);

            if found >= quota.count {
                info!("Found {} shapes with {} triangles", found, quota.triangles);
            } else {
                let unmet = QuotaUnmet {
                    triangles: quota.triangles,
                    wanted: quota.count,
                    found,
                };
                warn!("Unable to meet quota: {}", unmet);
                selection.shortfalls.push(unmet);
            }
        }
        Ok(selection)
    }

    /// Grow every parent once more and group admissible results by
    /// triangle count.
    fn bucket_by_triangles(&self, parents: &[CanonicalShape]) -> BTreeMap<usize, Bucket> {
        let rules = self.config.admissibility();
        let mut buckets: BTreeMap<usize, Bucket> = BTreeMap::new();
        for (source, parent) in parents.iter().enumerate() {
            for ext in extensions(parent) {
                if rules.admits(&ext) {
                    buckets
                        .entry(num_triangles(&ext))
                        .or_default()
                        .record(ext, source);
                }
            }
        }
        buckets
    }

    /// Shuffle, then stable-sort by ascending asymmetry so ties keep their
    /// shuffled order.
    fn rank(&mut self, mut candidates: Vec<Candidate>, rng: &mut StdRng) -> Vec<Candidate> {
        candidates.shuffle(rng);
        let mut scored: Vec<(u64, Candidate)> = candidates
            .into_iter()
            .map(|c| (self.similarity.asymmetry(&c.shape), c))
            .collect();
        scored.sort_by_key(|(asymmetry, _)| *asymmetry);
        scored.into_iter().map(|(_, c)| c).collect()
    }
}

/// Accept candidates in order until `quota` is met, skipping any that share
/// a parent with an already accepted shape. Returns how many were accepted.
fn fill(
    quota: Quota,
    ranked: Vec<Candidate>,
    sources_seen: &mut BTreeSet<usize>,
    out: &mut Vec<CanonicalShape>,
) -> usize {
    let mut found = 0;
    for candidate in ranked {
        if found >= quota.count {
            break;
        }
        if candidate.sources.is_disjoint(sources_seen) {
            sources_seen.extend(&candidate.sources);
            out.push(candidate.shape);
            found += 1;
        }
    }
    found
}
