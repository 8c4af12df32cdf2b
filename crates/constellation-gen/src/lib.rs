//! Constellation Generator
//!
//! Grows hex pieces one cell at a time, keeps the distinct canonical forms
//! that pass the size and straight-line filters, and picks a diverse final
//! set under per-triangle-count quotas.
//!
//! # Selection
//!
//! Candidates of the target size are grouped by their number of unit
//! triangles. Each group is shuffled with a seeded generator and then
//! sorted by asymmetry, most symmetric first. Shapes are accepted greedily
//! as long as none of the smaller shapes they grew from was already the
//! parent of an accepted shape, which keeps near-identical siblings out of
//! the result.

mod collection;
mod config;
mod error;
mod filters;
mod generate;

pub use collection::ShapeSet;
pub use config::{GeneratorConfig, Quota, DEFAULT_QUOTAS};
pub use error::{Error, Result};
pub use filters::{longest_line, max_extent, num_triangles, Admissibility};
pub use generate::{extensions, generate_all, Generator, QuotaUnmet, Selection};
