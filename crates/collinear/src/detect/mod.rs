//! Collinear segment detection: enumeration, deduplication, result building.
//!
//! Purpose
//! - Report every maximal segment through at least `min_points` (default 4)
//!   points of a fixed integer point set, each infinite line at most once.
//!
//! Pipeline
//! - `validate`: reject missing entries and duplicates before any work.
//! - `enumerate`: per origin, stable-sort the rest by slope and cut equal-slope
//!   runs into `CandidateSegment`s.
//! - `dedup`: keep one candidate per exact line (`collinear_with`), longest wins.
//! - `build`: emit each survivor's extreme points as a `LineSegment`.
//!
//! Why this design
//! - Grouping contiguous equal-slope runs replaces subset backtracking; it finds
//!   the same maximal runs with no recursion.
//! - Slope equality is bit-exact everywhere. For the small coordinate ranges
//!   this is used with, equal rationals always give identical doubles.
//!
//! Code cross-refs: `geom::{Point, Slope, SlopeOrdering}`

mod build;
mod dedup;
mod enumerate;
mod types;
mod validate;

pub use build::build_segments;
pub use dedup::{Offer, SegmentDeduplicator};
pub use enumerate::{enumerate_candidates, scan_origin};
pub use types::{CandidateSegment, DetectCfg, InvalidInput, LineSegment};
pub use validate::{require_present, validate};

use crate::geom::Point;

/// Result of one detection run over a fixed point set.
///
/// Immutable; `segments()` and `number_of_segments()` can be called any number
/// of times.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollinearPoints {
    segments: Vec<LineSegment>,
}

impl CollinearPoints {
    /// Detect with `DetectCfg::default()`.
    pub fn new(points: &[Point]) -> Result<Self, InvalidInput> {
        Self::with_cfg(points, DetectCfg::default())
    }

    pub fn with_cfg(points: &[Point], cfg: DetectCfg) -> Result<Self, InvalidInput> {
        cfg.validate()?;
        validate(points)?;

        let candidates = enumerate_candidates(points, &cfg);
        let n_candidates = candidates.len();
        let mut dedup = SegmentDeduplicator::new();
        dedup.extend(candidates);
        let segments = build_segments(dedup.accepted(), cfg.sort_output);

        tracing::debug!(
            points = points.len(),
            candidates = n_candidates,
            segments = segments.len(),
            min_points = cfg.min_points,
            "collinear detection finished"
        );
        Ok(Self { segments })
    }

    /// Detect over possibly-missing entries; any `None` is `MissingPoint`.
    pub fn from_optional(points: &[Option<Point>], cfg: DetectCfg) -> Result<Self, InvalidInput> {
        let present = require_present(points)?;
        Self::with_cfg(&present, cfg)
    }

    #[inline]
    pub fn number_of_segments(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineSegment> {
        self.segments.iter()
    }

    pub fn into_segments(self) -> Vec<LineSegment> {
        self.segments
    }
}

impl<'a> IntoIterator for &'a CollinearPoints {
    type Item = &'a LineSegment;
    type IntoIter = std::slice::Iter<'a, LineSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
