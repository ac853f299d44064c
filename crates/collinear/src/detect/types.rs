//! Data types shared by the detection stages.
//!
//! Kept small and explicit so `enumerate`, `dedup` and `build` stay easy to read.

use std::fmt;

use crate::geom::{Point, Slope};

/// Detection configuration.
#[derive(Clone, Copy, Debug)]
pub struct DetectCfg {
    /// Minimum number of collinear points (origin included) for a segment.
    pub min_points: usize,
    /// Sort the output by `(start, end)`; otherwise keep acceptance order.
    pub sort_output: bool,
    /// Run per-origin passes on rayon. Ignored without the `parallel` feature.
    pub parallel: bool,
}

impl Default for DetectCfg {
    fn default() -> Self {
        Self {
            min_points: 4,
            sort_output: true,
            parallel: false,
        }
    }
}

impl DetectCfg {
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.min_points < 2 {
            return Err(InvalidInput::config("min_points must be >= 2"));
        }
        Ok(())
    }
}

/// Errors surfaced before any detection work starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidInput {
    /// Entry `index` of the input is absent.
    MissingPoint { index: usize },
    /// `point` occurs more than once.
    DuplicatePoint { point: Point },
    /// Detection parameters are out of range.
    Config { reason: String },
}

impl InvalidInput {
    fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPoint { index } => write!(f, "point at index {index} is missing"),
            Self::DuplicatePoint { point } => write!(f, "duplicate point {point}"),
            Self::Config { reason } => write!(f, "invalid detection config: {reason}"),
        }
    }
}

impl std::error::Error for InvalidInput {}

/// A run of exactly collinear points found from one origin.
///
/// Invariants:
/// - `points` is sorted by `Point` order and has at least two entries.
/// - `slope` is the slope from `first()` to `last()`.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateSegment {
    slope: Slope,
    points: Vec<Point>,
}

impl CandidateSegment {
    /// Build from collinear points in any order. `None` for fewer than two points.
    pub fn new(mut points: Vec<Point>) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        points.sort();
        let slope = points[0].slope_to(&points[points.len() - 1]);
        Some(Self { slope, points })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn slope(&self) -> Slope {
        self.slope
    }

    #[inline]
    pub fn first(&self) -> Point {
        self.points[0]
    }

    #[inline]
    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Exact-line test: does `other` lie on the same infinite line as `self`?
    ///
    /// Equal slopes alone only mean parallel. A shared anchor point settles it;
    /// otherwise one of our endpoints must see both of `other`'s endpoints at
    /// the common slope.
    pub fn collinear_with(&self, other: &CandidateSegment) -> bool {
        if self.slope != other.slope {
            return false;
        }
        let (first, last) = (self.first(), self.last());
        if first == other.first() || first == other.last() {
            return true;
        }
        first.slope_to(&other.first()) == first.slope_to(&other.last())
            || last.slope_to(&other.first()) == last.slope_to(&other.last())
    }

    pub fn to_line_segment(&self) -> LineSegment {
        LineSegment::new(self.first(), self.last())
    }
}

/// Reported segment: its two extreme points, `start <= end` in `Point` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    /// Endpoints are swapped if needed so that `start <= end`.
    pub fn new(a: Point, b: Point) -> Self {
        if b < a {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    #[inline]
    pub fn slope(&self) -> Slope {
        self.start.slope_to(&self.end)
    }

    /// Does `p` lie on this segment (endpoints included)? Exact integer test.
    pub fn covers(&self, p: Point) -> bool {
        crate::geom::orient(self.start, self.end, p) == 0 && self.start <= p && p <= self.end
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}
