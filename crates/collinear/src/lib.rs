//! Exact collinearity detection over integer point sets.
//!
//! Finds every maximal line segment that passes through four or more points of
//! a fixed input set. Slopes are compared bit-exactly; there is no tolerance.
//!
//! Layout
//! - `geom`: integer `Point`, tagged `Slope`, per-origin `SlopeOrdering`.
//! - `detect`: candidate enumeration, exact-line deduplication, result building.
//! - `sample`: reproducible point sets with planted collinear runs.

pub mod detect;
pub mod geom;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use detect::{CollinearPoints, DetectCfg, InvalidInput, LineSegment};
pub use geom::{Point, Slope, SlopeOrdering};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::detect::{
        build_segments, enumerate_candidates, validate, CandidateSegment, CollinearPoints,
        DetectCfg, InvalidInput, LineSegment, Offer, SegmentDeduplicator,
    };
    pub use crate::geom::{orient, Point, Slope, SlopeOrdering};
    pub use crate::sample::{draw_planted, PlantedCfg, ReplayToken, SampleError};
}
