//! Integer 2D geometry used by the detector.
//!
//! Purpose
//! - `Point`: immutable integer point with the (y, x) total order.
//! - `Slope`: tagged slope value with explicit sentinels instead of infinities.
//! - `SlopeOrdering`: stable per-origin ordering of points by slope.
//!
//! Why tagged slopes
//! - The detector relies on bit-exact slope equality and on the degenerate and
//!   vertical cases sorting at the extremes. Spelling those cases out keeps the
//!   comparisons explicit and testable.
//!
//! Code cross-refs: `detect::CandidateSegment::collinear_with`, `detect::enumerate_candidates`

mod point;
mod slope;

pub use point::{orient, Point, SlopeOrdering};
pub use slope::Slope;
