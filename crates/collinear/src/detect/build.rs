//! Turn accepted candidates into reported segments.

use super::types::{CandidateSegment, LineSegment};

/// One `LineSegment` (extreme points only) per candidate.
///
/// With `sort`, the result is ordered by `(start, end)`; otherwise it follows
/// the candidates' order.
pub fn build_segments(accepted: &[CandidateSegment], sort: bool) -> Vec<LineSegment> {
    let mut out: Vec<LineSegment> = accepted
        .iter()
        .map(CandidateSegment::to_line_segment)
        .collect();
    if sort {
        out.sort_unstable();
    }
    out
}
