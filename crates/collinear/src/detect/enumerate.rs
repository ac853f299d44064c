//! Per-origin candidate enumeration.
//!
//! For every origin, the other points are stable-sorted by slope to the origin.
//! Points on one line through the origin then sit in one contiguous run of
//! equal slope, so a single scan finds them all. Total cost `O(n² log n)`.

use crate::geom::{Point, SlopeOrdering};

use super::types::{CandidateSegment, DetectCfg};

/// Candidates from every origin, concatenated in origin order.
///
/// `points` must already be validated (no duplicates).
pub fn enumerate_candidates(points: &[Point], cfg: &DetectCfg) -> Vec<CandidateSegment> {
    scan_all(points, cfg.min_points, cfg.parallel)
}

/// Candidates with `points[origin]` as the origin.
///
/// Each maximal run of equal slope with at least `min_points - 1` members,
/// joined with the origin, becomes one candidate.
pub fn scan_origin(points: &[Point], origin: usize, min_points: usize) -> Vec<CandidateSegment> {
    let o = points[origin];
    let others = points
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != origin)
        .map(|(_, &p)| p);
    let keyed = SlopeOrdering::new(o).sorted_with_slopes(others);

    let mut out = Vec::new();
    let mut start = 0usize;
    while start < keyed.len() {
        let slope = keyed[start].0;
        let mut end = start + 1;
        while end < keyed.len() && keyed[end].0 == slope {
            end += 1;
        }
        if end - start + 1 >= min_points {
            let mut run: Vec<Point> = keyed[start..end].iter().map(|&(_, p)| p).collect();
            run.push(o);
            if let Some(c) = CandidateSegment::new(run) {
                out.push(c);
            }
        }
        start = end;
    }
    out
}

fn scan_serial(points: &[Point], min_points: usize) -> Vec<CandidateSegment> {
    (0..points.len())
        .flat_map(|i| scan_origin(points, i, min_points))
        .collect()
}

#[cfg(feature = "parallel")]
fn scan_all(points: &[Point], min_points: usize, parallel: bool) -> Vec<CandidateSegment> {
    use rayon::prelude::*;

    if !parallel {
        return scan_serial(points, min_points);
    }
    // Indexed collect keeps origin order, so dedup sees the serial stream.
    let per_origin: Vec<Vec<CandidateSegment>> = (0..points.len())
        .into_par_iter()
        .map(|i| scan_origin(points, i, min_points))
        .collect();
    per_origin.into_iter().flatten().collect()
}

#[cfg(not(feature = "parallel"))]
fn scan_all(points: &[Point], min_points: usize, _parallel: bool) -> Vec<CandidateSegment> {
    scan_serial(points, min_points)
}
