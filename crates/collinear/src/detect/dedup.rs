//! Exact-line deduplication of candidates.
//!
//! Every origin on a line reports that line again, so the raw candidate stream
//! holds many copies per line. The deduplicator keeps one segment per line: the
//! first one seen among the longest.

use super::types::CandidateSegment;

/// Outcome of offering one candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Offer {
    /// No accepted segment shares the candidate's line.
    Accepted,
    /// The candidate was strictly longer than `removed` accepted segments on its line.
    Replaced { removed: usize },
    /// An accepted segment on the same line is at least as long.
    Discarded,
}

/// Accepted segments, at most one per infinite line.
///
/// Insertion order is kept; replaced segments are removed in place.
#[derive(Clone, Debug, Default)]
pub struct SegmentDeduplicator {
    accepted: Vec<CandidateSegment>,
}

impl SegmentDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one candidate into the accepted set.
    pub fn offer(&mut self, candidate: CandidateSegment) -> Offer {
        let mut colliding = 0usize;
        let mut superior = true;
        for seg in &self.accepted {
            if seg.collinear_with(&candidate) {
                colliding += 1;
                if seg.len() >= candidate.len() {
                    superior = false;
                }
            }
        }
        if colliding == 0 {
            self.accepted.push(candidate);
            return Offer::Accepted;
        }
        if !superior {
            return Offer::Discarded;
        }
        self.accepted.retain(|seg| !seg.collinear_with(&candidate));
        self.accepted.push(candidate);
        Offer::Replaced { removed: colliding }
    }

    /// Offer every candidate in order.
    pub fn extend(&mut self, candidates: impl IntoIterator<Item = CandidateSegment>) {
        for c in candidates {
            self.offer(c);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    #[inline]
    pub fn accepted(&self) -> &[CandidateSegment] {
        &self.accepted
    }

    pub fn into_accepted(self) -> Vec<CandidateSegment> {
        self.accepted
    }
}
