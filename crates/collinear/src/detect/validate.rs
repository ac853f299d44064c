//! Input validation, run once before any enumeration.

use crate::geom::Point;

use super::types::InvalidInput;

/// Reject duplicate points.
///
/// Sorts a copy by `Point` order and compares neighbours, so this is
/// `O(n log n)` and leaves the caller's order untouched.
pub fn validate(points: &[Point]) -> Result<(), InvalidInput> {
    let mut sorted = points.to_vec();
    sorted.sort_unstable();
    match sorted.windows(2).find(|w| w[0] == w[1]) {
        Some(w) => Err(InvalidInput::DuplicatePoint { point: w[0] }),
        None => Ok(()),
    }
}

/// Unwrap optional entries, failing on the first missing one.
///
/// Duplicates are not checked here; pass the result to `validate`.
pub fn require_present(points: &[Option<Point>]) -> Result<Vec<Point>, InvalidInput> {
    points
        .iter()
        .enumerate()
        .map(|(index, p)| p.ok_or(InvalidInput::MissingPoint { index }))
        .collect()
}
