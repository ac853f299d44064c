//! Tagged slope value.

use std::cmp::Ordering;
use std::fmt;

/// Slope from an origin point to another point.
///
/// Order: `Degenerate` < every real slope < `Vertical`. Real slopes
/// (`Horizontal` is exactly `+0.0`) compare by value. Equality is bit-exact.
#[derive(Clone, Copy, Debug)]
pub enum Slope {
    /// Both points coincide.
    Degenerate,
    /// Same `y`; the slope is `+0.0`.
    Horizontal,
    /// Finite, non-zero slope `dy / dx`.
    Oblique(f64),
    /// Same `x`, different `y`.
    Vertical,
}

impl Slope {
    /// Classic double encoding: `-inf`, `+0.0`, `dy/dx`, `+inf`.
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Slope::Degenerate => f64::NEG_INFINITY,
            Slope::Horizontal => 0.0,
            Slope::Oblique(v) => v,
            Slope::Vertical => f64::INFINITY,
        }
    }

    #[inline]
    pub fn is_degenerate(self) -> bool {
        matches!(self, Slope::Degenerate)
    }

    #[inline]
    fn rank(self) -> u8 {
        match self {
            Slope::Degenerate => 0,
            Slope::Horizontal | Slope::Oblique(_) => 1,
            Slope::Vertical => 2,
        }
    }
}

impl Ord for Slope {
    fn cmp(&self, other: &Self) -> Ordering {
        // `Oblique` is never zero, so `total_cmp` agrees with bit equality here.
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.value().total_cmp(&other.value()))
    }
}

impl PartialOrd for Slope {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Slope {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Slope {}

impl fmt::Display for Slope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slope::Degenerate => write!(f, "degenerate"),
            Slope::Horizontal => write!(f, "0"),
            Slope::Oblique(v) => write!(f, "{v}"),
            Slope::Vertical => write!(f, "vertical"),
        }
    }
}
