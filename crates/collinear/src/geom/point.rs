//! Integer points, their total order, and slope-based orderings.

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Vector2;

use super::slope::Slope;

/// Immutable point with exact integer coordinates.
///
/// Total order: by `y`, then by `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Slope of the line from `self` to `other`.
    ///
    /// Coincident points give `Degenerate`, equal `x` gives `Vertical`, equal
    /// `y` gives `Horizontal`. Differences are taken in `i64`, so the quotient
    /// is the correctly rounded value of the exact rational.
    pub fn slope_to(&self, other: &Point) -> Slope {
        let d = other.to_vector() - self.to_vector();
        match (d.x, d.y) {
            (0, 0) => Slope::Degenerate,
            (0, _) => Slope::Vertical,
            (_, 0) => Slope::Horizontal,
            (dx, dy) => Slope::Oblique(dy as f64 / dx as f64),
        }
    }

    /// Comparator ordering points by their slope to `self`.
    #[inline]
    pub fn slope_order(&self) -> SlopeOrdering {
        SlopeOrdering::new(*self)
    }

    /// Coordinates widened to `i64` (no overflow on differences).
    #[inline]
    pub fn to_vector(&self) -> Vector2<i64> {
        Vector2::new(i64::from(self.x), i64::from(self.y))
    }

    /// Coordinates as `f64`, for plotting or other float consumers.
    #[inline]
    pub fn to_f64(&self) -> Vector2<f64> {
        Vector2::new(f64::from(self.x), f64::from(self.y))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then_with(|| self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Orders points by slope to a fixed origin.
///
/// Ties keep their relative order; only stable sorts are used with it.
#[derive(Clone, Copy, Debug)]
pub struct SlopeOrdering {
    origin: Point,
}

impl SlopeOrdering {
    #[inline]
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn compare(&self, a: &Point, b: &Point) -> Ordering {
        self.origin.slope_to(a).cmp(&self.origin.slope_to(b))
    }

    /// Stable in-place sort by slope to the origin.
    pub fn sort(&self, points: &mut [Point]) {
        points.sort_by(|a, b| self.compare(a, b));
    }

    /// Pair every point with its slope to the origin and stable-sort by slope.
    ///
    /// Slopes are computed once per point instead of once per comparison.
    pub fn sorted_with_slopes(&self, points: impl IntoIterator<Item = Point>) -> Vec<(Slope, Point)> {
        let mut keyed: Vec<(Slope, Point)> = points
            .into_iter()
            .map(|p| (self.origin.slope_to(&p), p))
            .collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        keyed
    }
}

/// Twice the signed area of triangle `(a, b, c)`; zero iff the points are collinear.
///
/// Exact integer arithmetic (`i128`), independent of the float slope path.
#[inline]
pub fn orient(a: Point, b: Point, c: Point) -> i128 {
    let ab = b.to_vector() - a.to_vector();
    let ac = c.to_vector() - a.to_vector();
    i128::from(ab.x) * i128::from(ac.y) - i128::from(ab.y) * i128::from(ac.x)
}
