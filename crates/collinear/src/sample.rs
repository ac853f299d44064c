//! Reproducible point sets with planted collinear runs.
//!
//! Purpose
//! - Feed benchmarks, the CLI `sample` command and tests with point sets that
//!   are known to contain long collinear runs, plus uniform noise.
//!
//! Model
//! - Each planted run starts at a random point and steps `points_per_line - 1`
//!   times along a random primitive direction, staying inside `[0, extent]²`.
//! - Noise points are uniform on the same square. Duplicates are dropped and
//!   the result is sorted by `Point` order.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `Point`, `LineSegment`

use std::collections::BTreeSet;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::detect::LineSegment;
use crate::geom::Point;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PlantedCfg {
    /// Number of planted runs.
    pub lines: usize,
    /// Points per planted run (>= 2 when `lines > 0`).
    pub points_per_line: usize,
    /// Uniform noise points (before duplicate removal).
    pub noise: usize,
    /// Coordinates lie in `[0, extent]`.
    pub extent: i32,
    /// Largest absolute step per coordinate along a planted run.
    pub max_step: i32,
}

impl Default for PlantedCfg {
    fn default() -> Self {
        Self {
            lines: 4,
            points_per_line: 5,
            noise: 32,
            extent: 32767,
            max_step: 1024,
        }
    }
}

impl PlantedCfg {
    fn validate(&self) -> Result<i32, SampleError> {
        if self.extent < 1 {
            return Err(SampleError::invalid("extent must be >= 1"));
        }
        if self.max_step < 1 {
            return Err(SampleError::invalid("max_step must be >= 1"));
        }
        if self.lines == 0 {
            return Ok(0);
        }
        if self.points_per_line < 2 {
            return Err(SampleError::invalid("points_per_line must be >= 2"));
        }
        let span = i32::try_from(self.points_per_line - 1)
            .ok()
            .filter(|s| s.checked_mul(self.max_step).is_some_and(|w| w <= self.extent))
            .ok_or_else(|| {
                SampleError::invalid("(points_per_line - 1) * max_step must fit in extent")
            })?;
        Ok(span)
    }
}

/// Error type for the sampler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    InvalidParams { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// A drawn point set and the runs planted in it.
#[derive(Clone, Debug)]
pub struct PlantedSample {
    /// Distinct points, sorted by `Point` order.
    pub points: Vec<Point>,
    /// Extreme points of every planted run. Runs may overlap or extend each other.
    pub planted: Vec<LineSegment>,
}

/// Draw a point set with `cfg.lines` planted runs and uniform noise.
pub fn draw_planted(cfg: PlantedCfg, tok: ReplayToken) -> Result<PlantedSample, SampleError> {
    let span = cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let mut set = BTreeSet::new();
    let mut planted = Vec::with_capacity(cfg.lines);

    for _ in 0..cfg.lines {
        let (dx, dy) = primitive_direction(&mut rng, cfg.max_step);
        let x0 = start_coord(&mut rng, dx * span, cfg.extent);
        let y0 = start_coord(&mut rng, dy * span, cfg.extent);
        for k in 0..=span {
            set.insert(Point::new(x0 + k * dx, y0 + k * dy));
        }
        planted.push(LineSegment::new(
            Point::new(x0, y0),
            Point::new(x0 + span * dx, y0 + span * dy),
        ));
    }
    for _ in 0..cfg.noise {
        set.insert(Point::new(
            rng.gen_range(0..=cfg.extent),
            rng.gen_range(0..=cfg.extent),
        ));
    }

    Ok(PlantedSample {
        points: set.into_iter().collect(),
        planted,
    })
}

/// First coordinate such that adding `delta` stays inside `[0, extent]`.
fn start_coord<R: Rng>(rng: &mut R, delta: i32, extent: i32) -> i32 {
    if delta >= 0 {
        rng.gen_range(0..=extent - delta)
    } else {
        rng.gen_range(-delta..=extent)
    }
}

/// Direction `(dx, dy)` with `dy >= 0` and `gcd(|dx|, dy) == 1`.
fn primitive_direction<R: Rng>(rng: &mut R, max_step: i32) -> (i32, i32) {
    loop {
        let dx = rng.gen_range(-max_step..=max_step);
        let dy = rng.gen_range(0..=max_step);
        if gcd(dx.unsigned_abs(), dy.unsigned_abs()) == 1 {
            return (dx, dy);
        }
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_token_same_points() {
        let cfg = PlantedCfg::default();
        let tok = ReplayToken { seed: 11, index: 3 };
        let a = draw_planted(cfg, tok).unwrap();
        let b = draw_planted(cfg, tok).unwrap();
        assert_eq!(a.points, b.points);
        assert_eq!(a.planted, b.planted);
        let c = draw_planted(cfg, ReplayToken { seed: 11, index: 4 }).unwrap();
        assert_ne!(a.points, c.points);
    }

    #[test]
    fn planted_runs_are_inside_and_collinear() {
        let cfg = PlantedCfg {
            lines: 6,
            points_per_line: 7,
            noise: 10,
            extent: 200,
            max_step: 9,
        };
        let s = draw_planted(cfg, ReplayToken { seed: 5, index: 0 }).unwrap();
        assert!(s.points.windows(2).all(|w| w[0] < w[1]));
        assert!(s
            .points
            .iter()
            .all(|p| (0..=200).contains(&p.x) && (0..=200).contains(&p.y)));
        for seg in &s.planted {
            let on_run = s.points.iter().filter(|&&p| seg.covers(p)).count();
            assert!(on_run >= 7, "{seg} covers only {on_run}");
            assert!(s.points.contains(&seg.start) && s.points.contains(&seg.end));
            assert_ne!(seg.start, seg.end);
        }
    }

    #[test]
    fn rejects_runs_that_cannot_fit() {
        let cfg = PlantedCfg {
            lines: 1,
            points_per_line: 20,
            noise: 0,
            extent: 10,
            max_step: 1,
        };
        assert!(matches!(
            draw_planted(cfg, ReplayToken { seed: 0, index: 0 }),
            Err(SampleError::InvalidParams { .. })
        ));
        let no_lines = PlantedCfg {
            lines: 0,
            points_per_line: 0,
            noise: 5,
            extent: 10,
            max_step: 1,
        };
        let s = draw_planted(no_lines, ReplayToken { seed: 0, index: 0 }).unwrap();
        assert!(s.planted.is_empty());
        assert!(!s.points.is_empty() && s.points.len() <= 5);
    }

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(1, 0), 1);
    }
}
