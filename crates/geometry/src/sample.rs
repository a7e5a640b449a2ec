//! Reproducible random shapes for tests and benchmarks.
//!
//! Model
//! - Circles: radius uniform in `[size_min, size_max)`.
//! - Triangles: two sides uniform in `[size_min, size_max)`, third side drawn
//!   strictly inside `(|a−b|, a+b)` with a margin, so every draw satisfies the
//!   strict triangle inequality.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::circle::Circle;
use crate::error::ShapeError;
use crate::shape::AnyShape;
use crate::triangle::Triangle;

/// Size bounds and flatness margin for draws.
#[derive(Clone, Copy, Debug)]
pub struct DrawCfg {
    pub size_min: f64,
    pub size_max: f64,
    /// Fraction of the admissible third-side interval cut from each end.
    /// Clamped to [0.01, 0.49]; keeps triangles away from degenerate.
    pub flat_margin: f64,
}

impl Default for DrawCfg {
    fn default() -> Self {
        Self {
            size_min: 0.1,
            size_max: 10.0,
            flat_margin: 0.05,
        }
    }
}

impl DrawCfg {
    fn validate(&self) -> Result<(), ShapeError> {
        if !(self.size_min.is_finite() && self.size_max.is_finite()) {
            return Err(ShapeError::invalid("size bounds must be finite"));
        }
        if self.size_min <= 0.0 {
            return Err(ShapeError::invalid("size_min must be > 0"));
        }
        if self.size_min >= self.size_max {
            return Err(ShapeError::invalid("size_min < size_max required"));
        }
        if !self.flat_margin.is_finite() {
            return Err(ShapeError::invalid("flat_margin must be finite"));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
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

pub fn draw_circle<R: Rng>(rng: &mut R, cfg: DrawCfg) -> Result<Circle, ShapeError> {
    cfg.validate()?;
    Circle::new(rng.gen_range(cfg.size_min..cfg.size_max))
}

pub fn draw_triangle<R: Rng>(rng: &mut R, cfg: DrawCfg) -> Result<Triangle, ShapeError> {
    cfg.validate()?;
    let m = cfg.flat_margin.clamp(0.01, 0.49);
    let a = rng.gen_range(cfg.size_min..cfg.size_max);
    let b = rng.gen_range(cfg.size_min..cfg.size_max);
    let lo = (a - b).abs();
    let hi = a + b;
    let c = lo + (hi - lo) * rng.gen_range(m..1.0 - m);
    Triangle::new(a, b, c)
}

/// Draw `n` shapes, circles and triangles with equal probability.
///
/// Shape `i` depends only on `(seed, i)`, so prefixes of different lengths agree.
pub fn draw_shapes(seed: u64, n: usize, cfg: DrawCfg) -> Result<Vec<AnyShape>, ShapeError> {
    (0..n as u64)
        .map(|index| {
            let mut rng = ReplayToken { seed, index }.to_std_rng();
            if rng.gen_bool(0.5) {
                draw_circle(&mut rng, cfg).map(AnyShape::from)
            } else {
                draw_triangle(&mut rng, cfg).map(AnyShape::from)
            }
        })
        .collect()
}
