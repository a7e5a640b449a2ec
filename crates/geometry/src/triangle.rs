//! Triangle given by three side lengths.
//!
//! Model
//! - Sides are stored sorted `a ≤ b ≤ c`, so `c` is always the longest side
//!   (the hypotenuse candidate for `is_right`).
//! - Validation runs two independent checks in order: strict triangle
//!   inequality `a + b > c`, then positivity of every side. Both stay even
//!   though the first implies the second on sorted finite input.
//!
//! References
//! - Heron: `A = sqrt(p (p−a)(p−b)(p−c))`, `p = (a+b+c)/2`.

use nalgebra::Vector2;

use crate::cfg::RIGHT_ANGLE_TOL;
use crate::error::ShapeError;
use crate::shape::Shape;

/// Non-degenerate triangle with sides sorted ascending.
///
/// Invariants:
/// - `0 < a ≤ b ≤ c`, all finite.
/// - `a + b > c` (strict).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangle {
    /// Build from three side lengths in any order.
    pub fn new(side_a: f64, side_b: f64, side_c: f64) -> Result<Self, ShapeError> {
        let mut sides = [side_a, side_b, side_c];
        if sides.iter().any(|s| !s.is_finite()) {
            return Err(ShapeError::invalid("sides must be finite"));
        }
        sides.sort_by(f64::total_cmp);
        let [a, b, c] = sides;

        if a + b <= c {
            return Err(ShapeError::invalid(
                "the sum of two sides must be strictly greater than the third",
            ));
        }
        if sides.iter().any(|&s| s <= 0.0) {
            return Err(ShapeError::invalid("all sides must be > 0"));
        }
        Ok(Self { a, b, c })
    }

    /// Build from three vertices in R² via their pairwise distances.
    /// Collinear (or coincident) points fail the triangle inequality.
    pub fn from_vertices(
        p: Vector2<f64>,
        q: Vector2<f64>,
        r: Vector2<f64>,
    ) -> Result<Self, ShapeError> {
        Self::new((q - p).norm(), (r - q).norm(), (p - r).norm())
    }

    /// Sides in ascending order `[a, b, c]`.
    #[inline]
    pub fn sides(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }

    /// Right-angle test with the default tolerance `RIGHT_ANGLE_TOL`.
    #[inline]
    pub fn is_right(&self) -> bool {
        self.is_right_with(RIGHT_ANGLE_TOL)
    }

    /// `|a² + b² − c²| < tolerance`, with `c` the longest side.
    /// The tolerance is absolute, so it does not scale with the sides.
    pub fn is_right_with(&self, tolerance: f64) -> bool {
        (self.a.powi(2) + self.b.powi(2) - self.c.powi(2)).abs() < tolerance
    }
}

impl Shape for Triangle {
    /// Heron's formula on the stored sides.
    fn area(&self) -> f64 {
        let p = self.perimeter() / 2.0;
        let radicand = p * (p - self.a) * (p - self.b) * (p - self.c);
        // Non-negative up to rounding on nearly flat triangles.
        debug_assert!(
            radicand >= -f64::EPSILON * p.powi(4),
            "negative Heron radicand {radicand}"
        );
        radicand.max(0.0).sqrt()
    }
}
