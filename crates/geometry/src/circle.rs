//! Circle given by its radius.

use std::f64::consts::PI;

use crate::error::ShapeError;
use crate::shape::Shape;

/// Circle of positive radius.
///
/// Invariants:
/// - `radius` is finite and `> 0`; enforced by `Circle::new`, immutable after.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Pre: `radius` is finite and `> 0`.
    /// Post: the radius is stored unchanged.
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        if !radius.is_finite() {
            return Err(ShapeError::invalid("radius must be finite"));
        }
        if radius <= 0.0 {
            return Err(ShapeError::invalid("radius must be > 0"));
        }
        Ok(Self { radius })
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    /// `π r²`. Underflows to `0.0` for radii below about `1e-162`.
    #[inline]
    fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_radius_five() {
        let c = Circle::new(5.0).unwrap();
        assert!((c.area() - 78.539_816_339_744_83).abs() < 1e-9);
        assert!((c.area() - PI * 25.0).abs() < 1e-12);
        assert_eq!(c.radius(), 5.0);
    }

    #[test]
    fn rejects_non_positive_radius() {
        for r in [0.0, -0.0, -10.0, -1e-300] {
            let err = Circle::new(r).unwrap_err();
            assert!(matches!(err, ShapeError::InvalidArgument { .. }), "r={r}");
        }
    }

    #[test]
    fn rejects_non_finite_radius() {
        for r in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(Circle::new(r).is_err(), "r={r}");
        }
    }

    #[test]
    fn small_radius_area_is_positive() {
        let c = Circle::new(1e-100).unwrap();
        assert!(c.area() > 0.0);
        assert!((c.area() / (PI * 1e-200) - 1.0).abs() < 1e-12);
    }
}
