//! The `Shape` capability and the closed set of shape variants.
//!
//! - `Shape`: anything with an area. Implemented by `Circle`, `Triangle`,
//!   and the sum type `AnyShape`.
//! - `calculate_area`: dispatch by capability; works for concrete types and
//!   for `dyn Shape` alike.

use crate::circle::Circle;
use crate::triangle::Triangle;

/// A plane figure with a well-defined area.
pub trait Shape {
    /// Area of the figure. Positive for every validly constructed shape.
    fn area(&self) -> f64;
}

/// Closed set of supported shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnyShape {
    Circle(Circle),
    Triangle(Triangle),
}

impl AnyShape {
    /// Lowercase variant name, as used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            AnyShape::Circle(_) => "circle",
            AnyShape::Triangle(_) => "triangle",
        }
    }
}

impl Shape for AnyShape {
    #[inline]
    fn area(&self) -> f64 {
        match self {
            AnyShape::Circle(c) => c.area(),
            AnyShape::Triangle(t) => t.area(),
        }
    }
}

impl From<Circle> for AnyShape {
    fn from(c: Circle) -> Self {
        AnyShape::Circle(c)
    }
}

impl From<Triangle> for AnyShape {
    fn from(t: Triangle) -> Self {
        AnyShape::Triangle(t)
    }
}

impl<S: Shape + ?Sized> Shape for &S {
    #[inline]
    fn area(&self) -> f64 {
        (**self).area()
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    #[inline]
    fn area(&self) -> f64 {
        (**self).area()
    }
}

/// Area of any shape, without knowing its concrete type.
///
/// Pure delegation: no validation of its own, since construction already
/// guaranteed a valid shape.
#[inline]
pub fn calculate_area<S: Shape + ?Sized>(shape: &S) -> f64 {
    shape.area()
}

/// Sum of areas over a heterogeneous collection.
pub fn total_area<I>(shapes: I) -> f64
where
    I: IntoIterator,
    I::Item: Shape,
{
    shapes.into_iter().map(|s| s.area()).sum()
}
