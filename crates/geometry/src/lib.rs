//! Plane shapes with validated construction and area computation.
//!
//! Model
//! - `Shape` is the only capability callers need: `area()`.
//! - `Circle` and `Triangle` are immutable value types; constructors validate
//!   and return `Result<_, ShapeError>`, so a built value always has a
//!   well-defined area.
//! - `AnyShape` closes the set of variants for heterogeneous collections;
//!   `calculate_area` dispatches through the trait without type inspection.
//!
//! Code cross-refs: `shape::Shape`, `circle::Circle`, `triangle::Triangle`,
//! `cfg::RIGHT_ANGLE_TOL`, `sample::draw_shapes`.

pub mod cfg;
pub mod circle;
pub mod error;
pub mod sample;
pub mod shape;
pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use circle::Circle;
pub use error::ShapeError;
pub use shape::{calculate_area, total_area, AnyShape, Shape};
pub use triangle::Triangle;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::RIGHT_ANGLE_TOL;
    pub use crate::sample::{draw_circle, draw_shapes, draw_triangle, DrawCfg, ReplayToken};
    pub use crate::{calculate_area, total_area, AnyShape, Circle, Shape, ShapeError, Triangle};
    pub use nalgebra::Vector2 as Vec2;
}
