//! Tolerance defaults (internal policy).
//!
//! Policy
//! - Defaults are fixed constants; call sites that need a different tolerance
//!   pass it explicitly (`Triangle::is_right_with`).

/// Absolute tolerance on `|a² + b² − c²|` used by `Triangle::is_right`.
pub const RIGHT_ANGLE_TOL: f64 = 1e-9;
