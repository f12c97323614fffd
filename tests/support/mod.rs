//! Test support library
//! Provides various helper functions & utilities for tests.

use spirors::float_types::Real;
use spirors::{DrivePoint, GearConfig};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Euclidean distance between two sampled points.
pub fn point_distance(a: DrivePoint, b: DrivePoint) -> Real {
    (a - b).norm()
}

/// The reference gear triple used throughout the tests: R=120, r=45, d=75.
pub fn classic_config() -> GearConfig {
    GearConfig::new(120.0, 45.0, 75.0).unwrap()
}
