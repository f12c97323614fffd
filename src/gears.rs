//! Gear configuration and the hypotrochoid sampling formula

use crate::errors::ConfigError;
use crate::float_types::{Real, TAU};
use nalgebra::Point2;

/// A sampled pen location in canvas space.
pub type DrivePoint = Point2<Real>;

/// The gear triple driving the curve: a fixed outer ring of radius `R`,
/// a rolling inner gear of radius `r`, and a pen fixed `d` away from the
/// inner gear's center.
///
/// Construction is the single validation gate: once a `GearConfig` exists,
/// every ratio the sampling formula computes is finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearConfig {
    outer_radius: Real,
    inner_radius: Real,
    pen_distance: Real,
}

impl GearConfig {
    /// Validates and builds a gear configuration.
    ///
    /// Rejects `r == 0` (the angular-ratio term `(R - r) / r` would divide by
    /// zero), non-positive or non-finite radii, `r >= R`, and negative pen
    /// distances. Callers that accept user input should surface the error and
    /// keep their previous configuration.
    pub fn new(outer_radius: Real, inner_radius: Real, pen_distance: Real) -> Result<Self, ConfigError> {
        if inner_radius == 0.0 {
            return Err(ConfigError::ZeroInnerRadius);
        }
        if !(outer_radius.is_finite() && outer_radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius(outer_radius));
        }
        if !(inner_radius.is_finite() && inner_radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius(inner_radius));
        }
        if inner_radius >= outer_radius {
            return Err(ConfigError::InnerNotSmaller {
                inner: inner_radius,
                outer: outer_radius,
            });
        }
        if !(pen_distance.is_finite() && pen_distance >= 0.0) {
            return Err(ConfigError::NegativePenDistance(pen_distance));
        }
        Ok(Self {
            outer_radius,
            inner_radius,
            pen_distance,
        })
    }

    /// Outer ring radius `R`.
    pub const fn outer_radius(&self) -> Real {
        self.outer_radius
    }

    /// Rolling inner gear radius `r`.
    pub const fn inner_radius(&self) -> Real {
        self.inner_radius
    }

    /// Pen offset `d` from the inner gear center.
    pub const fn pen_distance(&self) -> Real {
        self.pen_distance
    }

    /// **Mathematical Foundation: Hypotrochoid Parametrization**
    ///
    /// Samples the pen position for a given drive angle:
    ///
    /// ```text
    /// diff  = R - r
    /// ratio = diff / r
    /// x(t)  = cx + diff·cos(t) + d·cos(ratio·t)
    /// y(t)  = cy + diff·sin(t) − d·sin(ratio·t)
    /// ```
    ///
    /// `angle` is the rolling angle of the inner gear's center around the
    /// ring (a spatial parameter, not wall-clock time), so sampling at a
    /// fixed angular step yields evenly spaced geometric detail regardless
    /// of frame rate.
    pub fn pen_point(&self, angle: Real, center: DrivePoint) -> DrivePoint {
        let diff = self.outer_radius - self.inner_radius;
        let ratio = diff / self.inner_radius;
        DrivePoint::new(
            center.x + diff * angle.cos() + self.pen_distance * (ratio * angle).cos(),
            center.y + diff * angle.sin() - self.pen_distance * (ratio * angle).sin(),
        )
    }

    /// Center of the rolling inner gear at `angle`: `center + (R−r)·(cos t, sin t)`.
    /// Used for gear decoration only, never for curve math.
    pub fn inner_gear_center(&self, angle: Real, center: DrivePoint) -> DrivePoint {
        let diff = self.outer_radius - self.inner_radius;
        DrivePoint::new(center.x + diff * angle.cos(), center.y + diff * angle.sin())
    }

    /// Number of full turns of the drive angle needed to close the curve:
    /// `r / gcd(R, r)`, computed on **rounded integer magnitudes** of the
    /// radii. Non-integer gear ratios are approximated by rounding before
    /// computing the repeat period, so closure is exact only for integer
    /// `R`, `r` and approximate otherwise.
    pub fn rotations(&self) -> u64 {
        let r_outer = round_magnitude(self.outer_radius);
        let r_inner = round_magnitude(self.inner_radius);
        let g = gcd(r_outer, r_inner);
        if g == 0 {
            // Both radii rounded to zero; keep the animation finite.
            return 1;
        }
        r_inner / g
    }

    /// Total drive-angle range for one closed repetition of the curve.
    pub fn cycle_extent(&self) -> Real {
        self.rotations() as Real * TAU
    }
}

impl Default for GearConfig {
    /// The classic starting gears: R=120, r=45, d=75.
    fn default() -> Self {
        Self {
            outer_radius: 120.0,
            inner_radius: 45.0,
            pen_distance: 75.0,
        }
    }
}

#[inline]
fn round_magnitude(value: Real) -> u64 {
    value.abs().round() as u64
}

/// Greatest common divisor by Euclid's algorithm.
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::PI;

    #[test]
    fn gcd_euclid() {
        assert_eq!(gcd(120, 45), 15);
        assert_eq!(gcd(45, 120), 15);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn rotations_rounds_radii_before_gcd() {
        // 119.7 and 45.2 round to 120 and 45: gcd 15, rotations 3
        let config = GearConfig::new(119.7, 45.2, 75.0).unwrap();
        assert_eq!(config.rotations(), 3);
        assert!((config.cycle_extent() - 6.0 * PI).abs() < 1e-9);
    }
}
