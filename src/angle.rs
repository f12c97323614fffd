//! Unwrapping wrapped pointer angles into a continuous drive parameter

use crate::float_types::{PI, Real, TAU};

/// Fixed angular step used when interpolating between two raw pointer
/// samples, in radians. Matches the timed controller's base step so manual
/// and timed strokes have the same point density.
pub const INTERP_STEP: Real = 0.02;

/// Shortest-path angular delta from `prev` to `raw`, both in `(-π, π]`.
///
/// A pointer sweeping across the ±π seam produces a raw jump of magnitude
/// close to 2π; folding it back into `(-π, π]` recovers the small physical
/// motion, in either rotational direction.
pub fn unwrap_delta(prev: Real, raw: Real) -> Real {
    let mut delta = raw - prev;
    if delta > PI {
        delta -= TAU;
    }
    if delta < -PI {
        delta += TAU;
    }
    delta
}

/// Number of interpolation sub-steps for an unwrapped delta:
/// `max(1, floor(|Δ| / INTERP_STEP))`. Fast pointer motion still yields a
/// visually continuous stroke instead of a sparse polyline.
pub fn interp_steps(delta: Real) -> usize {
    ((delta.abs() / INTERP_STEP).floor() as usize).max(1)
}

/// Continuous drive-angle state owned by the manual controller.
///
/// `cumulative` is unbounded and turn-counting; `last_raw` is the unwrap
/// baseline from the previous pointer sample.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DriveState {
    pub cumulative: Real,
    pub last_raw: Real,
}

impl DriveState {
    /// Re-anchors the unwrap baseline without moving the cumulative angle.
    /// Called on pointer-down so the first move measures from where the
    /// pointer actually landed.
    pub fn rebase(&mut self, raw: Real) {
        self.last_raw = raw;
    }

    /// Folds a new raw sample into the state and returns the unwrapped delta.
    /// The cumulative angle advances by exactly that delta.
    pub fn observe(&mut self, raw: Real) -> Real {
        let delta = unwrap_delta(self.last_raw, raw);
        self.cumulative += delta;
        self.last_raw = raw;
        delta
    }

    /// Back to zero; used on clear and on mode switches.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seam_crossing_positive_direction() {
        // 3.0 → -3.0 crosses the π seam going counter-clockwise: the raw
        // difference is -6.0 but the physical motion is +0.2832 rad.
        let delta = unwrap_delta(3.0, -3.0);
        assert!(delta > 0.0, "delta should be positive, got {delta}");
        assert!((delta - (TAU - 6.0)).abs() < 1e-9);
    }

    #[test]
    fn seam_crossing_negative_direction() {
        let delta = unwrap_delta(-3.0, 3.0);
        assert!(delta < 0.0, "delta should be negative, got {delta}");
        assert!((delta + (TAU - 6.0)).abs() < 1e-9);
    }

    #[test]
    fn small_moves_pass_through() {
        assert!((unwrap_delta(0.5, 0.7) - 0.2).abs() < 1e-9);
        assert!((unwrap_delta(0.7, 0.5) + 0.2).abs() < 1e-9);
    }

    #[test]
    fn interp_step_count() {
        assert_eq!(interp_steps(0.0), 1);
        assert_eq!(interp_steps(0.019), 1);
        assert_eq!(interp_steps(0.05), 2);
        assert_eq!(interp_steps(-0.05), 2);
        assert_eq!(interp_steps(0.107), 5);
    }

    #[test]
    fn observe_accumulates_across_full_turns() {
        let mut state = DriveState::default();
        state.rebase(0.0);
        // Quarter-turn raw samples, five full revolutions.
        let step = TAU / 4.0;
        for i in 1..=20 {
            let raw = unwrap_to_pi(step * i as Real);
            state.observe(raw);
        }
        assert!((state.cumulative - 5.0 * TAU).abs() < 1e-9);
    }

    fn unwrap_to_pi(angle: Real) -> Real {
        let mut a = angle % TAU;
        if a > PI {
            a -= TAU;
        }
        a
    }
}
