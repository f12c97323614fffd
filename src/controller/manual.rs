//! Pointer-driven manual tracing

use crate::angle::{DriveState, interp_steps};
use crate::float_types::Real;

/// Turns wrapped pointer angles into a continuous stream of drive angles.
///
/// Owns the cumulative drive angle exclusively; point history lives in the
/// segment store, never here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualController {
    dragging: bool,
    drive: DriveState,
}

impl ManualController {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The continuous, turn-counting drive angle.
    pub const fn cumulative(&self) -> Real {
        self.drive.cumulative
    }

    /// Pointer landed: re-anchor the unwrap baseline and begin dragging.
    /// The cumulative angle does not move until the pointer does.
    pub fn pointer_down(&mut self, raw: Real) {
        self.drive.rebase(raw);
        self.dragging = true;
    }

    /// Pointer moved while dragging: unwraps the delta and returns the
    /// interpolated drive angles to sample, finest at one angle per 0.02 rad
    /// so fast motion still produces a continuous stroke. Returns nothing
    /// when no drag is in progress (move without a prior down is a no-op).
    pub fn pointer_move(&mut self, raw: Real) -> Vec<Real> {
        if !self.dragging {
            return Vec::new();
        }
        let base = self.drive.cumulative;
        let delta = self.drive.observe(raw);
        let steps = interp_steps(delta);
        let sub_step = delta / steps as Real;
        (1..=steps).map(|i| base + sub_step * i as Real).collect()
    }

    /// Pointer released (anywhere, not just over the canvas). The open
    /// segment stays open so drawing can resume where it left off.
    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Back to angle zero; used on clear and mode switches.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
