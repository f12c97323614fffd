//! Monotonic timed animation over one closed-curve cycle

use crate::float_types::Real;
use crate::gears::GearConfig;

/// Base angular step per tick, in radians, before the speed multiplier.
pub const BASE_STEP: Real = 0.02;

/// Timed-run state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Not running, progress zero.
    #[default]
    Idle,
    /// Progress advancing one step per tick.
    Running,
    /// Progress frozen strictly between start and completion.
    Paused,
    /// One full cycle sampled; only `reset` leaves this phase.
    Complete,
}

/// What a single scheduled tick produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Controller is not running; nothing happened.
    Inactive,
    /// The drive angle to sample and append this tick.
    Advanced(Real),
    /// The cycle just completed; the caller archives the open segment.
    Finished,
}

/// Advances the drive angle by a fixed step per scheduling tick until one
/// full closed-curve cycle has been sampled.
///
/// Gear parameters and speed are latched at [`start`](Self::start) so
/// `total_steps` stays well-defined for the whole run.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimedController {
    phase: Phase,
    step: Real,
    total_steps: Real,
    current_step: u64,
}

impl TimedController {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Begins a run from `Idle`, latching the cycle extent and step size.
    /// Returns `false` (no-op) from any other phase.
    pub fn start(&mut self, config: &GearConfig, speed: Real) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.step = BASE_STEP * speed;
        self.total_steps = config.cycle_extent() / self.step;
        self.current_step = 0;
        self.phase = Phase::Running;
        true
    }

    /// Freezes progress. No-op unless running.
    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.phase = Phase::Paused;
        true
    }

    /// Continues a paused run. No-op in any other phase, including
    /// `Complete` (resuming at 100% does nothing).
    pub fn resume(&mut self) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    /// Back to `Idle` with zero progress. Valid from any phase.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// One scheduled tick: yields the next drive angle, or `Finished` once
    /// `current_step` reaches `total_steps`.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Inactive;
        }
        if self.current_step as Real >= self.total_steps {
            self.phase = Phase::Complete;
            return TickOutcome::Finished;
        }
        let angle = self.current_step as Real * self.step;
        self.current_step += 1;
        TickOutcome::Advanced(angle)
    }

    /// Drive angle corresponding to the current progress; used for gear
    /// decoration while a run is active.
    pub fn current_angle(&self) -> Real {
        self.current_step as Real * self.step
    }

    /// Fraction of the cycle sampled so far, in `[0, 1]`.
    pub fn progress(&self) -> Real {
        match self.phase {
            Phase::Complete => 1.0,
            Phase::Idle => 0.0,
            _ if self.total_steps > 0.0 => {
                (self.current_step as Real / self.total_steps).min(1.0)
            },
            _ => 0.0,
        }
    }
}
