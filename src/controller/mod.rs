//! Drive controllers: the two mutually exclusive producers of drive angles

pub mod manual;
pub mod timed;

pub use manual::ManualController;
pub use timed::{Phase, TickOutcome, TimedController};

/// Which controller currently owns the drive angle. The two are never
/// active concurrently; switching modes clears the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Monotonic animation from 0% to 100% of one closed-curve cycle.
    Timed,
    /// Drive angle derived from pointer movement; open-ended, resettable.
    #[default]
    Manual,
}
