//! The drawing session: single owner of the store and both controllers
//!
//! A `Session` is the in-process library boundary the UI layer talks to.
//! Exactly one mutation path is active at a time, either scheduled ticks
//! (timed mode) or pointer events (manual mode), so no locking is needed.
//! Scheduled ticks are cancellable through a generation counter: `clear`,
//! `pause`, and mode switches bump the generation, turning any in-flight
//! tick scheduled before the cancellation into a no-op.

use crate::color::Color;
use crate::controller::{ManualController, Mode, Phase, TickOutcome, TimedController};
use crate::errors::{ConfigError, RenderError};
use crate::float_types::Real;
use crate::gears::{DrivePoint, GearConfig};
use crate::render::{Decoration, render_frame};
use crate::segment::SegmentStore;
use image::{ExtendedColorType, ImageEncoder, RgbaImage, codecs::png::PngEncoder};

/// Capability to deliver one scheduled tick. Minted by [`Session::start`]
/// and [`Session::resume`]; stale tokens (older than the last cancellation)
/// are silently ignored by [`Session::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickToken {
    generation: u64,
}

/// Result of delivering one scheduled tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    /// Token was stale or the controller is not running; nothing happened.
    Stale,
    /// One point was sampled and appended; schedule the next tick.
    Advanced,
    /// The cycle completed and the open segment was archived.
    Complete,
}

/// One spirograph drawing session.
pub struct Session {
    width: u32,
    height: u32,
    config: GearConfig,
    pen_color: Color,
    stroke_width: Real,
    background: Color,
    show_gears: bool,
    speed: Real,
    mode: Mode,
    store: SegmentStore,
    timed: TimedController,
    manual: ManualController,
    generation: u64,
}

impl Session {
    /// A fresh manual-mode session over a `width`×`height` canvas with the
    /// classic defaults: R=120, r=45, d=75, a red pen at width 1.5 on a
    /// dark blue background, gears shown, speed 3×.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            config: GearConfig::default(),
            pen_color: Color::rgb(0xE6, 0x39, 0x46),
            stroke_width: 1.5,
            background: Color::rgb(0x1A, 0x1A, 0x2E),
            show_gears: true,
            speed: 3.0,
            mode: Mode::Manual,
            store: SegmentStore::new(),
            timed: TimedController::new(),
            manual: ManualController::new(),
            generation: 0,
        }
    }

    /// Canvas center; all sampled points are translated to it.
    pub fn center(&self) -> DrivePoint {
        DrivePoint::new(self.width as Real / 2.0, self.height as Real / 2.0)
    }

    /// Replaces the gear configuration and pen settings.
    ///
    /// Rejected wholesale on any validation failure, leaving the previous
    /// settings in place. Gear parameters are latched while a timed run is
    /// active (running or paused) so the run's step count stays fixed; pen
    /// color and width may change any time and take effect at the next
    /// segment boundary.
    pub fn configure(
        &mut self,
        config: GearConfig,
        pen_color: Color,
        stroke_width: Real,
        background: Color,
    ) -> Result<(), ConfigError> {
        if !(stroke_width.is_finite() && stroke_width > 0.0) {
            return Err(ConfigError::NonPositiveStrokeWidth(stroke_width));
        }
        let run_active = matches!(self.timed.phase(), Phase::Running | Phase::Paused);
        if run_active && config != self.config {
            return Err(ConfigError::LockedWhileRunning);
        }
        self.config = config;
        self.pen_color = pen_color;
        self.stroke_width = stroke_width;
        self.background = background;
        Ok(())
    }

    /// Timed-animation speed multiplier; latched at the next `start`.
    pub fn set_speed(&mut self, speed: Real) -> Result<(), ConfigError> {
        if !(speed.is_finite() && speed > 0.0) {
            return Err(ConfigError::NonPositiveSpeed(speed));
        }
        self.speed = speed;
        Ok(())
    }

    pub fn set_show_gears(&mut self, show: bool) {
        self.show_gears = show;
    }

    /// Switches drive controllers. Switching implies [`clear`](Self::clear);
    /// selecting the mode already active is a no-op.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.clear();
    }

    /// Cancels any pending tick and wipes the store and both controllers.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.timed.reset();
        self.manual.reset();
        self.store.clear();
    }

    // ------------------------------------------------------------------
    // Timed mode
    // ------------------------------------------------------------------

    /// Begins a timed run: opens a fresh segment with the active pen and
    /// returns the token to drive the scheduling loop with. Returns `None`
    /// (no-op) outside timed mode or when a run is already under way.
    pub fn start(&mut self) -> Option<TickToken> {
        if self.mode != Mode::Timed || !self.timed.start(&self.config, self.speed) {
            return None;
        }
        self.generation += 1;
        self.store.begin(self.pen_color, self.stroke_width);
        Some(TickToken {
            generation: self.generation,
        })
    }

    /// Freezes a running animation and cancels its pending tick. The open
    /// segment stays open for `resume`.
    pub fn pause(&mut self) {
        if self.timed.pause() {
            self.generation += 1;
        }
    }

    /// Continues a paused run under a fresh token. No-op when not paused
    /// (in particular at 100% progress).
    pub fn resume(&mut self) -> Option<TickToken> {
        if self.mode != Mode::Timed || !self.timed.resume() {
            return None;
        }
        self.generation += 1;
        Some(TickToken {
            generation: self.generation,
        })
    }

    /// Delivers one scheduled tick: samples the next point on the curve and
    /// appends it to the open segment. A token minted before the last
    /// cancellation is stale and the call is a no-op, which is what makes
    /// the animation loop safely cancellable mid-run.
    pub fn tick(&mut self, token: TickToken) -> TickStatus {
        if token.generation != self.generation || self.mode != Mode::Timed {
            return TickStatus::Stale;
        }
        match self.timed.tick() {
            TickOutcome::Inactive => TickStatus::Stale,
            TickOutcome::Finished => {
                self.store.close();
                TickStatus::Complete
            },
            TickOutcome::Advanced(angle) => {
                let point = self.config.pen_point(angle, self.center());
                self.store.append(point);
                TickStatus::Advanced
            },
        }
    }

    // ------------------------------------------------------------------
    // Manual mode
    // ------------------------------------------------------------------

    /// Pointer landed at raw angle `raw` (e.g. `atan2` of the pointer
    /// position relative to the canvas center, in `(-π, π]`).
    ///
    /// Opens a new segment seeded with the point at the current cumulative
    /// angle when none is open or the pen settings changed, so consecutive
    /// strokes connect visually at the seam. No-op outside manual mode.
    pub fn pointer_down(&mut self, raw: Real) {
        if self.mode != Mode::Manual {
            return;
        }
        self.manual.pointer_down(raw);
        let pen_matches = self
            .store
            .open()
            .is_some_and(|open| open.matches(self.pen_color, self.stroke_width));
        if !pen_matches {
            self.store.begin(self.pen_color, self.stroke_width);
            let seed = self.config.pen_point(self.manual.cumulative(), self.center());
            self.store.append(seed);
        }
    }

    /// Pointer moved while dragging: unwraps the angle delta and appends
    /// one point per interpolated drive angle. No-op when no drag is in
    /// progress or outside manual mode.
    pub fn pointer_move(&mut self, raw: Real) {
        if self.mode != Mode::Manual {
            return;
        }
        let center = self.center();
        for angle in self.manual.pointer_move(raw) {
            self.store.append(self.config.pen_point(angle, center));
        }
    }

    /// Pointer released, anywhere on the page. The open segment stays open
    /// so drawing can resume in the same color region.
    pub fn pointer_up(&mut self) {
        self.manual.pointer_up();
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Renders the current state onto `target`.
    pub fn render(&self, target: &mut RgbaImage) -> Result<(), RenderError> {
        render_frame(target, self.background, &self.store, self.decoration().as_ref())
    }

    /// Renders the current state and encodes it as PNG bytes.
    pub fn export_raster(&self) -> Result<Vec<u8>, RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::TargetUnavailable);
        }
        let mut frame = RgbaImage::new(self.width, self.height);
        self.render(&mut frame)?;
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes).write_image(
            frame.as_raw(),
            self.width,
            self.height,
            ExtendedColorType::Rgba8,
        )?;
        Ok(bytes)
    }

    fn decoration(&self) -> Option<Decoration> {
        if !self.show_gears {
            return None;
        }
        let drive_angle = match self.mode {
            // Gears track the pen only while a timed run is actually drawing.
            Mode::Timed => {
                if self.timed.phase() != Phase::Running {
                    return None;
                }
                self.timed.current_angle()
            },
            Mode::Manual => self.manual.cumulative(),
        };
        Some(Decoration {
            config: self.config,
            drive_angle,
            center: self.center(),
            pen_color: self.pen_color,
        })
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn phase(&self) -> Phase {
        self.timed.phase()
    }

    /// Fraction of the timed cycle completed, in `[0, 1]`.
    pub fn progress(&self) -> Real {
        self.timed.progress()
    }

    /// The manual controller's continuous drive angle.
    pub const fn cumulative_angle(&self) -> Real {
        self.manual.cumulative()
    }

    pub const fn gear_config(&self) -> &GearConfig {
        &self.config
    }

    /// Read-only view of the stroke archive.
    pub const fn store(&self) -> &SegmentStore {
        &self.store
    }
}

impl Default for Session {
    /// A 900×900 canvas with the classic defaults.
    fn default() -> Self {
        Self::new(900, 900)
    }
}
