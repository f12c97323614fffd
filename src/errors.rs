//! Configuration and rendering errors

use crate::float_types::Real;

/// All the ways a gear/pen configuration can be rejected.
///
/// Every variant is caught at construction time ([`crate::gears::GearConfig::new`]
/// or [`crate::session::Session::configure`]) so the sampling formula never sees
/// a zero or inverted gear ratio.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The inner gear radius is zero; `(R - r) / r` would divide by zero.
    #[error("inner gear radius must be non-zero")]
    ZeroInnerRadius,
    /// The inner gear must be strictly smaller than the outer gear.
    #[error("inner radius {inner} must be strictly less than outer radius {outer}")]
    InnerNotSmaller { inner: Real, outer: Real },
    /// A radius was zero, negative, or non-finite.
    #[error("radius {0} must be positive and finite")]
    NonPositiveRadius(Real),
    /// The pen distance was negative or non-finite.
    #[error("pen distance {0} must be non-negative and finite")]
    NegativePenDistance(Real),
    /// The stroke width was zero, negative, or non-finite.
    #[error("stroke width {0} must be positive and finite")]
    NonPositiveStrokeWidth(Real),
    /// The animation speed multiplier was zero, negative, or non-finite.
    #[error("speed multiplier {0} must be positive and finite")]
    NonPositiveSpeed(Real),
    /// A color string could not be parsed as `#RGB` or `#RRGGBB` hex.
    #[error("could not parse color: {0:?}")]
    InvalidColor(String),
    /// Gear parameters are latched while a timed run is in progress.
    #[error("gear parameters are locked while a timed run is active")]
    LockedWhileRunning,
}

/// Errors produced while rendering or encoding a frame.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The raster target has zero width or height.
    #[error("render target is unavailable (zero-sized surface)")]
    TargetUnavailable,
    /// The platform image encoder failed.
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
