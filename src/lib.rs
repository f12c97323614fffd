//! An interactive **hypotrochoid** ("spirograph") curve engine: the math that
//! maps gear parameters and a drive angle to pen coordinates, an incremental
//! stroke-accumulation model supporting both timed animation and
//! pointer-driven manual tracing, and a stateless rasterizer for the result.
//!
//! The [`Session`] type is the library boundary: a UI layer supplies
//! configuration and pointer/tick events and consumes rendered frames.
//!
//! ```
//! use spirors::{GearConfig, Mode, Session, TickStatus};
//!
//! let mut session = Session::new(900, 900);
//! session.configure(
//!     GearConfig::new(120.0, 45.0, 75.0)?,
//!     "#E63946".parse()?,
//!     1.5,
//!     "#1a1a2e".parse()?,
//! )?;
//!
//! // Timed mode: drive the animation loop until the curve closes.
//! session.set_mode(Mode::Timed);
//! let token = session.start().unwrap();
//! while session.tick(token) == TickStatus::Advanced {}
//!
//! let png_bytes = session.export_raster().unwrap();
//! # assert!(!png_bytes.is_empty());
//! # Ok::<(), spirors::ConfigError>(())
//! ```
//!
//! # Features
//! - **f64**: use f64 as Real (default)
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod angle;
pub mod color;
pub mod controller;
pub mod errors;
pub mod float_types;
pub mod gears;
pub mod render;
pub mod segment;
pub mod session;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use color::Color;
pub use controller::{Mode, Phase};
pub use errors::{ConfigError, RenderError};
pub use gears::{DrivePoint, GearConfig};
pub use render::Decoration;
pub use segment::{Segment, SegmentStore};
pub use session::{Session, TickStatus, TickToken};
