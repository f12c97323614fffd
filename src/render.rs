//! Stateless rasterization of the segment store onto an RGBA frame
//!
//! The renderer is a pure function of its inputs: background color, the
//! segments in painter order, and optional gear decoration. Strokes are
//! rasterized by signed-distance coverage with a one-pixel falloff, which
//! yields round caps and joins without special-casing either.

use crate::color::Color;
use crate::errors::RenderError;
use crate::float_types::{Real, TAU};
use crate::gears::{DrivePoint, GearConfig};
use crate::segment::SegmentStore;
use image::RgbaImage;

/// Stroke color of the dashed gear circles (white at 30% alpha).
const GEAR_OUTLINE: Color = Color::rgba(255, 255, 255, 77);
/// Stroke color of the pen radius line (white at 50% alpha).
const RADIUS_LINE: Color = Color::rgba(255, 255, 255, 128);
/// Dash pattern of the gear circles, in arc-length pixels: 5 on, 5 off.
const GEAR_DASH: (Real, Real) = (5.0, 5.0);
/// Radius of the filled pen marker.
const PEN_MARKER_RADIUS: Real = 4.0;

/// Live gear overlay: outer ring, rolling inner gear, radius line from the
/// inner gear center to the pen, and a filled pen marker. Drawn after all
/// segments so it never hides behind strokes.
#[derive(Debug, Clone, Copy)]
pub struct Decoration {
    pub config: GearConfig,
    pub drive_angle: Real,
    pub center: DrivePoint,
    pub pen_color: Color,
}

/// Renders one full frame: background, every segment in painter order
/// (archive oldest-first, then the open segment), then the decoration.
///
/// Fails with [`RenderError::TargetUnavailable`] if the target has zero
/// width or height; session state is unaffected and a later render with a
/// real surface will succeed.
pub fn render_frame(
    target: &mut RgbaImage,
    background: Color,
    segments: &SegmentStore,
    decoration: Option<&Decoration>,
) -> Result<(), RenderError> {
    if target.width() == 0 || target.height() == 0 {
        return Err(RenderError::TargetUnavailable);
    }

    fill(target, background);

    for segment in segments.iter() {
        // Segments with fewer than two points render as nothing.
        if segment.points.len() < 2 {
            continue;
        }
        for pair in segment.points.windows(2) {
            stroke_line(target, pair[0], pair[1], segment.width, segment.color);
        }
    }

    if let Some(gears) = decoration {
        draw_gears(target, gears);
    }

    Ok(())
}

fn draw_gears(target: &mut RgbaImage, gears: &Decoration) {
    let config = &gears.config;
    let inner_center = config.inner_gear_center(gears.drive_angle, gears.center);
    let pen = config.pen_point(gears.drive_angle, gears.center);

    stroke_circle(
        target,
        gears.center,
        config.outer_radius(),
        2.0,
        GEAR_OUTLINE,
        Some(GEAR_DASH),
    );
    stroke_circle(
        target,
        inner_center,
        config.inner_radius(),
        2.0,
        GEAR_OUTLINE,
        Some(GEAR_DASH),
    );
    stroke_line(target, inner_center, pen, 1.0, RADIUS_LINE);
    fill_disc(target, pen, PEN_MARKER_RADIUS, gears.pen_color);
}

fn fill(target: &mut RgbaImage, color: Color) {
    let px = image::Rgba(color.channels());
    for pixel in target.pixels_mut() {
        *pixel = px;
    }
}

/// Blends `color` onto one pixel with the given coverage, bounds-checked.
fn put(target: &mut RgbaImage, x: i64, y: i64, color: Color, coverage: Real) {
    if coverage <= 0.0 || x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= target.width() || y >= target.height() {
        return;
    }
    let dst = target.get_pixel(x, y).0;
    target.put_pixel(x, y, image::Rgba(color.over(dst, coverage as f32)));
}

/// Iterates the pixel bounding box of `[min, max]` expanded by `pad`.
fn each_pixel(
    target: &RgbaImage,
    min: DrivePoint,
    max: DrivePoint,
    pad: Real,
) -> impl Iterator<Item = (i64, i64)> {
    let x0 = ((min.x - pad).floor() as i64).max(0);
    let y0 = ((min.y - pad).floor() as i64).max(0);
    let x1 = ((max.x + pad).ceil() as i64).min(target.width() as i64 - 1);
    let y1 = ((max.y + pad).ceil() as i64).min(target.height() as i64 - 1);
    (y0..=y1).flat_map(move |y| (x0..=x1).map(move |x| (x, y)))
}

/// One thick line segment with round caps, via distance-to-segment coverage.
fn stroke_line(target: &mut RgbaImage, a: DrivePoint, b: DrivePoint, width: Real, color: Color) {
    let half = width / 2.0;
    let min = DrivePoint::new(a.x.min(b.x), a.y.min(b.y));
    let max = DrivePoint::new(a.x.max(b.x), a.y.max(b.y));
    let pixels: Vec<(i64, i64)> = each_pixel(target, min, max, half + 1.0).collect();
    for (x, y) in pixels {
        let p = DrivePoint::new(x as Real + 0.5, y as Real + 0.5);
        let coverage = (half + 0.5 - segment_distance(p, a, b)).clamp(0.0, 1.0);
        put(target, x, y, color, coverage);
    }
}

/// Distance from `p` to the closed segment `ab`.
fn segment_distance(p: DrivePoint, a: DrivePoint, b: DrivePoint) -> Real {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq == 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// Circle outline of the given stroke width, optionally dashed along its
/// arc length with an `(on, off)` pattern.
fn stroke_circle(
    target: &mut RgbaImage,
    center: DrivePoint,
    radius: Real,
    width: Real,
    color: Color,
    dash: Option<(Real, Real)>,
) {
    let half = width / 2.0;
    let min = DrivePoint::new(center.x - radius, center.y - radius);
    let max = DrivePoint::new(center.x + radius, center.y + radius);
    let pixels: Vec<(i64, i64)> = each_pixel(target, min, max, half + 1.0).collect();
    for (x, y) in pixels {
        let p = DrivePoint::new(x as Real + 0.5, y as Real + 0.5);
        let offset = p - center;
        let coverage = (half + 0.5 - (offset.norm() - radius).abs()).clamp(0.0, 1.0);
        if coverage <= 0.0 {
            continue;
        }
        if let Some((on, off)) = dash {
            let angle = (offset.y).atan2(offset.x).rem_euclid(TAU);
            if (angle * radius) % (on + off) >= on {
                continue;
            }
        }
        put(target, x, y, color, coverage);
    }
}

/// Filled disc, used for the pen marker.
fn fill_disc(target: &mut RgbaImage, center: DrivePoint, radius: Real, color: Color) {
    let min = DrivePoint::new(center.x - radius, center.y - radius);
    let max = DrivePoint::new(center.x + radius, center.y + radius);
    let pixels: Vec<(i64, i64)> = each_pixel(target, min, max, 1.0).collect();
    for (x, y) in pixels {
        let p = DrivePoint::new(x as Real + 0.5, y as Real + 0.5);
        let coverage = (radius + 0.5 - (p - center).norm()).clamp(0.0, 1.0);
        put(target, x, y, color, coverage);
    }
}
