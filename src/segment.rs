//! The stroke archive: closed segments plus at most one open segment

use crate::color::Color;
use crate::float_types::Real;
use crate::gears::DrivePoint;

/// One continuous stroke of constant color and width.
///
/// Points are append-only while the segment is open; once archived the
/// sequence never changes. A segment with fewer than two points renders as
/// nothing but is kept for consistency.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub color: Color,
    pub width: Real,
    pub points: Vec<DrivePoint>,
}

impl Segment {
    fn new(color: Color, width: Real) -> Self {
        Self {
            color,
            width,
            points: Vec::new(),
        }
    }

    /// Whether this segment matches the given pen settings.
    pub fn matches(&self, color: Color, width: Real) -> bool {
        self.color == color && self.width == width
    }
}

/// Ordered collection of archived segments plus the one under construction.
///
/// Rendering walks the archive oldest-first and the open segment last, so
/// later strokes paint over earlier ones (painter's algorithm, no z-index
/// beyond draw order).
#[derive(Debug, Clone, Default)]
pub struct SegmentStore {
    archive: Vec<Segment>,
    open: Option<Segment>,
}

impl SegmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Archives any existing open segment (even an empty one, so each call
    /// grows the archive by exactly one) and opens a fresh segment.
    pub fn begin(&mut self, color: Color, width: Real) {
        if let Some(open) = self.open.take() {
            self.archive.push(open);
        }
        self.open = Some(Segment::new(color, width));
    }

    /// Appends a point to the open segment.
    ///
    /// No segment being open is a controller sequencing bug; debug builds
    /// assert, release builds drop the point.
    pub fn append(&mut self, point: DrivePoint) {
        debug_assert!(self.open.is_some(), "append with no open segment");
        if let Some(open) = self.open.as_mut() {
            open.points.push(point);
        }
    }

    /// Moves the open segment, if any, into the archive. One-way: archived
    /// segments are immutable.
    pub fn close(&mut self) {
        if let Some(open) = self.open.take() {
            self.archive.push(open);
        }
    }

    /// Discards the archive and the open segment unconditionally.
    pub fn clear(&mut self) {
        self.archive.clear();
        self.open = None;
    }

    /// Archived segments, oldest first.
    pub fn archived(&self) -> &[Segment] {
        &self.archive
    }

    /// The segment currently receiving points, if any.
    pub fn open(&self) -> Option<&Segment> {
        self.open.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// All segments in painter order: archive first, open segment last.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.archive.iter().chain(self.open.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: Real, y: Real) -> DrivePoint {
        DrivePoint::new(x, y)
    }

    #[test]
    fn begin_twice_archives_the_empty_first() {
        let mut store = SegmentStore::new();
        let red = Color::rgb(230, 57, 70);
        store.begin(red, 1.5);
        assert_eq!(store.archived().len(), 0);
        store.begin(red, 1.5);
        assert_eq!(store.archived().len(), 1);
        assert!(store.archived()[0].points.is_empty());
        store.begin(red, 1.5);
        assert_eq!(store.archived().len(), 2);
    }

    #[test]
    fn close_archives_even_single_point_segments() {
        let mut store = SegmentStore::new();
        store.begin(Color::rgb(0, 0, 0), 1.0);
        store.append(pt(1.0, 2.0));
        store.close();
        assert!(!store.is_open());
        assert_eq!(store.archived().len(), 1);
        assert_eq!(store.archived()[0].points.len(), 1);
        // close with nothing open is a no-op
        store.close();
        assert_eq!(store.archived().len(), 1);
    }

    #[test]
    fn painter_order_is_archive_then_open() {
        let mut store = SegmentStore::new();
        store.begin(Color::rgb(1, 0, 0), 1.0);
        store.append(pt(0.0, 0.0));
        store.begin(Color::rgb(0, 1, 0), 1.0);
        store.append(pt(1.0, 1.0));
        let colors: Vec<Color> = store.iter().map(|s| s.color).collect();
        assert_eq!(colors, vec![Color::rgb(1, 0, 0), Color::rgb(0, 1, 0)]);
    }

    #[test]
    fn clear_wipes_everything() {
        let mut store = SegmentStore::new();
        store.begin(Color::rgb(0, 0, 0), 1.0);
        store.append(pt(0.0, 0.0));
        store.close();
        store.begin(Color::rgb(0, 0, 0), 1.0);
        store.clear();
        assert_eq!(store.archived().len(), 0);
        assert!(!store.is_open());
    }
}
