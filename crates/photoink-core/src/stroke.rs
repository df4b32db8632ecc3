//! Freehand ink and eraser strokes.

use crate::style::StrokePaint;
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for strokes.
pub type StrokeId = Uuid;

/// One continuous ink or eraser mark: an ordered polyline plus paint.
///
/// The editor keeps a trailing in-progress stroke at the end of its
/// stroke list; it is mutated point-by-point during an active touch
/// and sealed when the touch ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stroke {
    pub(crate) id: StrokeId,
    /// Points in the path: move-to the first, line-to each subsequent.
    pub points: Vec<Point>,
    /// Paint attributes.
    pub paint: StrokePaint,
    /// When true this stroke erases previously drawn content.
    pub is_eraser: bool,
}

impl Stroke {
    /// Create a new empty stroke with the given paint.
    pub fn new(paint: StrokePaint) -> Self {
        Self {
            id: Uuid::new_v4(),
            points: Vec::new(),
            paint,
            is_eraser: false,
        }
    }

    /// Create a new empty eraser stroke.
    pub fn new_eraser() -> Self {
        Self {
            id: Uuid::new_v4(),
            points: Vec::new(),
            paint: StrokePaint::eraser(),
            is_eraser: true,
        }
    }

    /// Anchor the path at `point` (the touch-start move-to).
    pub fn begin(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Append a line segment to `point`.
    pub fn line_to(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Clear the path, keeping the paint.
    pub fn reset(&mut self) {
        self.points.clear();
    }

    /// Number of points in the path.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();

        if self.points.is_empty() {
            return path;
        }

        path.move_to(self.points[0]);
        for point in self.points.iter().skip(1) {
            path.line_to(*point);
        }

        path
    }

    /// Bounding box of the path points.
    pub fn bounds(&self) -> Rect {
        if self.points.is_empty() {
            return Rect::ZERO;
        }

        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;

        for point in &self.points {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }

        Rect::new(min_x, min_y, max_x, max_y)
    }

    /// Get the unique identifier.
    pub fn id(&self) -> StrokeId {
        self.id
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(StrokePaint::default())
    }
}
