//! Frame description built from the editor state.
//!
//! A [`Frame`] is the full read surface a backend needs for one paint:
//! ordered stroke primitives with resolved paint and blend, ordered
//! label primitives with their transforms, and the mode-dependent
//! visibility flags.

use kurbo::{Affine, BezPath, Stroke as StrokeOptions};
use peniko::{BlendMode, Color};
use photoink_core::transform::to_m4;
use photoink_core::{EditMode, Editor, LABEL_FONT_SIZE, LabelId, StrokeId, label_box_size};

/// One stroke ready to paint.
#[derive(Debug, Clone)]
pub struct StrokePrimitive {
    /// Stable key across list mutation.
    pub id: StrokeId,
    /// Path geometry (move-to, line-to polyline).
    pub path: BezPath,
    /// Stroke geometry options (width, round caps/joins).
    pub stroke: StrokeOptions,
    /// Resolved color; transparent for eraser strokes.
    pub color: Color,
    /// Compositing mode; eraser strokes carry the clear blend and
    /// punch through earlier ink.
    pub blend: BlendMode,
}

/// One text label ready to paint (or to overlay as a text input).
#[derive(Debug, Clone)]
pub struct LabelPrimitive {
    /// Stable key across list mutation.
    pub id: LabelId,
    pub text: String,
    /// The label's own affine transform.
    pub transform: Affine,
    /// The same transform expanded to a column-major 4x4 matrix.
    pub matrix4: [f64; 16],
    pub color: Color,
    pub font_size: f64,
    /// Layout width of the label box.
    pub box_width: f64,
}

/// Snapshot of everything a backend draws in one pass.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Whether the background photo is drawn this frame (only while
    /// viewing; it is hidden during active editing).
    pub background_visible: bool,
    /// Whether labels are currently host-edited text inputs rather
    /// than painted by the backend.
    pub labels_editable: bool,
    /// Strokes in paint order, oldest first.
    pub strokes: Vec<StrokePrimitive>,
    /// Labels in creation order.
    pub labels: Vec<LabelPrimitive>,
}

impl Frame {
    /// Build the frame description for the current editor state.
    pub fn build(editor: &Editor) -> Self {
        let strokes = editor
            .strokes()
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| StrokePrimitive {
                id: s.id(),
                path: s.to_path(),
                stroke: s.paint.stroke(),
                color: s.paint.render_color(),
                blend: s.paint.blend(),
            })
            .collect();

        let box_width = label_box_size(editor.viewport()).width;
        let labels = editor
            .labels()
            .iter()
            .map(|l| LabelPrimitive {
                id: l.id(),
                text: l.text.clone(),
                transform: l.transform,
                matrix4: to_m4(l.transform),
                color: l.color.into(),
                font_size: LABEL_FONT_SIZE,
                box_width,
            })
            .collect();

        Self {
            background_visible: editor.mode() == EditMode::View,
            labels_editable: editor.mode() == EditMode::Text,
            strokes,
            labels,
        }
    }
}
