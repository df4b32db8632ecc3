//! Repositionable text labels.

use crate::style::SerializableColor;
use crate::transform::{deflate, fit_contain, rotated_about, scaled_about, translated};
use kurbo::{Affine, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for labels.
pub type LabelId = Uuid;

/// Margin deflating the viewport before the initial label fit.
pub const LABEL_INSET: f64 = 24.0;

/// Fixed height of the label box in pixels.
pub const LABEL_BOX_HEIGHT: f64 = 48.0;

/// Horizontal slack subtracted from the viewport width for the label box.
pub const LABEL_BOX_WIDTH_INSET: f64 = 140.0;

/// Font size labels are rendered at.
pub const LABEL_FONT_SIZE: f64 = 28.0;

/// Size of the label box for a given viewport.
pub fn label_box_size(viewport: Size) -> Size {
    Size::new(
        (viewport.width - LABEL_BOX_WIDTH_INSET).max(1.0),
        LABEL_BOX_HEIGHT,
    )
}

/// Initial label transform: contain-fit the label box into the
/// viewport deflated by [`LABEL_INSET`], centered.
pub fn initial_transform(viewport: Size) -> Affine {
    let dst = deflate(
        Rect::new(0.0, 0.0, viewport.width, viewport.height),
        LABEL_INSET,
    );
    fit_contain(label_box_size(viewport), dst)
}

/// A text label overlaid on the photo.
///
/// Each label owns an independent affine transform mutated directly by
/// the pan/pinch/rotate gesture handlers; the render surface reads it
/// every frame without buffering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextLabel {
    pub(crate) id: LabelId,
    /// Text content, mutated by the host text input. Initially empty.
    pub text: String,
    /// The label's own transform (position/scale/rotation).
    pub transform: Affine,
    /// Color snapshotted from the brush color at creation time.
    pub color: SerializableColor,
}

impl TextLabel {
    /// Create an empty label fitted and centered within the viewport.
    pub fn new(viewport: Size, color: SerializableColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: String::new(),
            transform: initial_transform(viewport),
            color,
        }
    }

    /// Whether the label has any content.
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// Replace the label's content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Move the label by a screen-space delta (one pan-gesture update).
    pub fn translate_by(&mut self, delta: Vec2) {
        self.transform = translated(self.transform, delta);
    }

    /// Scale the label uniformly about a pivot in label-local space.
    pub fn scale_by(&mut self, s: f64, origin: Vec2) {
        self.transform = scaled_about(self.transform, s, origin);
    }

    /// Rotate the label about a pivot in label-local space.
    pub fn rotate_by(&mut self, theta: f64, origin: Vec2) {
        self.transform = rotated_about(self.transform, theta, origin);
    }

    /// Get the unique identifier.
    pub fn id(&self) -> LabelId {
        self.id
    }
}
