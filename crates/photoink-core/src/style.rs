//! Paint and color types for strokes.

use kurbo::{Cap, Join, Stroke as StrokeOptions};
use peniko::{BlendMode, Color, Compose, Mix};
use serde::{Deserialize, Serialize};

/// Default brush width in pixels.
pub const DEFAULT_STROKE_WIDTH: f64 = 3.0;

/// Fixed eraser width in pixels.
pub const ERASER_STROKE_WIDTH: f64 = 20.0;

/// Miter limit applied to all stroke paints.
pub const STROKE_MITER_LIMIT: f64 = 5.0;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Paint attributes for one stroke.
///
/// `color: None` is the transparent eraser paint: the stroke is
/// composited with the clear blend and punches through previously
/// drawn ink instead of painting over it. Anti-aliasing is assumed on
/// by rendering backends; it is not a per-paint switch here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokePaint {
    /// Stroke width in pixels.
    pub stroke_width: f64,
    /// Stroke color; `None` for the eraser.
    pub color: Option<SerializableColor>,
}

impl StrokePaint {
    /// Ink paint with the given width and color.
    pub fn ink(stroke_width: f64, color: SerializableColor) -> Self {
        Self {
            stroke_width,
            color: Some(color),
        }
    }

    /// Eraser paint: fixed width, transparent color, clear blend.
    pub fn eraser() -> Self {
        Self {
            stroke_width: ERASER_STROKE_WIDTH,
            color: None,
        }
    }

    /// Whether this is the transparent eraser paint.
    pub fn is_clear(&self) -> bool {
        self.color.is_none()
    }

    /// Blend mode for compositing this paint.
    pub fn blend(&self) -> BlendMode {
        if self.is_clear() {
            BlendMode::new(Mix::Normal, Compose::Clear)
        } else {
            BlendMode::new(Mix::Normal, Compose::SrcOver)
        }
    }

    /// Resolved color for rendering (transparent for the eraser).
    pub fn render_color(&self) -> Color {
        self.color
            .unwrap_or_else(SerializableColor::transparent)
            .into()
    }

    /// Stroke geometry options: round cap, round join, miter limit 5.
    pub fn stroke(&self) -> StrokeOptions {
        StrokeOptions::new(self.stroke_width)
            .with_caps(Cap::Round)
            .with_join(Join::Round)
            .with_miter_limit(STROKE_MITER_LIMIT)
    }
}

impl Default for StrokePaint {
    fn default() -> Self {
        Self::ink(DEFAULT_STROKE_WIDTH, SerializableColor::white())
    }
}
