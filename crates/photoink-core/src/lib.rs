//! PhotoInk Core Library
//!
//! Runtime-agnostic annotation model for the PhotoInk photo editor:
//! freehand ink/eraser strokes, repositionable text labels and the
//! mode/undo state machine that drives them. Touch capture, gesture
//! recognition and rendering are host concerns.

pub mod editor;
pub mod input;
pub mod label;
pub mod stroke;
pub mod style;
pub mod transform;

pub use editor::{EditMode, Editor};
pub use input::{ControlAction, TouchEvent, TouchPhase};
pub use label::{LABEL_FONT_SIZE, LabelId, TextLabel, label_box_size};
pub use stroke::{Stroke, StrokeId};
pub use style::{DEFAULT_STROKE_WIDTH, ERASER_STROKE_WIDTH, SerializableColor, StrokePaint};
