//! Input event types delivered by the host runtime.
//!
//! The editor never talks to a touch subsystem directly; the host
//! forwards per-pointer touch samples, pan-gesture deltas and discrete
//! button presses as plain values.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Phase of one touch sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchPhase {
    /// Finger down.
    Start,
    /// Finger moved while down.
    Active,
    /// Finger lifted.
    End,
}

/// One touch sample for a single pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub position: Point,
}

impl TouchEvent {
    pub fn start(x: f64, y: f64) -> Self {
        Self {
            phase: TouchPhase::Start,
            position: Point::new(x, y),
        }
    }

    pub fn active(x: f64, y: f64) -> Self {
        Self {
            phase: TouchPhase::Active,
            position: Point::new(x, y),
        }
    }

    pub fn end(x: f64, y: f64) -> Self {
        Self {
            phase: TouchPhase::End,
            position: Point::new(x, y),
        }
    }
}

/// Discrete editing actions exposed to the host's buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlAction {
    /// Enter drawing mode with the ink brush.
    Brush,
    /// Toggle the eraser while drawing.
    Eraser,
    /// Enter text mode, adding a label if allowed.
    AddText,
    /// Undo the most recent committed item in the active mode.
    Undo,
    /// Leave editing and return to viewing.
    Done,
}
