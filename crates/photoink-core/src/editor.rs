//! Editor state: stroke and label stores, mode machine, undo.
//!
//! All mutation happens synchronously on the host's input-dispatch
//! loop through the methods here; a render pass reads the state
//! without mutating it, polling [`Editor::take_dirty`] to know when a
//! redraw is needed.

use crate::input::{ControlAction, TouchEvent, TouchPhase};
use crate::label::TextLabel;
use crate::stroke::Stroke;
use crate::style::{DEFAULT_STROKE_WIDTH, SerializableColor, StrokePaint};
use kurbo::{Size, Vec2};
use serde::{Deserialize, Serialize};

/// Editing mode. `View` is both the initial state and the one "done"
/// returns to; `Draw` and `Text` are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditMode {
    /// Viewing: the background photo is shown, no editing active.
    #[default]
    View,
    /// Freehand drawing (brush or eraser).
    Draw,
    /// Text label editing.
    Text,
}

/// The annotation editor.
///
/// Owns the stroke list, the label list and the active brush settings.
/// The stroke list is never empty: its last element is always the
/// in-progress stroke the current touch sequence appends to.
#[derive(Debug, Clone)]
pub struct Editor {
    mode: EditMode,
    strokes: Vec<Stroke>,
    labels: Vec<TextLabel>,
    /// Brush width for strokes created after this point.
    stroke_width: f64,
    /// Brush color for strokes and labels created after this point.
    stroke_color: SerializableColor,
    eraser_active: bool,
    /// Display viewport, used for initial label placement.
    viewport: Size,
    /// Set while a touch sequence is between Start and End.
    touch_active: bool,
    /// Set on every mutation; the host clears it each frame.
    dirty: bool,
}

impl Editor {
    /// Create an editor for the given display viewport.
    pub fn new(viewport: Size) -> Self {
        let paint = StrokePaint::ink(DEFAULT_STROKE_WIDTH, SerializableColor::white());
        Self {
            mode: EditMode::View,
            strokes: vec![Stroke::new(paint)],
            labels: Vec::new(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_color: SerializableColor::white(),
            eraser_active: false,
            viewport,
            touch_active: false,
            dirty: true,
        }
    }

    /// Dispatch a discrete UI action from the host controls.
    pub fn apply(&mut self, action: ControlAction) {
        match action {
            ControlAction::Brush => self.select_brush(),
            ControlAction::Eraser => self.toggle_eraser(),
            ControlAction::AddText => self.add_text(),
            ControlAction::Undo => self.undo(),
            ControlAction::Done => self.finish(),
        }
    }

    /// Enter drawing mode with the ink brush.
    ///
    /// Resets the in-progress stroke and re-snapshots its paint from
    /// the current settings, discarding any partial path left from
    /// eraser use, so brush/eraser switches never leave stray marks.
    pub fn select_brush(&mut self) {
        let paint = StrokePaint::ink(self.stroke_width, self.stroke_color);
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.reset();
            stroke.paint = paint;
            stroke.is_eraser = false;
        }
        self.eraser_active = false;
        self.touch_active = false;
        self.set_mode(EditMode::Draw);
    }

    /// Toggle the eraser. Only meaningful while drawing; does not
    /// change the mode itself.
    ///
    /// Enabling gives the in-progress stroke the fixed-width clear
    /// paint; disabling restores ink from the last-selected width and
    /// color.
    pub fn toggle_eraser(&mut self) {
        if self.mode != EditMode::Draw {
            return;
        }
        let enable = !self.eraser_active;
        let paint = if enable {
            StrokePaint::eraser()
        } else {
            StrokePaint::ink(self.stroke_width, self.stroke_color)
        };
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.paint = paint;
            stroke.is_eraser = enable;
        }
        self.eraser_active = enable;
        self.dirty = true;
    }

    /// Enter text mode, appending a new empty label unless the last
    /// label is still empty (prevents stacking blank labels).
    pub fn add_text(&mut self) {
        self.set_mode(EditMode::Text);
        let allowed = self.labels.last().map(TextLabel::has_text).unwrap_or(true);
        if allowed {
            self.labels
                .push(TextLabel::new(self.viewport, self.stroke_color));
            self.dirty = true;
        }
    }

    /// Undo the most recent committed item in the active mode.
    ///
    /// In draw mode this removes the most recently sealed stroke (index
    /// `len - 2`), leaving the trailing in-progress stroke in place so
    /// drawing continues immediately; with fewer than two strokes it is
    /// a no-op. In text mode it pops the last label. In view mode undo
    /// is not exposed and does nothing.
    pub fn undo(&mut self) {
        match self.mode {
            EditMode::Draw => {
                if self.strokes.len() >= 2 {
                    self.strokes.remove(self.strokes.len() - 2);
                    self.dirty = true;
                }
            }
            EditMode::Text => {
                if self.labels.pop().is_some() {
                    self.dirty = true;
                }
            }
            EditMode::View => {}
        }
    }

    /// Leave editing and return to viewing. Pure view-mode toggle: no
    /// stroke or label data changes, but the eraser toggle is cleared.
    pub fn finish(&mut self) {
        self.eraser_active = false;
        self.touch_active = false;
        self.set_mode(EditMode::View);
    }

    /// Feed one touch sample into the stroke pipeline.
    ///
    /// Samples are ignored outside draw mode. `Active` samples that
    /// arrive without a preceding `Start` are dropped so spurious
    /// events cannot leave drawing artifacts.
    pub fn handle_touch(&mut self, event: TouchEvent) {
        if self.mode != EditMode::Draw {
            return;
        }
        match event.phase {
            TouchPhase::Start => {
                self.touch_active = true;
                if let Some(stroke) = self.strokes.last_mut() {
                    stroke.begin(event.position);
                }
                self.dirty = true;
            }
            TouchPhase::Active => {
                if !self.touch_active {
                    log::trace!("dropping active touch sample with no preceding start");
                    return;
                }
                if let Some(stroke) = self.strokes.last_mut() {
                    stroke.line_to(event.position);
                }
                self.dirty = true;
            }
            TouchPhase::End => {
                // Seals the previous stroke as history.
                let sealed = self.next_stroke();
                self.strokes.push(sealed);
                self.touch_active = false;
                self.dirty = true;
            }
        }
    }

    /// Fresh in-progress stroke with paint snapshotted from the
    /// current settings and eraser toggle.
    fn next_stroke(&self) -> Stroke {
        if self.eraser_active {
            Stroke::new_eraser()
        } else {
            Stroke::new(StrokePaint::ink(self.stroke_width, self.stroke_color))
        }
    }

    /// Apply one pan-gesture update to a label's transform. The delta
    /// is since the previous update, not since gesture start.
    pub fn pan_label(&mut self, index: usize, delta: Vec2) {
        match self.labels.get_mut(index) {
            Some(label) => {
                label.translate_by(delta);
                self.dirty = true;
            }
            None => log::warn!("pan_label: label index {index} out of range"),
        }
    }

    /// Replace a label's text (from the host text input).
    pub fn set_label_text(&mut self, index: usize, text: impl Into<String>) {
        match self.labels.get_mut(index) {
            Some(label) => {
                label.set_text(text);
                self.dirty = true;
            }
            None => log::warn!("set_label_text: label index {index} out of range"),
        }
    }

    /// Remove a label (the close control on its box). Out-of-range
    /// indices are a no-op.
    pub fn remove_label(&mut self, index: usize) {
        if index < self.labels.len() {
            self.labels.remove(index);
            self.dirty = true;
        } else {
            log::warn!("remove_label: label index {index} out of range");
        }
    }

    /// Set the brush width for subsequently created strokes.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
    }

    /// Set the brush color for subsequently created strokes and labels.
    pub fn set_stroke_color(&mut self, color: SerializableColor) {
        self.stroke_color = color;
    }

    /// Update the display viewport (affects future label placement).
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    fn set_mode(&mut self, mode: EditMode) {
        if self.mode != mode {
            log::debug!("edit mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
        self.dirty = true;
    }

    /// Current editing mode.
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Ordered stroke list, oldest first; the last element is always
    /// the in-progress stroke.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Ordered label list, oldest first.
    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    /// Whether the eraser toggle is currently on.
    pub fn eraser_active(&self) -> bool {
        self.eraser_active
    }

    /// Current brush width.
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Current brush color.
    pub fn stroke_color(&self) -> SerializableColor {
        self.stroke_color
    }

    /// Display viewport.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Take the dirty flag, clearing it. Called once per frame by the
    /// host to decide whether to repaint.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ERASER_STROKE_WIDTH;
    use crate::transform::translated;

    const VIEWPORT: Size = Size::new(400.0, 800.0);

    fn editor() -> Editor {
        Editor::new(VIEWPORT)
    }

    fn draw_stroke(editor: &mut Editor, x: f64, y: f64) {
        editor.handle_touch(TouchEvent::start(x, y));
        editor.handle_touch(TouchEvent::active(x + 10.0, y + 10.0));
        editor.handle_touch(TouchEvent::end(x + 10.0, y + 10.0));
    }

    #[test]
    fn test_initial_state() {
        let ed = editor();
        assert_eq!(ed.mode(), EditMode::View);
        assert_eq!(ed.strokes().len(), 1);
        assert!(ed.strokes()[0].is_empty());
        assert!(ed.labels().is_empty());
        assert!(!ed.eraser_active());
    }

    #[test]
    fn test_stroke_count_after_each_end() {
        let mut ed = editor();
        ed.select_brush();

        for i in 0..4 {
            draw_stroke(&mut ed, i as f64 * 20.0, 0.0);
            // (number of prior end phases) + 1, never zero.
            assert_eq!(ed.strokes().len(), i + 2);
        }
        // Trailing stroke is the fresh in-progress one.
        assert!(ed.strokes().last().is_some_and(Stroke::is_empty));
    }

    #[test]
    fn test_touch_ignored_outside_draw_mode() {
        let mut ed = editor();
        ed.handle_touch(TouchEvent::start(5.0, 5.0));
        ed.handle_touch(TouchEvent::active(6.0, 6.0));
        ed.handle_touch(TouchEvent::end(6.0, 6.0));
        assert_eq!(ed.strokes().len(), 1);
        assert!(ed.strokes()[0].is_empty());
    }

    #[test]
    fn test_stray_active_ignored() {
        let mut ed = editor();
        ed.select_brush();
        ed.handle_touch(TouchEvent::active(10.0, 10.0));
        ed.handle_touch(TouchEvent::active(20.0, 20.0));
        assert!(ed.strokes()[0].is_empty());

        // A proper sequence still works afterwards.
        ed.handle_touch(TouchEvent::start(0.0, 0.0));
        ed.handle_touch(TouchEvent::active(5.0, 5.0));
        assert_eq!(ed.strokes()[0].len(), 2);
    }

    #[test]
    fn test_end_seals_and_appends_fresh_stroke() {
        let mut ed = editor();
        ed.select_brush();
        draw_stroke(&mut ed, 0.0, 0.0);

        assert_eq!(ed.strokes().len(), 2);
        assert_eq!(ed.strokes()[0].len(), 2);
        assert!(ed.strokes()[1].is_empty());
    }

    #[test]
    fn test_undo_draw_removes_sealed_not_in_progress() {
        let mut ed = editor();
        ed.select_brush();
        draw_stroke(&mut ed, 0.0, 0.0); // s0
        draw_stroke(&mut ed, 50.0, 0.0); // s1
        // [s0, s1, in-progress]
        assert_eq!(ed.strokes().len(), 3);
        let s0_id = ed.strokes()[0].id();
        let current_id = ed.strokes()[2].id();

        ed.undo();
        assert_eq!(ed.strokes().len(), 2);
        assert_eq!(ed.strokes()[0].id(), s0_id);
        assert_eq!(ed.strokes()[1].id(), current_id);

        ed.undo();
        assert_eq!(ed.strokes().len(), 1);
        assert_eq!(ed.strokes()[0].id(), current_id);

        // Only the in-progress stroke remains: no-op.
        ed.undo();
        assert_eq!(ed.strokes().len(), 1);
    }

    #[test]
    fn test_undo_text_pops_last_label() {
        let mut ed = editor();
        ed.add_text();
        ed.set_label_text(0, "first");
        ed.add_text();
        assert_eq!(ed.labels().len(), 2);

        ed.undo();
        assert_eq!(ed.labels().len(), 1);
        assert_eq!(ed.labels()[0].text, "first");

        ed.undo();
        assert!(ed.labels().is_empty());

        // Empty list: no-op.
        ed.undo();
        assert!(ed.labels().is_empty());
    }

    #[test]
    fn test_undo_in_view_mode_is_noop() {
        let mut ed = editor();
        ed.select_brush();
        draw_stroke(&mut ed, 0.0, 0.0);
        ed.add_text();
        ed.finish();

        ed.undo();
        assert_eq!(ed.strokes().len(), 2);
        assert_eq!(ed.labels().len(), 1);
    }

    #[test]
    fn test_add_text_guard_suppresses_blank_stacking() {
        let mut ed = editor();
        ed.add_text();
        assert_eq!(ed.labels().len(), 1);

        // Second press without typing: no new label.
        ed.add_text();
        assert_eq!(ed.labels().len(), 1);

        ed.set_label_text(0, "note");
        ed.add_text();
        assert_eq!(ed.labels().len(), 2);
    }

    #[test]
    fn test_label_color_snapshot() {
        let mut ed = editor();
        ed.add_text();
        ed.set_label_text(0, "a");
        ed.set_stroke_color(SerializableColor::black());
        ed.add_text();

        assert_eq!(ed.labels()[0].color, SerializableColor::white());
        assert_eq!(ed.labels()[1].color, SerializableColor::black());
    }

    #[test]
    fn test_pan_label_accumulates_in_screen_space() {
        let mut ed = editor();
        ed.add_text();
        let initial = ed.labels()[0].transform;

        let deltas = [
            Vec2::new(3.0, 4.0),
            Vec2::new(-1.0, 2.0),
            Vec2::new(6.0, -5.0),
        ];
        for d in deltas {
            ed.pan_label(0, d);
        }

        let expected = translated(initial, Vec2::new(8.0, 1.0));
        let a = ed.labels()[0].transform.as_coeffs();
        let b = expected.as_coeffs();
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_pan_label_out_of_range_is_noop() {
        let mut ed = editor();
        ed.pan_label(0, Vec2::new(1.0, 1.0));
        assert!(ed.labels().is_empty());
    }

    #[test]
    fn test_remove_label_bounds_guard() {
        let mut ed = editor();
        ed.add_text();
        ed.remove_label(5);
        assert_eq!(ed.labels().len(), 1);
        ed.remove_label(0);
        assert!(ed.labels().is_empty());
    }

    #[test]
    fn test_mode_switch_leaves_other_list_untouched() {
        let mut ed = editor();
        ed.select_brush();
        draw_stroke(&mut ed, 0.0, 0.0);
        let stroke_ids: Vec<_> = ed.strokes().iter().map(Stroke::id).collect();

        ed.add_text();
        ed.set_label_text(0, "x");
        let label_ids: Vec<_> = ed.labels().iter().map(TextLabel::id).collect();

        // Text -> Draw must not alter labels.
        ed.select_brush();
        assert_eq!(
            ed.labels().iter().map(TextLabel::id).collect::<Vec<_>>(),
            label_ids
        );

        // Draw -> Text must not alter strokes (last label non-empty,
        // so a new label is appended, but strokes stay put).
        ed.add_text();
        assert_eq!(
            ed.strokes().iter().map(Stroke::id).collect::<Vec<_>>(),
            stroke_ids
        );
    }

    #[test]
    fn test_eraser_toggle_round_trip() {
        let mut ed = editor();
        ed.set_stroke_width(5.0);
        ed.set_stroke_color(SerializableColor::black());
        ed.select_brush();

        ed.toggle_eraser();
        assert!(ed.eraser_active());
        let current = ed.strokes().last().unwrap();
        assert!(current.is_eraser);
        assert!(current.paint.is_clear());
        assert!((current.paint.stroke_width - ERASER_STROKE_WIDTH).abs() < f64::EPSILON);

        // Toggling again restores ink from the last-selected settings.
        ed.toggle_eraser();
        assert!(!ed.eraser_active());
        let current = ed.strokes().last().unwrap();
        assert!(!current.is_eraser);
        assert_eq!(
            current.paint,
            StrokePaint::ink(5.0, SerializableColor::black())
        );
    }

    #[test]
    fn test_eraser_toggle_outside_draw_is_noop() {
        let mut ed = editor();
        ed.toggle_eraser();
        assert!(!ed.eraser_active());

        ed.add_text();
        ed.toggle_eraser();
        assert!(!ed.eraser_active());
    }

    #[test]
    fn test_eraser_strokes_sealed_with_clear_paint() {
        let mut ed = editor();
        ed.select_brush();
        ed.toggle_eraser();
        draw_stroke(&mut ed, 0.0, 0.0);

        let sealed = &ed.strokes()[0];
        assert!(sealed.is_eraser);
        assert!(sealed.paint.is_clear());

        // While the eraser stays on, the fresh stroke is an eraser too.
        let current = ed.strokes().last().unwrap();
        assert!(current.is_eraser);
    }

    #[test]
    fn test_brush_press_discards_partial_eraser_path() {
        let mut ed = editor();
        ed.select_brush();
        ed.toggle_eraser();
        ed.handle_touch(TouchEvent::start(0.0, 0.0));
        ed.handle_touch(TouchEvent::active(10.0, 0.0));
        assert!(!ed.strokes().last().unwrap().is_empty());

        ed.select_brush();
        let current = ed.strokes().last().unwrap();
        assert!(current.is_empty());
        assert!(!current.is_eraser);
        assert!(!ed.eraser_active());
    }

    #[test]
    fn test_brush_settings_not_retroactive() {
        let mut ed = editor();
        ed.select_brush();
        ed.handle_touch(TouchEvent::start(0.0, 0.0));
        ed.handle_touch(TouchEvent::active(10.0, 0.0));

        // Changing settings mid-stroke must not touch the live stroke.
        ed.set_stroke_width(9.0);
        ed.set_stroke_color(SerializableColor::black());
        let live = ed.strokes().last().unwrap();
        assert_eq!(
            live.paint,
            StrokePaint::ink(DEFAULT_STROKE_WIDTH, SerializableColor::white())
        );

        // The stroke appended on end snapshots the new settings.
        ed.handle_touch(TouchEvent::end(10.0, 0.0));
        let next = ed.strokes().last().unwrap();
        assert_eq!(
            next.paint,
            StrokePaint::ink(9.0, SerializableColor::black())
        );
    }

    #[test]
    fn test_finish_clears_eraser_and_returns_to_view() {
        let mut ed = editor();
        ed.select_brush();
        ed.toggle_eraser();
        ed.finish();

        assert_eq!(ed.mode(), EditMode::View);
        assert!(!ed.eraser_active());
    }

    #[test]
    fn test_apply_dispatch() {
        let mut ed = editor();
        ed.apply(ControlAction::Brush);
        assert_eq!(ed.mode(), EditMode::Draw);

        ed.apply(ControlAction::Eraser);
        assert!(ed.eraser_active());

        ed.apply(ControlAction::AddText);
        assert_eq!(ed.mode(), EditMode::Text);
        assert_eq!(ed.labels().len(), 1);

        ed.apply(ControlAction::Undo);
        assert!(ed.labels().is_empty());

        ed.apply(ControlAction::Done);
        assert_eq!(ed.mode(), EditMode::View);
    }

    #[test]
    fn test_dirty_flag_polling() {
        let mut ed = editor();
        assert!(ed.take_dirty());
        assert!(!ed.take_dirty());

        ed.select_brush();
        assert!(ed.take_dirty());

        // Ignored input does not mark the state dirty.
        ed.finish();
        ed.take_dirty();
        ed.handle_touch(TouchEvent::active(1.0, 1.0));
        assert!(!ed.take_dirty());
    }
}
