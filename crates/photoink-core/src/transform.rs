//! Affine transform utilities for label placement and manipulation.
//!
//! Text labels carry an independent `kurbo::Affine`. The helpers here
//! cover the three manipulation primitives (translate in screen space,
//! scale and rotate about a pivot), the initial "contain" fit into the
//! viewport, and conversion to a render-ready 4x4 matrix.

use kurbo::{Affine, Rect, Size, Vec2};

/// Prepend a screen-space translation to a transform.
///
/// The translation composes on the left (`T * m`), so a drag delta
/// moves the content by exactly `delta` on screen regardless of any
/// rotation or scale already present in `m`.
pub fn translated(m: Affine, delta: Vec2) -> Affine {
    Affine::translate(delta) * m
}

/// Append a uniform scale pivoted at `origin` (in the transform's
/// local space).
pub fn scaled_about(m: Affine, s: f64, origin: Vec2) -> Affine {
    m * Affine::translate(origin) * Affine::scale(s) * Affine::translate(-origin)
}

/// Append a rotation by `theta` radians pivoted at `origin`.
pub fn rotated_about(m: Affine, theta: f64, origin: Vec2) -> Affine {
    m * Affine::translate(origin) * Affine::rotate(theta) * Affine::translate(-origin)
}

/// Expand a 2D affine into a column-major 4x4 matrix with an identity
/// z row/column, the layout GPU-side consumers expect.
pub fn to_m4(m: Affine) -> [f64; 16] {
    // kurbo coefficient order: [xx, yx, xy, yy, x0, y0]
    let [xx, yx, xy, yy, x0, y0] = m.as_coeffs();
    [
        xx, yx, 0.0, 0.0, //
        xy, yy, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        x0, y0, 0.0, 1.0,
    ]
}

/// Inset a rect by `amount` on all four sides.
pub fn deflate(rect: Rect, amount: f64) -> Rect {
    Rect::new(
        rect.x0 + amount,
        rect.y0 + amount,
        rect.x1 - amount,
        rect.y1 - amount,
    )
}

/// Compute the "contain" fit of a `src`-sized box (anchored at the
/// origin) into `dst`: aspect ratio preserved, scaled to fit entirely
/// within `dst` (up or down), centered. Never crops.
pub fn fit_contain(src: Size, dst: Rect) -> Affine {
    if src.width <= 0.0 || src.height <= 0.0 {
        return Affine::translate(Vec2::new(dst.x0, dst.y0));
    }

    let scale = (dst.width() / src.width).min(dst.height() / src.height);
    let tx = dst.x0 + (dst.width() - src.width * scale) / 2.0;
    let ty = dst.y0 + (dst.height() - src.height * scale) / 2.0;

    Affine::translate(Vec2::new(tx, ty)) * Affine::scale(scale)
}
