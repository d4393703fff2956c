use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Read-only geometry snapshot, resolved by the hosting environment each time
/// an event needs it.
///
/// `container` is the visible clipping region. `image` is the layout rect of
/// the image element **before** any translate/scale is applied; pan clamping
/// compares `image extent × zoom` against the container extent on both axes,
/// so the extents here must be the unscaled ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportGeometry {
    pub container: Rect,
    pub image: Rect,
}
