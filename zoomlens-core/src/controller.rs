use crate::config::ZoomConfig;
use crate::geometry::ViewportGeometry;
use crate::transform::{clamp_pan_axis, Transform};

/// Pointer events consumed by the controller. Coordinates are viewport
/// (client) coordinates as delivered by the hosting environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    DoubleClick { x: f64, y: f64 },
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Leave,
}

/// Zoom level state: fitted at the base scale, or magnified above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Fitted,
    Magnified,
}

/// Pointer-affordance hint for the host to render as cursor feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    ZoomIn,
    Grab,
    Grabbing,
}

impl Cursor {
    pub fn as_css(&self) -> &'static str {
        match self {
            Cursor::ZoomIn => "zoom-in",
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}

/// Snapshot taken at drag start. Pan targets are computed from this origin
/// plus the cumulative pointer displacement, never from per-move deltas, so
/// rounding cannot accumulate across moves.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    start_x: f64,
    start_y: f64,
    origin_offset_x: f64,
    origin_offset_y: f64,
}

/// State machine converting pointer input into the image transform.
///
/// Double-click toggles between fitted and magnified (zoom-to-point in,
/// reset out); while magnified, down/move/up/leave drive a drag gesture that
/// pans the image with per-axis clamping. Events arriving without resolvable
/// geometry or outside an active gesture are silent no-ops.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomController {
    config: ZoomConfig,
    transform: Transform,
    drag: Option<DragState>,
}

impl ZoomController {
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            transform: Transform::fitted(config.min_zoom),
            config,
            drag: None,
        }
    }

    pub fn config(&self) -> ZoomConfig {
        self.config
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn mode(&self) -> Mode {
        if self.transform.zoom > self.config.min_zoom {
            Mode::Magnified
        } else {
            Mode::Fitted
        }
    }

    pub fn cursor(&self) -> Cursor {
        match (self.mode(), self.is_dragging()) {
            (Mode::Fitted, _) => Cursor::ZoomIn,
            (Mode::Magnified, false) => Cursor::Grab,
            (Mode::Magnified, true) => Cursor::Grabbing,
        }
    }

    /// Feed one pointer event. Returns whether the transform changed, so the
    /// host can skip redundant re-renders on no-op paths.
    pub fn handle(&mut self, input: PointerInput, geometry: Option<&ViewportGeometry>) -> bool {
        match input {
            PointerInput::DoubleClick { x, y } => {
                let Some(geometry) = geometry else {
                    return false;
                };
                self.toggle_zoom(x, y, geometry)
            }
            PointerInput::Down { x, y } => {
                // Dragging is only permitted while magnified.
                if self.mode() == Mode::Fitted {
                    return false;
                }
                self.drag = Some(DragState {
                    start_x: x,
                    start_y: y,
                    origin_offset_x: self.transform.offset_x,
                    origin_offset_y: self.transform.offset_y,
                });
                false
            }
            PointerInput::Move { x, y } => {
                let Some(drag) = self.drag else {
                    return false;
                };
                let Some(geometry) = geometry else {
                    return false;
                };
                self.pan_to(
                    drag.origin_offset_x + (x - drag.start_x),
                    drag.origin_offset_y + (y - drag.start_y),
                    geometry,
                )
            }
            PointerInput::Up | PointerInput::Leave => {
                // Both terminate the gesture; leave keeps a drag from staying
                // stuck active when the pointer exits the region.
                self.drag = None;
                false
            }
        }
    }

    fn toggle_zoom(&mut self, client_x: f64, client_y: f64, geometry: &ViewportGeometry) -> bool {
        let before = self.transform;
        if self.mode() == Mode::Fitted {
            let new_zoom = self.config.target_zoom();
            if new_zoom <= self.config.min_zoom {
                // Degenerate configuration: the toggle cannot magnify, so it
                // stays exactly at the fitted state instead of accumulating
                // float error through the zoom-to-point math.
                self.transform = Transform::fitted(self.config.min_zoom);
            } else {
                let click_x = client_x - geometry.container.left;
                let click_y = client_y - geometry.container.top;
                self.transform = self.transform.zoom_to_point(click_x, click_y, new_zoom);
            }
        } else {
            // Zoom-out always recenters, discarding the pan position and any
            // gesture in flight.
            self.transform = Transform::fitted(self.config.min_zoom);
            self.drag = None;
        }
        self.transform != before
    }

    fn pan_to(&mut self, target_x: f64, target_y: f64, geometry: &ViewportGeometry) -> bool {
        let before = self.transform;
        self.transform.offset_x = clamp_pan_axis(
            target_x,
            geometry.container.width,
            geometry.image.width,
            self.transform.zoom,
        );
        self.transform.offset_y = clamp_pan_axis(
            target_y,
            geometry.container.height,
            geometry.image.height,
            self.transform.zoom,
        );
        self.transform != before
    }
}
