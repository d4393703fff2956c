//! Interaction core for the zoomlens widget.
//!
//! Pure transform math and the pointer state machine, independent of any
//! rendering layer. The `zoomlens-ui` crate binds this to the DOM; everything
//! here is natively testable.

pub mod config;
pub mod controller;
pub mod geometry;
pub mod transform;

pub use config::ZoomConfig;
pub use controller::{Cursor, Mode, PointerInput, ZoomController};
pub use geometry::{Rect, ViewportGeometry};
pub use transform::{clamp_pan_axis, Transform};
