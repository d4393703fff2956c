mod use_zoom_pan;

pub use use_zoom_pan::{use_zoom_pan, ZoomPanHandle};
