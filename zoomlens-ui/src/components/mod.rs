pub mod zoomable_image;

pub use zoomable_image::ZoomableImage;
