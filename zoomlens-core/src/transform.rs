use serde::{Deserialize, Serialize};

/// Translate+scale transform applied to the image element.
///
/// Visually expressed as `translate(offset_x, offset_y)` composed with
/// `scale(zoom)`, with the transform origin at the image's top-left corner.
/// When fitted (zoom at the base scale) both offsets are zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Transform {
    /// The fitted state: base scale, zero offset.
    pub fn fitted(min_zoom: f64) -> Self {
        Self {
            zoom: min_zoom,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Zoom to `new_zoom` so that the container-local point
    /// `(click_x, click_y)` stays visually stationary across the transition.
    ///
    /// The point is first mapped back into image-local unscaled coordinates
    /// under the current transform, then the new offset is chosen to place it
    /// at the same container position under the new zoom.
    pub fn zoom_to_point(&self, click_x: f64, click_y: f64, new_zoom: f64) -> Self {
        let rel_x = (click_x - self.offset_x) / self.zoom;
        let rel_y = (click_y - self.offset_y) / self.zoom;
        Self {
            zoom: new_zoom,
            offset_x: click_x - rel_x * new_zoom,
            offset_y: click_y - rel_y * new_zoom,
        }
    }

    /// CSS transform directive for the host's renderer.
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.offset_x, self.offset_y, self.zoom
        )
    }
}

/// Clamp a pan target on one axis.
///
/// When the scaled image extent fits within the container on this axis
/// (boundary included), the offset is confined to
/// `[0, container_extent - image_extent * zoom]` so the image cannot be
/// dragged to reveal empty space. A larger-than-container image pans
/// unconstrained on that axis.
pub fn clamp_pan_axis(target: f64, container_extent: f64, image_extent: f64, zoom: f64) -> f64 {
    let scaled = image_extent * zoom;
    if scaled <= container_extent {
        target.clamp(0.0, container_extent - scaled)
    } else {
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fitted_has_base_scale_and_zero_offset() {
        let transform = Transform::fitted(1.0);
        assert_eq!(transform.zoom, 1.0);
        assert_eq!(transform.offset_x, 0.0);
        assert_eq!(transform.offset_y, 0.0);
    }

    #[test]
    fn zoom_to_point_from_fitted() {
        let transform = Transform::fitted(1.0).zoom_to_point(100.0, 100.0, 2.0);
        assert_eq!(transform.zoom, 2.0);
        assert_eq!(transform.offset_x, -100.0);
        assert_eq!(transform.offset_y, -100.0);
    }

    #[test]
    fn zoom_to_point_keeps_click_stationary() {
        let before = Transform {
            zoom: 2.0,
            offset_x: -50.0,
            offset_y: -30.0,
        };
        let (px, py) = (137.0, 42.0);
        let after = before.zoom_to_point(px, py, 3.5);

        // The image point under the cursor maps back to the same container
        // position after the transition.
        let rel_x = (px - before.offset_x) / before.zoom;
        let rel_y = (py - before.offset_y) / before.zoom;
        assert!((after.offset_x + rel_x * after.zoom - px).abs() < 1e-9);
        assert!((after.offset_y + rel_y * after.zoom - py).abs() < 1e-9);
    }

    #[test]
    fn zoom_to_same_level_is_identity() {
        let before = Transform {
            zoom: 2.0,
            offset_x: -80.0,
            offset_y: -20.0,
        };
        let after = before.zoom_to_point(200.0, 150.0, 2.0);
        assert!((after.offset_x - before.offset_x).abs() < 1e-9);
        assert!((after.offset_y - before.offset_y).abs() < 1e-9);
    }

    #[test]
    fn css_directive_format() {
        let transform = Transform {
            zoom: 2.0,
            offset_x: -100.0,
            offset_y: -100.0,
        };
        assert_eq!(transform.css(), "translate(-100px, -100px) scale(2)");
        assert_eq!(Transform::fitted(1.0).css(), "translate(0px, 0px) scale(1)");
    }

    #[test]
    fn clamp_scaled_image_exactly_fills_container() {
        // Scaled extent 100 * 2 == container 200: fully constrained to 0.
        assert_eq!(clamp_pan_axis(50.0, 200.0, 100.0, 2.0), 0.0);
        assert_eq!(clamp_pan_axis(-50.0, 200.0, 100.0, 2.0), 0.0);
        assert_eq!(clamp_pan_axis(0.0, 200.0, 100.0, 2.0), 0.0);
    }

    #[test]
    fn clamp_smaller_image_stays_inside_container() {
        // Scaled extent 100 inside container 200: offset confined to [0, 100].
        assert_eq!(clamp_pan_axis(-20.0, 200.0, 50.0, 2.0), 0.0);
        assert_eq!(clamp_pan_axis(150.0, 200.0, 50.0, 2.0), 100.0);
        assert_eq!(clamp_pan_axis(60.0, 200.0, 50.0, 2.0), 60.0);
    }

    #[test]
    fn clamp_larger_image_is_unconstrained() {
        // Scaled extent 400 exceeds container 200: target passes through.
        assert_eq!(clamp_pan_axis(-500.0, 200.0, 200.0, 2.0), -500.0);
        assert_eq!(clamp_pan_axis(500.0, 200.0, 200.0, 2.0), 500.0);
    }

    #[test]
    fn transform_serialization_roundtrip() {
        let original = Transform {
            zoom: 2.5,
            offset_x: -12.25,
            offset_y: 7.5,
        };
        let json = serde_json::to_string(&original).unwrap();
        let restored: Transform = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }
}
