use serde::{Deserialize, Serialize};

/// Tuning parameters for the zoom interaction.
///
/// The default parameterization (factor 2 within limits [1, 4]) gives the
/// fixed two-level toggle; any other factor inside the limits behaves the
/// same way, so a single code path covers both the two-level and the
/// configurable variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    /// Zoom level a double-click magnifies to (clamped into the limits).
    pub zoom_factor: f64,
    /// Base scale of the fitted view.
    pub min_zoom: f64,
    /// Upper zoom limit.
    pub max_zoom: f64,
}

impl ZoomConfig {
    pub const DEFAULT_ZOOM_FACTOR: f64 = 2.0;
    pub const DEFAULT_MIN_ZOOM: f64 = 1.0;
    pub const DEFAULT_MAX_ZOOM: f64 = 4.0;

    /// Create a config, normalizing the limits so `min_zoom <= max_zoom`.
    pub fn new(zoom_factor: f64, min_zoom: f64, max_zoom: f64) -> Self {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        Self {
            zoom_factor,
            min_zoom,
            max_zoom,
        }
    }

    /// The magnified zoom level: `zoom_factor` clamped into the limits.
    pub fn target_zoom(&self) -> f64 {
        self.zoom_factor.clamp(self.min_zoom, self.max_zoom)
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_ZOOM_FACTOR,
            Self::DEFAULT_MIN_ZOOM,
            Self::DEFAULT_MAX_ZOOM,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_two_level_toggle() {
        let config = ZoomConfig::default();
        assert_eq!(config.zoom_factor, 2.0);
        assert_eq!(config.min_zoom, 1.0);
        assert_eq!(config.max_zoom, 4.0);
        assert_eq!(config.target_zoom(), 2.0);
    }

    #[test]
    fn target_zoom_clamps_above_max() {
        let config = ZoomConfig::new(10.0, 1.0, 4.0);
        assert_eq!(config.target_zoom(), 4.0);
    }

    #[test]
    fn target_zoom_clamps_below_min() {
        let config = ZoomConfig::new(0.5, 1.0, 4.0);
        assert_eq!(config.target_zoom(), 1.0);
    }

    #[test]
    fn new_normalizes_swapped_limits() {
        let config = ZoomConfig::new(2.0, 4.0, 1.0);
        assert_eq!(config.min_zoom, 1.0);
        assert_eq!(config.max_zoom, 4.0);
    }

    #[test]
    fn degenerate_config_targets_base_scale() {
        let config = ZoomConfig::new(1.0, 1.0, 1.0);
        assert_eq!(config.target_zoom(), config.min_zoom);
    }
}
