//! Frame style constants

use serde::{Deserialize, Serialize};
use super::Vec2Int;
use crate::error::WmError;

/// Frame style values that drive hit testing and snapping
///
/// Read once when the engine is created. Hosts that theme their chrome can
/// load overrides from JSON with [`FrameStyle::from_json`]; missing fields
/// fall back to [`FRAME_STYLE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameStyle {
    /// Height of the title bar; window bodies start below it
    pub title_bar_height: i32,
    /// Width of the resize hot zone inside each window edge
    pub resize_handle_size: i32,
    /// Distance within which edges snap and controls count as adjacent
    pub snap_border_size: i32,
    /// Smallest size a resize gesture may produce
    pub min_window_size: Vec2Int,
}

/// Default frame style matching the UI design
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 22,
    resize_handle_size: 8,
    snap_border_size: 15,
    min_window_size: Vec2Int::splat(50),
};

impl Default for FrameStyle {
    fn default() -> Self {
        FRAME_STYLE
    }
}

impl FrameStyle {
    /// Parse a style from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, WmError> {
        let style: FrameStyle =
            serde_json::from_str(json).map_err(|e| WmError::Config(e.to_string()))?;
        style.validate()?;
        Ok(style)
    }

    /// Reject values the gesture code cannot work with
    pub fn validate(&self) -> Result<(), WmError> {
        if self.resize_handle_size < 0 {
            return Err(WmError::InvalidStyle(format!(
                "resize_handle_size must not be negative, got {}",
                self.resize_handle_size
            )));
        }
        if self.snap_border_size < 0 {
            return Err(WmError::InvalidStyle(format!(
                "snap_border_size must not be negative, got {}",
                self.snap_border_size
            )));
        }
        if self.title_bar_height < 0 {
            return Err(WmError::InvalidStyle(format!(
                "title_bar_height must not be negative, got {}",
                self.title_bar_height
            )));
        }
        if self.min_window_size.x <= 0 || self.min_window_size.y <= 0 {
            return Err(WmError::InvalidStyle(format!(
                "min_window_size must be positive, got {}x{}",
                self.min_window_size.x, self.min_window_size.y
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_is_valid() {
        assert!(FRAME_STYLE.validate().is_ok());
        assert_eq!(FrameStyle::default(), FRAME_STYLE);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let style = FrameStyle::from_json(r#"{ "resize_handle_size": 4 }"#).unwrap();
        assert_eq!(style.resize_handle_size, 4);
        assert_eq!(style.snap_border_size, FRAME_STYLE.snap_border_size);
        assert_eq!(style.min_window_size, Vec2Int::new(50, 50));
    }

    #[test]
    fn test_negative_hot_width_rejected() {
        let err = FrameStyle::from_json(r#"{ "resize_handle_size": -1 }"#).unwrap_err();
        assert!(matches!(err, WmError::InvalidStyle(_)));
    }

    #[test]
    fn test_zero_min_size_rejected() {
        let err = FrameStyle::from_json(r#"{ "min_window_size": { "x": 0, "y": 10 } }"#).unwrap_err();
        assert!(matches!(err, WmError::InvalidStyle(_)));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = FrameStyle::from_json("{ not json").unwrap_err();
        assert!(matches!(err, WmError::Config(_)));
    }
}
