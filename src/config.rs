//! Editor configuration.
//!
//! Every knob defaults to the values in [`crate::constants`]; hosts can
//! load overrides from JSON (for example to match a camera fleet with a
//! different stream resolution).

use serde::{Deserialize, Serialize};

use crate::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, DRAFT_STROKE_WIDTH, EDIT_STROKE_WIDTH, GRID_STEP,
    GRID_STROKE_WIDTH, HANDLE_SIZE, ZONE_STROKE_WIDTH,
};

/// Tunable editor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Reference canvas width in pixels
    #[serde(default = "default_canvas_width")]
    pub canvas_width: u32,

    /// Reference canvas height in pixels
    #[serde(default = "default_canvas_height")]
    pub canvas_height: u32,

    /// Spacing between grid-fill sweep lines
    #[serde(default = "default_grid_step")]
    pub grid_step: i32,

    /// Outline stroke width for committed zones
    #[serde(default = "default_zone_stroke_width")]
    pub zone_stroke_width: f32,

    /// Outline stroke width for the zone under edit
    #[serde(default = "default_edit_stroke_width")]
    pub edit_stroke_width: f32,

    /// Stroke width for grid-fill segments
    #[serde(default = "default_grid_stroke_width")]
    pub grid_stroke_width: f32,

    /// Stroke width for the draft preview line
    #[serde(default = "default_draft_stroke_width")]
    pub draft_stroke_width: f32,

    /// Side length of square vertex handles
    #[serde(default = "default_handle_size")]
    pub handle_size: i32,
}

fn default_canvas_width() -> u32 {
    CANVAS_WIDTH
}

fn default_canvas_height() -> u32 {
    CANVAS_HEIGHT
}

fn default_grid_step() -> i32 {
    GRID_STEP
}

fn default_zone_stroke_width() -> f32 {
    ZONE_STROKE_WIDTH
}

fn default_edit_stroke_width() -> f32 {
    EDIT_STROKE_WIDTH
}

fn default_grid_stroke_width() -> f32 {
    GRID_STROKE_WIDTH
}

fn default_draft_stroke_width() -> f32 {
    DRAFT_STROKE_WIDTH
}

fn default_handle_size() -> i32 {
    HANDLE_SIZE
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            grid_step: default_grid_step(),
            zone_stroke_width: default_zone_stroke_width(),
            edit_stroke_width: default_edit_stroke_width(),
            grid_stroke_width: default_grid_stroke_width(),
            draft_stroke_width: default_draft_stroke_width(),
            handle_size: default_handle_size(),
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from JSON; missing fields fall back to the
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the configuration to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = EditorConfig::default();
        assert_eq!(config.canvas_width, CANVAS_WIDTH);
        assert_eq!(config.canvas_height, CANVAS_HEIGHT);
        assert_eq!(config.grid_step, GRID_STEP);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = EditorConfig::from_json(r#"{"grid_step": 10}"#).unwrap();
        assert_eq!(config.grid_step, 10);
        assert_eq!(config.canvas_width, CANVAS_WIDTH);
    }

    #[test]
    fn test_json_round_trip() {
        let config = EditorConfig {
            grid_step: 15,
            ..EditorConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(EditorConfig::from_json(&json).unwrap(), config);
    }
}
