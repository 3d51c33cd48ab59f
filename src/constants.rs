//! Global constants for the zone editor.

/// Reference canvas width in pixels. Zone coordinates live in this space
/// regardless of how the frame is displayed.
pub const CANVAS_WIDTH: u32 = 1200;

/// Reference canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 800;

/// Spacing between grid-fill sweep lines in pixels.
pub const GRID_STEP: i32 = 20;

/// Stroke width for committed zone outlines.
pub const ZONE_STROKE_WIDTH: f32 = 2.0;

/// Stroke width for the outline of the zone under edit.
pub const EDIT_STROKE_WIDTH: f32 = 4.0;

/// Stroke width for grid-fill segments.
pub const GRID_STROKE_WIDTH: f32 = 0.5;

/// Stroke width for the draft preview line.
pub const DRAFT_STROKE_WIDTH: f32 = 2.0;

/// Side length of square vertex handles, in pixels.
pub const HANDLE_SIZE: i32 = 8;

/// Minimum number of vertices for a closed zone ring.
pub const MIN_ZONE_VERTICES: usize = 3;

/// Zone-role names accepted by rename validation. Downstream vehicle
/// counters key their telemetry on exactly these strings.
pub const CANONICAL_ZONE_NAMES: &[&str] = &["inner", "outer"];
