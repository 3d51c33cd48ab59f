//! Overlay renderer.
//!
//! Derives an ordered display list from the editor state: background
//! frame, then per zone the grid-fill texture, the ring and (for the zone
//! under edit) its vertex handles, then the draft preview line. Rendering
//! never mutates the model and can run on every pointer move; the only
//! state kept here is the per-zone grid cache, so zones whose vertices did
//! not change between frames reuse their segments.

use std::collections::HashMap;

use image::RgbaImage;

use crate::editor::EditorState;
use crate::geometry::{grid_fill, Point, Segment};
use crate::model::{Zone, ZoneId};
use crate::palette::{self, Color};

/// One fully-derived frame: draw layers in paint order.
#[derive(Debug, Clone)]
pub struct OverlayFrame<'a> {
    /// Reference frame, stretched to the canvas when composited.
    pub background: Option<&'a RgbaImage>,
    /// Canvas size the layers are expressed in.
    pub canvas: (u32, u32),
    /// Side length of the square vertex handles.
    pub handle_size: i32,
    /// Per-zone layers in collection (and thus color) order.
    pub zones: Vec<ZoneLayer>,
    /// Draft preview line; present only while no zone is under edit.
    pub preview: Option<PreviewLine>,
}

/// Draw layers for a single zone, painted grid first, ring on top.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneLayer {
    pub id: ZoneId,
    pub name: String,
    /// Inside grid texture; empty until the zone is a closed ring.
    pub grid: Vec<Segment>,
    pub grid_stroke: Color,
    pub grid_stroke_width: f32,
    /// Ring vertices; closed back to the first point when it has three or
    /// more, stroked open otherwise and never filled.
    pub ring: Vec<Point>,
    /// Interior wash, applied only to closed rings.
    pub fill: Color,
    /// Outline color from the palette position.
    pub stroke: Color,
    pub stroke_width: f32,
    /// Vertex handles; non-empty only for the zone under edit.
    pub handles: Vec<Point>,
}

/// Non-closed polyline previewing the draft polygon plus the live cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewLine {
    pub points: Vec<Point>,
    pub stroke: Color,
    pub stroke_width: f32,
}

#[derive(Debug, Clone, Default)]
struct CachedGrid {
    points: Vec<Point>,
    step: i32,
    segments: Vec<Segment>,
}

/// Overlay builder with a per-zone grid cache.
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    cache: HashMap<ZoneId, CachedGrid>,
    recomputes: u64,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of grid recomputations performed so far (cache misses).
    pub fn grid_recomputes(&self) -> u64 {
        self.recomputes
    }

    /// Build the display list for the current state.
    pub fn frame<'a>(&mut self, state: &'a EditorState) -> OverlayFrame<'a> {
        self.cache.retain(|id, _| state.zones.get(*id).is_some());

        let editing = state.session.editing_id();
        let step = state.config.grid_step;
        let mut zones = Vec::with_capacity(state.zones.len());
        for (index, zone) in state.zones.iter().enumerate() {
            let is_edited = editing == Some(zone.id);
            let grid = if zone.is_ring() {
                self.grid_for(zone, step).to_vec()
            } else {
                Vec::new()
            };
            zones.push(ZoneLayer {
                id: zone.id,
                name: zone.name.clone(),
                grid,
                grid_stroke: palette::GRID_STROKE,
                grid_stroke_width: state.config.grid_stroke_width,
                ring: zone.points.clone(),
                fill: palette::ZONE_FILL,
                stroke: state.zones.color_at(index),
                stroke_width: if is_edited {
                    state.config.edit_stroke_width
                } else {
                    state.config.zone_stroke_width
                },
                handles: if is_edited {
                    zone.points.clone()
                } else {
                    Vec::new()
                },
            });
        }

        let preview = if editing.is_none() && !state.draft.is_empty() {
            let mut points = state.draft.clone();
            if let Some(cursor) = state.cursor {
                points.push(cursor);
            }
            Some(PreviewLine {
                points,
                stroke: palette::DRAFT_STROKE,
                stroke_width: state.config.draft_stroke_width,
            })
        } else {
            None
        };

        OverlayFrame {
            background: state.background.as_ref(),
            canvas: (state.config.canvas_width, state.config.canvas_height),
            handle_size: state.config.handle_size,
            zones,
            preview,
        }
    }

    fn grid_for(&mut self, zone: &Zone, step: i32) -> &[Segment] {
        let entry = self.cache.entry(zone.id).or_default();
        if entry.points != zone.points || entry.step != step {
            entry.points = zone.points.clone();
            entry.step = step;
            entry.segments = grid_fill(&zone.points, step);
            self.recomputes += 1;
        }
        &entry.segments
    }
}
