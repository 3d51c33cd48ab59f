//! Input events for the zone editor.
//!
//! Every pointer and panel action is a message consumed by
//! [`crate::editor::EditorState::update`]; events are applied synchronously
//! in arrival order.

use crate::model::ZoneId;

/// Messages that mutate the editor state.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Canvas pointer input
    /// Primary click on the canvas, in reference-image coordinates.
    /// Appends a vertex to the draft polygon, or to the zone under edit.
    PointerDown { x: f32, y: f32 },
    /// Pointer moved over the canvas (drives the draft preview line).
    PointerMoved { x: f32, y: f32 },
    /// Pointer left the canvas.
    PointerLeft,
    /// A vertex handle of the zone under edit was dragged.
    VertexDragged { vertex: usize, x: f32, y: f32 },

    // Draft polygon
    /// Commit the draft polygon as a new zone.
    CompleteDraft,
    /// Throw away the draft polygon.
    DiscardDraft,

    // Edit session
    /// Open a zone for vertex and name edits.
    BeginEdit(ZoneId),
    /// Rename field text changed.
    NameEdited(String),
    /// Rename field submitted (enter or blur).
    NameSubmitted,
    /// Remove every vertex of the zone under edit.
    ClearPoints,
    /// Commit the session and return to idle.
    SaveEdit,
    /// Roll the zone back to its entry snapshot and return to idle.
    CancelEdit,

    // Zone list
    /// Delete a single zone.
    DeleteZone(ZoneId),

    // Bulk-delete selection
    /// Toggle a zone in the selection.
    ToggleSelected(ZoneId),
    /// Select every zone.
    SelectAll,
    /// Empty the selection.
    ClearSelection,
    /// Delete every selected zone in one pass.
    DeleteSelected,
}
