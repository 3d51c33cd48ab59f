//! Editor state machine.
//!
//! [`EditorState`] is the single aggregate a host UI drives: the zone
//! collection, the draft polygon, the edit session and the bulk-delete
//! selection. All mutation happens synchronously in [`EditorState::update`]
//! or at the load/save session boundary; the overlay renderer derives its
//! display list from this state without touching it.

use image::RgbaImage;

use crate::config::EditorConfig;
use crate::constants::MIN_ZONE_VERTICES;
use crate::error::{NameError, StoreError};
use crate::geometry::Point;
use crate::message::Message;
use crate::model::{SelectionSet, ZoneCollection, ZoneId, ZoneSnapshot};
use crate::store::{self, FrameSource, ZoneSink, ZoneSource};

/// Lifecycle of the single zone that may be under modification.
#[derive(Debug, Clone, PartialEq)]
pub enum EditSession {
    /// No zone is being edited.
    Idle,
    /// One zone is open for vertex and name edits.
    Editing {
        id: ZoneId,
        /// `{name, points}` captured on entry, restored on cancel.
        snapshot: ZoneSnapshot,
        /// Live contents of the rename field.
        name_input: String,
        /// Inline validation error from the last rejected rename.
        name_error: Option<NameError>,
    },
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing { .. })
    }

    /// Id of the zone under edit, if any.
    pub fn editing_id(&self) -> Option<ZoneId> {
        match self {
            EditSession::Editing { id, .. } => Some(*id),
            EditSession::Idle => None,
        }
    }

    /// Inline rename error, if the last proposal was rejected.
    pub fn name_error(&self) -> Option<&NameError> {
        match self {
            EditSession::Editing { name_error, .. } => name_error.as_ref(),
            EditSession::Idle => None,
        }
    }
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// Transient user-facing notification (persistence outcomes).
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

/// The composed editor state for one camera's zone set.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub config: EditorConfig,
    pub zones: ZoneCollection,
    /// In-progress point list for a new zone, separate from any committed
    /// zone.
    pub draft: Vec<Point>,
    /// Live pointer position over the canvas, if any.
    pub cursor: Option<Point>,
    pub session: EditSession,
    pub selection: SelectionSet,
    /// Reference frame behind the overlay; `None` degrades to an empty
    /// background without blocking editing.
    pub background: Option<RgbaImage>,
    /// The camera this zone set belongs to.
    pub camera: Option<String>,
    notification: Option<Notification>,
    revision: u64,
    saved_revision: u64,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            config,
            zones: ZoneCollection::new(),
            draft: Vec::new(),
            cursor: None,
            session: EditSession::Idle,
            selection: SelectionSet::new(),
            background: None,
            camera: None,
            notification: None,
            revision: 0,
            saved_revision: 0,
        }
    }

    /// Whether a zone is currently open for editing. Hosts disable zone
    /// creation, deletion and camera switching while this holds.
    pub fn is_editing(&self) -> bool {
        self.session.is_editing()
    }

    /// Whether the in-memory zone set differs from the last saved one.
    pub fn is_dirty(&self) -> bool {
        self.revision != self.saved_revision
    }

    /// Last persistence notification, if any.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Clear the transient notification once the host has shown it.
    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    /// Apply one input event. Events are handled synchronously and
    /// completely, in arrival order.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::PointerDown { x, y } => self.pointer_down(x, y),
            Message::PointerMoved { x, y } => self.cursor = Some(round_point(x, y)),
            Message::PointerLeft => self.cursor = None,
            Message::VertexDragged { vertex, x, y } => self.vertex_dragged(vertex, x, y),
            Message::CompleteDraft => self.complete_draft(),
            Message::DiscardDraft => {
                if !self.draft.is_empty() {
                    log::debug!("draft discarded ({} points)", self.draft.len());
                    self.draft.clear();
                }
            }
            Message::BeginEdit(id) => self.begin_edit(id),
            Message::NameEdited(text) => self.name_edited(text),
            Message::NameSubmitted => {
                self.submit_name();
            }
            Message::ClearPoints => self.clear_points(),
            Message::SaveEdit => self.save_edit(),
            Message::CancelEdit => self.cancel_edit(),
            Message::DeleteZone(id) => self.delete_zone(id),
            Message::ToggleSelected(id) => {
                if self.zones.get(id).is_some() {
                    self.selection.toggle(id);
                }
            }
            Message::SelectAll => self.selection.select_all(&self.zones),
            Message::ClearSelection => self.selection.clear(),
            Message::DeleteSelected => self.delete_selected(),
        }
    }

    /// A canvas click grows the zone under edit, or the draft when idle.
    fn pointer_down(&mut self, x: f32, y: f32) {
        let point = round_point(x, y);
        match self.session.editing_id() {
            Some(id) => {
                if let Some(zone) = self.zones.get_mut(id) {
                    zone.points.push(point);
                    log::debug!("zone {id}: vertex appended at ({}, {})", point.x, point.y);
                    self.touch();
                }
            }
            None => {
                self.draft.push(point);
                log::debug!(
                    "draft: vertex {} at ({}, {})",
                    self.draft.len(),
                    point.x,
                    point.y
                );
            }
        }
    }

    fn vertex_dragged(&mut self, vertex: usize, x: f32, y: f32) {
        let Some(id) = self.session.editing_id() else {
            log::warn!("vertex drag ignored: no zone under edit");
            return;
        };
        let point = round_point(x, y);
        if let Some(zone) = self.zones.get(id) {
            if vertex >= zone.points.len() {
                log::warn!("vertex drag ignored: index {vertex} out of range for zone {id}");
                return;
            }
            let mut points = zone.points.clone();
            points[vertex] = point;
            self.zones.replace_points(id, points);
            self.touch();
        }
    }

    fn complete_draft(&mut self) {
        if self.is_editing() {
            log::debug!("draft completion blocked while a zone is under edit");
            return;
        }
        if self.draft.len() < MIN_ZONE_VERTICES {
            log::debug!("draft has {} points, not completing", self.draft.len());
            return;
        }
        let points = std::mem::take(&mut self.draft);
        let id = self.zones.append(points);
        log::info!("draft committed as zone {id}");
        self.touch();
    }

    fn begin_edit(&mut self, id: ZoneId) {
        if let Some(active) = self.session.editing_id() {
            log::warn!("begin edit of zone {id} refused: zone {active} is already under edit");
            return;
        }
        let Some(zone) = self.zones.get(id) else {
            log::warn!("begin edit refused: zone {id} does not exist");
            return;
        };
        log::info!("editing zone {id} '{}'", zone.name);
        self.session = EditSession::Editing {
            id,
            snapshot: ZoneSnapshot::of(zone),
            name_input: zone.name.clone(),
            name_error: None,
        };
    }

    fn name_edited(&mut self, text: String) {
        if let EditSession::Editing {
            name_input,
            name_error,
            ..
        } = &mut self.session
        {
            *name_input = text;
            *name_error = None;
        }
    }

    /// Validate the rename field and apply it to the zone. Returns false
    /// when the proposal was rejected; the session stays active either way
    /// and a rejected field reverts to the zone's current name.
    fn submit_name(&mut self) -> bool {
        let EditSession::Editing {
            id,
            snapshot,
            name_input,
            name_error,
        } = &mut self.session
        else {
            return true;
        };
        let id = *id;
        match self.zones.rename(id, &snapshot.name, name_input.as_str()) {
            Ok(()) => {
                if let Some(zone) = self.zones.get(id) {
                    *name_input = zone.name.clone();
                }
                *name_error = None;
                self.revision += 1;
                true
            }
            Err(err) => {
                log::debug!("rename of zone {id} rejected: {err}");
                if let Some(zone) = self.zones.get(id) {
                    *name_input = zone.name.clone();
                }
                *name_error = Some(err);
                false
            }
        }
    }

    fn clear_points(&mut self) {
        let Some(id) = self.session.editing_id() else {
            log::warn!("clear points ignored: no zone under edit");
            return;
        };
        if let Some(zone) = self.zones.get_mut(id) {
            log::info!("zone {id}: {} vertices cleared", zone.points.len());
            zone.points.clear();
            self.touch();
        }
    }

    fn save_edit(&mut self) {
        let (id, unchanged) = match &self.session {
            EditSession::Editing {
                id,
                snapshot,
                name_input,
                ..
            } => (*id, name_input == &snapshot.name),
            EditSession::Idle => {
                log::warn!("save ignored: no active edit session");
                return;
            }
        };
        if unchanged || self.submit_name() {
            self.session = EditSession::Idle;
            log::info!("zone {id} edit session saved");
        }
        // On rejection the inline error is already set and we stay editing.
    }

    fn cancel_edit(&mut self) {
        match std::mem::replace(&mut self.session, EditSession::Idle) {
            EditSession::Editing { id, snapshot, .. } => {
                if let Some(zone) = self.zones.get_mut(id) {
                    zone.name = snapshot.name;
                    zone.points = snapshot.points;
                    self.touch();
                }
                log::info!("zone {id} edit session cancelled, snapshot restored");
            }
            EditSession::Idle => log::warn!("cancel ignored: no active edit session"),
        }
    }

    fn delete_zone(&mut self, id: ZoneId) {
        if self.zones.remove(id).is_none() {
            log::warn!("delete ignored: zone {id} does not exist");
            return;
        }
        if self.session.editing_id() == Some(id) {
            // The zone under edit is gone; the session cannot outlive it.
            self.session = EditSession::Idle;
            log::info!("edit session closed: zone {id} was deleted");
        }
        self.selection.purge(&self.zones);
        self.touch();
    }

    fn delete_selected(&mut self) {
        let doomed = self.selection.ids_in_order(&self.zones);
        if doomed.is_empty() {
            log::debug!("bulk delete: selection is empty");
            return;
        }
        for id in &doomed {
            self.zones.remove(*id);
        }
        if let Some(edited) = self.session.editing_id() {
            if doomed.contains(&edited) {
                self.session = EditSession::Idle;
                log::info!("edit session closed: zone {edited} was bulk-deleted");
            }
        }
        self.selection.purge(&self.zones);
        log::info!("bulk delete removed {} zones", doomed.len());
        self.touch();
    }

    /// Load a camera's zone set and reference frame, replacing all editor
    /// state. Refused while a zone is under edit. Source failures degrade
    /// to an empty, still-editable collection.
    pub fn load_camera(&mut self, camera: &str, zones: &dyn ZoneSource, frames: &dyn FrameSource) {
        if self.is_editing() {
            log::warn!("camera switch to '{camera}' refused while a zone is under edit");
            return;
        }
        self.camera = Some(camera.to_string());
        self.draft.clear();
        self.cursor = None;
        self.selection.clear();
        self.session = EditSession::Idle;
        self.notification = None;

        self.zones = match zones.load_zones(camera) {
            Ok(records) => match store::from_records(&records) {
                Ok(collection) => {
                    log::info!("camera '{camera}': {} zones loaded", collection.len());
                    collection
                }
                Err(err) => {
                    log::error!("camera '{camera}': zone set unreadable: {err}");
                    ZoneCollection::new()
                }
            },
            Err(err) => {
                log::error!("camera '{camera}': zone fetch failed: {err}");
                ZoneCollection::new()
            }
        };
        self.background = match frames.load_frame(camera) {
            Ok(frame) => Some(frame),
            Err(err) => {
                log::warn!("camera '{camera}': no reference frame: {err}");
                None
            }
        };
        self.revision = 0;
        self.saved_revision = 0;
    }

    /// Persist the current zone set. In-memory state is left unchanged
    /// apart from the saved-revision marker; the outcome also lands in
    /// [`EditorState::notification`] for display.
    pub fn save_zones(&mut self, sink: &dyn ZoneSink) -> Result<(), StoreError> {
        let Some(camera) = self.camera.clone() else {
            log::warn!("save requested with no camera selected");
            return Err(StoreError::NoCamera);
        };
        let records = store::to_records(&self.zones);
        match sink.save_zones(&camera, &records) {
            Ok(()) => {
                self.saved_revision = self.revision;
                log::info!("camera '{camera}': {} zones saved", records.len());
                self.notification = Some(Notification {
                    kind: NotificationKind::Info,
                    text: format!("Saved {} zones for {camera}", records.len()),
                });
                Ok(())
            }
            Err(err) => {
                log::error!("camera '{camera}': saving zones failed: {err}");
                self.notification = Some(Notification {
                    kind: NotificationKind::Error,
                    text: format!("Save failed: {err}"),
                });
                Err(err)
            }
        }
    }
}

/// Round pointer coordinates into the integer canvas space, clamping to
/// the non-negative quadrant.
fn round_point(x: f32, y: f32) -> Point {
    Point::new((x.round() as i32).max(0), (y.round() as i32).max(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Zone;
    use crate::store::ZoneRecord;

    fn triangle(offset: i32) -> Vec<Point> {
        vec![
            Point::new(offset, offset),
            Point::new(offset + 10, offset),
            Point::new(offset + 5, offset + 10),
        ]
    }

    fn state_with_zones(n: usize) -> EditorState {
        let mut state = EditorState::new();
        for i in 0..n {
            state.zones.append(triangle(i as i32 * 20));
        }
        state
    }

    fn zone_ids(state: &EditorState) -> Vec<ZoneId> {
        state.zones.iter().map(|z| z.id).collect()
    }

    #[test]
    fn test_draft_clicks_and_completion() {
        let mut state = EditorState::new();
        state.update(Message::PointerDown { x: 10.4, y: 20.6 });
        state.update(Message::PointerDown { x: 30.0, y: 20.0 });
        assert_eq!(state.draft, vec![Point::new(10, 21), Point::new(30, 20)]);

        // Two points are not enough to close a ring.
        state.update(Message::CompleteDraft);
        assert_eq!(state.zones.len(), 0);
        assert_eq!(state.draft.len(), 2);

        state.update(Message::PointerDown { x: 20.0, y: 40.0 });
        state.update(Message::CompleteDraft);
        assert_eq!(state.zones.len(), 1);
        assert!(state.draft.is_empty());
        assert_eq!(state.zones.zones()[0].name, "zone0");
        assert!(state.is_dirty());
    }

    #[test]
    fn test_pointer_moves_drive_cursor() {
        let mut state = EditorState::new();
        state.update(Message::PointerMoved { x: 5.2, y: 7.9 });
        assert_eq!(state.cursor, Some(Point::new(5, 8)));
        state.update(Message::PointerLeft);
        assert_eq!(state.cursor, None);
    }

    #[test]
    fn test_click_while_editing_appends_to_zone_not_draft() {
        let mut state = state_with_zones(1);
        let id = zone_ids(&state)[0];
        state.update(Message::BeginEdit(id));
        state.update(Message::PointerDown { x: 50.0, y: 60.0 });
        assert!(state.draft.is_empty());
        assert_eq!(state.zones.get(id).unwrap().points.len(), 4);
        assert_eq!(
            state.zones.get(id).unwrap().points[3],
            Point::new(50, 60)
        );
    }

    #[test]
    fn test_vertex_drag_updates_in_place() {
        let mut state = state_with_zones(1);
        let id = zone_ids(&state)[0];
        state.update(Message::BeginEdit(id));
        state.update(Message::VertexDragged {
            vertex: 1,
            x: 99.0,
            y: 98.0,
        });
        assert_eq!(state.zones.get(id).unwrap().points[1], Point::new(99, 98));

        // Out-of-range drags are ignored.
        state.update(Message::VertexDragged {
            vertex: 10,
            x: 1.0,
            y: 1.0,
        });
        assert_eq!(state.zones.get(id).unwrap().points.len(), 3);
    }

    #[test]
    fn test_begin_edit_gated_while_editing() {
        let mut state = state_with_zones(2);
        let ids = zone_ids(&state);
        state.update(Message::BeginEdit(ids[0]));
        state.update(Message::BeginEdit(ids[1]));
        assert_eq!(state.session.editing_id(), Some(ids[0]));
    }

    #[test]
    fn test_cancel_restores_snapshot_exactly() {
        let mut state = state_with_zones(1);
        let id = zone_ids(&state)[0];
        let before = state.zones.get(id).cloned().unwrap();

        state.update(Message::BeginEdit(id));
        state.update(Message::PointerDown { x: 70.0, y: 70.0 });
        state.update(Message::VertexDragged {
            vertex: 0,
            x: 1.0,
            y: 2.0,
        });
        state.update(Message::NameEdited("inner".to_string()));
        state.update(Message::NameSubmitted);
        assert_eq!(state.zones.get(id).unwrap().name, "inner");

        state.update(Message::CancelEdit);
        assert_eq!(state.session, EditSession::Idle);
        let after = state.zones.get(id).cloned().unwrap();
        assert_eq!(
            after,
            Zone {
                id,
                name: before.name.clone(),
                points: before.points.clone()
            }
        );
    }

    #[test]
    fn test_clear_points_keeps_identity() {
        let mut state = state_with_zones(1);
        let id = zone_ids(&state)[0];
        state.update(Message::BeginEdit(id));
        state.update(Message::ClearPoints);
        let zone = state.zones.get(id).unwrap();
        assert!(zone.points.is_empty());
        assert_eq!(zone.name, "zone0");
        assert!(state.is_editing());

        // Cancel brings the traced ring back.
        state.update(Message::CancelEdit);
        assert_eq!(state.zones.get(id).unwrap().points.len(), 3);
    }

    #[test]
    fn test_save_with_unchanged_placeholder_exits() {
        let mut state = state_with_zones(1);
        let id = zone_ids(&state)[0];
        state.update(Message::BeginEdit(id));
        state.update(Message::SaveEdit);
        assert_eq!(state.session, EditSession::Idle);
        assert_eq!(state.zones.get(id).unwrap().name, "zone0");
    }

    #[test]
    fn test_save_validates_changed_name() {
        let mut state = state_with_zones(1);
        let id = zone_ids(&state)[0];
        state.update(Message::BeginEdit(id));
        state.update(Message::NameEdited("lane".to_string()));
        state.update(Message::SaveEdit);
        assert!(state.is_editing());
        assert!(matches!(
            state.session.name_error(),
            Some(NameError::Unrecognized { .. })
        ));
        // The rendered name reverted to the last valid value.
        assert_eq!(state.zones.get(id).unwrap().name, "zone0");

        state.update(Message::NameEdited("Outer".to_string()));
        state.update(Message::SaveEdit);
        assert_eq!(state.session, EditSession::Idle);
        assert_eq!(state.zones.get(id).unwrap().name, "outer");
    }

    #[test]
    fn test_rename_duplicate_keeps_session_and_model() {
        let mut state = state_with_zones(2);
        let ids = zone_ids(&state);
        state.update(Message::BeginEdit(ids[0]));
        state.update(Message::NameEdited("inner".to_string()));
        state.update(Message::SaveEdit);

        state.update(Message::BeginEdit(ids[1]));
        state.update(Message::NameEdited("INNER".to_string()));
        state.update(Message::NameSubmitted);
        assert!(state.is_editing());
        assert!(matches!(
            state.session.name_error(),
            Some(NameError::Duplicate { .. })
        ));
        assert_eq!(state.zones.get(ids[1]).unwrap().name, "zone1");
    }

    #[test]
    fn test_bulk_delete_renumbers_and_empties_selection() {
        let mut state = state_with_zones(5);
        let ids = zone_ids(&state);
        state.update(Message::ToggleSelected(ids[1]));
        state.update(Message::ToggleSelected(ids[3]));
        state.update(Message::DeleteSelected);

        assert_eq!(state.zones.len(), 3);
        let survivors = zone_ids(&state);
        assert_eq!(survivors, vec![ids[0], ids[2], ids[4]]);
        assert_eq!(state.zones.position_of(ids[2]), Some(1));
        assert_eq!(state.zones.position_of(ids[4]), Some(2));
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_single_delete_remaps_selection_positions() {
        let mut state = state_with_zones(5);
        let ids = zone_ids(&state);
        state.update(Message::ToggleSelected(ids[1]));
        state.update(Message::ToggleSelected(ids[4]));
        state.update(Message::DeleteZone(ids[3]));

        // The selected zone behind the removed index slides down by one.
        assert_eq!(
            state.selection.selected_positions(&state.zones),
            vec![1, 3]
        );
    }

    #[test]
    fn test_bulk_delete_of_edited_zone_ends_session() {
        let mut state = state_with_zones(3);
        let ids = zone_ids(&state);
        state.update(Message::BeginEdit(ids[1]));
        state.update(Message::ToggleSelected(ids[1]));
        state.update(Message::DeleteSelected);
        assert_eq!(state.session, EditSession::Idle);
        assert_eq!(state.zones.len(), 2);
    }

    #[test]
    fn test_select_all_then_clear() {
        let mut state = state_with_zones(3);
        state.update(Message::SelectAll);
        assert_eq!(state.selection.len(), 3);
        state.update(Message::ClearSelection);
        assert!(state.selection.is_empty());
    }

    struct FailingStore;

    impl ZoneSource for FailingStore {
        fn load_zones(&self, _camera: &str) -> Result<Vec<ZoneRecord>, StoreError> {
            Err(StoreError::invalid_record("backend unreachable"))
        }
    }

    impl ZoneSink for FailingStore {
        fn save_zones(&self, _camera: &str, _zones: &[ZoneRecord]) -> Result<(), StoreError> {
            Err(StoreError::invalid_record("backend unreachable"))
        }
    }

    impl FrameSource for FailingStore {
        fn load_frame(&self, camera: &str) -> Result<RgbaImage, StoreError> {
            Err(StoreError::FrameUnavailable {
                camera: camera.to_string(),
            })
        }
    }

    #[test]
    fn test_load_failure_degrades_to_empty_editable_state() {
        let mut state = state_with_zones(2);
        state.load_camera("cam-01", &FailingStore, &FailingStore);
        assert_eq!(state.zones.len(), 0);
        assert!(state.background.is_none());
        assert_eq!(state.camera.as_deref(), Some("cam-01"));

        // Editing still works from scratch.
        for p in [(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)] {
            state.update(Message::PointerDown { x: p.0, y: p.1 });
        }
        state.update(Message::CompleteDraft);
        assert_eq!(state.zones.len(), 1);
    }

    #[test]
    fn test_camera_switch_refused_while_editing() {
        let mut state = state_with_zones(1);
        let id = zone_ids(&state)[0];
        state.update(Message::BeginEdit(id));
        state.load_camera("cam-02", &FailingStore, &FailingStore);
        assert!(state.is_editing());
        assert_eq!(state.zones.len(), 1);
        assert_eq!(state.camera, None);
    }

    #[test]
    fn test_save_failure_leaves_model_and_dirty_flag() {
        let mut state = state_with_zones(1);
        state.camera = Some("cam-01".to_string());
        for p in [(50.0, 50.0), (60.0, 50.0), (55.0, 60.0)] {
            state.update(Message::PointerDown { x: p.0, y: p.1 });
        }
        state.update(Message::CompleteDraft);
        assert!(state.is_dirty());

        let before = state.zones.clone();
        assert!(state.save_zones(&FailingStore).is_err());
        assert_eq!(state.zones, before);
        assert!(state.is_dirty());
        assert!(matches!(
            state.notification(),
            Some(Notification {
                kind: NotificationKind::Error,
                ..
            })
        ));
    }

    #[test]
    fn test_save_round_trip_through_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = crate::store::JsonZoneStore::new(dir.path());

        let mut state = state_with_zones(2);
        state.camera = Some("cam-01".to_string());
        state.touch();
        assert!(state.is_dirty());
        state.save_zones(&store).unwrap();
        assert!(!state.is_dirty());
        assert!(matches!(
            state.notification(),
            Some(Notification {
                kind: NotificationKind::Info,
                ..
            })
        ));

        let mut fresh = EditorState::new();
        fresh.load_camera("cam-01", &store, &FailingStore);
        assert_eq!(fresh.zones.len(), 2);
        assert_eq!(fresh.zones.zones()[0].points, triangle(0));
    }

    #[test]
    fn test_save_without_camera_is_an_error() {
        let mut state = state_with_zones(1);
        assert!(matches!(
            state.save_zones(&FailingStore).unwrap_err(),
            StoreError::NoCamera
        ));
    }
}
