//! Multi-select tracker for bulk zone deletion.
//!
//! The selection is independent of the edit session and holds zone ids,
//! not positions, so deletions elsewhere in the collection never leave it
//! pointing at the wrong zone. Ids of removed zones are purged eagerly.

use std::collections::HashSet;

use super::collection::ZoneCollection;
use super::zone::ZoneId;

/// Checkbox-style selection over zones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    selected: HashSet<ZoneId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a zone in or out of the selection.
    pub fn toggle(&mut self, id: ZoneId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn contains(&self, id: ZoneId) -> bool {
        self.selected.contains(&id)
    }

    /// Select every zone in the collection.
    pub fn select_all(&mut self, zones: &ZoneCollection) {
        self.selected = zones.iter().map(|z| z.id).collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Selected ids in collection display order.
    pub fn ids_in_order(&self, zones: &ZoneCollection) -> Vec<ZoneId> {
        zones
            .iter()
            .filter(|z| self.contains(z.id))
            .map(|z| z.id)
            .collect()
    }

    /// Display positions of the selected zones, ascending.
    pub fn selected_positions(&self, zones: &ZoneCollection) -> Vec<usize> {
        zones
            .iter()
            .enumerate()
            .filter(|(_, z)| self.contains(z.id))
            .map(|(index, _)| index)
            .collect()
    }

    /// Drop ids that no longer resolve to a live zone.
    pub fn purge(&mut self, zones: &ZoneCollection) {
        self.selected.retain(|id| zones.get(*id).is_some());
    }
}
