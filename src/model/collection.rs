//! Ordered zone collection.
//!
//! Insertion order is the display order; outline colors are derived from
//! position via the cyclic palette, so deleting a zone shifts the colors
//! of every survivor behind it.

use crate::constants::CANONICAL_ZONE_NAMES;
use crate::error::NameError;
use crate::geometry::Point;
use crate::palette::{zone_color, Color};

use super::zone::{is_placeholder, placeholder_name, Zone, ZoneId};

/// The ordered set of zones for one camera.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneCollection {
    zones: Vec<Zone>,
    next_id: u64,
}

impl ZoneCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a collection from `(name, points)` pairs in display order,
    /// assigning fresh ids. Persisted names are trusted as-is.
    pub fn from_parts(parts: Vec<(String, Vec<Point>)>) -> Self {
        let zones: Vec<Zone> = parts
            .into_iter()
            .enumerate()
            .map(|(i, (name, points))| Zone::new(ZoneId(i as u64), name, points))
            .collect();
        let next_id = zones.len() as u64;
        Self { zones, next_id }
    }

    /// Append a new zone with a placeholder name derived from its position.
    pub fn append(&mut self, points: Vec<Point>) -> ZoneId {
        let id = ZoneId(self.next_id);
        self.next_id += 1;
        let name = placeholder_name(self.zones.len());
        log::debug!("zone {id} appended as '{name}' ({} vertices)", points.len());
        self.zones.push(Zone::new(id, name, points));
        id
    }

    /// Remove a zone. Survivors keep their relative order and therefore
    /// shift palette colors.
    pub fn remove(&mut self, id: ZoneId) -> Option<Zone> {
        let index = self.position_of(id)?;
        let zone = self.zones.remove(index);
        log::debug!("zone {id} '{}' removed from position {index}", zone.name);
        Some(zone)
    }

    pub fn get(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn get_mut(&mut self, id: ZoneId) -> Option<&mut Zone> {
        self.zones.iter_mut().find(|z| z.id == id)
    }

    /// Current display position of a zone.
    pub fn position_of(&self, id: ZoneId) -> Option<usize> {
        self.zones.iter().position(|z| z.id == id)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Zone> {
        self.zones.iter()
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Outline color for the zone at `index`, cyclic over the palette.
    pub fn color_at(&self, index: usize) -> Color {
        zone_color(index)
    }

    /// Outline color for a zone by id.
    pub fn color_of(&self, id: ZoneId) -> Option<Color> {
        self.position_of(id).map(zone_color)
    }

    /// Replace a zone's vertices. Coordinates are clamped to the
    /// non-negative quadrant; nothing else is validated.
    pub fn replace_points(&mut self, id: ZoneId, points: Vec<Point>) -> bool {
        match self.get_mut(id) {
            Some(zone) => {
                zone.points = points
                    .into_iter()
                    .map(|p| Point::new(p.x.max(0), p.y.max(0)))
                    .collect();
                true
            }
            None => false,
        }
    }

    /// Validate a proposed rename for `id`. `original` is the name the
    /// zone carried when its edit session began.
    ///
    /// The proposal is trimmed and lowercased, then must either be one of
    /// the canonical zone roles, or be the unchanged `zone<N>` placeholder
    /// the zone started with. A proposal colliding with any *other* zone's
    /// current name is rejected regardless.
    pub fn validate_rename(
        &self,
        id: ZoneId,
        original: &str,
        proposal: &str,
    ) -> Result<String, NameError> {
        let name = proposal.trim().to_lowercase();
        if self
            .zones
            .iter()
            .any(|z| z.id != id && z.name.eq_ignore_ascii_case(&name))
        {
            return Err(NameError::Duplicate { name });
        }
        if CANONICAL_ZONE_NAMES.contains(&name.as_str()) {
            return Ok(name);
        }
        if name.eq_ignore_ascii_case(original) && is_placeholder(original) {
            return Ok(original.to_string());
        }
        Err(NameError::Unrecognized { name })
    }

    /// Validate and apply a rename.
    pub fn rename(&mut self, id: ZoneId, original: &str, proposal: &str) -> Result<(), NameError> {
        let name = self.validate_rename(id, original, proposal)?;
        if let Some(zone) = self.get_mut(id) {
            if zone.name != name {
                log::info!("zone {id} renamed '{}' -> '{name}'", zone.name);
            }
            zone.name = name;
        }
        Ok(())
    }
}
