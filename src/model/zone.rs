//! Zone data model.

use std::fmt;

use crate::constants::MIN_ZONE_VERTICES;
use crate::geometry::Point;

/// Stable identifier for a zone, assigned at creation. Ids survive
/// deletions and reorderings; positions (and thus colors) do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneId(pub(crate) u64);

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named polygonal counting region over the reference frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    pub points: Vec<Point>,
}

impl Zone {
    pub(crate) fn new(id: ZoneId, name: String, points: Vec<Point>) -> Self {
        Self { id, name, points }
    }

    /// Whether the zone has enough vertices to form a closed ring. Below
    /// this it renders as an open trace, never filled.
    pub fn is_ring(&self) -> bool {
        self.points.len() >= MIN_ZONE_VERTICES
    }
}

/// The mutable zone fields captured on edit entry and restored on cancel.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneSnapshot {
    pub name: String,
    pub points: Vec<Point>,
}

impl ZoneSnapshot {
    /// Capture a zone's current name and vertices.
    pub fn of(zone: &Zone) -> Self {
        Self {
            name: zone.name.clone(),
            points: zone.points.clone(),
        }
    }
}

/// Placeholder name for a zone appended at `index`.
pub fn placeholder_name(index: usize) -> String {
    format!("zone{index}")
}

/// Whether `name` still carries the default `zone<N>` placeholder form.
pub fn is_placeholder(name: &str) -> bool {
    name.strip_prefix("zone")
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_form() {
        assert!(is_placeholder("zone0"));
        assert!(is_placeholder("zone12"));
        assert!(!is_placeholder("zone"));
        assert!(!is_placeholder("zone1a"));
        assert!(!is_placeholder("inner"));
        assert!(!is_placeholder(""));
    }

    #[test]
    fn test_ring_threshold() {
        let mut zone = Zone::new(ZoneId(0), placeholder_name(0), Vec::new());
        assert!(!zone.is_ring());
        zone.points = vec![Point::new(0, 0), Point::new(5, 0)];
        assert!(!zone.is_ring());
        zone.points.push(Point::new(5, 5));
        assert!(zone.is_ring());
    }
}
