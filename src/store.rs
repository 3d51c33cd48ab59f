//! Persistence seams: zone sources/sinks and reference-frame retrieval.
//!
//! The wire shape of a camera's zone set is the persistence API's:
//! `{"points": [{"<name>": [x0, y0, x1, y1, …]}]}` — one single-key object
//! per zone, flat integer coordinates, list order = display order.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::geometry::Point;
use crate::model::ZoneCollection;

/// One persisted zone: a single `{name: [x0, y0, …]}` mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneRecord(BTreeMap<String, Vec<i32>>);

impl ZoneRecord {
    /// Build a record from a name and vertex list.
    pub fn new(name: impl Into<String>, points: &[Point]) -> Self {
        let flat = points.iter().flat_map(|p| [p.x, p.y]).collect();
        let mut map = BTreeMap::new();
        map.insert(name.into(), flat);
        Self(map)
    }

    /// Split into `(name, points)`, validating the single-key shape and
    /// the even coordinate count.
    pub fn parts(&self) -> Result<(String, Vec<Point>), StoreError> {
        let (name, flat) = match self.0.iter().next() {
            Some(entry) if self.0.len() == 1 => entry,
            _ => {
                return Err(StoreError::invalid_record(format!(
                    "expected one name per record, got {}",
                    self.0.len()
                )));
            }
        };
        if flat.len() % 2 != 0 {
            return Err(StoreError::invalid_record(format!(
                "odd coordinate count {} for zone '{name}'",
                flat.len()
            )));
        }
        let points = flat.chunks(2).map(|c| Point::new(c[0], c[1])).collect();
        Ok((name.clone(), points))
    }
}

/// Wire shape of a camera's full zone set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CameraZones {
    pub points: Vec<ZoneRecord>,
}

/// Serialize a collection to wire records, one per zone in display order.
pub fn to_records(zones: &ZoneCollection) -> Vec<ZoneRecord> {
    zones
        .iter()
        .map(|z| ZoneRecord::new(z.name.clone(), &z.points))
        .collect()
}

/// Rebuild a collection from wire records. Ids are assigned fresh; colors
/// follow display position when rendered.
pub fn from_records(records: &[ZoneRecord]) -> Result<ZoneCollection, StoreError> {
    let mut parts = Vec::with_capacity(records.len());
    for record in records {
        parts.push(record.parts()?);
    }
    Ok(ZoneCollection::from_parts(parts))
}

/// Zone-set retrieval for a camera.
pub trait ZoneSource {
    fn load_zones(&self, camera: &str) -> Result<Vec<ZoneRecord>, StoreError>;
}

/// Zone-set persistence for a camera.
pub trait ZoneSink {
    fn save_zones(&self, camera: &str, zones: &[ZoneRecord]) -> Result<(), StoreError>;
}

/// Reference-frame retrieval for a camera.
pub trait FrameSource {
    fn load_frame(&self, camera: &str) -> Result<RgbaImage, StoreError>;
}

/// File-backed zone store: one `<camera>.json` per camera under a root
/// directory.
#[derive(Debug, Clone)]
pub struct JsonZoneStore {
    root: PathBuf,
}

impl JsonZoneStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, camera: &str) -> PathBuf {
        self.root.join(format!("{camera}.json"))
    }
}

impl ZoneSource for JsonZoneStore {
    fn load_zones(&self, camera: &str) -> Result<Vec<ZoneRecord>, StoreError> {
        let path = self.path_for(camera);
        let text = fs::read_to_string(&path)?;
        let wire: CameraZones = serde_json::from_str(&text)?;
        log::debug!(
            "loaded {} zone records from {}",
            wire.points.len(),
            path.display()
        );
        Ok(wire.points)
    }
}

impl ZoneSink for JsonZoneStore {
    fn save_zones(&self, camera: &str, zones: &[ZoneRecord]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)?;
        let wire = CameraZones {
            points: zones.to_vec(),
        };
        let path = self.path_for(camera);
        fs::write(&path, serde_json::to_string_pretty(&wire)?)?;
        log::debug!("wrote {} zone records to {}", zones.len(), path.display());
        Ok(())
    }
}

/// Frame source reading `<camera>.png` / `<camera>.jpg` under a root
/// directory.
#[derive(Debug, Clone)]
pub struct DirFrameSource {
    root: PathBuf,
}

impl DirFrameSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FrameSource for DirFrameSource {
    fn load_frame(&self, camera: &str) -> Result<RgbaImage, StoreError> {
        for ext in ["png", "jpg", "jpeg"] {
            let path = self.root.join(format!("{camera}.{ext}"));
            if path.exists() {
                return Ok(image::open(&path)?.to_rgba8());
            }
        }
        Err(StoreError::FrameUnavailable {
            camera: camera.to_string(),
        })
    }
}
