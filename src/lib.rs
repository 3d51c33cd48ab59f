//! tzone — polygon zone editor for vehicle-counting camera frames.
//!
//! The engine behind a zone-drawing dashboard: operators trace polygonal
//! counting regions over a camera's reference frame, and this crate keeps
//! the zone collection, the single-zone edit session and the bulk-delete
//! selection consistent while deriving a grid-shaded overlay for display.
//!
//! The host UI feeds pointer and panel events in as [`message::Message`]
//! values; [`editor::EditorState`] applies them synchronously, and
//! [`overlay::Overlay`] turns the resulting state into an ordered display
//! list on every change.

pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod message;
pub mod model;
pub mod overlay;
pub mod palette;
pub mod raster;
pub mod store;

pub use config::EditorConfig;
pub use editor::{EditSession, EditorState, Notification, NotificationKind};
pub use error::{NameError, StoreError};
pub use geometry::{Point, Segment};
pub use message::Message;
pub use model::{SelectionSet, Zone, ZoneCollection, ZoneId};
pub use overlay::{Overlay, OverlayFrame};
