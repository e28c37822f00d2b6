//! # Mapframe
//!
//! A Rust-native geodetic core for computing and editing printable map
//! extents, inspired by the interaction model of Leaflet print pickers.
//!
//! The crate converts geographic coordinates on an ellipsoidal Earth model
//! to and from planar meters (ellipsoidal Mercator and UTM), derives a
//! rectangular print extent from a center point, a paper size and a print
//! scale, and keeps the extent's five drag handles (center + four corners)
//! mutually consistent while the user edits it.

pub mod config;
pub mod core;
pub mod extent;
pub mod handles;
pub mod prelude;
pub mod projection;
pub mod scale;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::geo::{Ellipsoid, LatLng, LatLngBounds, Point, UtmPoint};
pub use crate::extent::{compute_extent, MapExtent};
pub use crate::handles::{ExtentEditor, Handle, HandleSet};
pub use crate::projection::Projection;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = FrameError;
