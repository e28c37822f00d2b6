//! Prelude module for common mapframe types
//!
//! This module re-exports the most commonly used types and functions
//! for easy importing with `use mapframe::prelude::*;`

pub use crate::config::PrintConfig;

pub use crate::core::geo::{Ellipsoid, LatLng, LatLngBounds, Point, UtmPoint};

pub use crate::extent::{compute_extent, MapExtent};

pub use crate::handles::{ExtentEditor, Handle, HandleSet};

pub use crate::projection::{mercator, utm, Projection};

pub use crate::scale::{approximate_scale_for_zoom, scale_for_zoom};

pub use crate::{Error, Result};
