//! Planar projections used by the extent calculator: ellipsoidal
//! Mercator for large extents and UTM for everything that fits inside a
//! single zone.

pub mod mercator;
pub mod utm;

use crate::core::geo::{LatLng, Point};
use serde::{Deserialize, Serialize};

/// The planar coordinate system an extent lives in.
///
/// The set of projections is closed and small, so this is a tagged enum
/// rather than a trait object. Once an extent has been computed its
/// projection (including the UTM zone) stays fixed for the extent's
/// lifetime; a change of scale or size recomputes it from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Projection {
    Mercator,
    Utm(u8),
}

impl Projection {
    /// Projects a coordinate into this projection's plane. A UTM
    /// projection keeps its fixed zone rather than re-deriving one from
    /// the longitude.
    pub fn project(&self, lat_lng: &LatLng) -> Point {
        match self {
            Projection::Mercator => mercator::project(lat_lng),
            Projection::Utm(zone) => utm::project_with_zone(lat_lng, *zone),
        }
    }

    /// Inverts a planar point of this projection back to geographic
    /// coordinates
    pub fn unproject(&self, point: &Point) -> LatLng {
        match self {
            Projection::Mercator => mercator::unproject(point),
            Projection::Utm(zone) => utm::unproject(point.x, point.y, *zone),
        }
    }

    pub fn is_utm(&self) -> bool {
        matches!(self, Projection::Utm(_))
    }

    /// Stable name used in host form fields
    pub fn name(&self) -> &'static str {
        match self {
            Projection::Mercator => "mercator",
            Projection::Utm(_) => "utm",
        }
    }
}
