//! Derives a rectangular print extent from a center point, a paper size
//! in millimeters and a print scale.
//!
//! The real-world size of the extent decides the projection: anything
//! wider than the breaking point falls back from UTM to Mercator, since
//! UTM's conformal accuracy degrades away from its central meridian and
//! larger extents could straddle a zone boundary.

use crate::core::constants::BREAKING_POINT_METERS;
use crate::core::geo::{LatLng, LatLngBounds, Point};
use crate::projection::{mercator, utm, Projection};
use serde::{Deserialize, Serialize};

/// A rectangular print extent on the ellipsoid surface, axis-aligned in
/// the plane of the projection it was computed in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapExtent {
    pub north_east: LatLng,
    pub south_west: LatLng,
    pub projection: Projection,
}

impl MapExtent {
    /// Creates an extent from two diagonal corners, normalized so that
    /// north-east ≥ south-west in both coordinates
    pub fn new(north_east: LatLng, south_west: LatLng, projection: Projection) -> Self {
        let bounds = LatLngBounds::from_points(&[north_east, south_west]);
        Self {
            north_east: bounds.north_east,
            south_west: bounds.south_west,
            projection,
        }
    }

    /// The extent rectangle as plain geographic bounds
    pub fn bounds(&self) -> LatLngBounds {
        LatLngBounds::new(self.south_west, self.north_east)
    }

    /// The geometric midpoint of the rectangle in degree space
    pub fn center(&self) -> LatLng {
        self.bounds().center()
    }
}

/// Converts a paper dimension in millimeters to real-world meters at the
/// given scale
fn paper_to_meters(dimension_mm: u32, scale: u32) -> f64 {
    f64::from(dimension_mm) * (f64::from(scale) / 1000.0)
}

/// Computes the print extent around `center` for a paper size and scale.
///
/// The center is projected into the chosen plane, offset by half the
/// extent size in each direction, and both diagonal corners are inverted
/// back to geographic coordinates. Only the two diagonal corners are
/// kept; near a zone boundary or the date line the inverse-projected
/// rectangle is not perfectly axis-aligned in raw degrees, which is
/// acceptable for display purposes.
pub fn compute_extent(width_mm: u32, height_mm: u32, scale: u32, center: &LatLng) -> MapExtent {
    let width_m = paper_to_meters(width_mm, scale);
    let height_m = paper_to_meters(height_mm, scale);
    let half = Point::new(width_m / 2.0, height_m / 2.0);

    if width_m > BREAKING_POINT_METERS {
        log::debug!(
            "extent spans {:.0} m horizontally, using Mercator",
            width_m
        );
        let projected = mercator::project(center);
        let north_east = mercator::unproject(&projected.add(&half));
        let south_west = mercator::unproject(&projected.subtract(&half));
        MapExtent::new(north_east, south_west, Projection::Mercator)
    } else {
        let projected = utm::project(center);
        let ne_corner = projected.point().add(&half);
        let sw_corner = projected.point().subtract(&half);
        let north_east = utm::unproject(ne_corner.x, ne_corner.y, projected.zone);
        let south_west = utm::unproject(sw_corner.x, sw_corner.y, projected.zone);
        MapExtent::new(north_east, south_west, Projection::Utm(projected.zone))
    }
}
