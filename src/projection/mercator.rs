//! Ellipsoidal (non-web) Mercator projection.
//!
//! The forward latitude transform is closed form; the inverse recovers
//! the conformal latitude with a fixed-point iteration. Latitudes are
//! clamped before projecting since the projection diverges at the poles.

use crate::core::constants::MERCATOR_MAX_LATITUDE;
use crate::core::geo::{Ellipsoid, LatLng, Point};
use std::f64::consts::FRAC_PI_2;

/// Convergence tolerance of the inverse latitude iteration, in radians
const PHI_TOLERANCE: f64 = 1e-10;

/// Iteration cap; past it the last estimate is returned as-is
const MAX_ITERATIONS: u32 = 15;

/// Projects a longitude to meters
pub fn project_x(lng: f64) -> f64 {
    Ellipsoid::WGS84.a * lng.to_radians()
}

/// Projects a latitude to meters, clamping to [-89.5, 89.5] first
pub fn project_y(lat: f64) -> f64 {
    let ellipsoid = Ellipsoid::WGS84;
    let lat = lat.clamp(-MERCATOR_MAX_LATITUDE, MERCATOR_MAX_LATITUDE);

    let e = ellipsoid.eccentricity();
    let phi = lat.to_radians();
    let con = e * phi.sin();
    let con = ((1.0 - con) / (1.0 + con)).powf(0.5 * e);
    let ts = (0.5 * (FRAC_PI_2 - phi)).tan() / con;

    -ellipsoid.a * ts.ln()
}

/// Inverts a planar x back to a longitude in degrees
pub fn unproject_x(x: f64) -> f64 {
    (x / Ellipsoid::WGS84.a).to_degrees()
}

/// Inverts a planar y back to a latitude in degrees.
///
/// Solves for the conformal latitude by fixed-point iteration. If the
/// tolerance is not reached within the iteration cap the last estimate
/// is returned; for realistic inputs the iteration converges in a
/// handful of steps.
pub fn unproject_y(y: f64) -> f64 {
    let ellipsoid = Ellipsoid::WGS84;
    let e = ellipsoid.eccentricity();
    let half_e = 0.5 * e;
    let ts = (-y / ellipsoid.a).exp();

    let mut phi = FRAC_PI_2 - 2.0 * ts.atan();
    for _ in 0..MAX_ITERATIONS {
        let con = e * phi.sin();
        let dphi = FRAC_PI_2 - 2.0 * (ts * ((1.0 - con) / (1.0 + con)).powf(half_e)).atan() - phi;
        phi += dphi;
        if dphi.abs() < PHI_TOLERANCE {
            return phi.to_degrees();
        }
    }

    log::debug!("inverse Mercator latitude hit the iteration cap for y={}", y);
    phi.to_degrees()
}

/// Projects a coordinate to planar meters
pub fn project(lat_lng: &LatLng) -> Point {
    Point::new(project_x(lat_lng.lng), project_y(lat_lng.lat))
}

/// Inverts a planar point back to geographic coordinates
pub fn unproject(point: &Point) -> LatLng {
    LatLng::new(unproject_y(point.y), unproject_x(point.x))
}
