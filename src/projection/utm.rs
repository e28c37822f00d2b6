//! Universal Transverse Mercator projection.
//!
//! Closed-form Krüger series to 8th order in the longitude offset from
//! the zone's central meridian (coefficients as in Snyder's "Map
//! Projections: A Working Manual", eqs. 8-9 through 8-11). The inverse
//! is seeded by the footpoint latitude, the latitude whose meridian arc
//! length equals the given northing.
//!
//! Longitudes are expected to be normalized to [-180, 180) and zones to
//! [1, 60]; violating either is a programming error, not a recoverable
//! condition.

use crate::core::constants::{FALSE_EASTING, FALSE_NORTHING, UTM_SCALE_FACTOR};
use crate::core::geo::{Ellipsoid, LatLng, Point, UtmPoint};

/// Determines the UTM zone for a longitude
pub fn zone_for_lng(lng: f64) -> u8 {
    let zone = ((lng + 180.0) / 6.0).floor() as i32 + 1;
    debug_assert!(
        (1..=60).contains(&zone),
        "longitude {} outside [-180, 180)",
        lng
    );
    zone as u8
}

/// The central meridian of a zone, in radians
pub fn central_meridian(zone: u8) -> f64 {
    (-183.0 + f64::from(zone) * 6.0).to_radians()
}

/// Ellipsoidal distance from the equator to the given latitude (radians),
/// in meters. Backbone of both the forward projection and the footpoint
/// latitude.
fn meridian_arc_length(phi: f64) -> f64 {
    let Ellipsoid { a, b } = Ellipsoid::WGS84;
    let n = Ellipsoid::WGS84.third_flattening();

    let alpha = ((a + b) / 2.0) * (1.0 + n.powi(2) / 4.0 + n.powi(4) / 64.0);
    let beta = -3.0 * n / 2.0 + 9.0 * n.powi(3) / 16.0 - 3.0 * n.powi(5) / 32.0;
    let gamma = 15.0 * n.powi(2) / 16.0 - 15.0 * n.powi(4) / 32.0;
    let delta = -35.0 * n.powi(3) / 48.0 + 105.0 * n.powi(5) / 256.0;
    let epsilon = 315.0 * n.powi(4) / 512.0;

    alpha
        * (phi
            + beta * (2.0 * phi).sin()
            + gamma * (4.0 * phi).sin()
            + delta * (6.0 * phi).sin()
            + epsilon * (8.0 * phi).sin())
}

/// Inverse of the meridian arc series: the latitude (radians) whose arc
/// length from the equator equals the given northing
fn footpoint_latitude(y: f64) -> f64 {
    let Ellipsoid { a, b } = Ellipsoid::WGS84;
    let n = Ellipsoid::WGS84.third_flattening();

    let alpha = ((a + b) / 2.0) * (1.0 + n.powi(2) / 4.0 + n.powi(4) / 64.0);
    let y_ = y / alpha;

    let beta = 3.0 * n / 2.0 - 27.0 * n.powi(3) / 32.0 + 269.0 * n.powi(5) / 512.0;
    let gamma = 21.0 * n.powi(2) / 16.0 - 55.0 * n.powi(4) / 32.0;
    let delta = 151.0 * n.powi(3) / 96.0 - 417.0 * n.powi(5) / 128.0;
    let epsilon = 1097.0 * n.powi(4) / 512.0;

    y_ + beta * (2.0 * y_).sin()
        + gamma * (4.0 * y_).sin()
        + delta * (6.0 * y_).sin()
        + epsilon * (8.0 * y_).sin()
}

/// Forward transverse Mercator: latitude/longitude (radians) to raw
/// easting/northing in meters, relative to the central meridian
/// `lambda0`. Scale factor and false origin are not applied here.
fn transverse_mercator(phi: f64, lambda: f64, lambda0: f64) -> Point {
    let ellipsoid = Ellipsoid::WGS84;
    let ep2 = ellipsoid.second_eccentricity_squared();

    let cos_phi = phi.cos();
    let nu2 = ep2 * cos_phi * cos_phi;
    // Radius of curvature in the prime vertical
    let radius = ellipsoid.a * ellipsoid.a / (ellipsoid.b * (1.0 + nu2).sqrt());
    let t = phi.tan();
    let t2 = t * t;
    let l = lambda - lambda0;

    // Coefficients for l^n; l and l² have coefficients of 1
    let l3 = 1.0 - t2 + nu2;
    let l4 = 5.0 - t2 + 9.0 * nu2 + 4.0 * nu2 * nu2;
    let l5 = 5.0 - 18.0 * t2 + t2 * t2 + 14.0 * nu2 - 58.0 * t2 * nu2;
    let l6 = 61.0 - 58.0 * t2 + t2 * t2 + 270.0 * nu2 - 330.0 * t2 * nu2;
    let l7 = 61.0 - 479.0 * t2 + 179.0 * t2 * t2 - t2 * t2 * t2;
    let l8 = 1385.0 - 3111.0 * t2 + 543.0 * t2 * t2 - t2 * t2 * t2;

    let easting = radius * cos_phi * l
        + radius / 6.0 * cos_phi.powi(3) * l3 * l.powi(3)
        + radius / 120.0 * cos_phi.powi(5) * l5 * l.powi(5)
        + radius / 5040.0 * cos_phi.powi(7) * l7 * l.powi(7);

    let northing = meridian_arc_length(phi)
        + t / 2.0 * radius * cos_phi.powi(2) * l.powi(2)
        + t / 24.0 * radius * cos_phi.powi(4) * l4 * l.powi(4)
        + t / 720.0 * radius * cos_phi.powi(6) * l6 * l.powi(6)
        + t / 40320.0 * radius * cos_phi.powi(8) * l8 * l.powi(8);

    Point::new(easting, northing)
}

/// Inverse transverse Mercator: raw easting/northing in meters to
/// latitude/longitude in radians, relative to the central meridian
/// `lambda0`
fn transverse_mercator_inverse(x: f64, y: f64, lambda0: f64) -> (f64, f64) {
    let ellipsoid = Ellipsoid::WGS84;
    let ep2 = ellipsoid.second_eccentricity_squared();

    let phi_f = footpoint_latitude(y);
    let cf = phi_f.cos();
    let nuf2 = ep2 * cf * cf;
    let nf = ellipsoid.a * ellipsoid.a / (ellipsoid.b * (1.0 + nuf2).sqrt());
    let tf = phi_f.tan();
    let tf2 = tf * tf;
    let tf4 = tf2 * tf2;

    // Fractional coefficients for x^n; nf_pow walks through Nf^n
    let mut nf_pow = nf;
    let x1_frac = 1.0 / (nf_pow * cf);
    nf_pow *= nf;
    let x2_frac = tf / (2.0 * nf_pow);
    nf_pow *= nf;
    let x3_frac = 1.0 / (6.0 * nf_pow * cf);
    nf_pow *= nf;
    let x4_frac = tf / (24.0 * nf_pow);
    nf_pow *= nf;
    let x5_frac = 1.0 / (120.0 * nf_pow * cf);
    nf_pow *= nf;
    let x6_frac = tf / (720.0 * nf_pow);
    nf_pow *= nf;
    let x7_frac = 1.0 / (5040.0 * nf_pow * cf);
    nf_pow *= nf;
    let x8_frac = tf / (40320.0 * nf_pow);

    // Polynomial coefficients for x^n; x has no polynomial coefficient
    let x2_poly = -1.0 - nuf2;
    let x3_poly = -1.0 - 2.0 * tf2 - nuf2;
    let x4_poly = 5.0 + 3.0 * tf2 + 6.0 * nuf2
        - 6.0 * tf2 * nuf2
        - 3.0 * nuf2 * nuf2
        - 9.0 * tf2 * nuf2 * nuf2;
    let x5_poly = 5.0 + 28.0 * tf2 + 24.0 * tf4 + 6.0 * nuf2 + 8.0 * tf2 * nuf2;
    let x6_poly = -61.0 - 90.0 * tf2 - 45.0 * tf4 - 107.0 * nuf2 + 162.0 * tf2 * nuf2;
    let x7_poly = -61.0 - 662.0 * tf2 - 1320.0 * tf4 - 720.0 * tf4 * tf2;
    let x8_poly = 1385.0 + 3633.0 * tf2 + 4095.0 * tf4 + 1575.0 * tf4 * tf2;

    let phi = phi_f
        + x2_frac * x2_poly * x * x
        + x4_frac * x4_poly * x.powi(4)
        + x6_frac * x6_poly * x.powi(6)
        + x8_frac * x8_poly * x.powi(8);

    let lambda = lambda0
        + x1_frac * x
        + x3_frac * x3_poly * x.powi(3)
        + x5_frac * x5_poly * x.powi(5)
        + x7_frac * x7_poly * x.powi(7);

    (phi, lambda)
}

/// Projects a coordinate into the UTM system, deriving the zone from
/// the longitude
pub fn project(lat_lng: &LatLng) -> UtmPoint {
    let zone = zone_for_lng(lat_lng.lng);
    let point = project_with_zone(lat_lng, zone);
    UtmPoint::new(point.x, point.y, zone)
}

/// Projects a coordinate against a caller-fixed zone. Used when an
/// extent's projection is already decided and must not be re-derived
/// per point.
pub fn project_with_zone(lat_lng: &LatLng, zone: u8) -> Point {
    debug_assert!((1..=60).contains(&zone), "zone {} outside [1, 60]", zone);
    let raw = transverse_mercator(
        lat_lng.lat.to_radians(),
        lat_lng.lng.to_radians(),
        central_meridian(zone),
    );
    Point::new(
        raw.x * UTM_SCALE_FACTOR + FALSE_EASTING,
        raw.y * UTM_SCALE_FACTOR + FALSE_NORTHING,
    )
}

/// Inverts UTM easting/northing in the given zone back to geographic
/// coordinates
pub fn unproject(x: f64, y: f64, zone: u8) -> LatLng {
    debug_assert!((1..=60).contains(&zone), "zone {} outside [1, 60]", zone);
    let x = (x - FALSE_EASTING) / UTM_SCALE_FACTOR;
    let y = (y - FALSE_NORTHING) / UTM_SCALE_FACTOR;
    let (phi, lambda) = transverse_mercator_inverse(x, y, central_meridian(zone));
    LatLng::new(phi.to_degrees(), lambda.to_degrees())
}
