use crate::core::constants::COORD_ROUNDING_FACTOR;
use serde::{Deserialize, Serialize};

/// Reference ellipsoid defined by its semi-major and semi-minor axes.
///
/// Every derived quantity is computed on demand from `a` and `b`, so a
/// different reference ellipsoid can be swapped in without touching the
/// transform code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Semi-major axis in meters
    pub a: f64,
    /// Semi-minor axis in meters
    pub b: f64,
}

impl Ellipsoid {
    /// WGS84-class ellipsoid used by all built-in transforms
    pub const WGS84: Ellipsoid = Ellipsoid {
        a: 6_378_137.0,
        b: 6_356_752.314,
    };

    /// First eccentricity `e = sqrt(1 - (b/a)²)`
    pub fn eccentricity(&self) -> f64 {
        let ratio = self.b / self.a;
        (1.0 - ratio * ratio).sqrt()
    }

    /// Second eccentricity squared `e'² = (a² - b²) / b²`
    pub fn second_eccentricity_squared(&self) -> f64 {
        (self.a * self.a - self.b * self.b) / (self.b * self.b)
    }

    /// Third flattening `n = (a - b) / (a + b)`, the expansion parameter
    /// of the meridian arc series
    pub fn third_flattening(&self) -> f64 {
        (self.a - self.b) / (self.a + self.b)
    }
}

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Wraps longitude to [-180, 180] range
    pub fn wrap_lng(lng: f64) -> f64 {
        let wrapped = lng % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }

    /// Returns a copy with the longitude wrapped to [-180, 180]
    pub fn wrapped(&self) -> LatLng {
        LatLng::new(self.lat, Self::wrap_lng(self.lng))
    }

    /// Rounds both coordinates to 8 decimal places for host display
    pub fn rounded(&self) -> LatLng {
        LatLng::new(
            (self.lat * COORD_ROUNDING_FACTOR).round() / COORD_ROUNDING_FACTOR,
            (self.lng * COORD_ROUNDING_FACTOR).round() / COORD_ROUNDING_FACTOR,
        )
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a point in projected planar coordinates, in meters.
/// A Point is meaningless without its projection (and zone) context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A planar point in the Universal Transverse Mercator system, tagged
/// with the zone its easting/northing are relative to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtmPoint {
    pub x: f64,
    pub y: f64,
    pub zone: u8,
}

impl UtmPoint {
    pub fn new(x: f64, y: f64, zone: u8) -> Self {
        Self { x, y, zone }
    }

    /// The easting/northing pair without its zone tag
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// Creates the smallest bounds containing all the given points
    pub fn from_points(points: &[LatLng]) -> Self {
        let mut bounds = Self::new(
            LatLng::new(f64::INFINITY, f64::INFINITY),
            LatLng::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        );
        for point in points {
            bounds.extend(point);
        }
        bounds
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }
}
