//! Engine-wide magic numbers shared by the projection code and the extent
//! editor. Keeping them in a single place makes it easier to tweak them.

/// Real-world horizontal extent size (in meters) above which the extent
/// calculator switches from UTM to Mercator. A UTM zone is 6° wide
/// (≈ 600 km at the equator, narrowing poleward); 150 km keeps an extent
/// safely inside a single zone.
pub const BREAKING_POINT_METERS: f64 = 150_000.0;

/// UTM point scale factor on the central meridian (k₀).
pub const UTM_SCALE_FACTOR: f64 = 0.9996;

/// Constant easting offset so all UTM eastings in a zone are positive.
pub const FALSE_EASTING: f64 = 500_000.0;

/// Constant northing offset applied symmetrically on projection and
/// removed on inversion.
pub const FALSE_NORTHING: f64 = 10_000_000.0;

/// Latitude clamp applied before the Mercator forward projection, which
/// diverges at the poles.
pub const MERCATOR_MAX_LATITUDE: f64 = 89.5;

/// Coordinates reported back to the host are rounded to 8 decimal places.
pub const COORD_ROUNDING_FACTOR: f64 = 100_000_000.0;

/// Print scale anchoring the zoom-level → scale ladder (zoom level 2).
pub const BASE_SCALE: f64 = 100_000_000.0;
