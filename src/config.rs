//! Host-facing defaults and numeric-input fallbacks.
//!
//! The host UI feeds the core from free-form text fields. Unparseable
//! input never reaches the transform math: it is substituted with the
//! configured default and logged, mirroring the behavior users expect
//! from the print form.

use crate::core::geo::LatLng;
use crate::scale::scale_for_zoom;
use crate::{FrameError, Result};
use serde::{Deserialize, Serialize};

/// Defaults for a new print session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintConfig {
    /// Where the extent is placed when the host has no saved position
    pub default_center: LatLng,
    /// Zoom level used to seed the print scale
    pub default_zoom: u8,
    /// Default paper width in millimeters
    pub default_width_mm: u32,
    /// Default paper height in millimeters
    pub default_height_mm: u32,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            default_center: LatLng::new(52.5200, 13.4050),
            default_zoom: 12,
            // A4 portrait
            default_width_mm: 210,
            default_height_mm: 297,
        }
    }
}

impl PrintConfig {
    /// Loads a configuration from JSON, rejecting out-of-range centers
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(FrameError::Serialization)?;
        if !config.default_center.is_valid() {
            return Err(FrameError::InvalidCoordinates(format!(
                "default center ({}, {}) is out of range",
                config.default_center.lat, config.default_center.lng
            ))
            .into());
        }
        Ok(config)
    }

    /// The print scale matching the configured default zoom
    pub fn default_scale(&self) -> u32 {
        scale_for_zoom(self.default_zoom)
    }
}

/// Parses a paper dimension field, falling back to the default on
/// unparseable input
pub fn parse_dimension_or(input: &str, fallback: u32) -> u32 {
    match input.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            log::warn!(
                "unparseable dimension {:?}, falling back to {} mm",
                input,
                fallback
            );
            fallback
        }
    }
}

/// Parses a scale field, falling back to the default on unparseable
/// input
pub fn parse_scale_or(input: &str, fallback: u32) -> u32 {
    match input.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            log::warn!(
                "unparseable scale {:?}, falling back to 1:{}",
                input,
                fallback
            );
            fallback
        }
    }
}

/// Parses a latitude/longitude field, falling back to the default on
/// unparseable input
pub fn parse_coord_or(input: &str, fallback: f64) -> f64 {
    match input.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            log::warn!(
                "unparseable coordinate {:?}, falling back to {}",
                input,
                fallback
            );
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PrintConfig::default();
        assert!(config.default_center.is_valid());
        assert_eq!(config.default_width_mm, 210);
        assert_eq!(config.default_height_mm, 297);
        // zoom 12 sits in the 1:40000 bucket
        assert_eq!(config.default_scale(), 40_000);
    }

    #[test]
    fn test_from_json() {
        let config = PrintConfig::from_json(
            r#"{
                "default_center": {"lat": 48.1374, "lng": 11.5755},
                "default_zoom": 10,
                "default_width_mm": 420,
                "default_height_mm": 297
            }"#,
        )
        .unwrap();
        assert_eq!(config.default_center, LatLng::new(48.1374, 11.5755));
        assert_eq!(config.default_width_mm, 420);
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(PrintConfig::from_json("not json").is_err());
        assert!(PrintConfig::from_json(
            r#"{
                "default_center": {"lat": 120.0, "lng": 11.0},
                "default_zoom": 10,
                "default_width_mm": 210,
                "default_height_mm": 297
            }"#,
        )
        .is_err());
    }

    #[test]
    fn test_fallback_parsing() {
        assert_eq!(parse_dimension_or("250", 210), 250);
        assert_eq!(parse_dimension_or(" 250 ", 210), 250);
        assert_eq!(parse_dimension_or("abc", 210), 210);
        assert_eq!(parse_dimension_or("", 210), 210);

        assert_eq!(parse_scale_or("100000", 40_000), 100_000);
        assert_eq!(parse_scale_or("1:100000", 40_000), 40_000);

        assert_eq!(parse_coord_or("52.52", 0.0), 52.52);
        assert_eq!(parse_coord_or("fifty", 13.405), 13.405);
    }
}
