//! Interactive editing of a print extent through five linked control
//! points: the center and the four corners of the rectangle.
//!
//! Moving the center recomputes the whole extent around the new
//! position; moving a corner drags its two neighbors along so the shape
//! stays a rectangle. The editor keeps a snapshot of all handle
//! positions from before the current move; without it, a multi-step
//! drag on the same corner would reference stale neighbor positions
//! instead of the true opposite corner.

use crate::core::geo::{LatLng, LatLngBounds};
use crate::extent::{compute_extent, MapExtent};
use crate::projection::Projection;
use crate::FrameError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the five logical control points of a print extent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl FromStr for Handle {
    type Err = FrameError;

    /// Parses the handle keys used by host drag events
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "center" => Ok(Handle::Center),
            "top_left" => Ok(Handle::TopLeft),
            "top_right" => Ok(Handle::TopRight),
            "bottom_left" => Ok(Handle::BottomLeft),
            "bottom_right" => Ok(Handle::BottomRight),
            other => Err(FrameError::ParseError(format!(
                "unknown handle key: {}",
                other
            ))),
        }
    }
}

/// The five control points of a rectangle on the ellipsoid surface.
///
/// Invariants, re-established after every mutation: the top pair shares
/// a latitude, the bottom pair shares a latitude, the left and right
/// pairs each share a longitude, and the center is the rectangle's
/// geometric midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleSet {
    pub center: LatLng,
    pub top_left: LatLng,
    pub top_right: LatLng,
    pub bottom_left: LatLng,
    pub bottom_right: LatLng,
}

impl HandleSet {
    /// Builds the five handles of an extent rectangle
    pub fn from_extent(extent: &MapExtent) -> Self {
        let ne = extent.north_east;
        let sw = extent.south_west;
        Self {
            center: extent.center(),
            top_left: LatLng::new(ne.lat, sw.lng),
            top_right: LatLng::new(ne.lat, ne.lng),
            bottom_left: LatLng::new(sw.lat, sw.lng),
            bottom_right: LatLng::new(sw.lat, ne.lng),
        }
    }

    /// Position of a single handle
    pub fn get(&self, handle: Handle) -> LatLng {
        match handle {
            Handle::Center => self.center,
            Handle::TopLeft => self.top_left,
            Handle::TopRight => self.top_right,
            Handle::BottomLeft => self.bottom_left,
            Handle::BottomRight => self.bottom_right,
        }
    }

    /// Smallest bounds containing the four corners
    fn corner_bounds(&self) -> LatLngBounds {
        LatLngBounds::from_points(&[
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ])
    }
}

/// Interactive session state for one print extent.
///
/// Owns the handle positions, the snapshot of their previous positions
/// used as drag anchors, the active projection and the current paper
/// size and scale. Not meant to be shared across threads; each drag
/// event must be processed to completion before the next one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtentEditor {
    width_mm: u32,
    height_mm: u32,
    scale: u32,
    projection: Projection,
    handles: HandleSet,
    anchors: HandleSet,
}

impl ExtentEditor {
    /// Computes the initial extent and its handles
    pub fn new(width_mm: u32, height_mm: u32, scale: u32, center: LatLng) -> Self {
        let extent = compute_extent(width_mm, height_mm, scale, &center);
        let handles = HandleSet::from_extent(&extent);
        Self {
            width_mm,
            height_mm,
            scale,
            projection: extent.projection,
            handles,
            anchors: handles,
        }
    }

    pub fn width_mm(&self) -> u32 {
        self.width_mm
    }

    pub fn height_mm(&self) -> u32 {
        self.height_mm
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn handles(&self) -> &HandleSet {
        &self.handles
    }

    /// The current rectangle as an extent value
    pub fn extent(&self) -> MapExtent {
        let bounds = self.handles.corner_bounds();
        MapExtent::new(bounds.north_east, bounds.south_west, self.projection)
    }

    /// The rectangle center, rounded for host display
    pub fn center(&self) -> LatLng {
        self.handles.center.rounded()
    }

    /// Applies a single-handle drag and restores the rectangle
    /// invariants.
    ///
    /// A center drag recomputes the whole extent around the new
    /// position (the projection may change). A corner drag updates the
    /// two adjacent corners: each takes the moved corner's new latitude
    /// or longitude while keeping its other coordinate from the pre-drag
    /// anchor of the opposite corner; the far corner stays untouched.
    pub fn drag(&mut self, handle: Handle, to: LatLng) {
        // Drag positions coming from a map widget may have wandered
        // across the antimeridian
        let to = to.wrapped();

        match handle {
            Handle::Center => {
                let extent = compute_extent(self.width_mm, self.height_mm, self.scale, &to);
                self.projection = extent.projection;
                self.handles = HandleSet::from_extent(&extent);
            }
            Handle::TopLeft => {
                self.handles.top_left = to;
                self.handles.top_right = LatLng::new(to.lat, self.anchors.top_right.lng);
                self.handles.bottom_left = LatLng::new(self.anchors.bottom_left.lat, to.lng);
            }
            Handle::TopRight => {
                self.handles.top_right = to;
                self.handles.top_left = LatLng::new(to.lat, self.anchors.top_left.lng);
                self.handles.bottom_right = LatLng::new(self.anchors.bottom_right.lat, to.lng);
            }
            Handle::BottomRight => {
                self.handles.bottom_right = to;
                self.handles.top_right = LatLng::new(self.anchors.top_right.lat, to.lng);
                self.handles.bottom_left = LatLng::new(to.lat, self.anchors.bottom_left.lng);
            }
            Handle::BottomLeft => {
                self.handles.bottom_left = to;
                self.handles.top_left = LatLng::new(self.anchors.top_left.lat, to.lng);
                self.handles.bottom_right = LatLng::new(to.lat, self.anchors.bottom_right.lng);
            }
        }

        self.finish_move(handle);
    }

    /// Sets the paper width and recomputes the extent around the
    /// current center
    pub fn set_width_mm(&mut self, width_mm: u32) {
        self.width_mm = width_mm;
        self.recompute();
    }

    /// Sets the paper height and recomputes the extent around the
    /// current center
    pub fn set_height_mm(&mut self, height_mm: u32) {
        self.height_mm = height_mm;
        self.recompute();
    }

    /// Sets the print scale and recomputes the extent around the
    /// current center
    pub fn set_scale(&mut self, scale: u32) {
        self.scale = scale;
        self.recompute();
    }

    /// Moves the extent to a new center, keeping the configured size
    pub fn set_center(&mut self, center: LatLng) {
        let extent = compute_extent(self.width_mm, self.height_mm, self.scale, &center.wrapped());
        self.projection = extent.projection;
        self.handles = HandleSet::from_extent(&extent);
        self.anchors = self.handles;
    }

    fn recompute(&mut self) {
        let center = self.handles.center;
        let extent = compute_extent(self.width_mm, self.height_mm, self.scale, &center);
        self.projection = extent.projection;
        self.handles = HandleSet::from_extent(&extent);
        self.anchors = self.handles;
    }

    /// Common tail of every drag: re-center, re-snapshot, and re-derive
    /// the paper size from the moved rectangle. Dragging the center
    /// under UTM preserves the configured width/height instead of
    /// letting rounding drift change them.
    fn finish_move(&mut self, moved: Handle) {
        self.handles.center = self.handles.corner_bounds().center();
        self.anchors = self.handles;

        if !(moved == Handle::Center && self.projection.is_utm()) {
            self.recalculate_size();
        }
    }

    /// Re-derives width/height in integer millimeters by projecting
    /// three corners through the currently active projection (the
    /// extent's fixed kind and zone, never re-derived per point)
    fn recalculate_size(&mut self) {
        let top_left = self.projection.project(&self.handles.top_left);
        let top_right = self.projection.project(&self.handles.top_right);
        let bottom_left = self.projection.project(&self.handles.bottom_left);

        let width_m = top_right.subtract(&top_left).x.abs();
        let height_m = top_left.subtract(&bottom_left).y.abs();

        let scale = f64::from(self.scale);
        self.width_mm = (width_m / scale * 1000.0).round() as u32;
        self.height_mm = (height_m / scale * 1000.0).round() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn berlin_editor() -> ExtentEditor {
        // 10 km × 10 km at 1:100000, well inside zone 33
        ExtentEditor::new(100, 100, 100_000, LatLng::new(52.5200, 13.4050))
    }

    #[test]
    fn test_handle_from_str() {
        assert_eq!("center".parse::<Handle>().unwrap(), Handle::Center);
        assert_eq!("top_left".parse::<Handle>().unwrap(), Handle::TopLeft);
        assert_eq!(
            "bottom_right".parse::<Handle>().unwrap(),
            Handle::BottomRight
        );
        assert!("north".parse::<Handle>().is_err());
    }

    #[test]
    fn test_initial_invariants() {
        let editor = berlin_editor();
        let handles = editor.handles();
        assert_eq!(handles.top_left.lat, handles.top_right.lat);
        assert_eq!(handles.bottom_left.lat, handles.bottom_right.lat);
        assert_eq!(handles.top_left.lng, handles.bottom_left.lng);
        assert_eq!(handles.top_right.lng, handles.bottom_right.lng);
    }

    #[test]
    fn test_corner_drag_moves_neighbors_only() {
        let mut editor = berlin_editor();
        let before = *editor.handles();

        let target = LatLng::new(
            before.top_left.lat + 0.01,
            before.top_left.lng - 0.01,
        );
        editor.drag(Handle::TopLeft, target);
        let after = editor.handles();

        assert_eq!(after.get(Handle::TopLeft), target);
        // Neighbors follow on one axis, keep the other from the anchors
        assert_eq!(after.top_right.lat, target.lat);
        assert_eq!(after.top_right.lng, before.top_right.lng);
        assert_eq!(after.bottom_left.lng, target.lng);
        assert_eq!(after.bottom_left.lat, before.bottom_left.lat);
        // The far corner never moves
        assert_eq!(after.bottom_right, before.bottom_right);
    }

    #[test]
    fn test_center_is_midpoint_after_drags() {
        let mut editor = berlin_editor();

        let drags = [
            (Handle::TopLeft, LatLng::new(52.58, 13.30)),
            (Handle::BottomRight, LatLng::new(52.45, 13.52)),
            (Handle::TopRight, LatLng::new(52.60, 13.55)),
        ];
        for (handle, target) in drags {
            editor.drag(handle, target);

            let handles = editor.handles();
            assert_eq!(handles.top_left.lat, handles.top_right.lat);
            assert_eq!(handles.bottom_left.lat, handles.bottom_right.lat);
            assert_eq!(handles.top_left.lng, handles.bottom_left.lng);
            assert_eq!(handles.top_right.lng, handles.bottom_right.lng);

            let bounds = editor.extent().bounds();
            let midpoint = bounds.center();
            assert!((handles.center.lat - midpoint.lat).abs() < 1e-12);
            assert!((handles.center.lng - midpoint.lng).abs() < 1e-12);
        }
    }

    #[test]
    fn test_repeated_drag_uses_fresh_anchors() {
        let mut editor = berlin_editor();
        let original_bottom_right = editor.handles().bottom_right;
        let original_top_right_lng = editor.handles().top_right.lng;

        let first = LatLng::new(52.57, 13.33);
        editor.drag(Handle::TopLeft, first);
        let second = LatLng::new(52.59, 13.31);
        editor.drag(Handle::TopLeft, second);

        let handles = editor.handles();
        // The opposite corner is still anchored at its original spot
        assert_eq!(handles.bottom_right, original_bottom_right);
        assert_eq!(handles.top_right.lng, original_top_right_lng);
        assert_eq!(handles.top_right.lat, second.lat);
        assert_eq!(handles.bottom_left.lng, second.lng);
    }

    #[test]
    fn test_corner_drag_updates_paper_size() {
        let mut editor = berlin_editor();
        assert_eq!(editor.width_mm(), 100);
        assert_eq!(editor.height_mm(), 100);

        // Pull the top-right corner outward; the rectangle grows, so the
        // derived paper size must grow with it
        let handles = *editor.handles();
        let target = LatLng::new(handles.top_right.lat + 0.02, handles.top_right.lng + 0.05);
        editor.drag(Handle::TopRight, target);

        assert!(editor.width_mm() > 100, "width={}", editor.width_mm());
        assert!(editor.height_mm() > 100, "height={}", editor.height_mm());
    }

    #[test]
    fn test_utm_center_drag_preserves_paper_size() {
        let mut editor = berlin_editor();
        assert!(editor.projection().is_utm());

        editor.drag(Handle::Center, LatLng::new(52.40, 13.10));

        assert!(editor.projection().is_utm());
        assert_eq!(editor.width_mm(), 100);
        assert_eq!(editor.height_mm(), 100);

        // The reported center tracks the dragged position
        let center = editor.center();
        assert!((center.lat - 52.40).abs() < 1e-3);
        assert!((center.lng - 13.10).abs() < 1e-3);
    }

    #[test]
    fn test_mercator_center_drag_keeps_size_stable() {
        // 500 km wide at 1:500000 → Mercator
        let mut editor = ExtentEditor::new(1000, 1000, 500_000, LatLng::new(50.0, 10.0));
        assert_eq!(editor.projection(), Projection::Mercator);

        editor.drag(Handle::Center, LatLng::new(48.0, 8.0));

        // Under Mercator the size is re-derived from the rectangle; the
        // planar offsets survive the round trip exactly
        assert_eq!(editor.projection(), Projection::Mercator);
        assert_eq!(editor.width_mm(), 1000);
        assert_eq!(editor.height_mm(), 1000);
    }

    #[test]
    fn test_center_drag_can_switch_projection() {
        let mut editor = ExtentEditor::new(1000, 1000, 500_000, LatLng::new(50.0, 10.0));
        assert_eq!(editor.projection(), Projection::Mercator);

        // Shrinking the scale drops the extent under the breaking point
        editor.set_scale(50_000);
        assert_eq!(editor.projection(), Projection::Utm(32));

        editor.drag(Handle::Center, LatLng::new(50.0, 16.0));
        assert_eq!(editor.projection(), Projection::Utm(33));
    }

    #[test]
    fn test_scale_edit_recomputes_around_center() {
        let mut editor = berlin_editor();
        let center_before = editor.handles().center;

        editor.set_scale(50_000);

        let center_after = editor.handles().center;
        assert!((center_after.lat - center_before.lat).abs() < 1e-4);
        assert!((center_after.lng - center_before.lng).abs() < 1e-4);
        // Half the scale → half the ground span
        let extent = editor.extent();
        let span_lat = extent.north_east.lat - extent.south_west.lat;
        assert!(span_lat < 0.06, "span={}", span_lat);
    }
}
