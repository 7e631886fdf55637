//! Wheel layout metrics and pointer geometry.
//!
//! The wheel is an inner hue/saturation disc surrounded by an outer ring
//! that sweeps a white→pure→black→pure→white shade ramp. Positions are in
//! widget-local pixels (Y growing downward); angles are in degrees and grow
//! counter-clockwise from the positive X axis, so the hue at a pointer
//! position matches the usual math convention.

use kurbo::{Point, Size};

/// Thickness of the outer shade ring, in pixels.
pub const RING_THICKNESS: f64 = 10.0;

/// Gap between the inner disc and the outer ring, in pixels.
pub const GAP_SIZE: f64 = 10.0;

/// Radius of the selection thumbs, in pixels.
pub const THUMB_RADIUS: f64 = 6.0;

/// Angle where the ring parameter `t = 0` sits. Angles grow
/// counter-clockwise, so 90° puts it at the top of the wheel.
pub const RING_START_ANGLE: f64 = 90.0;

/// Derived wheel metrics for one widget size.
///
/// Cheap to recompute; callers rebuild it whenever the widget resizes and
/// never persist it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    pub center: Point,
    /// Radius of the hue/saturation disc.
    pub inner_radius: f64,
    /// Outer edge of the shade ring.
    pub outer_radius: f64,
    pub ring_thickness: f64,
    pub thumb_radius: f64,
}

impl WheelLayout {
    /// Compute the layout for a widget of the given size.
    pub fn compute(size: Size) -> Self {
        let radius = (size.width.min(size.height) / 2.0 - 1.0).max(0.0);
        let inner_radius = (radius - RING_THICKNESS - GAP_SIZE).max(0.0);
        Self {
            center: Point::new(size.width / 2.0, size.height / 2.0),
            inner_radius,
            outer_radius: radius,
            ring_thickness: RING_THICKNESS,
            thumb_radius: THUMB_RADIUS,
        }
    }

    /// Mid-line radius of the shade ring, where its thumb sits.
    pub fn ring_mid_radius(&self) -> f64 {
        self.outer_radius - self.ring_thickness / 2.0
    }
}

/// Which concentric zone a pointer gesture is manipulating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragRegion {
    /// Outside the wheel, or no gesture in progress.
    #[default]
    None,
    /// The inner disc: hue and saturation.
    HueSaturation,
    /// The outer ring: the shade ramp.
    Value,
}

/// Angle of a position around a center, in degrees in `[0, 360)`.
pub(crate) fn angle_of(pos: Point, center: Point) -> f64 {
    let dx = pos.x - center.x;
    let dy = center.y - pos.y; // screen Y grows downward
    dy.atan2(dx).to_degrees().rem_euclid(360.0)
}

/// Point at `radius` from `center` in the direction of `angle_deg`.
pub(crate) fn point_at(center: Point, radius: f64, angle_deg: f64) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(center.x + radius * rad.cos(), center.y - radius * rad.sin())
}

/// Map a pointer position to `(hue, saturation)`.
///
/// Total over every input: the exact center reports `(0.0, 0.0)`, and a
/// collapsed layout (zero inner radius) reports saturation 0. Saturation
/// clamps to 1 at and beyond the disc edge.
pub fn position_to_hue_saturation(pos: Point, layout: &WheelLayout) -> (f64, f64) {
    let offset = pos - layout.center;
    let distance = offset.hypot();
    if distance == 0.0 {
        return (0.0, 0.0);
    }

    let hue = angle_of(pos, layout.center);
    let saturation = if layout.inner_radius > 0.0 {
        (distance / layout.inner_radius).min(1.0)
    } else {
        0.0
    };
    (hue, saturation)
}

/// Position of the disc thumb for `(hue, saturation)`; inverse of
/// [`position_to_hue_saturation`] for in-range saturation.
pub fn hue_saturation_to_position(hue: f64, saturation: f64, layout: &WheelLayout) -> Point {
    let radius = saturation.clamp(0.0, 1.0) * layout.inner_radius;
    point_at(layout.center, radius, hue)
}

/// Map an angle to the normalized ring parameter `t ∈ [0, 1)`.
pub fn angle_to_ring_position(angle: f64, start_angle: f64) -> f64 {
    (angle - start_angle).rem_euclid(360.0) / 360.0
}

/// Map a ring parameter back to an angle in `[0, 360)`.
///
/// Exact inverse of [`angle_to_ring_position`]: composing the two returns
/// the input angle modulo 360.
pub fn ring_position_to_angle(t: f64, start_angle: f64) -> f64 {
    (t * 360.0 + start_angle).rem_euclid(360.0)
}

/// Ring parameter under a pointer position.
pub fn position_to_ring_position(pos: Point, layout: &WheelLayout, start_angle: f64) -> f64 {
    angle_to_ring_position(angle_of(pos, layout.center), start_angle)
}

/// Position of the ring thumb for a ring parameter.
pub fn ring_position_to_point(t: f64, layout: &WheelLayout, start_angle: f64) -> Point {
    point_at(
        layout.center,
        layout.ring_mid_radius(),
        ring_position_to_angle(t, start_angle),
    )
}

/// Saturation and value along the ring's four-stop shade ramp.
///
/// The ramp runs white→pure→black→pure→white over the four quartiles of
/// `t`, blending linearly within each quartile.
pub fn ring_position_to_sat_value(t: f64) -> (f64, f64) {
    let t = t.clamp(0.0, 1.0);
    if t < 0.25 {
        (t * 4.0, 1.0)
    } else if t < 0.5 {
        (1.0, 1.0 - (t - 0.25) * 4.0)
    } else if t < 0.75 {
        (1.0, (t - 0.5) * 4.0)
    } else {
        (1.0 - (t - 0.75) * 4.0, 1.0)
    }
}

/// Approximate inverse of [`ring_position_to_sat_value`] for placing the
/// ring thumb.
///
/// The forward ramp visits some `(saturation, value)` pairs twice and most
/// of the unit square never, so a true inverse does not exist. Bright
/// colors (value above 0.8) land on the white→pure quartile and everything
/// else on the pure→black quartile. This is an indicator-placement
/// heuristic, not a bijection.
pub fn sat_value_to_ring_position(saturation: f64, value: f64) -> f64 {
    let saturation = saturation.clamp(0.0, 1.0);
    let value = value.clamp(0.0, 1.0);
    if value > 0.8 {
        saturation * 0.25
    } else {
        0.25 + (1.0 - value) * 0.25
    }
}

/// Classify a pointer position into a wheel zone.
pub fn determine_drag_region(pos: Point, layout: &WheelLayout) -> DragRegion {
    let distance = (pos - layout.center).hypot();
    if distance <= layout.inner_radius {
        DragRegion::HueSaturation
    } else if distance <= layout.outer_radius {
        DragRegion::Value
    } else {
        DragRegion::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_200() -> WheelLayout {
        WheelLayout::compute(Size::new(200.0, 200.0))
    }

    #[test]
    fn test_compute_layout() {
        let layout = layout_200();
        assert_eq!(layout.center, Point::new(100.0, 100.0));
        assert!((layout.outer_radius - 99.0).abs() < 1e-9);
        assert!((layout.inner_radius - 79.0).abs() < 1e-9);
    }

    #[test]
    fn test_compute_layout_uses_smaller_dimension() {
        let layout = WheelLayout::compute(Size::new(300.0, 120.0));
        assert_eq!(layout.center, Point::new(150.0, 60.0));
        assert!((layout.outer_radius - 59.0).abs() < 1e-9);
    }

    #[test]
    fn test_compute_layout_degenerate_size() {
        let layout = WheelLayout::compute(Size::new(4.0, 4.0));
        assert!((layout.outer_radius - 1.0).abs() < 1e-9);
        assert!(layout.inner_radius == 0.0);
    }

    #[test]
    fn test_position_right_of_center_is_hue_zero() {
        let layout = layout_200();
        let (hue, saturation) =
            position_to_hue_saturation(Point::new(100.0 + layout.inner_radius, 100.0), &layout);
        assert!(hue.abs() < 1e-9);
        assert!((saturation - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_position_above_center_is_hue_90() {
        let layout = layout_200();
        let (hue, _) = position_to_hue_saturation(Point::new(100.0, 60.0), &layout);
        assert!((hue - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_center_is_stable() {
        let layout = layout_200();
        let (hue, saturation) = position_to_hue_saturation(layout.center, &layout);
        assert_eq!((hue, saturation), (0.0, 0.0));
    }

    #[test]
    fn test_zero_inner_radius_reports_zero_saturation() {
        let layout = WheelLayout::compute(Size::new(4.0, 4.0));
        let (hue, saturation) = position_to_hue_saturation(Point::new(3.0, 2.0), &layout);
        assert!(hue.is_finite());
        assert_eq!(saturation, 0.0);
    }

    #[test]
    fn test_saturation_clamps_beyond_disc() {
        let layout = layout_200();
        let (_, saturation) = position_to_hue_saturation(Point::new(500.0, 100.0), &layout);
        assert!((saturation - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_hue_saturation_position_round_trip() {
        let layout = layout_200();
        for &(hue, saturation) in &[(0.0, 0.5), (45.0, 1.0), (210.0, 0.25), (359.0, 0.75)] {
            let pos = hue_saturation_to_position(hue, saturation, &layout);
            let (h, s) = position_to_hue_saturation(pos, &layout);
            assert!((h - hue).abs() < 1e-6, "hue {hue} -> {h}");
            assert!((s - saturation).abs() < 1e-6, "saturation {saturation} -> {s}");
        }
    }

    #[test]
    fn test_ring_angle_inverse() {
        let mut angle = 0.0;
        while angle < 360.0 {
            let t = angle_to_ring_position(angle, RING_START_ANGLE);
            let back = ring_position_to_angle(t, RING_START_ANGLE);
            assert!(
                (back - angle).rem_euclid(360.0).min((angle - back).rem_euclid(360.0)) < 1e-9,
                "angle {angle} -> t {t} -> {back}"
            );
            angle += 7.5;
        }
    }

    #[test]
    fn test_ring_start_angle_offset() {
        // The top of the wheel (90° counter-clockwise) is t = 0; a quarter
        // turn further along lands at t = 0.25.
        assert!((angle_to_ring_position(90.0, RING_START_ANGLE)).abs() < 1e-9);
        assert!((angle_to_ring_position(450.0, RING_START_ANGLE)).abs() < 1e-9);
        assert!((angle_to_ring_position(180.0, RING_START_ANGLE) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(ring_position_to_sat_value(0.0), (0.0, 1.0)); // white
        assert_eq!(ring_position_to_sat_value(0.25), (1.0, 1.0)); // pure
        assert_eq!(ring_position_to_sat_value(0.5), (1.0, 0.0)); // black
        assert_eq!(ring_position_to_sat_value(0.75), (1.0, 1.0)); // pure again
        assert_eq!(ring_position_to_sat_value(1.0), (0.0, 1.0)); // back to white
    }

    #[test]
    fn test_ramp_blends_linearly() {
        let (s, v) = ring_position_to_sat_value(0.125);
        assert!((s - 0.5).abs() < 1e-9);
        assert!((v - 1.0).abs() < 1e-9);

        let (s, v) = ring_position_to_sat_value(0.375);
        assert!((s - 1.0).abs() < 1e-9);
        assert!((v - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_ramp_inverse_on_reachable_set() {
        // White→pure quartile: value stays 1, so any t below 0.25 inverts.
        for &t in &[0.0, 0.05, 0.125, 0.2, 0.24] {
            let (s, v) = ring_position_to_sat_value(t);
            assert!((sat_value_to_ring_position(s, v) - t).abs() < 1e-9);
        }
        // Pure→black quartile: only points dark enough to clear the 0.8
        // branch threshold invert; that is the documented approximation.
        for &t in &[0.31, 0.375, 0.45, 0.49] {
            let (s, v) = ring_position_to_sat_value(t);
            assert!((sat_value_to_ring_position(s, v) - t).abs() < 1e-9);
        }
    }

    #[test]
    fn test_drag_region_bands() {
        let layout = WheelLayout {
            center: Point::new(0.0, 0.0),
            inner_radius: 50.0,
            outer_radius: 80.0,
            ring_thickness: RING_THICKNESS,
            thumb_radius: THUMB_RADIUS,
        };
        assert_eq!(
            determine_drag_region(Point::new(49.0, 0.0), &layout),
            DragRegion::HueSaturation
        );
        assert_eq!(
            determine_drag_region(Point::new(65.0, 0.0), &layout),
            DragRegion::Value
        );
        assert_eq!(
            determine_drag_region(Point::new(90.0, 0.0), &layout),
            DragRegion::None
        );
    }

    #[test]
    fn test_ring_thumb_sits_on_mid_line() {
        let layout = layout_200();
        let pos = ring_position_to_point(0.0, &layout, RING_START_ANGLE);
        let distance = (pos - layout.center).hypot();
        assert!((distance - layout.ring_mid_radius()).abs() < 1e-9);
        // t = 0 with the default start angle is the top of the wheel.
        assert!((pos.x - layout.center.x).abs() < 1e-9);
        assert!(pos.y < layout.center.y);
    }
}
