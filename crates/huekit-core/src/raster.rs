//! Color sampling for wheel rendering.
//!
//! Pure per-pixel sampling the host's paint code feeds into whatever image
//! type its renderer wants. Pixels outside the wheel stay untouched
//! (transparent), so the buffer composites cleanly over any background.

use kurbo::{Point, Size};

use crate::color::Color;
use crate::hsv::hsv_to_rgb;
use crate::wheel::{self, RING_START_ANGLE, WheelLayout};

/// Sample the ring's shade ramp at parameter `t` for `base_hue`.
pub fn ring_color(t: f64, base_hue: f64) -> Color {
    let (saturation, value) = wheel::ring_position_to_sat_value(t);
    hsv_to_rgb(base_hue, saturation, value, 1.0)
}

/// Color of the inner disc under `pos`, or `None` outside the disc.
///
/// `value` is the brightness the whole disc is rendered at (the ring edits
/// it separately).
pub fn disc_color_at(pos: Point, layout: &WheelLayout, value: f64) -> Option<Color> {
    let distance = (pos - layout.center).hypot();
    if distance > layout.inner_radius {
        return None;
    }
    let (hue, saturation) = wheel::position_to_hue_saturation(pos, layout);
    Some(hsv_to_rgb(hue, saturation, value, 1.0))
}

/// Color of the ring band under `pos`, or `None` outside the band.
pub fn ring_color_at(pos: Point, layout: &WheelLayout, base_hue: f64) -> Option<Color> {
    let distance = (pos - layout.center).hypot();
    let band_inner = layout.outer_radius - layout.ring_thickness;
    if distance < band_inner || distance > layout.outer_radius {
        return None;
    }
    let t = wheel::position_to_ring_position(pos, layout, RING_START_ANGLE);
    Some(ring_color(t, base_hue))
}

/// Rasterize the whole wheel (disc plus ring) into an RGBA8 buffer.
///
/// Samples at pixel centers. The host uploads the buffer as an image and
/// rebuilds it when the widget resizes or `base_hue`/`value` change.
pub fn render_wheel_rgba(width: u32, height: u32, base_hue: f64, value: f64) -> Vec<u8> {
    let layout = WheelLayout::compute(Size::new(width as f64, height as f64));
    let mut buf = vec![0u8; width as usize * height as usize * 4];

    for py in 0..height as usize {
        let row_offset = py * width as usize * 4;
        for px in 0..width as usize {
            let pos = Point::new(px as f64 + 0.5, py as f64 + 0.5);
            let sample =
                disc_color_at(pos, &layout, value).or_else(|| ring_color_at(pos, &layout, base_hue));
            if let Some(color) = sample {
                let offset = row_offset + px * 4;
                buf[offset] = color.r;
                buf[offset + 1] = color.g;
                buf[offset + 2] = color.b;
                buf[offset + 3] = color.a;
            }
        }
    }

    buf
}
