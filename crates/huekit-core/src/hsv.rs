//! HSV color model and RGB conversions.
//!
//! Hue is expressed in degrees and kept normalized into `[0, 360)`;
//! saturation, value and alpha live in `[0, 1]`. Every constructor and
//! `with_*` method re-establishes those invariants, so a stored [`HsvColor`]
//! is always canonical.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A color in HSV space with an alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsvColor {
    hue: f64,
    saturation: f64,
    value: f64,
    alpha: f64,
}

impl HsvColor {
    pub fn new(hue: f64, saturation: f64, value: f64, alpha: f64) -> Self {
        Self {
            hue: normalize_hue(hue),
            saturation: saturation.clamp(0.0, 1.0),
            value: value.clamp(0.0, 1.0),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Fully opaque HSV color.
    pub fn opaque(hue: f64, saturation: f64, value: f64) -> Self {
        Self::new(hue, saturation, value, 1.0)
    }

    /// Hue in degrees, in `[0, 360)`.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Saturation in `[0, 1]`.
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Value/brightness in `[0, 1]`.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Alpha in `[0, 1]`.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn with_hue(self, hue: f64) -> Self {
        Self::new(hue, self.saturation, self.value, self.alpha)
    }

    pub fn with_saturation(self, saturation: f64) -> Self {
        Self::new(self.hue, saturation, self.value, self.alpha)
    }

    pub fn with_value(self, value: f64) -> Self {
        Self::new(self.hue, self.saturation, value, self.alpha)
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self::new(self.hue, self.saturation, self.value, alpha)
    }

    pub fn to_color(&self) -> Color {
        hsv_to_rgb(self.hue, self.saturation, self.value, self.alpha)
    }

    pub fn from_color(color: Color) -> Self {
        rgb_to_hsv(color)
    }
}

/// Wrap a hue in degrees into `[0, 360)`.
pub(crate) fn normalize_hue(hue: f64) -> f64 {
    hue.rem_euclid(360.0)
}

/// Convert HSV components to an RGBA8 color.
///
/// Hue may be any finite number of degrees; saturation, value and alpha are
/// clamped into `[0, 1]`. Channels round to the nearest 8-bit value.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64, alpha: f64) -> Color {
    let hue = normalize_hue(hue);
    let saturation = saturation.clamp(0.0, 1.0);
    let value = value.clamp(0.0, 1.0);
    let alpha = alpha.clamp(0.0, 1.0);

    let chroma = value * saturation;
    let segment = hue / 60.0;
    let x = chroma * (1.0 - (segment % 2.0 - 1.0).abs());
    let m = value - chroma;

    // segment is in [0, 6); each unit-wide sector is half-open.
    let (r, g, b) = match segment as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Color::new(
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
        (alpha * 255.0).round() as u8,
    )
}

/// Convert an RGBA8 color to HSV components.
///
/// Achromatic colors report hue 0 and, when fully dark, saturation 0. The
/// round trip through [`hsv_to_rgb`] reproduces every 8-bit color within
/// ±1 per channel.
pub fn rgb_to_hsv(color: Color) -> HsvColor {
    let r = color.r as f64 / 255.0;
    let g = color.g as f64 / 255.0;
    let b = color.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let mut hue = 0.0;
    if delta > 0.0 {
        hue = if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
    }
    if hue < 0.0 {
        hue += 360.0;
    }

    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    HsvColor::new(hue, saturation, max, color.a as f64 / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_fixtures() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0, 1.0), Color::new(255, 0, 0, 255));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0, 1.0), Color::new(0, 255, 0, 255));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0, 1.0), Color::new(0, 0, 255, 255));
        assert_eq!(hsv_to_rgb(0.0, 0.0, 1.0, 1.0), Color::new(255, 255, 255, 255));
        assert_eq!(hsv_to_rgb(0.0, 0.0, 0.0, 1.0), Color::new(0, 0, 0, 255));
    }

    #[test]
    fn test_secondary_fixtures() {
        assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0, 1.0), Color::new(255, 255, 0, 255));
        assert_eq!(hsv_to_rgb(180.0, 1.0, 1.0, 1.0), Color::new(0, 255, 255, 255));
        assert_eq!(hsv_to_rgb(300.0, 1.0, 1.0, 1.0), Color::new(255, 0, 255, 255));
    }

    #[test]
    fn test_hue_wraps_mod_360() {
        let expected = hsv_to_rgb(330.0, 0.75, 0.5, 1.0);
        assert_eq!(hsv_to_rgb(-30.0, 0.75, 0.5, 1.0), expected);
        assert_eq!(hsv_to_rgb(690.0, 0.75, 0.5, 1.0), expected);
    }

    #[test]
    fn test_hue_360_is_red() {
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0, 1.0), Color::new(255, 0, 0, 255));
    }

    #[test]
    fn test_out_of_range_inputs_are_clamped() {
        assert_eq!(hsv_to_rgb(0.0, 2.0, 1.5, 3.0), Color::new(255, 0, 0, 255));
        assert_eq!(hsv_to_rgb(0.0, -1.0, -0.5, 1.0), Color::new(0, 0, 0, 255));
    }

    #[test]
    fn test_alpha_channel() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0, 0.5).a, 128);
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0, 0.0).a, 0);
    }

    #[test]
    fn test_rgb_to_hsv_fixtures() {
        let red = rgb_to_hsv(Color::from_rgb(255, 0, 0));
        assert!((red.hue() - 0.0).abs() < 1e-9);
        assert!((red.saturation() - 1.0).abs() < 1e-9);
        assert!((red.value() - 1.0).abs() < 1e-9);

        let green = rgb_to_hsv(Color::from_rgb(0, 255, 0));
        assert!((green.hue() - 120.0).abs() < 1e-9);

        let gray = rgb_to_hsv(Color::from_rgb(128, 128, 128));
        assert!((gray.hue()).abs() < 1e-9);
        assert!((gray.saturation()).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_within_one() {
        // Sample the 8-bit cube on a 17-stride lattice (hits both 0 and 255);
        // checking all 16.7M colors adds nothing but time.
        let samples: Vec<u8> = (0u16..256).step_by(17).map(|v| v as u8).collect();
        for &r in &samples {
            for &g in &samples {
                for &b in &samples {
                    let color = Color::from_rgb(r, g, b);
                    let hsv = rgb_to_hsv(color);
                    let back = hsv_to_rgb(hsv.hue(), hsv.saturation(), hsv.value(), hsv.alpha());
                    assert!(
                        (back.r as i16 - r as i16).abs() <= 1
                            && (back.g as i16 - g as i16).abs() <= 1
                            && (back.b as i16 - b as i16).abs() <= 1,
                        "round trip drifted for ({r}, {g}, {b}): got {back:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_hsv_color_is_canonical() {
        let hsv = HsvColor::new(540.0, 1.5, -0.25, 2.0);
        assert!((hsv.hue() - 180.0).abs() < 1e-9);
        assert!((hsv.saturation() - 1.0).abs() < 1e-9);
        assert!((hsv.value()).abs() < 1e-9);
        assert!((hsv.alpha() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_with_hue_normalizes() {
        let hsv = HsvColor::opaque(10.0, 0.5, 0.5).with_hue(-90.0);
        assert!((hsv.hue() - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_serde_round_trip() {
        let hsv = HsvColor::new(123.0, 0.4, 0.9, 0.5);
        let json = serde_json::to_string(&hsv).unwrap();
        let back: HsvColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hsv);
    }
}
