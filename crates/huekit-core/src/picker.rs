//! Selected-color state shared between a picker widget and its host.
//!
//! A picker shows the same color through several views at once: the wheel,
//! RGB channel inputs, and a hex field. [`ColorSelection`] keeps those views
//! consistent. HSV is the canonical representation, so editing value down to
//! zero and back does not lose the hue the way a plain RGB store would.

use crate::color::{Color, ParseHexError};
use crate::hsv::HsvColor;

/// Preset swatch palette offered alongside the wheel.
pub const PRESET_COLORS: [Color; 18] = [
    Color::from_rgb(0xF4, 0x43, 0x36), // red
    Color::from_rgb(0xE9, 0x1E, 0x63), // pink
    Color::from_rgb(0x9C, 0x27, 0xB0), // purple
    Color::from_rgb(0x67, 0x3A, 0xB7), // deep purple
    Color::from_rgb(0x3F, 0x51, 0xB5), // indigo
    Color::from_rgb(0x21, 0x96, 0xF3), // blue
    Color::from_rgb(0x03, 0xA9, 0xF4), // light blue
    Color::from_rgb(0x00, 0xBC, 0xD4), // cyan
    Color::from_rgb(0x00, 0x96, 0x88), // teal
    Color::from_rgb(0x4C, 0xAF, 0x50), // green
    Color::from_rgb(0x8B, 0xC3, 0x4A), // light green
    Color::from_rgb(0xCD, 0xDC, 0x39), // lime
    Color::from_rgb(0xFF, 0xEB, 0x3B), // yellow
    Color::from_rgb(0xFF, 0xC1, 0x07), // amber
    Color::from_rgb(0xFF, 0x98, 0x00), // orange
    Color::from_rgb(0xFF, 0x57, 0x22), // deep orange
    Color::from_rgb(0x79, 0x55, 0x48), // brown
    Color::from_rgb(0x9E, 0x9E, 0x9E), // grey
];

type ChangeCallback = Box<dyn FnMut(Color)>;

/// The currently selected color, kept consistent across its RGB, HSV and
/// hex views, with a change callback toward the host.
pub struct ColorSelection {
    hsv: HsvColor,
    color: Color,
    on_change: Option<ChangeCallback>,
}

impl Default for ColorSelection {
    fn default() -> Self {
        Self::from_color(Color::white())
    }
}

impl ColorSelection {
    pub fn from_color(color: Color) -> Self {
        Self {
            hsv: HsvColor::from_color(color),
            color,
            on_change: None,
        }
    }

    pub fn from_hsv(hsv: HsvColor) -> Self {
        Self {
            hsv,
            color: hsv.to_color(),
            on_change: None,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn hsv(&self) -> HsvColor {
        self.hsv
    }

    pub fn hex(&self, include_alpha: bool) -> String {
        self.color.to_hex(include_alpha)
    }

    /// Register the callback fired after every effective color change.
    pub fn set_on_change(&mut self, callback: impl FnMut(Color) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Replace the selection from an RGB color, e.g. a bound value pushed
    /// in by the host. Setting the current color back is a no-op and keeps
    /// the canonical HSV untouched.
    pub fn set_color(&mut self, color: Color) {
        if color == self.color {
            return;
        }
        self.hsv = HsvColor::from_color(color);
        self.color = color;
        self.notify();
    }

    /// Replace the selection from HSV, keeping the given components as the
    /// canonical state even when they are not recoverable from the derived
    /// RGB (hue at zero saturation, everything at zero value).
    pub fn set_hsv(&mut self, hsv: HsvColor) {
        let color = hsv.to_color();
        let changed = color != self.color;
        self.hsv = hsv;
        self.color = color;
        if changed {
            self.notify();
        }
    }

    pub fn set_hue(&mut self, hue: f64) {
        self.set_hsv(self.hsv.with_hue(hue));
    }

    pub fn set_saturation(&mut self, saturation: f64) {
        self.set_hsv(self.hsv.with_saturation(saturation));
    }

    pub fn set_value(&mut self, value: f64) {
        self.set_hsv(self.hsv.with_value(value));
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        self.set_hsv(self.hsv.with_alpha(alpha));
    }

    /// Replace the RGB channels, keeping the current alpha.
    pub fn set_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.set_color(Color::new(r, g, b, self.color.a));
    }

    /// Replace the selection from a hex string; strict parse.
    pub fn set_hex(&mut self, hex: &str) -> Result<(), ParseHexError> {
        let color = Color::from_hex(hex)?;
        self.set_color(color);
        Ok(())
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(self.color);
        }
    }
}
