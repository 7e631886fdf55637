//! HueKit Core Library
//!
//! Framework-agnostic color model and color-wheel geometry for the HueKit
//! picker widgets. The host widget layer owns rendering and input routing;
//! everything in this crate is plain values and pure math.

pub mod color;
pub mod hsv;
pub mod interaction;
pub mod picker;
pub mod raster;
pub mod triangle;
pub mod wheel;

pub use color::{Color, ParseHexError, is_valid_hex};
pub use hsv::{HsvColor, hsv_to_rgb, rgb_to_hsv};
pub use interaction::{WheelChange, WheelInteraction};
pub use picker::{ColorSelection, PRESET_COLORS};
pub use triangle::SvTriangle;
pub use wheel::{DragRegion, WheelLayout};
