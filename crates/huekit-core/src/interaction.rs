//! Pointer gesture state for the color wheel.
//!
//! One [`WheelInteraction`] lives per wheel widget. The host feeds it raw
//! pointer events; it classifies the gesture once on pointer-down and then
//! keeps reporting changes for that region until the pointer is released,
//! even when the pointer wanders outside the wheel. That latching matches
//! how every desktop color wheel behaves: a drag that started on the ring
//! stays a ring drag.

use kurbo::Point;

use crate::wheel::{self, DragRegion, RING_START_ANGLE, WheelLayout};

/// An HSV edit produced by a wheel gesture, for the host to apply to its
/// selected color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelChange {
    /// The inner disc moved the hue/saturation thumb.
    HueSaturation { hue: f64, saturation: f64 },
    /// The outer ring moved along the shade ramp.
    Ring { saturation: f64, value: f64 },
}

/// Drag state machine for one wheel widget.
///
/// Idle until a pointer-down lands inside the wheel; then dragging the
/// region under that press until pointer-up or capture loss.
#[derive(Debug, Clone, Default)]
pub struct WheelInteraction {
    region: DragRegion,
}

impl WheelInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// The region latched by the current gesture.
    pub fn region(&self) -> DragRegion {
        self.region
    }

    pub fn is_dragging(&self) -> bool {
        self.region != DragRegion::None
    }

    /// Handle a pointer press. Latches the region under `pos` and returns
    /// the immediate edit, or `None` when the press missed the wheel.
    pub fn pointer_down(&mut self, pos: Point, layout: &WheelLayout) -> Option<WheelChange> {
        self.region = wheel::determine_drag_region(pos, layout);
        log::trace!("wheel drag started in {:?}", self.region);
        self.change_for(pos, layout)
    }

    /// Handle a pointer move. A no-op while idle; during a drag the change
    /// is computed for the latched region regardless of where the pointer
    /// currently is.
    pub fn pointer_move(&mut self, pos: Point, layout: &WheelLayout) -> Option<WheelChange> {
        if self.region == DragRegion::None {
            return None;
        }
        self.change_for(pos, layout)
    }

    /// Handle a pointer release; returns to idle.
    pub fn pointer_up(&mut self) {
        if self.region != DragRegion::None {
            log::trace!("wheel drag ended");
        }
        self.region = DragRegion::None;
    }

    /// Abort the gesture, e.g. when the host loses pointer capture.
    pub fn cancel(&mut self) {
        self.pointer_up();
    }

    fn change_for(&self, pos: Point, layout: &WheelLayout) -> Option<WheelChange> {
        match self.region {
            DragRegion::None => None,
            DragRegion::HueSaturation => {
                let (hue, saturation) = wheel::position_to_hue_saturation(pos, layout);
                Some(WheelChange::HueSaturation { hue, saturation })
            }
            DragRegion::Value => {
                let t = wheel::position_to_ring_position(pos, layout, RING_START_ANGLE);
                let (saturation, value) = wheel::ring_position_to_sat_value(t);
                Some(WheelChange::Ring { saturation, value })
            }
        }
    }
}
