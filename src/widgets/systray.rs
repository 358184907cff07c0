//! Systray widget: reserves space for externally managed icon slots.
//!
//! The icons themselves are owned by the embedding layer; this widget only
//! measures and marks the reserved area.

use std::any::Any;

use crate::bar::Bar;
use crate::geometry::{Region, Size};
use crate::render::DrawContext;
use crate::widget::traits::WidgetBehavior;

// ---------------------------------------------------------------------------
// Systray
// ---------------------------------------------------------------------------

/// A placeholder for a row of fixed-size icon slots.
#[derive(Debug)]
pub struct Systray {
    slots: usize,
    slot_size: i32,
}

impl Default for Systray {
    fn default() -> Self {
        Self::new()
    }
}

impl Systray {
    /// Create a tray with no occupied slots and 16px slots.
    pub fn new() -> Self {
        Self {
            slots: 0,
            slot_size: 16,
        }
    }

    /// Number of occupied slots.
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Set the number of occupied slots.
    pub fn set_slots(&mut self, slots: usize) {
        self.slots = slots;
    }

    /// Edge length of one square slot, in pixels.
    pub fn slot_size(&self) -> i32 {
        self.slot_size
    }

    /// Change the slot edge length.
    pub fn set_slot_size(&mut self, slot_size: i32) {
        self.slot_size = slot_size.max(0);
    }
}

impl WidgetBehavior for Systray {
    fn draw(&self, ctx: &mut DrawContext<'_>, geometry: Region, bar: &Bar) {
        // Reserve the area by restating the bar background; the embedder
        // composites icons over it afterwards.
        let reserved = geometry.intersection(Region::new(
            geometry.x,
            geometry.y,
            self.slots as i32 * self.slot_size,
            self.slot_size,
        ));
        ctx.canvas.fill_rect(reserved, bar.background());
    }

    fn extents(&self) -> Size {
        Size::new(self.slots as i32 * self.slot_size, self.slot_size)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::property::PropertyValue;

    #[test]
    fn empty_tray_has_zero_extents() {
        let w = Systray::new();
        assert_eq!(w.extents(), Size::ZERO);
    }

    #[test]
    fn extents_follow_slot_count() {
        let mut w = Systray::new();
        w.set_slots(3);
        assert_eq!(w.extents(), Size::new(48, 16));
        w.set_slot_size(24);
        assert_eq!(w.extents(), Size::new(72, 24));
    }

    #[test]
    fn recognizes_no_properties() {
        let mut w = Systray::new();
        assert_eq!(w.get_property("slots"), None);
        assert_eq!(w.set_property("slots", PropertyValue::Int(2)), Ok(false));
    }
}
