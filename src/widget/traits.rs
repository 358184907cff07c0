//! WidgetBehavior: the per-kind capability interface.
//!
//! Each widget kind implements [`WidgetBehavior`] for the hooks it cares
//! about; every hook has a safe no-op default, so absence of a capability is
//! documented behavior, never an error. The trait is object-safe and lives
//! boxed inside [`Widget`](super::Widget).

use std::any::Any;

use crate::bar::Bar;
use crate::geometry::{Region, Size};
use crate::render::DrawContext;
use crate::widget::property::{PropertyError, PropertyValue};

/// Capability hooks a widget kind may implement.
///
/// The defaults make a kind with no hooks draw nothing, measure `{0, 0}`,
/// recognize no properties, and need no teardown.
pub trait WidgetBehavior {
    /// Draw this widget into `ctx` at `geometry` (normalized bar space).
    ///
    /// `bar` is the owning container, for kinds that adapt to its background
    /// or orientation.
    fn draw(&self, ctx: &mut DrawContext<'_>, geometry: Region, bar: &Bar) {
        let _ = (ctx, geometry, bar);
    }

    /// The widget's intrinsic preferred size.
    fn extents(&self) -> Size {
        Size::ZERO
    }

    /// Read a kind-specific property. `None` means "unrecognized".
    fn get_property(&self, name: &str) -> Option<PropertyValue> {
        let _ = name;
        None
    }

    /// Write a kind-specific property.
    ///
    /// Returns `Ok(true)` when the property was recognized and applied,
    /// `Ok(false)` when unrecognized (a documented no-op), and an error only
    /// for a recognized property given a value of the wrong type.
    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<bool, PropertyError> {
        let _ = (name, value);
        Ok(false)
    }

    /// Teardown hook, run once when the widget's last reference is released.
    fn on_destroy(&mut self) {}

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ===========================================================================
// Tests
// ===========================================================================
