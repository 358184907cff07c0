//! ProgressBar widget: a bordered gauge filled proportionally to a value.

use std::any::Any;

use crate::bar::Bar;
use crate::color::Color;
use crate::geometry::{Region, Size};
use crate::render::DrawContext;
use crate::widget::property::{PropertyError, PropertyValue};
use crate::widget::traits::WidgetBehavior;

// ---------------------------------------------------------------------------
// ProgressBar
// ---------------------------------------------------------------------------

/// A horizontal gauge. The filled portion grows left to right with `value`.
///
/// Recognized properties: `value` (clamped to `0.0..=1.0`), `width`,
/// `height`.
#[derive(Debug)]
pub struct ProgressBar {
    value: f64,
    width: i32,
    height: i32,
    border: Color,
    fill: Color,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressBar {
    /// Create an empty gauge, 100x16, white border, white fill.
    pub fn new() -> Self {
        Self {
            value: 0.0,
            width: 100,
            height: 16,
            border: Color::WHITE,
            fill: Color::WHITE,
        }
    }

    /// Current value in `0.0..=1.0`.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the value, clamping into `0.0..=1.0`.
    pub fn set_value(&mut self, value: f64) {
        self.value = value.clamp(0.0, 1.0);
    }

    /// Change the border color.
    pub fn set_border(&mut self, border: Color) {
        self.border = border;
    }

    /// Change the fill color.
    pub fn set_fill(&mut self, fill: Color) {
        self.fill = fill;
    }

    /// Width of the filled portion for a given inner width.
    fn filled_width(&self, inner: i32) -> i32 {
        (f64::from(inner) * self.value).round() as i32
    }
}

impl WidgetBehavior for ProgressBar {
    fn draw(&self, ctx: &mut DrawContext<'_>, geometry: Region, _bar: &Bar) {
        if geometry.width < 2 || geometry.height < 2 {
            return;
        }

        // One pixel border on each side.
        let top = Region::new(geometry.x, geometry.y, geometry.width, 1);
        let bottom = Region::new(geometry.x, geometry.bottom() - 1, geometry.width, 1);
        let left = Region::new(geometry.x, geometry.y, 1, geometry.height);
        let right = Region::new(geometry.right() - 1, geometry.y, 1, geometry.height);
        for edge in [top, bottom, left, right] {
            ctx.canvas.fill_rect(edge, self.border);
        }

        let inner = geometry.width - 2;
        let filled = self.filled_width(inner);
        if filled > 0 {
            ctx.canvas.fill_rect(
                Region::new(geometry.x + 1, geometry.y + 1, filled, geometry.height - 2),
                self.fill,
            );
        }
    }

    fn extents(&self) -> Size {
        Size::new(self.width, self.height)
    }

    fn get_property(&self, name: &str) -> Option<PropertyValue> {
        match name {
            "value" => Some(PropertyValue::Float(self.value)),
            "width" => Some(PropertyValue::Int(i64::from(self.width))),
            "height" => Some(PropertyValue::Int(i64::from(self.height))),
            _ => None,
        }
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<bool, PropertyError> {
        match name {
            "value" => {
                let v = value.as_float().ok_or_else(|| PropertyError::TypeMismatch {
                    property: name.to_owned(),
                    expected: "number",
                })?;
                self.set_value(v);
                Ok(true)
            }
            "width" => {
                let v = value.as_int().ok_or_else(|| PropertyError::TypeMismatch {
                    property: name.to_owned(),
                    expected: "integer",
                })?;
                self.width = v.max(0) as i32;
                Ok(true)
            }
            "height" => {
                let v = value.as_int().ok_or_else(|| PropertyError::TypeMismatch {
                    property: name.to_owned(),
                    expected: "integer",
                })?;
                self.height = v.max(0) as i32;
                Ok(true)
            }
            _ => Ok(false),
        }
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
    use crate::render::Canvas;

    #[test]
    fn value_is_clamped() {
        let mut w = ProgressBar::new();
        w.set_value(1.7);
        assert_eq!(w.value(), 1.0);
        w.set_value(-0.3);
        assert_eq!(w.value(), 0.0);
    }

    #[test]
    fn value_property_accepts_int_and_float() {
        let mut w = ProgressBar::new();
        assert_eq!(w.set_property("value", PropertyValue::Float(0.5)), Ok(true));
        assert_eq!(w.value(), 0.5);
        assert_eq!(w.set_property("value", PropertyValue::Int(1)), Ok(true));
        assert_eq!(w.value(), 1.0);
    }

    #[test]
    fn size_properties_update_extents() {
        let mut w = ProgressBar::new();
        w.set_property("width", PropertyValue::Int(40)).unwrap();
        w.set_property("height", PropertyValue::Int(8)).unwrap();
        assert_eq!(w.extents(), Size::new(40, 8));
    }

    #[test]
    fn width_property_rejects_text() {
        let mut w = ProgressBar::new();
        assert!(w.set_property("width", "wide".into()).is_err());
    }

    #[test]
    fn draw_fills_proportionally() {
        let mut w = ProgressBar::new();
        w.set_border(Color::rgb(255, 0, 0));
        w.set_fill(Color::rgb(0, 255, 0));
        w.set_value(0.5);

        let bar = Bar::new(Region::new(0, 0, 12, 6));
        let mut canvas = Canvas::new(12, 6);
        let mut ctx = DrawContext::new(&mut canvas);
        w.draw(&mut ctx, Region::new(0, 0, 12, 6), &bar);

        // Border corners.
        assert_eq!(canvas.get(0, 0), Some(Color::rgb(255, 0, 0)));
        assert_eq!(canvas.get(11, 5), Some(Color::rgb(255, 0, 0)));
        // Inner width 10, half filled: x 1..=5 filled, x 6..=10 untouched.
        assert_eq!(canvas.get(5, 3), Some(Color::rgb(0, 255, 0)));
        assert_eq!(canvas.get(6, 3), Some(Color::TRANSPARENT));
    }
}
