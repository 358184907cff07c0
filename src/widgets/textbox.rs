//! TextBox widget: displays a single run of text.
//!
//! Glyph rasterization is out of scope here; the text is drawn as a row of
//! fixed-size cells so placement and measurement stay exact and testable.

use std::any::Any;

use crate::bar::Bar;
use crate::color::Color;
use crate::geometry::{Region, Size};
use crate::render::DrawContext;
use crate::widget::property::{PropertyError, PropertyValue};
use crate::widget::traits::WidgetBehavior;

/// Cell advance per character, in pixels.
const CELL_WIDTH: i32 = 8;
/// Line height, in pixels.
const CELL_HEIGHT: i32 = 16;

// ---------------------------------------------------------------------------
// TextBox
// ---------------------------------------------------------------------------

/// A widget that displays one line of text.
///
/// Recognized properties: `text`.
#[derive(Debug, Default)]
pub struct TextBox {
    text: String,
    foreground: Color,
}

impl TextBox {
    /// Create an empty text box with a white foreground.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            foreground: Color::WHITE,
        }
    }

    /// The displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the displayed text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The foreground color.
    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// Change the foreground color.
    pub fn set_foreground(&mut self, foreground: Color) {
        self.foreground = foreground;
    }
}

impl WidgetBehavior for TextBox {
    fn draw(&self, ctx: &mut DrawContext<'_>, geometry: Region, _bar: &Bar) {
        // One solid cell per character, clipped to the assigned geometry.
        for (i, _) in self.text.chars().enumerate() {
            let cell = Region::new(
                geometry.x + i as i32 * CELL_WIDTH,
                geometry.y,
                CELL_WIDTH,
                CELL_HEIGHT.min(geometry.height),
            );
            let clipped = cell.intersection(geometry);
            if clipped.width == 0 {
                break;
            }
            ctx.canvas.fill_rect(clipped, self.foreground);
        }
    }

    fn extents(&self) -> Size {
        if self.text.is_empty() {
            return Size::ZERO;
        }
        let chars = self.text.chars().count() as i32;
        Size::new(chars * CELL_WIDTH, CELL_HEIGHT)
    }

    fn get_property(&self, name: &str) -> Option<PropertyValue> {
        match name {
            "text" => Some(PropertyValue::Text(self.text.clone())),
            _ => None,
        }
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<bool, PropertyError> {
        match name {
            "text" => {
                let text = value.as_text().ok_or_else(|| PropertyError::TypeMismatch {
                    property: name.to_owned(),
                    expected: "text",
                })?;
                self.text = text.to_owned();
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
