//! Graph widget: a scrolling column chart of recent samples.
//!
//! New samples enter on the right; the history is capped at one sample per
//! column so the chart scrolls left as data arrives.

use std::any::Any;
use std::collections::VecDeque;

use crate::bar::Bar;
use crate::color::Color;
use crate::geometry::{Region, Size};
use crate::render::DrawContext;
use crate::widget::property::{PropertyError, PropertyValue};
use crate::widget::traits::WidgetBehavior;

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// A fixed-size column chart of recent samples.
///
/// Recognized properties: `width`, `height`, `max` (the value mapped to full
/// column height), and `value` (appends one sample).
#[derive(Debug)]
pub struct Graph {
    samples: VecDeque<f64>,
    max: f64,
    width: i32,
    height: i32,
    color: Color,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create an empty chart, 100x16, full scale at 1.0, white columns.
    pub fn new() -> Self {
        Self {
            samples: VecDeque::new(),
            max: 1.0,
            width: 100,
            height: 16,
            color: Color::WHITE,
        }
    }

    /// The recorded samples, oldest first.
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// Append one sample, evicting the oldest once the history fills the
    /// chart width.
    pub fn push(&mut self, sample: f64) {
        self.samples.push_back(sample.max(0.0));
        while self.samples.len() > self.width.max(0) as usize {
            self.samples.pop_front();
        }
    }

    /// Change the column color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Column height in pixels for one sample.
    fn column_height(&self, sample: f64) -> i32 {
        if self.max <= 0.0 {
            return 0;
        }
        let ratio = (sample / self.max).clamp(0.0, 1.0);
        (ratio * f64::from(self.height)).round() as i32
    }
}

impl WidgetBehavior for Graph {
    fn draw(&self, ctx: &mut DrawContext<'_>, geometry: Region, _bar: &Bar) {
        // Newest sample in the rightmost column, growing upward from the
        // bottom edge.
        let right = geometry.x + self.width.min(geometry.width);
        for (i, sample) in self.samples.iter().rev().enumerate() {
            let x = right - 1 - i as i32;
            if x < geometry.x {
                break;
            }
            let h = self.column_height(*sample).min(geometry.height);
            if h <= 0 {
                continue;
            }
            let column = Region::new(x, geometry.bottom() - h, 1, h);
            ctx.canvas.fill_rect(column.intersection(geometry), self.color);
        }
    }

    fn extents(&self) -> Size {
        Size::new(self.width, self.height)
    }

    fn get_property(&self, name: &str) -> Option<PropertyValue> {
        match name {
            "width" => Some(PropertyValue::Int(i64::from(self.width))),
            "height" => Some(PropertyValue::Int(i64::from(self.height))),
            "max" => Some(PropertyValue::Float(self.max)),
            _ => None,
        }
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<bool, PropertyError> {
        match name {
            "width" => {
                let v = value.as_int().ok_or_else(|| PropertyError::TypeMismatch {
                    property: name.to_owned(),
                    expected: "integer",
                })?;
                self.width = v.max(0) as i32;
                while self.samples.len() > self.width as usize {
                    self.samples.pop_front();
                }
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
            "max" => {
                let v = value.as_float().ok_or_else(|| PropertyError::TypeMismatch {
                    property: name.to_owned(),
                    expected: "number",
                })?;
                self.max = v;
                Ok(true)
            }
            "value" => {
                let v = value.as_float().ok_or_else(|| PropertyError::TypeMismatch {
                    property: name.to_owned(),
                    expected: "number",
                })?;
                self.push(v);
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
