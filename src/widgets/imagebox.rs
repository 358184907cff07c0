//! ImageBox widget: displays a raster image at its natural size.

use std::any::Any;

use image::RgbaImage;

use crate::bar::Bar;
use crate::geometry::{Region, Size};
use crate::render::DrawContext;
use crate::widget::property::{PropertyError, PropertyValue};
use crate::widget::traits::WidgetBehavior;

// ---------------------------------------------------------------------------
// ImageBox
// ---------------------------------------------------------------------------

/// A widget that displays one RGBA image, unscaled, anchored at its
/// geometry origin.
///
/// Recognized properties: `image`.
#[derive(Debug, Default)]
pub struct ImageBox {
    image: Option<RgbaImage>,
}

impl ImageBox {
    /// Create an image box with no image.
    pub fn new() -> Self {
        Self { image: None }
    }

    /// The displayed image, if any.
    pub fn image(&self) -> Option<&RgbaImage> {
        self.image.as_ref()
    }

    /// Set or clear the displayed image.
    pub fn set_image(&mut self, image: Option<RgbaImage>) {
        self.image = image;
    }
}

impl WidgetBehavior for ImageBox {
    fn draw(&self, ctx: &mut DrawContext<'_>, geometry: Region, _bar: &Bar) {
        if let Some(image) = &self.image {
            ctx.canvas.blit_image(image, geometry.x, geometry.y);
        }
    }

    fn extents(&self) -> Size {
        match &self.image {
            Some(image) => Size::new(image.width() as i32, image.height() as i32),
            None => Size::ZERO,
        }
    }

    fn get_property(&self, name: &str) -> Option<PropertyValue> {
        match name {
            "image" => self.image.clone().map(PropertyValue::Image),
            _ => None,
        }
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<bool, PropertyError> {
        match name {
            "image" => match value {
                PropertyValue::Image(image) => {
                    self.image = Some(image);
                    Ok(true)
                }
                _ => Err(PropertyError::TypeMismatch {
                    property: name.to_owned(),
                    expected: "image",
                }),
            },
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
    use crate::color::Color;
    use crate::render::Canvas;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, image::Rgba(rgba))
    }

    #[test]
    fn empty_box_has_zero_extents() {
        let w = ImageBox::new();
        assert_eq!(w.extents(), Size::ZERO);
    }

    #[test]
    fn extents_match_image_dimensions() {
        let mut w = ImageBox::new();
        w.set_image(Some(solid(7, 4, [255, 0, 0, 255])));
        assert_eq!(w.extents(), Size::new(7, 4));
    }

    #[test]
    fn image_property_round_trip() {
        let mut w = ImageBox::new();
        let img = solid(2, 2, [0, 255, 0, 255]);
        assert_eq!(
            w.set_property("image", PropertyValue::Image(img.clone())),
            Ok(true)
        );
        assert_eq!(w.get_property("image"), Some(PropertyValue::Image(img)));
    }

    #[test]
    fn image_property_rejects_text() {
        let mut w = ImageBox::new();
        assert!(w.set_property("image", "icon.png".into()).is_err());
    }

    #[test]
    fn draw_blits_at_geometry_origin() {
        let mut w = ImageBox::new();
        w.set_image(Some(solid(2, 2, [255, 0, 0, 255])));
        let bar = Bar::new(Region::new(0, 0, 8, 8));
        let mut canvas = Canvas::new(8, 8);
        let mut ctx = DrawContext::new(&mut canvas);
        w.draw(&mut ctx, Region::new(3, 3, 2, 2), &bar);
        assert_eq!(canvas.get(3, 3), Some(Color::rgb(255, 0, 0)));
        assert_eq!(canvas.get(4, 4), Some(Color::rgb(255, 0, 0)));
        assert_eq!(canvas.get(2, 2), Some(Color::TRANSPARENT));
    }
}
