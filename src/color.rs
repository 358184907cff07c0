//! RGBA color with source-over blending.
//!
//! Bars carry a background [`Color`] whose alpha decides whether the desktop
//! backdrop shows through; widget kinds use colors for their simple fills.

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An 8-bit-per-channel RGBA color. Alpha 255 is fully opaque.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0 };
    /// Opaque black.
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    /// Opaque white.
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };

    /// Create an opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with explicit alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Whether this color is fully opaque.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Source-over composite `src` on top of `self`.
    ///
    /// Straight (non-premultiplied) alpha. Fully opaque sources replace the
    /// destination outright; fully transparent sources leave it untouched.
    pub fn over(self, src: Color) -> Color {
        if src.a == 255 {
            return src;
        }
        if src.a == 0 {
            return self;
        }

        let sa = src.a as u32;
        let da = self.a as u32;
        let out_a = sa + da * (255 - sa) / 255;
        if out_a == 0 {
            return Color::TRANSPARENT;
        }

        let blend = |s: u8, d: u8| -> u8 {
            let s = s as u32;
            let d = d as u32;
            ((s * sa + d * da * (255 - sa) / 255) / out_a) as u8
        };

        Color {
            r: blend(src.r, self.r),
            g: blend(src.g, self.g),
            b: blend(src.b, self.b),
            a: out_a as u8,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
