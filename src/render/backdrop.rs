//! Backdrop sourcing for translucent bars.
//!
//! A bar whose background color is not fully opaque composites over
//! whatever sits behind it. The embedder supplies that content per screen
//! through [`BackdropSource`]; headless use gets [`NoBackdrop`].

use crate::render::Canvas;

/// Supplies the per-screen root content that translucent bars blend over.
pub trait BackdropSource {
    /// The root pixmap for `screen`, in screen coordinates. `None` means no
    /// backdrop is available and translucent bars blend over transparency.
    fn root_pixmap(&self, screen: usize) -> Option<&Canvas>;
}

/// A backdrop source with no content on any screen.
#[derive(Debug, Default)]
pub struct NoBackdrop;

impl BackdropSource for NoBackdrop {
    fn root_pixmap(&self, _screen: usize) -> Option<&Canvas> {
        None
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_backdrop_has_no_pixmaps() {
        assert!(NoBackdrop.root_pixmap(0).is_none());
        assert!(NoBackdrop.root_pixmap(7).is_none());
    }
}
