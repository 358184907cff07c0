//! The bar render pass.
//!
//! Rendering happens entirely in normalized bar space: a scratch canvas with
//! the bar's un-rotated dimensions is composed (backdrop, background image,
//! background fill, then each visible widget in node order) and rotated into
//! the bar's real pixmap as the final step. The `needs_redraw` flag is not
//! touched here; clearing it is the scheduler's call.

use tracing::debug;

use crate::bar::Bar;
use crate::geometry::Orientation;
use crate::layout::{compute_geometries, LayoutError};
use crate::render::{BackdropSource, Canvas};
use crate::widget::WidgetStore;

// ---------------------------------------------------------------------------
// DrawContext
// ---------------------------------------------------------------------------

/// Drawing state handed to each widget's `draw` hook.
///
/// The canvas is the bar's normalized scratch surface; widgets paint into it
/// at their computed geometry.
pub struct DrawContext<'a> {
    pub canvas: &'a mut Canvas,
}

impl<'a> DrawContext<'a> {
    /// Wrap a canvas for a draw pass.
    pub fn new(canvas: &'a mut Canvas) -> Self {
        Self { canvas }
    }
}

// ---------------------------------------------------------------------------
// render
// ---------------------------------------------------------------------------

/// Run one full render pass for `bar`: layout, compose, rotate, store.
///
/// A custom layout strategy may fail; in that case the bar's previous nodes
/// and pixmap are both left untouched.
pub fn render(
    bar: &mut Bar,
    store: &mut WidgetStore,
    backdrop: &dyn BackdropSource,
) -> Result<(), LayoutError> {
    compute_geometries(bar, store)?;

    let geometry = bar.geometry();
    let normalized = bar.normalized_size();
    let mut scratch = Canvas::new(normalized.width, normalized.height);
    debug!(
        width = geometry.width,
        height = geometry.height,
        orientation = ?bar.orientation(),
        widgets = bar.nodes().len(),
        "rendering bar"
    );

    // A translucent background blends over the screen content behind the
    // bar, brought into normalized space by the inverse rotation.
    let translucent = !bar.background().is_opaque();
    if translucent {
        if let Some(root) = backdrop.root_pixmap(bar.screen()) {
            let slice = root.sub(geometry);
            let behind = match bar.orientation() {
                Orientation::Horizontal => slice,
                Orientation::RotatedCw => slice.rotate_ccw(),
                Orientation::RotatedCcw => slice.rotate_cw(),
            };
            scratch.copy_from(&behind, 0, 0);
        }
        if let Some(image) = bar.background_image() {
            scratch.blit_image(image, 0, 0);
        }
    }
    scratch.fill_rect(normalized.to_region(), bar.background());

    let nodes = bar.nodes().to_vec();
    let mut ctx = DrawContext::new(&mut scratch);
    for node in &nodes {
        let Some(widget) = store.get(node.widget) else {
            continue;
        };
        if widget.is_visible() {
            widget.behavior().draw(&mut ctx, node.geometry, bar);
        }
    }

    let pixmap = match bar.orientation() {
        Orientation::Horizontal => scratch,
        Orientation::RotatedCw => scratch.rotate_cw(),
        Orientation::RotatedCcw => scratch.rotate_ccw(),
    };
    bar.set_pixmap(pixmap);
    Ok(())
}

// ===========================================================================
// Tests
// ===========================================================================
