//! Bar: a rectangular drawing surface hosting an ordered list of widgets.
//!
//! A bar owns its *source* widget list (what the embedder asked for), its
//! *computed* node list (what the last layout pass produced), a background,
//! an orientation, and the rendered pixmap. The `needs_redraw` flag is set
//! by the invalidation scans and cleared by whatever schedules render
//! passes; the bar itself never clears it.

use image::RgbaImage;
use slotmap::new_key_type;

use crate::color::Color;
use crate::geometry::{Orientation, Region, Size};
use crate::layout::LayoutStrategy;
use crate::render::Canvas;
use crate::widget::{WidgetId, WidgetStore};

new_key_type! {
    /// Unique identifier for a registered bar. Copy, lightweight (u64).
    pub struct BarId;
}

// ---------------------------------------------------------------------------
// WidgetNode
// ---------------------------------------------------------------------------

/// A widget plus its computed placement rectangle for one layout pass.
///
/// Nodes are rebuilt wholesale on every pass; each live node holds one
/// reference on its widget in the [`WidgetStore`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WidgetNode {
    pub widget: WidgetId,
    /// Placement in normalized bar space. Meaningful only after a layout
    /// pass.
    pub geometry: Region,
}

// ---------------------------------------------------------------------------
// Bar
// ---------------------------------------------------------------------------

/// A rectangular widget container ("bar").
pub struct Bar {
    orientation: Orientation,
    geometry: Region,
    background: Color,
    background_image: Option<RgbaImage>,
    widgets: Vec<WidgetId>,
    nodes: Vec<WidgetNode>,
    strategy: LayoutStrategy,
    needs_redraw: bool,
    screen: usize,
    pixmap: Canvas,
}

impl Bar {
    /// Create a bar with the given screen-space geometry.
    ///
    /// Horizontal orientation, opaque black background, default layout
    /// strategy, screen 0, flagged for redraw.
    pub fn new(geometry: Region) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            geometry,
            background: Color::BLACK,
            background_image: None,
            widgets: Vec::new(),
            nodes: Vec::new(),
            strategy: LayoutStrategy::Default,
            needs_redraw: true,
            screen: 0,
            pixmap: Canvas::new(geometry.width, geometry.height),
        }
    }

    /// Set the orientation (builder).
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the background color (builder).
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Set the owning screen index (builder).
    pub fn with_screen(mut self, screen: usize) -> Self {
        self.screen = screen;
        self
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Screen-space geometry.
    pub fn geometry(&self) -> Region {
        self.geometry
    }

    /// Move/resize the bar.
    pub fn set_geometry(&mut self, geometry: Region) {
        self.geometry = geometry;
        self.needs_redraw = true;
    }

    /// Display orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Change the display orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.needs_redraw = true;
    }

    /// The bar's content size in normalized (un-rotated) space.
    pub fn normalized_size(&self) -> Size {
        self.orientation.normalized_size(self.geometry.size())
    }

    /// Background fill color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Change the background fill color.
    pub fn set_background(&mut self, background: Color) {
        self.background = background;
        self.needs_redraw = true;
    }

    /// Optional background image.
    pub fn background_image(&self) -> Option<&RgbaImage> {
        self.background_image.as_ref()
    }

    /// Set or clear the background image.
    pub fn set_background_image(&mut self, image: Option<RgbaImage>) {
        self.background_image = image;
        self.needs_redraw = true;
    }

    /// Owning screen index, as handed to layout strategies.
    pub fn screen(&self) -> usize {
        self.screen
    }

    /// Change the owning screen index.
    pub fn set_screen(&mut self, screen: usize) {
        self.screen = screen;
    }

    /// The configured layout strategy.
    pub fn strategy(&self) -> &LayoutStrategy {
        &self.strategy
    }

    /// The configured layout strategy, mutably (the engine invokes it).
    pub(crate) fn strategy_mut(&mut self) -> &mut LayoutStrategy {
        &mut self.strategy
    }

    /// Replace the layout strategy.
    pub fn set_strategy(&mut self, strategy: LayoutStrategy) {
        self.strategy = strategy;
        self.needs_redraw = true;
    }

    /// Whether the bar must be redrawn on the next scheduling opportunity.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Flag the bar for redraw.
    pub fn mark_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Clear the redraw flag. Called by the render scheduler after a
    /// successful pass, never by the bar itself.
    pub fn clear_redraw(&mut self) {
        self.needs_redraw = false;
    }

    /// The rendered output, in real (screen-oriented) dimensions.
    pub fn pixmap(&self) -> &Canvas {
        &self.pixmap
    }

    /// Store the rendered output.
    pub(crate) fn set_pixmap(&mut self, pixmap: Canvas) {
        self.pixmap = pixmap;
    }

    // -----------------------------------------------------------------------
    // Widget lists
    // -----------------------------------------------------------------------

    /// The ordered source widget list (order = draw order = hit priority).
    pub fn widgets(&self) -> &[WidgetId] {
        &self.widgets
    }

    /// Replace the source widget list.
    ///
    /// Acquires a reference for every new entry, then releases the old
    /// entries' references. The computed node list is left untouched until
    /// the next layout pass.
    pub fn set_widgets(&mut self, store: &mut WidgetStore, widgets: Vec<WidgetId>) {
        for &id in &widgets {
            store.acquire(id);
        }
        for &id in &self.widgets {
            store.release(id);
        }
        self.widgets = widgets;
        self.needs_redraw = true;
    }

    /// The computed node list from the last layout pass.
    pub fn nodes(&self) -> &[WidgetNode] {
        &self.nodes
    }

    /// Replace the computed node list with freshly laid-out nodes.
    ///
    /// The caller (the layout engine) has already acquired a reference per
    /// new node; the old nodes' references are released here.
    pub(crate) fn replace_nodes(&mut self, store: &mut WidgetStore, nodes: Vec<WidgetNode>) {
        for node in &self.nodes {
            store.release(node.widget);
        }
        self.nodes = nodes;
    }

    /// Release every widget reference this bar holds (source list and
    /// nodes). Called when the bar is removed from the registry.
    pub(crate) fn release_widgets(&mut self, store: &mut WidgetStore) {
        for node in self.nodes.drain(..) {
            store.release(node.widget);
        }
        for id in self.widgets.drain(..) {
            store.release(id);
        }
    }
}

impl std::fmt::Debug for Bar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bar")
            .field("orientation", &self.orientation)
            .field("geometry", &self.geometry)
            .field("background", &self.background)
            .field("widgets", &self.widgets.len())
            .field("nodes", &self.nodes.len())
            .field("needs_redraw", &self.needs_redraw)
            .field("screen", &self.screen)
            .finish_non_exhaustive()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
