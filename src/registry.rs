//! Registry: the top-level owner of widgets, bars, and clients.
//!
//! All cross-object operations live here: widget construction through the
//! factory, property access with its invalidation side effects, the two
//! invalidation scans, render scheduling, and hit-test entry points. Bars
//! and client titlebars share one [`WidgetStore`], so a widget can appear in
//! several containers at once.

use slotmap::{new_key_type, SlotMap};
use tracing::debug;

use crate::bar::{Bar, BarId};
use crate::event::ButtonBinding;
use crate::geometry::Size;
use crate::layout::LayoutError;
use crate::render::{render, BackdropSource};
use crate::widget::{
    factory, PropertyEffect, PropertyError, PropertyValue, WidgetId, WidgetKind, WidgetStore,
};

new_key_type! {
    /// Unique identifier for a registered client.
    pub struct ClientId;
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// An embedder-managed window that may carry a titlebar.
///
/// The titlebar is a [`Bar`] like any other, except it is owned by its
/// client and only the widget-targeted invalidation scan reaches it.
#[derive(Debug, Default)]
pub struct Client {
    titlebar: Option<Bar>,
}

impl Client {
    /// Create a client with no titlebar.
    pub fn new() -> Self {
        Self { titlebar: None }
    }

    /// The client's titlebar, if any.
    pub fn titlebar(&self) -> Option<&Bar> {
        self.titlebar.as_ref()
    }

    /// The client's titlebar, mutably.
    pub fn titlebar_mut(&mut self) -> Option<&mut Bar> {
        self.titlebar.as_mut()
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// The shared object graph: one widget arena, the bars, the clients.
#[derive(Debug, Default)]
pub struct Registry {
    widgets: WidgetStore,
    bars: SlotMap<BarId, Bar>,
    clients: SlotMap<ClientId, Client>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Widgets
    // -----------------------------------------------------------------------

    /// The widget arena.
    pub fn widgets(&self) -> &WidgetStore {
        &self.widgets
    }

    /// The widget arena, mutably.
    pub fn widgets_mut(&mut self) -> &mut WidgetStore {
        &mut self.widgets
    }

    /// Construct a widget by kind name and register it with one reference.
    ///
    /// Unknown names warn (in the factory) and yield `None`.
    pub fn create_widget(&mut self, kind: &str) -> Option<WidgetId> {
        let widget = factory::create(kind)?;
        Some(self.widgets.insert(widget))
    }

    /// Release the caller's reference on a widget. Returns `true` when this
    /// was the last reference and the widget was destroyed.
    pub fn release_widget(&mut self, id: WidgetId) -> bool {
        self.widgets.release(id)
    }

    /// Read a property: the common surface first (`visible`, `mouse_enter`,
    /// `mouse_leave`), then the kind's own set. `None` for a stale id or an
    /// unrecognized name.
    pub fn widget_get(&self, id: WidgetId, name: &str) -> Option<PropertyValue> {
        self.widgets.get(id)?.get_property(name)
    }

    /// Write a property, invalidating the widget's containers when the
    /// write affects rendered output.
    ///
    /// A stale id is a documented no-op reported as
    /// [`PropertyEffect::Unhandled`].
    pub fn widget_set(
        &mut self,
        id: WidgetId,
        name: &str,
        value: PropertyValue,
    ) -> Result<PropertyEffect, PropertyError> {
        let Some(widget) = self.widgets.get_mut(id) else {
            return Ok(PropertyEffect::Unhandled);
        };
        let effect = widget.set_property(name, value)?;
        if effect == PropertyEffect::Redraw {
            self.invalidate_by_widget(id);
        }
        Ok(effect)
    }

    /// A widget's intrinsic size. `None` for a stale id.
    pub fn widget_extents(&self, id: WidgetId) -> Option<Size> {
        self.widgets.get(id).map(|w| w.extents())
    }

    /// Replace a widget's button bindings. Bindings do not affect rendered
    /// output, so no invalidation happens. Returns `false` for a stale id.
    pub fn set_widget_buttons(&mut self, id: WidgetId, buttons: Vec<ButtonBinding>) -> bool {
        match self.widgets.get_mut(id) {
            Some(widget) => {
                widget.set_buttons(buttons);
                true
            }
            None => false,
        }
    }

    // -----------------------------------------------------------------------
    // Bars
    // -----------------------------------------------------------------------

    /// Register a bar.
    pub fn add_bar(&mut self, bar: Bar) -> BarId {
        self.bars.insert(bar)
    }

    /// Remove a bar, releasing every widget reference it held.
    pub fn remove_bar(&mut self, id: BarId) -> Option<Bar> {
        let mut bar = self.bars.remove(id)?;
        bar.release_widgets(&mut self.widgets);
        Some(bar)
    }

    /// Look up a bar.
    pub fn bar(&self, id: BarId) -> Option<&Bar> {
        self.bars.get(id)
    }

    /// Look up a bar, mutably.
    pub fn bar_mut(&mut self, id: BarId) -> Option<&mut Bar> {
        self.bars.get_mut(id)
    }

    /// Registered bar ids, in arbitrary order.
    pub fn bar_ids(&self) -> impl Iterator<Item = BarId> + '_ {
        self.bars.keys()
    }

    /// Replace a bar's source widget list.
    pub fn set_bar_widgets(&mut self, id: BarId, widgets: Vec<WidgetId>) -> bool {
        match self.bars.get_mut(id) {
            Some(bar) => {
                bar.set_widgets(&mut self.widgets, widgets);
                true
            }
            None => false,
        }
    }

    // -----------------------------------------------------------------------
    // Clients
    // -----------------------------------------------------------------------

    /// Register a client.
    pub fn add_client(&mut self, client: Client) -> ClientId {
        self.clients.insert(client)
    }

    /// Remove a client, releasing its titlebar's widget references.
    pub fn remove_client(&mut self, id: ClientId) -> Option<Client> {
        let mut client = self.clients.remove(id)?;
        if let Some(titlebar) = client.titlebar.as_mut() {
            titlebar.release_widgets(&mut self.widgets);
        }
        Some(client)
    }

    /// Look up a client.
    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.get(id)
    }

    /// Look up a client, mutably.
    pub fn client_mut(&mut self, id: ClientId) -> Option<&mut Client> {
        self.clients.get_mut(id)
    }

    /// Attach, replace, or detach a client's titlebar. A replaced or
    /// detached titlebar releases its widget references. Returns `false`
    /// for a stale client id.
    pub fn set_titlebar(&mut self, id: ClientId, titlebar: Option<Bar>) -> bool {
        let Some(client) = self.clients.get_mut(id) else {
            return false;
        };
        if let Some(old) = client.titlebar.as_mut() {
            old.release_widgets(&mut self.widgets);
        }
        client.titlebar = titlebar;
        true
    }

    /// Replace a titlebar's source widget list.
    pub fn set_titlebar_widgets(&mut self, id: ClientId, widgets: Vec<WidgetId>) -> bool {
        match self.clients.get_mut(id).and_then(|c| c.titlebar.as_mut()) {
            Some(titlebar) => {
                titlebar.set_widgets(&mut self.widgets, widgets);
                true
            }
            None => false,
        }
    }

    // -----------------------------------------------------------------------
    // Invalidation
    // -----------------------------------------------------------------------

    /// Flag every bar containing a widget of `kind` for redraw.
    ///
    /// Scans each bar's computed nodes and stops at the first match per bar.
    /// Titlebars are not scanned; kind-wide changes are a bar-surface
    /// concern.
    pub fn invalidate_by_kind(&mut self, kind: WidgetKind) {
        for (_, bar) in &mut self.bars {
            let hit = bar.nodes().iter().any(|node| {
                self.widgets
                    .get(node.widget)
                    .is_some_and(|w| w.kind() == kind)
            });
            if hit {
                bar.mark_redraw();
            }
        }
        debug!(kind = %kind, "kind invalidation scan");
    }

    /// Flag every container whose computed nodes include `widget`.
    ///
    /// Bars already flagged are skipped without a scan. Client titlebars
    /// are scanned too.
    pub fn invalidate_by_widget(&mut self, widget: WidgetId) {
        for (_, bar) in &mut self.bars {
            if bar.needs_redraw() {
                continue;
            }
            if bar.nodes().iter().any(|node| node.widget == widget) {
                bar.mark_redraw();
            }
        }
        for (_, client) in &mut self.clients {
            let Some(titlebar) = client.titlebar.as_mut() else {
                continue;
            };
            if titlebar.needs_redraw() {
                continue;
            }
            if titlebar.nodes().iter().any(|node| node.widget == widget) {
                titlebar.mark_redraw();
            }
        }
    }

    // -----------------------------------------------------------------------
    // Rendering and hit testing
    // -----------------------------------------------------------------------

    /// Render one bar unconditionally. The redraw flag is left as is.
    pub fn render_bar(
        &mut self,
        id: BarId,
        backdrop: &dyn BackdropSource,
    ) -> Result<(), LayoutError> {
        if let Some(bar) = self.bars.get_mut(id) {
            render(bar, &mut self.widgets, backdrop)?;
        }
        Ok(())
    }

    /// Render every flagged bar and titlebar, clearing each flag after its
    /// pass succeeds. Returns the number of surfaces rendered.
    pub fn render_pending(
        &mut self,
        backdrop: &dyn BackdropSource,
    ) -> Result<usize, LayoutError> {
        let mut rendered = 0;
        for (_, bar) in &mut self.bars {
            if bar.needs_redraw() {
                render(bar, &mut self.widgets, backdrop)?;
                bar.clear_redraw();
                rendered += 1;
            }
        }
        for (_, client) in &mut self.clients {
            if let Some(titlebar) = client.titlebar.as_mut() {
                if titlebar.needs_redraw() {
                    render(titlebar, &mut self.widgets, backdrop)?;
                    titlebar.clear_redraw();
                    rendered += 1;
                }
            }
        }
        Ok(rendered)
    }

    /// The widget under a bar-relative point, or `None` for bare surface.
    pub fn widget_at(&self, id: BarId, x: i32, y: i32) -> Option<WidgetId> {
        let bar = self.bars.get(id)?;
        crate::layout::widget_at(bar, &self.widgets, x, y)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
