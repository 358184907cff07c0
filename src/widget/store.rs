//! Refcounted widget arena.
//!
//! All widgets live in a single slotmap; bars and title decorations refer to
//! them by [`WidgetId`]. Ownership is explicit: every place that holds a
//! widget id durably (a bar's source list, a computed node) takes a
//! reference with [`acquire`] and gives it back with [`release`]. The last
//! release runs the widget's teardown and removes it from the arena.
//!
//! [`acquire`]: WidgetStore::acquire
//! [`release`]: WidgetStore::release

use slotmap::{new_key_type, SlotMap};

use super::Widget;

new_key_type! {
    /// Unique identifier for a widget. Copy, lightweight (u64).
    pub struct WidgetId;
}

struct Slot {
    widget: Widget,
    refs: usize,
}

/// The widget arena with explicit reference counting.
///
/// Stale ids are tolerated everywhere: lookups return `None`, acquire and
/// release do nothing. Absence is an expected steady state, not an error.
#[derive(Default)]
pub struct WidgetStore {
    slots: SlotMap<WidgetId, Slot>,
}

impl WidgetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { slots: SlotMap::with_key() }
    }

    /// Insert a widget, returning its id. The caller holds the initial
    /// reference.
    pub fn insert(&mut self, widget: Widget) -> WidgetId {
        self.slots.insert(Slot { widget, refs: 1 })
    }

    /// Whether `id` refers to a live widget.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.slots.contains_key(id)
    }

    /// Number of live widgets.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Borrow the widget behind `id`.
    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.slots.get(id).map(|slot| &slot.widget)
    }

    /// Mutably borrow the widget behind `id`.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.slots.get_mut(id).map(|slot| &mut slot.widget)
    }

    /// Take one more reference to `id`. No-op for stale ids.
    pub fn acquire(&mut self, id: WidgetId) {
        if let Some(slot) = self.slots.get_mut(id) {
            slot.refs += 1;
        }
    }

    /// Give back one reference to `id`.
    ///
    /// On the last release the widget's destroy hook runs, its button
    /// bindings are released, and the arena entry is removed. Returns `true`
    /// when the widget was destroyed by this call.
    pub fn release(&mut self, id: WidgetId) -> bool {
        let Some(slot) = self.slots.get_mut(id) else {
            return false;
        };
        slot.refs -= 1;
        if slot.refs > 0 {
            return false;
        }
        if let Some(mut slot) = self.slots.remove(id) {
            slot.widget.destroy();
        }
        true
    }

    /// Current reference count of `id`; 0 for stale ids.
    pub fn refs(&self, id: WidgetId) -> usize {
        self.slots.get(id).map_or(0, |slot| slot.refs)
    }
}

impl std::fmt::Debug for WidgetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetStore")
            .field("widgets", &self.slots.len())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
