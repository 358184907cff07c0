//! Geometry computation for a bar's widget list.
//!
//! [`compute_geometries`] snapshots the bar's source list, asks the bar's
//! [`LayoutStrategy`] for placements, and installs the resulting nodes. All
//! placements live in normalized bar space (origin `(0, 0)`, axes unswapped
//! regardless of the bar's orientation).

use thiserror::Error;

use crate::bar::{Bar, WidgetNode};
use crate::geometry::Region;
use crate::widget::{WidgetId, WidgetStore};

/// Errors surfaced from a layout pass.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A custom strategy reported failure. The bar keeps its previous nodes.
    #[error("layout strategy failed: {0}")]
    Strategy(String),
}

// ---------------------------------------------------------------------------
// GeometryHint
// ---------------------------------------------------------------------------

/// A partial placement returned by a custom strategy, one per widget.
///
/// Every field is optional. A missing `x`/`y` defaults to the bar's
/// screen-space origin, and a missing `width`/`height` defaults to `1`, so a
/// strategy that forgets a widget still yields a well-formed (if degenerate)
/// placement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GeometryHint {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl GeometryHint {
    /// A fully specified placement.
    pub const fn at(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
        }
    }

    fn resolve(self, origin: Region) -> Region {
        Region::new(
            self.x.unwrap_or(origin.x),
            self.y.unwrap_or(origin.y),
            self.width.unwrap_or(1),
            self.height.unwrap_or(1),
        )
    }
}

// ---------------------------------------------------------------------------
// LayoutStrategy
// ---------------------------------------------------------------------------

/// A pluggable placement routine.
///
/// Arguments: the bar's normalized content region, the live widget ids in
/// list order, and the bar's screen index. Returns one hint per widget;
/// positions past the end of the returned list are treated as empty hints.
pub type StrategyFn =
    dyn FnMut(Region, &[WidgetId], usize) -> Result<Vec<GeometryHint>, LayoutError>;

/// How a bar places its widgets.
pub enum LayoutStrategy {
    /// Each widget sized to its extents (clamped to the bar), at the origin.
    Default,
    /// An embedder-supplied placement routine.
    Custom(Box<StrategyFn>),
}

impl LayoutStrategy {
    /// Wrap a closure as a custom strategy.
    pub fn custom<F>(f: F) -> Self
    where
        F: FnMut(Region, &[WidgetId], usize) -> Result<Vec<GeometryHint>, LayoutError> + 'static,
    {
        LayoutStrategy::Custom(Box::new(f))
    }
}

impl std::fmt::Debug for LayoutStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutStrategy::Default => f.write_str("Default"),
            LayoutStrategy::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}

// ---------------------------------------------------------------------------
// compute_geometries
// ---------------------------------------------------------------------------

/// Run one layout pass for `bar`, replacing its computed node list.
///
/// The source list is snapshotted first: entries whose widget has since been
/// destroyed are dropped, and the strategy sees only live ids. On a strategy
/// error the bar's previous nodes are left in place.
pub fn compute_geometries(bar: &mut Bar, store: &mut WidgetStore) -> Result<(), LayoutError> {
    let snapshot: Vec<WidgetId> = bar
        .widgets()
        .iter()
        .copied()
        .filter(|&id| store.contains(id))
        .collect();

    let normalized = bar.normalized_size().to_region();
    let origin = bar.geometry();
    let screen = bar.screen();

    let geometries: Vec<Region> = match bar.strategy_mut() {
        LayoutStrategy::Custom(strategy) => {
            let hints = strategy(normalized, &snapshot, screen)?;
            (0..snapshot.len())
                .map(|i| hints.get(i).copied().unwrap_or_default().resolve(origin))
                .collect()
        }
        LayoutStrategy::Default => snapshot
            .iter()
            .map(|&id| {
                let extents = store
                    .get(id)
                    .map(|w| w.extents())
                    .unwrap_or(crate::geometry::Size::ZERO);
                Region::new(
                    0,
                    0,
                    extents.width.min(normalized.width),
                    extents.height.min(normalized.height),
                )
            })
            .collect(),
    };

    let mut nodes = Vec::with_capacity(snapshot.len());
    for (&id, &geometry) in snapshot.iter().zip(geometries.iter()) {
        store.acquire(id);
        nodes.push(WidgetNode {
            widget: id,
            geometry,
        });
    }
    bar.replace_nodes(store, nodes);
    Ok(())
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Orientation, Size};
    use crate::widget::{factory, PropertyValue};

    fn textbox(store: &mut WidgetStore, text: &str) -> WidgetId {
        let mut w = factory::create("textbox").unwrap();
        w.set_property("text", text.into()).unwrap();
        store.insert(w)
    }

    #[test]
    fn default_strategy_clamps_to_bar() {
        let mut store = WidgetStore::new();
        // "0123456789ab" measures 96x16; the bar is 40x10.
        let id = textbox(&mut store, "0123456789ab");
        let mut bar = Bar::new(Region::new(0, 0, 40, 10));
        bar.set_widgets(&mut store, vec![id]);

        compute_geometries(&mut bar, &mut store).unwrap();
        assert_eq!(bar.nodes().len(), 1);
        assert_eq!(bar.nodes()[0].geometry, Region::new(0, 0, 40, 10));
    }

    #[test]
    fn default_strategy_overlaps_all_widgets_at_origin() {
        let mut store = WidgetStore::new();
        let a = textbox(&mut store, "a");
        let b = textbox(&mut store, "bb");
        let mut bar = Bar::new(Region::new(0, 0, 100, 20));
        bar.set_widgets(&mut store, vec![a, b]);

        compute_geometries(&mut bar, &mut store).unwrap();
        assert_eq!(bar.nodes()[0].geometry, Region::new(0, 0, 8, 16));
        assert_eq!(bar.nodes()[1].geometry, Region::new(0, 0, 16, 16));
    }

    #[test]
    fn custom_strategy_sees_normalized_region_and_screen() {
        let mut store = WidgetStore::new();
        let id = textbox(&mut store, "x");
        let mut bar = Bar::new(Region::new(10, 20, 100, 18))
            .with_orientation(Orientation::RotatedCw)
            .with_screen(2);
        bar.set_widgets(&mut store, vec![id]);
        bar.set_strategy(LayoutStrategy::custom(|region, widgets, screen| {
            assert_eq!(region, Region::new(0, 0, 18, 100));
            assert_eq!(widgets.len(), 1);
            assert_eq!(screen, 2);
            Ok(vec![GeometryHint::at(0, 0, 18, 16)])
        }));

        compute_geometries(&mut bar, &mut store).unwrap();
        assert_eq!(bar.nodes()[0].geometry, Region::new(0, 0, 18, 16));
    }

    #[test]
    fn missing_hints_default_to_bar_origin_and_unit_size() {
        let mut store = WidgetStore::new();
        let a = textbox(&mut store, "a");
        let b = textbox(&mut store, "b");
        let mut bar = Bar::new(Region::new(7, 9, 100, 20));
        bar.set_widgets(&mut store, vec![a, b]);
        // One hint for two widgets, and that hint is partial.
        bar.set_strategy(LayoutStrategy::custom(|_, _, _| {
            Ok(vec![GeometryHint {
                width: Some(30),
                ..GeometryHint::default()
            }])
        }));

        compute_geometries(&mut bar, &mut store).unwrap();
        assert_eq!(bar.nodes()[0].geometry, Region::new(7, 9, 30, 1));
        assert_eq!(bar.nodes()[1].geometry, Region::new(7, 9, 1, 1));
    }

    #[test]
    fn destroyed_widgets_are_dropped_from_the_snapshot() {
        let mut store = WidgetStore::new();
        let a = textbox(&mut store, "a");
        let b = textbox(&mut store, "b");
        let mut bar = Bar::new(Region::new(0, 0, 100, 20));
        bar.set_widgets(&mut store, vec![a, b]);

        // Destroy `a` entirely: the bar's ref plus the embedder's.
        store.release(a);
        store.release(a);
        assert!(!store.contains(a));

        compute_geometries(&mut bar, &mut store).unwrap();
        assert_eq!(bar.nodes().len(), 1);
        assert_eq!(bar.nodes()[0].widget, b);
    }

    #[test]
    fn strategy_error_keeps_previous_nodes() {
        let mut store = WidgetStore::new();
        let id = textbox(&mut store, "x");
        let mut bar = Bar::new(Region::new(0, 0, 100, 20));
        bar.set_widgets(&mut store, vec![id]);
        compute_geometries(&mut bar, &mut store).unwrap();
        let before = bar.nodes().to_vec();

        bar.set_strategy(LayoutStrategy::custom(|_, _, _| {
            Err(LayoutError::Strategy("callback raised".into()))
        }));
        let err = compute_geometries(&mut bar, &mut store).unwrap_err();
        assert!(matches!(err, LayoutError::Strategy(_)));
        assert_eq!(bar.nodes(), before.as_slice());
    }

    #[test]
    fn nodes_hold_references_across_passes() {
        let mut store = WidgetStore::new();
        let id = textbox(&mut store, "x");
        let mut bar = Bar::new(Region::new(0, 0, 100, 20));
        bar.set_widgets(&mut store, vec![id]);

        compute_geometries(&mut bar, &mut store).unwrap();
        assert_eq!(store.refs(id), 3); // embedder + source list + node

        // A second pass swaps the node reference, not leaks one.
        compute_geometries(&mut bar, &mut store).unwrap();
        assert_eq!(store.refs(id), 3);
    }

    #[test]
    fn zero_extents_yield_empty_geometry() {
        let mut store = WidgetStore::new();
        let id = store.insert(factory::create("systray").unwrap());
        assert_eq!(store.get(id).unwrap().extents(), Size::ZERO);
        let mut bar = Bar::new(Region::new(0, 0, 100, 20));
        bar.set_widgets(&mut store, vec![id]);

        compute_geometries(&mut bar, &mut store).unwrap();
        assert_eq!(bar.nodes()[0].geometry, Region::new(0, 0, 0, 0));
    }
}
