//! Point-to-widget hit testing.
//!
//! Pointer coordinates arrive in the bar's real (screen-oriented) space;
//! computed node geometry lives in normalized space. Hit testing therefore
//! transforms the point once, then walks the node list in order.

use crate::bar::Bar;
use crate::widget::{WidgetId, WidgetStore};

/// Find the widget under a point, or `None` for bare bar surface.
///
/// `x`/`y` are bar-relative real coordinates. The query transforms them into
/// normalized space per the bar's orientation and returns the first visible
/// node (in list order) whose computed geometry contains the point.
/// Containment is half-open, so zero-area nodes never match.
pub fn widget_at(bar: &Bar, store: &WidgetStore, x: i32, y: i32) -> Option<WidgetId> {
    let geometry = bar.geometry();
    let (nx, ny) = bar
        .orientation()
        .to_normalized(x, y, geometry.width, geometry.height);

    bar.nodes()
        .iter()
        .find(|node| {
            node.geometry.contains(nx, ny)
                && store.get(node.widget).is_some_and(|w| w.is_visible())
        })
        .map(|node| node.widget)
}

// ===========================================================================
// Tests
// ===========================================================================
