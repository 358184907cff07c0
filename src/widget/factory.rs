//! Widget factory: the closed registry of constructible kinds.
//!
//! Construction requests arrive as strings from the embedding layer; an
//! unknown kind logs one warning and yields no widget, never an error.

use tracing::warn;

use super::Widget;
use crate::widgets;

// ---------------------------------------------------------------------------
// WidgetKind
// ---------------------------------------------------------------------------

/// The closed set of widget constructors.
///
/// The kind tag identifies which constructor produced a widget and drives
/// type-based invalidation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    TextBox,
    ProgressBar,
    Graph,
    Systray,
    ImageBox,
}

impl WidgetKind {
    /// All constructible kinds.
    pub const ALL: [WidgetKind; 5] = [
        WidgetKind::TextBox,
        WidgetKind::ProgressBar,
        WidgetKind::Graph,
        WidgetKind::Systray,
        WidgetKind::ImageBox,
    ];

    /// The construction-request name for this kind.
    pub const fn name(self) -> &'static str {
        match self {
            WidgetKind::TextBox => "textbox",
            WidgetKind::ProgressBar => "progressbar",
            WidgetKind::Graph => "graph",
            WidgetKind::Systray => "systray",
            WidgetKind::ImageBox => "imagebox",
        }
    }

    /// Resolve a construction-request name. `None` for unknown names.
    pub fn parse(name: &str) -> Option<WidgetKind> {
        match name {
            "textbox" => Some(WidgetKind::TextBox),
            "progressbar" => Some(WidgetKind::ProgressBar),
            "graph" => Some(WidgetKind::Graph),
            "systray" => Some(WidgetKind::Systray),
            "imagebox" => Some(WidgetKind::ImageBox),
            _ => None,
        }
    }
}

impl std::fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// create
// ---------------------------------------------------------------------------

/// Create a widget of the requested kind.
///
/// The generic fields (visible, empty button set, no callbacks) are
/// initialized uniformly before the kind-specific constructor runs. Unknown
/// kind names log a warning and return `None`; the caller must check.
pub fn create(kind: &str) -> Option<Widget> {
    let Some(kind) = WidgetKind::parse(kind) else {
        warn!(requested = kind, "unknown widget type");
        return None;
    };
    Some(create_known(kind))
}

/// Create a widget from an already-resolved kind tag.
pub fn create_known(kind: WidgetKind) -> Widget {
    let behavior: Box<dyn super::WidgetBehavior> = match kind {
        WidgetKind::TextBox => Box::new(widgets::TextBox::new()),
        WidgetKind::ProgressBar => Box::new(widgets::ProgressBar::new()),
        WidgetKind::Graph => Box::new(widgets::Graph::new()),
        WidgetKind::Systray => Box::new(widgets::Systray::new()),
        WidgetKind::ImageBox => Box::new(widgets::ImageBox::new()),
    };
    Widget::new(kind, behavior)
}

// ===========================================================================
// Tests
// ===========================================================================
