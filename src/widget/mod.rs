//! Widget system: data model, capability trait, arena, factory, properties.

pub mod factory;
pub mod property;
pub mod store;
pub mod traits;

pub use factory::WidgetKind;
pub use property::{PropertyError, PropertyValue};
pub use store::{WidgetId, WidgetStore};
pub use traits::WidgetBehavior;

use crate::event::{ButtonBinding, Callback};
use crate::geometry::Size;

// ---------------------------------------------------------------------------
// PropertyEffect
// ---------------------------------------------------------------------------

/// What a successful property write requires of the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PropertyEffect {
    /// The write changed visual state; every bar referencing the widget
    /// must be invalidated.
    Redraw,
    /// The write took effect but needs no redraw (callback handles).
    Silent,
    /// The property is unrecognized; nothing happened.
    Unhandled,
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// A polymorphic visual unit: generic state plus a boxed kind behavior.
///
/// Widgets are shared-ownership entities living in a [`WidgetStore`]; a
/// single widget may be referenced from several bars' node lists (a panel
/// bar and a window's title-decoration bar, typically). The generic fields
/// here are initialized uniformly by the factory before any kind-specific
/// constructor runs.
pub struct Widget {
    kind: WidgetKind,
    visible: bool,
    mouse_enter: Option<Callback>,
    mouse_leave: Option<Callback>,
    buttons: Vec<ButtonBinding>,
    behavior: Box<dyn WidgetBehavior>,
}

impl Widget {
    /// Create a widget from a kind tag and its behavior object.
    ///
    /// Visible by default, no bindings, no callbacks.
    pub fn new(kind: WidgetKind, behavior: Box<dyn WidgetBehavior>) -> Self {
        Self {
            kind,
            visible: true,
            mouse_enter: None,
            mouse_leave: None,
            buttons: Vec::new(),
            behavior,
        }
    }

    /// The constructor kind that produced this widget.
    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    /// Current visibility.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The kind behavior object.
    pub fn behavior(&self) -> &dyn WidgetBehavior {
        self.behavior.as_ref()
    }

    /// The kind behavior object, mutably.
    pub fn behavior_mut(&mut self) -> &mut dyn WidgetBehavior {
        self.behavior.as_mut()
    }

    /// The ordered button-binding set.
    pub fn buttons(&self) -> &[ButtonBinding] {
        &self.buttons
    }

    /// Replace the ordered button-binding set.
    pub fn set_buttons(&mut self, buttons: Vec<ButtonBinding>) {
        self.buttons = buttons;
    }

    /// The widget's intrinsic preferred size; `{0, 0}` without a measure
    /// hook.
    pub fn extents(&self) -> Size {
        self.behavior.extents()
    }

    /// Read a property through the generic surface.
    ///
    /// `visible`, `mouse_enter` and `mouse_leave` are answered here; any
    /// other name is forwarded to the kind's own hook, which returns `None`
    /// for properties it does not recognize.
    pub fn get_property(&self, name: &str) -> Option<PropertyValue> {
        match name {
            "visible" => Some(PropertyValue::Bool(self.visible)),
            "mouse_enter" => self.mouse_enter.clone().map(PropertyValue::Callback),
            "mouse_leave" => self.mouse_leave.clone().map(PropertyValue::Callback),
            _ => self.behavior.get_property(name),
        }
    }

    /// Write a property through the generic surface.
    ///
    /// The returned [`PropertyEffect`] tells the caller whether redraw
    /// invalidation is required; the registry is responsible for acting on
    /// it. Strict properties reject wrong-typed values loudly:
    /// `mouse_enter`/`mouse_leave` require a callback, `visible` a boolean.
    /// Assigning a callback property drops (releases) the previous handle
    /// before installing the new one.
    pub fn set_property(
        &mut self,
        name: &str,
        value: PropertyValue,
    ) -> Result<PropertyEffect, PropertyError> {
        match name {
            "visible" => {
                let v = value.as_bool().ok_or_else(|| PropertyError::TypeMismatch {
                    property: name.to_owned(),
                    expected: "a boolean",
                })?;
                self.visible = v;
                Ok(PropertyEffect::Redraw)
            }
            "mouse_enter" => {
                self.mouse_enter = Some(Self::require_callback(name, value)?);
                Ok(PropertyEffect::Silent)
            }
            "mouse_leave" => {
                self.mouse_leave = Some(Self::require_callback(name, value)?);
                Ok(PropertyEffect::Silent)
            }
            _ => match self.behavior.set_property(name, value)? {
                true => Ok(PropertyEffect::Redraw),
                false => Ok(PropertyEffect::Unhandled),
            },
        }
    }

    fn require_callback(name: &str, value: PropertyValue) -> Result<Callback, PropertyError> {
        match value {
            PropertyValue::Callback(cb) => Ok(cb),
            _ => Err(PropertyError::NotCallable { property: name.to_owned() }),
        }
    }

    /// Run the teardown sequence: the kind's destroy hook, then release of
    /// the button bindings. Called by the store on last release.
    pub(crate) fn destroy(&mut self) {
        self.behavior.on_destroy();
        self.buttons.clear();
    }
}

impl std::fmt::Debug for Widget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Widget")
            .field("kind", &self.kind)
            .field("visible", &self.visible)
            .field("buttons", &self.buttons.len())
            .finish_non_exhaustive()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
