//! Mouse button bindings and callback handles.
//!
//! Widgets carry an ordered set of [`ButtonBinding`]s and optional
//! mouse-enter/leave [`Callback`]s. Callbacks are handles to functions owned
//! by the embedding layer (a scripting engine, typically); barkit never
//! invokes them itself, it only stores, replaces, and releases them.

use std::rc::Rc;

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Keyboard modifier state attached to a button binding, as a bit set.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);
    pub const SUPER: Modifiers = Modifiers(8);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether no modifier bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

// ---------------------------------------------------------------------------
// MouseButton
// ---------------------------------------------------------------------------

/// A physical mouse button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    ScrollUp,
    ScrollDown,
    /// Any button beyond the standard five, by number.
    Other(u8),
}

// ---------------------------------------------------------------------------
// Callback
// ---------------------------------------------------------------------------

/// A cloneable handle to an externally owned function.
///
/// The handle participates in the host's reference counting: cloning takes a
/// reference, dropping releases one. Two handles compare equal when they
/// refer to the same underlying function.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    /// Wrap a function in a callback handle.
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the underlying function.
    pub fn call(&self) {
        (self.0)()
    }
}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Callback(<fn>)")
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Callback {}

// ---------------------------------------------------------------------------
// ButtonBinding
// ---------------------------------------------------------------------------

/// A single mouse button binding: button + modifiers -> press/release hooks.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonBinding {
    pub button: MouseButton,
    pub modifiers: Modifiers,
    pub press: Option<Callback>,
    pub release: Option<Callback>,
}

impl ButtonBinding {
    /// Create a binding with no hooks attached.
    pub fn new(button: MouseButton, modifiers: Modifiers) -> Self {
        Self { button, modifiers, press: None, release: None }
    }

    /// Attach a press hook (builder).
    pub fn on_press(mut self, callback: Callback) -> Self {
        self.press = Some(callback);
        self
    }

    /// Attach a release hook (builder).
    pub fn on_release(mut self, callback: Callback) -> Self {
        self.release = Some(callback);
        self
    }

    /// Whether this binding matches the given button and modifier state.
    pub fn matches(&self, button: MouseButton, modifiers: Modifiers) -> bool {
        self.button == button && self.modifiers == modifiers
    }
}

// ===========================================================================
// Tests
// ===========================================================================
