//! Event-side types: mouse button bindings and callback handles.

pub mod binding;

pub use binding::{ButtonBinding, Callback, Modifiers, MouseButton};
