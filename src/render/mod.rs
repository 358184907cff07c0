//! Rendering pipeline: pixel canvas, backdrop sourcing, the bar renderer.

pub mod backdrop;
pub mod canvas;
pub mod renderer;

pub use backdrop::{BackdropSource, NoBackdrop};
pub use canvas::Canvas;
pub use renderer::{render, DrawContext};
