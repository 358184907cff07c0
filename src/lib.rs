//! # barkit
//!
//! A widget and panel ("bar") toolkit for desktop shells: status bars,
//! docks, and window titlebars composed from small, shareable widgets.
//!
//! barkit owns the widget data model and everything downstream of it:
//! factory construction, shared ownership across containers, pluggable
//! layout in orientation-normalized space, pixel rendering with rotation,
//! point hit testing, and the two redraw-invalidation scans. The embedder
//! supplies the outer shell: windows, input delivery, and a place to show
//! each bar's rendered pixmap.
//!
//! ## Core Systems
//!
//! - **[`widget`]** — Widget data model, capability trait, arena, factory
//! - **[`widgets`]** — Built-in kinds: TextBox, ProgressBar, Graph, Systray, ImageBox
//! - **[`bar`]** — The bar container: widget lists, background, redraw flag
//! - **[`layout`]** — Geometry computation and point hit testing
//! - **[`render`]** — Pixel canvas, backdrop sourcing, the bar renderer
//! - **[`event`]** — Button bindings, modifiers, callbacks
//! - **[`registry`]** — Top-level owner: invalidation scans, render scheduling
//! - **[`geometry`]** — Offset, Size, Region, Orientation primitives
//! - **[`color`]** — RGBA color with source-over compositing

// Foundation
pub mod color;
pub mod geometry;

// Widget system
pub mod widget;
pub mod widgets;

// Containers and layout
pub mod bar;
pub mod layout;

// Events
pub mod event;

// Rendering
pub mod render;

// Top level
pub mod registry;
