//! Layout: geometry computation and spatial (hit-test) queries.

pub mod engine;
pub mod spatial;

pub use engine::{compute_geometries, GeometryHint, LayoutError, LayoutStrategy};
pub use spatial::widget_at;
