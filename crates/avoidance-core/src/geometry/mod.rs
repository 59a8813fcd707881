//! Geometry primitives for keyboard avoidance.
//!
//! Everything here is plain value math in f64 window/view coordinates: no
//! coordinate system is privileged, callers decide what space a rectangle
//! lives in. The avoider only ever needs two operations (offsetting a
//! rectangle into another coordinate space and intersecting it with a bounds
//! rectangle) plus the edge-inset record it mutates.

pub mod insets;
pub mod rect;

pub use insets::EdgeInsets;
pub use rect::Rect;
