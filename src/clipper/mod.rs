//! Polygon clipping against the homogeneous clip volume.
//!
//! Triangles are clipped with the Sutherland-Hodgman algorithm after the
//! vertex stage and before the perspective divide, so geometry crossing the
//! near plane never produces a vertex with `w <= 0`.

pub mod clip_space;

pub use clip_space::{ClipPlane, ClipPolygon, ClipSpaceClipper, ClipVertex};
