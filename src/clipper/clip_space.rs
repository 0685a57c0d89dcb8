//! Clip-space clipping against the homogeneous clip cube.
//!
//! Clipping occurs after the vertex stage, before the perspective divide.
//! The clip volume is:
//!
//! ```text
//! -w <= x <= w
//! -w <= y <= w
//! -w <= z <= w   ([-1, 1] depth range, OpenGL-style)
//! ```
//!
//! The planes are fixed, so the same clipper works for perspective and
//! orthographic projections alike.

use crate::math::Vec4;
use crate::shader::Varying;

/// A vertex-stage output: clip-space position plus the program's varyings.
#[derive(Clone, Copy, Debug)]
pub struct ClipVertex<V> {
    pub position: Vec4,
    pub varying: V,
}

impl<V: Varying> ClipVertex<V> {
    pub fn new(position: Vec4, varying: V) -> Self {
        Self { position, varying }
    }

    /// Interpolates position and varyings where an edge crosses a plane.
    ///
    /// Clip space is still linear in the pre-divide coordinates, so plain
    /// linear interpolation is correct here.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            varying: self.varying.lerp(&other.varying, t),
        }
    }
}

/// The 6 planes of the canonical clip-space cube.
///
/// The signed distance is positive when inside the clip volume.
#[derive(Clone, Copy, Debug)]
pub enum ClipPlane {
    /// x >= -w
    Left,
    /// x <= w
    Right,
    /// y >= -w
    Bottom,
    /// y <= w
    Top,
    /// z >= -w
    Near,
    /// z <= w
    Far,
}

impl ClipPlane {
    pub const ALL: [ClipPlane; 6] = [
        ClipPlane::Left,
        ClipPlane::Right,
        ClipPlane::Bottom,
        ClipPlane::Top,
        ClipPlane::Near,
        ClipPlane::Far,
    ];

    #[inline]
    pub fn signed_distance(&self, p: Vec4) -> f32 {
        match self {
            Self::Left => p.w + p.x,
            Self::Right => p.w - p.x,
            Self::Bottom => p.w + p.y,
            Self::Top => p.w - p.y,
            Self::Near => p.w + p.z,
            Self::Far => p.w - p.z,
        }
    }
}

/// A convex polygon in clip space.
///
/// Starts life as a triangle; each plane it is clipped against can add at
/// most one vertex.
#[derive(Clone, Debug)]
pub struct ClipPolygon<V> {
    pub vertices: Vec<ClipVertex<V>>,
}

impl<V: Varying> ClipPolygon<V> {
    pub fn from_triangle(v0: ClipVertex<V>, v1: ClipVertex<V>, v2: ClipVertex<V>) -> Self {
        Self {
            vertices: vec![v0, v1, v2],
        }
    }

    /// Returns true if the polygon has been completely clipped away.
    pub fn is_empty(&self) -> bool {
        self.vertices.len() < 3
    }

    /// True when every vertex is inside every plane, so clipping can be skipped.
    pub fn is_inside(&self) -> bool {
        self.vertices.iter().all(|v| {
            ClipPlane::ALL
                .iter()
                .all(|plane| plane.signed_distance(v.position) >= 0.0)
        })
    }

    /// Sutherland-Hodgman against a single plane.
    pub fn clip_against_plane(&self, plane: ClipPlane) -> Self {
        if self.is_empty() {
            return Self { vertices: vec![] };
        }

        let mut output = Vec::with_capacity(self.vertices.len() + 1);

        for (i, current) in self.vertices.iter().enumerate() {
            let next = &self.vertices[(i + 1) % self.vertices.len()];

            let d1 = plane.signed_distance(current.position);
            let d2 = plane.signed_distance(next.position);

            let current_inside = d1 >= 0.0;
            let next_inside = d2 >= 0.0;

            if current_inside {
                output.push(*current);
            }
            if current_inside != next_inside {
                let t = d1 / (d1 - d2);
                output.push(current.lerp(next, t));
            }
        }

        Self { vertices: output }
    }

    /// Fan triangulation of the (convex) polygon.
    pub fn triangulate(
        &self,
    ) -> impl Iterator<Item = [&ClipVertex<V>; 3]> {
        (1..self.vertices.len().saturating_sub(1))
            .map(move |i| [&self.vertices[0], &self.vertices[i], &self.vertices[i + 1]])
    }
}

/// Clips polygons against the canonical clip-space cube.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClipSpaceClipper;

impl ClipSpaceClipper {
    pub fn new() -> Self {
        Self
    }

    /// Clips against all 6 planes. The result may be empty.
    pub fn clip_polygon<V: Varying>(&self, polygon: ClipPolygon<V>) -> ClipPolygon<V> {
        if polygon.is_inside() {
            return polygon;
        }

        let mut result = polygon;
        for plane in ClipPlane::ALL {
            if result.is_empty() {
                break;
            }
            result = result.clip_against_plane(plane);
        }
        result
    }
}
