//! Static vertex buffers for the scene primitives.
//!
//! A [`Mesh`] is the CPU-side equivalent of a vertex array object: an
//! interleaved vertex list (position, normal, texture coordinate), an
//! optional index list and the [`Topology`] used to assemble triangles.
//! Meshes are built once at startup and drawn every frame.
//!
//! Shapes come from two places:
//! - [`shapes`]: hardcoded vertex arrays (plane, cube, prism)
//! - [`parametric`]: closed-form trigonometric generators (cylinder, cup,
//!   sphere, torus)

pub mod parametric;
pub mod shapes;

use std::fmt;

use crate::error::{Error, Result};
use crate::math::{Vec2, Vec3};

pub use parametric::{CupParams, CylinderParams, SphereParams, TorusParams};

/// One interleaved vertex: 3 floats position, 3 floats normal, 2 floats UV.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

impl Vertex {
    pub const fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    /// Builds a vertex from the 8-float interleaved layout.
    pub const fn from_array(v: [f32; 8]) -> Self {
        Self::new(
            Vec3::new(v[0], v[1], v[2]),
            Vec3::new(v[3], v[4], v[5]),
            Vec2::new(v[6], v[7]),
        )
    }
}

/// How consecutive vertices (or indices) form triangles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Topology {
    /// Every three vertices form an independent triangle.
    #[default]
    Triangles,
    /// Each vertex after the first two forms a triangle with the previous two.
    /// Winding alternates so every triangle keeps the same orientation.
    TriangleStrip,
    /// Each vertex after the first two forms a triangle with the first vertex
    /// and the previous one.
    TriangleFan,
}

/// The primitives the demos know how to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Plane,
    Cylinder,
    Sphere,
    Cube,
    Prism,
    Torus,
    Cup,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Plane,
        ShapeKind::Cylinder,
        ShapeKind::Sphere,
        ShapeKind::Cube,
        ShapeKind::Prism,
        ShapeKind::Torus,
        ShapeKind::Cup,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Plane => "plane",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cube => "cube",
            ShapeKind::Prism => "prism",
            ShapeKind::Torus => "torus",
            ShapeKind::Cup => "cup",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    name: String,
    vertices: Vec<Vertex>,
    indices: Option<Vec<u32>>,
    topology: Topology,
}

impl Mesh {
    /// Creates a non-indexed mesh.
    pub fn new(name: impl Into<String>, vertices: Vec<Vertex>, topology: Topology) -> Self {
        Self {
            name: name.into(),
            vertices,
            indices: None,
            topology,
        }
    }

    /// Creates an indexed mesh, checking that every index is in range.
    pub fn indexed(
        name: impl Into<String>,
        vertices: Vec<Vertex>,
        indices: Vec<u32>,
        topology: Topology,
    ) -> Result<Self> {
        if indices.iter().any(|&i| i as usize >= vertices.len()) {
            return Err(Error::InvalidMesh("index out of range"));
        }
        Ok(Self {
            name: name.into(),
            vertices,
            indices: Some(indices),
            topology,
        })
    }

    /// Builds the default-parameter mesh for a shape.
    pub fn build(kind: ShapeKind) -> Result<Self> {
        match kind {
            ShapeKind::Plane => Ok(shapes::plane()),
            ShapeKind::Cube => Ok(shapes::cube()),
            ShapeKind::Prism => Ok(shapes::prism()),
            ShapeKind::Cylinder => parametric::cylinder(&CylinderParams::default()),
            ShapeKind::Cup => parametric::cup(&CupParams::default()),
            ShapeKind::Sphere => parametric::sphere(&SphereParams::default()),
            ShapeKind::Torus => parametric::torus(&TorusParams::default()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> Option<&[u32]> {
        self.indices.as_deref()
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.as_ref().map_or(0, Vec::len)
    }

    /// Number of elements a draw call walks: indices if present, else vertices.
    pub fn draw_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len(),
            None => self.vertices.len(),
        }
    }

    pub fn triangle_count(&self) -> usize {
        let count = self.draw_count();
        match self.topology {
            Topology::Triangles => count / 3,
            Topology::TriangleStrip | Topology::TriangleFan => count.saturating_sub(2),
        }
    }

    /// Assembles triangles as triples of vertex indices.
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        let topology = self.topology;
        let resolve = move |i: usize| match &self.indices {
            Some(indices) => indices[i] as usize,
            None => i,
        };

        (0..self.triangle_count()).map(move |t| {
            let [a, b, c] = match topology {
                Topology::Triangles => [3 * t, 3 * t + 1, 3 * t + 2],
                Topology::TriangleStrip if t % 2 == 0 => [t, t + 1, t + 2],
                Topology::TriangleStrip => [t + 1, t, t + 2],
                Topology::TriangleFan => [0, t + 1, t + 2],
            };
            [resolve(a), resolve(b), resolve(c)]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy(n: usize) -> Vec<Vertex> {
        (0..n)
            .map(|i| Vertex::new(Vec3::new(i as f32, 0.0, 0.0), Vec3::Y, Vec2::ZERO))
            .collect()
    }

    #[test]
    fn strip_alternates_winding() {
        let mesh = Mesh::new("strip", dummy(5), Topology::TriangleStrip);
        let tris: Vec<_> = mesh.triangles().collect();
        assert_eq!(tris, vec![[0, 1, 2], [2, 1, 3], [2, 3, 4]]);
    }

    #[test]
    fn fan_shares_first_vertex() {
        let mesh = Mesh::new("fan", dummy(5), Topology::TriangleFan);
        let tris: Vec<_> = mesh.triangles().collect();
        assert_eq!(tris, vec![[0, 1, 2], [0, 2, 3], [0, 3, 4]]);
    }

    #[test]
    fn indexed_triangles_resolve_through_indices() {
        let mesh = Mesh::indexed("quad", dummy(4), vec![0, 1, 2, 2, 3, 0], Topology::Triangles)
            .unwrap();
        assert_eq!(mesh.draw_count(), 6);
        assert_eq!(mesh.triangles().nth(1), Some([2, 3, 0]));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let result = Mesh::indexed("bad", dummy(3), vec![0, 1, 3], Topology::Triangles);
        assert!(matches!(result, Err(Error::InvalidMesh(_))));
    }

    #[test]
    fn trailing_vertices_are_ignored() {
        let mesh = Mesh::new("partial", dummy(7), Topology::Triangles);
        assert_eq!(mesh.triangles().count(), 2);
    }

    #[test]
    fn every_shape_builds() {
        for kind in ShapeKind::ALL {
            let mesh = Mesh::build(kind).unwrap();
            assert_eq!(mesh.name(), kind.name());
            assert!(mesh.triangle_count() > 0, "{kind} has no triangles");
        }
    }
}
