//! Hardcoded primitives: planes and boxes.

use super::{Mesh, Topology, Vertex};
use crate::math::{Vec2, Vec3};

/// Two triangles per face; corners index into the face's quad.
const QUAD_CORNERS: [usize; 6] = [0, 1, 2, 2, 3, 0];

/// One box face: outward normal and four corners (sign per axis, then UV).
struct Face {
    normal: Vec3,
    corners: [([f32; 3], [f32; 2]); 4],
}

const BOX_FACES: [Face; 6] = [
    // back
    Face {
        normal: Vec3::new(0.0, 0.0, -1.0),
        corners: [
            ([-1.0, -1.0, -1.0], [0.0, 0.0]),
            ([1.0, -1.0, -1.0], [1.0, 0.0]),
            ([1.0, 1.0, -1.0], [1.0, 1.0]),
            ([-1.0, 1.0, -1.0], [0.0, 1.0]),
        ],
    },
    // front
    Face {
        normal: Vec3::new(0.0, 0.0, 1.0),
        corners: [
            ([-1.0, -1.0, 1.0], [0.0, 0.0]),
            ([1.0, -1.0, 1.0], [1.0, 0.0]),
            ([1.0, 1.0, 1.0], [1.0, 1.0]),
            ([-1.0, 1.0, 1.0], [0.0, 1.0]),
        ],
    },
    // left
    Face {
        normal: Vec3::new(-1.0, 0.0, 0.0),
        corners: [
            ([-1.0, 1.0, 1.0], [1.0, 0.0]),
            ([-1.0, 1.0, -1.0], [1.0, 1.0]),
            ([-1.0, -1.0, -1.0], [0.0, 1.0]),
            ([-1.0, -1.0, 1.0], [0.0, 0.0]),
        ],
    },
    // right
    Face {
        normal: Vec3::new(1.0, 0.0, 0.0),
        corners: [
            ([1.0, 1.0, 1.0], [1.0, 0.0]),
            ([1.0, 1.0, -1.0], [1.0, 1.0]),
            ([1.0, -1.0, -1.0], [0.0, 1.0]),
            ([1.0, -1.0, 1.0], [0.0, 0.0]),
        ],
    },
    // bottom
    Face {
        normal: Vec3::new(0.0, -1.0, 0.0),
        corners: [
            ([-1.0, -1.0, -1.0], [0.0, 1.0]),
            ([1.0, -1.0, -1.0], [1.0, 1.0]),
            ([1.0, -1.0, 1.0], [1.0, 0.0]),
            ([-1.0, -1.0, 1.0], [0.0, 0.0]),
        ],
    },
    // top
    Face {
        normal: Vec3::new(0.0, 1.0, 0.0),
        corners: [
            ([-1.0, 1.0, -1.0], [0.0, 1.0]),
            ([1.0, 1.0, -1.0], [1.0, 1.0]),
            ([1.0, 1.0, 1.0], [1.0, 0.0]),
            ([-1.0, 1.0, 1.0], [0.0, 0.0]),
        ],
    },
];

/// Axis-aligned box centred on the origin, 36 vertices with flat face normals.
pub fn cuboid(name: &str, half_extents: Vec3) -> Mesh {
    let vertices = BOX_FACES
        .iter()
        .flat_map(|face| {
            QUAD_CORNERS.iter().map(move |&corner| {
                let ([sx, sy, sz], [u, v]) = face.corners[corner];
                Vertex::new(
                    Vec3::new(sx * half_extents.x, sy * half_extents.y, sz * half_extents.z),
                    face.normal,
                    Vec2::new(u, v),
                )
            })
        })
        .collect();

    Mesh::new(name, vertices, Topology::Triangles)
}

/// Unit cube.
pub fn cube() -> Mesh {
    cuboid("cube", Vec3::splat(0.5))
}

/// Laptop slab, 1.5 wide, 1.0 tall, 0.2 deep.
///
/// The texture layout is per face and not shared with the cube: the back
/// face, which ends up on top of the desk, has v running downwards, and some
/// triangles of the front and side faces map their corners differently.
#[rustfmt::skip]
const PRISM_VERTICES: [[f32; 8]; 36] = [
    // back
    [-0.75, -0.5, -0.1,  0.0,  0.0, -1.0,  0.0, 1.0],
    [ 0.75, -0.5, -0.1,  0.0,  0.0, -1.0,  1.0, 1.0],
    [ 0.75,  0.5, -0.1,  0.0,  0.0, -1.0,  1.0, 0.0],
    [ 0.75,  0.5, -0.1,  0.0,  0.0, -1.0,  1.0, 0.0],
    [-0.75,  0.5, -0.1,  0.0,  0.0, -1.0,  0.0, 0.0],
    [-0.75, -0.5, -0.1,  0.0,  0.0, -1.0,  0.0, 1.0],
    // front
    [-0.75, -0.5,  0.1,  0.0,  0.0,  1.0,  0.0, 0.0],
    [ 0.75, -0.5,  0.1,  0.0,  0.0,  1.0,  0.0, 1.0],
    [ 0.75,  0.5,  0.1,  0.0,  0.0,  1.0,  1.0, 1.0],
    [ 0.75,  0.5,  0.1,  0.0,  0.0,  1.0,  1.0, 1.0],
    [-0.75,  0.5,  0.1,  0.0,  0.0,  1.0,  1.0, 0.0],
    [-0.75, -0.5,  0.1,  0.0,  0.0,  1.0,  1.0, 0.0],
    // left
    [-0.75,  0.5,  0.1, -1.0,  0.0,  0.0,  0.0, 1.0],
    [-0.75,  0.5, -0.1, -1.0,  0.0,  0.0,  1.0, 1.0],
    [-0.75, -0.5, -0.1, -1.0,  0.0,  0.0,  1.0, 0.0],
    [-0.75, -0.5, -0.1, -1.0,  0.0,  0.0,  1.0, 0.0],
    [-0.75, -0.5,  0.1, -1.0,  0.0,  0.0,  0.0, 0.0],
    [-0.75,  0.5,  0.1, -1.0,  0.0,  0.0,  0.0, 1.0],
    // right
    [ 0.75,  0.5,  0.1,  1.0,  0.0,  0.0,  0.0, 1.0],
    [ 0.75,  0.5, -0.1,  1.0,  0.0,  0.0,  1.0, 1.0],
    [ 0.75, -0.5, -0.1,  1.0,  0.0,  0.0,  1.0, 0.0],
    [ 0.75, -0.5, -0.1,  1.0,  0.0,  0.0,  1.0, 0.0],
    [ 0.75, -0.5,  0.1,  1.0,  0.0,  0.0,  0.0, 0.0],
    [ 0.75,  0.5,  0.1,  1.0,  0.0,  0.0,  0.0, 0.0],
    // bottom
    [-0.75, -0.5, -0.1,  0.0, -1.0,  0.0,  0.0, 1.0],
    [ 0.75, -0.5, -0.1,  0.0, -1.0,  0.0,  1.0, 1.0],
    [ 0.75, -0.5,  0.1,  0.0, -1.0,  0.0,  1.0, 0.0],
    [ 0.75, -0.5,  0.1,  0.0, -1.0,  0.0,  1.0, 0.0],
    [-0.75, -0.5,  0.1,  0.0, -1.0,  0.0,  0.0, 0.0],
    [-0.75, -0.5, -0.1,  0.0, -1.0,  0.0,  0.0, 1.0],
    // top
    [-0.75,  0.5, -0.1,  0.0,  1.0,  0.0,  0.0, 1.0],
    [ 0.75,  0.5, -0.1,  0.0,  1.0,  0.0,  1.0, 1.0],
    [ 0.75,  0.5,  0.1,  0.0,  1.0,  0.0,  1.0, 0.0],
    [ 0.75,  0.5,  0.1,  0.0,  1.0,  0.0,  1.0, 0.0],
    [-0.75,  0.5,  0.1,  0.0,  1.0,  0.0,  0.0, 0.0],
    [-0.75,  0.5, -0.1,  0.0,  1.0,  0.0,  0.0, 1.0],
];

pub fn prism() -> Mesh {
    let vertices = PRISM_VERTICES.iter().map(|&v| Vertex::from_array(v)).collect();
    Mesh::new("prism", vertices, Topology::Triangles)
}

/// Horizontal square of the given half size at height `y`, facing +Y.
///
/// UV `(0, 1)` sits on the `-X, -Z` corner so the texture reads upright
/// from a camera on the +Z side.
pub fn quad(name: &str, half_size: f32, y: f32) -> Mesh {
    let corners = [
        (Vec3::new(-half_size, y, -half_size), Vec2::new(0.0, 1.0)),
        (Vec3::new(half_size, y, -half_size), Vec2::new(1.0, 1.0)),
        (Vec3::new(half_size, y, half_size), Vec2::new(1.0, 0.0)),
        (Vec3::new(-half_size, y, half_size), Vec2::new(0.0, 0.0)),
    ];
    let vertices = QUAD_CORNERS
        .iter()
        .map(|&i| Vertex::new(corners[i].0, Vec3::Y, corners[i].1))
        .collect();

    Mesh::new(name, vertices, Topology::Triangles)
}

/// Unit desk plane at y = -0.5.
pub fn plane() -> Mesh {
    quad("plane", 0.5, -0.5)
}

/// 2x2 ground plane at y = 0 used by the texturing milestone.
pub fn ground_plane() -> Mesh {
    quad("ground", 1.0, 0.0)
}
