//! Closed-form surface generators.
//!
//! Every generator walks a 2D parameter grid and evaluates position, normal
//! and UV per grid point. Tubes (cylinder, cup) are emitted as a single
//! triangle strip; closed surfaces (sphere, torus) as an indexed grid.

use std::f32::consts::{PI, TAU};

use super::{Mesh, Topology, Vertex};
use crate::error::{Error, Result};
use crate::math::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CylinderParams {
    pub sectors: u32,
    pub radius: f32,
    pub height: f32,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            sectors: 30,
            radius: 0.2,
            height: 1.0,
        }
    }
}

/// A truncated cone open at both ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CupParams {
    pub sectors: u32,
    pub bottom_radius: f32,
    pub top_radius: f32,
    pub height: f32,
}

impl Default for CupParams {
    fn default() -> Self {
        Self {
            sectors: 30,
            bottom_radius: 0.3,
            top_radius: 0.5,
            height: 1.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereParams {
    pub sectors: u32,
    pub stacks: u32,
    pub radius: f32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            sectors: 30,
            stacks: 30,
            radius: 0.35,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TorusParams {
    pub rings: u32,
    pub sides: u32,
    pub major_radius: f32,
    pub minor_radius: f32,
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            rings: 30,
            sides: 30,
            major_radius: 1.0,
            minor_radius: 0.3,
        }
    }
}

fn check_segments(count: u32) -> Result<()> {
    if count == 0 {
        return Err(Error::InvalidMesh("segment count must be at least 1"));
    }
    Ok(())
}

fn check_positive(value: f32, what: &'static str) -> Result<()> {
    if !(value > 0.0 && value.is_finite()) {
        return Err(Error::InvalidMesh(what));
    }
    Ok(())
}

/// Two triangles per grid cell of a `(rows + 1) x (cols + 1)` vertex grid.
fn grid_indices(rows: u32, cols: u32) -> Vec<u32> {
    let stride = cols + 1;
    let mut indices = Vec::with_capacity((rows * cols * 6) as usize);
    for i in 0..rows {
        for j in 0..cols {
            let k1 = i * stride + j;
            let k2 = k1 + stride;
            indices.extend_from_slice(&[k1, k2, k1 + 1, k1 + 1, k2, k2 + 1]);
        }
    }
    indices
}

/// Alternating bottom/top ring vertices of an open tube with radii that may
/// differ at each end. The seam vertex is duplicated so `u` runs 0..=1.
fn tube_strip(sectors: u32, bottom_radius: f32, top_radius: f32, height: f32) -> Vec<Vertex> {
    let step = TAU / sectors as f32;
    (0..=sectors)
        .flat_map(|i| {
            let (sin, cos) = (i as f32 * step).sin_cos();
            let u = i as f32 / sectors as f32;
            let normal = Vec3::new(cos, 0.0, sin);
            [
                Vertex::new(
                    Vec3::new(bottom_radius * cos, 0.0, bottom_radius * sin),
                    normal,
                    Vec2::new(u, 0.0),
                ),
                Vertex::new(
                    Vec3::new(top_radius * cos, height, top_radius * sin),
                    normal,
                    Vec2::new(u, 1.0),
                ),
            ]
        })
        .collect()
}

/// Open cylinder standing on the origin, extending up to `height`.
pub fn cylinder(params: &CylinderParams) -> Result<Mesh> {
    check_segments(params.sectors)?;
    check_positive(params.radius, "cylinder radius must be positive")?;
    check_positive(params.height, "cylinder height must be positive")?;

    let vertices = tube_strip(params.sectors, params.radius, params.radius, params.height);
    Ok(Mesh::new("cylinder", vertices, Topology::TriangleStrip))
}

pub fn cup(params: &CupParams) -> Result<Mesh> {
    check_segments(params.sectors)?;
    check_positive(params.bottom_radius, "cup bottom radius must be positive")?;
    check_positive(params.top_radius, "cup top radius must be positive")?;
    check_positive(params.height, "cup height must be positive")?;

    let vertices = tube_strip(
        params.sectors,
        params.bottom_radius,
        params.top_radius,
        params.height,
    );
    Ok(Mesh::new("cup", vertices, Topology::TriangleStrip))
}

/// Latitude/longitude sphere with its poles on the Z axis.
pub fn sphere(params: &SphereParams) -> Result<Mesh> {
    check_segments(params.sectors)?;
    check_segments(params.stacks)?;
    check_positive(params.radius, "sphere radius must be positive")?;

    let SphereParams {
        sectors,
        stacks,
        radius,
    } = *params;
    let mut vertices = Vec::with_capacity(((stacks + 1) * (sectors + 1)) as usize);
    for i in 0..=stacks {
        let stack_angle = PI / 2.0 - i as f32 * PI / stacks as f32;
        let (sin_phi, cos_phi) = stack_angle.sin_cos();
        for j in 0..=sectors {
            let (sin_theta, cos_theta) = (j as f32 * TAU / sectors as f32).sin_cos();
            let normal = Vec3::new(cos_phi * cos_theta, cos_phi * sin_theta, sin_phi);
            vertices.push(Vertex::new(
                normal * radius,
                normal,
                Vec2::new(j as f32 / sectors as f32, i as f32 / stacks as f32),
            ));
        }
    }

    Mesh::indexed(
        "sphere",
        vertices,
        grid_indices(stacks, sectors),
        Topology::Triangles,
    )
}

/// Ring torus around the Z axis.
pub fn torus(params: &TorusParams) -> Result<Mesh> {
    check_segments(params.rings)?;
    check_segments(params.sides)?;
    check_positive(params.major_radius, "torus major radius must be positive")?;
    check_positive(params.minor_radius, "torus minor radius must be positive")?;

    let TorusParams {
        rings,
        sides,
        major_radius,
        minor_radius,
    } = *params;
    let mut vertices = Vec::with_capacity(((rings + 1) * (sides + 1)) as usize);
    for i in 0..=rings {
        let (sin_ring, cos_ring) = (i as f32 * TAU / rings as f32).sin_cos();
        for j in 0..=sides {
            let (sin_side, cos_side) = (j as f32 * TAU / sides as f32).sin_cos();
            let reach = major_radius + minor_radius * cos_side;
            vertices.push(Vertex::new(
                Vec3::new(reach * cos_ring, reach * sin_ring, minor_radius * sin_side),
                Vec3::new(cos_side * cos_ring, cos_side * sin_ring, sin_side),
                Vec2::new(j as f32 / sides as f32, i as f32 / rings as f32),
            ));
        }
    }

    Mesh::indexed(
        "torus",
        vertices,
        grid_indices(rings, sides),
        Topology::Triangles,
    )
}

/// Indexed open cylinder centred on the origin.
///
/// Each segment contributes a top and a bottom vertex; the last segment's
/// quad wraps back to the first pair, so no seam vertex is duplicated.
pub fn centered_cylinder(segments: u32, radius: f32, height: f32) -> Result<Mesh> {
    check_segments(segments)?;
    check_positive(radius, "cylinder radius must be positive")?;
    check_positive(height, "cylinder height must be positive")?;

    let half = height / 2.0;
    let mut vertices = Vec::with_capacity(segments as usize * 2);
    let mut indices = Vec::with_capacity(segments as usize * 6);
    let wrap = segments * 2;
    for i in 0..segments {
        let u = i as f32 / segments as f32;
        let (sin, cos) = (u * TAU).sin_cos();
        let normal = Vec3::new(cos, 0.0, sin);
        vertices.push(Vertex::new(
            Vec3::new(radius * cos, half, radius * sin),
            normal,
            Vec2::new(u, 1.0),
        ));
        vertices.push(Vertex::new(
            Vec3::new(radius * cos, -half, radius * sin),
            normal,
            Vec2::new(u, 0.0),
        ));

        let top = i * 2;
        indices.extend_from_slice(&[
            top,
            top + 1,
            (top + 2) % wrap,
            (top + 1) % wrap,
            (top + 2) % wrap,
            (top + 3) % wrap,
        ]);
    }

    Mesh::indexed("cylinder", vertices, indices, Topology::Triangles)
}

/// Indexed sphere with its poles on the Y axis, polar angle measured from +Y.
pub fn polar_sphere(segments: u32, radius: f32) -> Result<Mesh> {
    check_segments(segments)?;
    check_positive(radius, "sphere radius must be positive")?;

    let mut vertices = Vec::with_capacity(((segments + 1) * (segments + 1)) as usize);
    for i in 0..=segments {
        let v = i as f32 / segments as f32;
        let (sin_theta, cos_theta) = (v * PI).sin_cos();
        for j in 0..=segments {
            let u = j as f32 / segments as f32;
            let (sin_phi, cos_phi) = (u * TAU).sin_cos();
            let normal = Vec3::new(sin_theta * cos_phi, cos_theta, sin_theta * sin_phi);
            vertices.push(Vertex::new(normal * radius, normal, Vec2::new(u, 1.0 - v)));
        }
    }

    Mesh::indexed(
        "sphere",
        vertices,
        grid_indices(segments, segments),
        Topology::Triangles,
    )
}
