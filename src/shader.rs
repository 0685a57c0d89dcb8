//! Shader programs for the software pipeline.
//!
//! A GPU pipeline separates the fixed-function stages (clipping, rasterization,
//! depth test) from the programmable vertex and fragment stages. Here the
//! programmable part is a [`ShaderProgram`] implementation:
//!
//! - `vertex` runs once per mesh vertex and returns a clip-space position plus
//!   a [`Varying`] bundle
//! - the rasterizer interpolates varyings across each triangle
//! - `fragment` turns an interpolated varying into a packed color
//!
//! The varying type is associated with the program, so the two stages of a
//! program always agree on their interface.

use log::warn;

use crate::colors;
use crate::light::PointLight;
use crate::math::{Mat4, Vec2, Vec3, Vec4};
use crate::mesh::Vertex;
use crate::texture::Texture;

/// Per-vertex outputs interpolated across a triangle.
pub trait Varying: Copy {
    /// Weighted sum of three varyings. Weights sum to one.
    fn weighted(v: [&Self; 3], weights: [f32; 3]) -> Self;

    /// Linear blend from `self` (t = 0) to `other` (t = 1).
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Varying for () {
    #[inline]
    fn weighted(_v: [&Self; 3], _weights: [f32; 3]) -> Self {}

    #[inline]
    fn lerp(&self, _other: &Self, _t: f32) -> Self {}
}

impl Varying for Vec2 {
    #[inline]
    fn weighted(v: [&Self; 3], w: [f32; 3]) -> Self {
        *v[0] * w[0] + *v[1] * w[1] + *v[2] * w[2]
    }

    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        *self + (*other - *self) * t
    }
}

impl Varying for Vec3 {
    #[inline]
    fn weighted(v: [&Self; 3], w: [f32; 3]) -> Self {
        *v[0] * w[0] + *v[1] * w[1] + *v[2] * w[2]
    }

    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec3::lerp(*self, *other, t)
    }
}

pub trait ShaderProgram {
    type Varying: Varying;

    /// Transforms one vertex to clip space.
    fn vertex(&self, vertex: &Vertex) -> (Vec4, Self::Varying);

    /// Shades one fragment, returning packed ARGB.
    fn fragment(&self, varying: &Self::Varying) -> u32;
}

/// Model, view and projection matrices for one draw call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transforms {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

impl Transforms {
    pub fn new(model: Mat4, view: Mat4, projection: Mat4) -> Self {
        Self {
            model,
            view,
            projection,
        }
    }

    pub fn mvp(&self) -> Mat4 {
        self.projection * self.view * self.model
    }

    /// Normal matrix of the model transform, identity if it cannot be inverted.
    pub fn normal_matrix(&self) -> Mat4 {
        self.model.normal_matrix().unwrap_or_else(|| {
            warn!("model matrix is singular, using identity for normals");
            Mat4::identity()
        })
    }
}

// =============================================================================
// Lit texture program
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub struct LitVarying {
    pub frag_pos: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

impl Varying for LitVarying {
    #[inline]
    fn weighted(v: [&Self; 3], w: [f32; 3]) -> Self {
        Self {
            frag_pos: Vec3::weighted([&v[0].frag_pos, &v[1].frag_pos, &v[2].frag_pos], w),
            normal: Vec3::weighted([&v[0].normal, &v[1].normal, &v[2].normal], w),
            uv: Vec2::weighted([&v[0].uv, &v[1].uv, &v[2].uv], w),
        }
    }

    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            frag_pos: self.frag_pos.lerp(other.frag_pos, t),
            normal: self.normal.lerp(other.normal, t),
            uv: Varying::lerp(&self.uv, &other.uv, t),
        }
    }
}

/// Phong lighting from every light, modulated by a texture.
pub struct LitTextureShader<'a> {
    mvp: Mat4,
    model: Mat4,
    normal_matrix: Mat4,
    view_position: Vec3,
    lights: &'a [PointLight],
    texture: &'a Texture,
    uv_scale: Vec2,
}

impl<'a> LitTextureShader<'a> {
    pub fn new(
        transforms: &Transforms,
        view_position: Vec3,
        lights: &'a [PointLight],
        texture: &'a Texture,
        uv_scale: Vec2,
    ) -> Self {
        Self {
            mvp: transforms.mvp(),
            model: transforms.model,
            normal_matrix: transforms.normal_matrix(),
            view_position,
            lights,
            texture,
            uv_scale,
        }
    }
}

impl ShaderProgram for LitTextureShader<'_> {
    type Varying = LitVarying;

    #[inline]
    fn vertex(&self, vertex: &Vertex) -> (Vec4, LitVarying) {
        let position = Vec4::point(vertex.position);
        let varying = LitVarying {
            frag_pos: (self.model * position).xyz(),
            normal: self.normal_matrix.transform_vector(vertex.normal),
            uv: vertex.uv,
        };
        (self.mvp * position, varying)
    }

    #[inline]
    fn fragment(&self, v: &LitVarying) -> u32 {
        let tex = self.texture.sample_rgb(v.uv.mul_elem(self.uv_scale));
        let normal = v.normal.normalize();

        let lighting = self
            .lights
            .iter()
            .fold(Vec3::ZERO, |acc, light| {
                acc + light.phong(v.frag_pos, normal, self.view_position)
            });
        // The texture color modulates the lit result twice.
        let phong = lighting.mul_elem(tex);
        colors::pack_rgb(phong.mul_elem(tex))
    }
}

// =============================================================================
// Unlit texture program
// =============================================================================

/// Texture color only, no lighting.
pub struct TextureShader<'a> {
    mvp: Mat4,
    texture: &'a Texture,
    uv_scale: Vec2,
}

impl<'a> TextureShader<'a> {
    pub fn new(transforms: &Transforms, texture: &'a Texture, uv_scale: Vec2) -> Self {
        Self {
            mvp: transforms.mvp(),
            texture,
            uv_scale,
        }
    }
}

impl ShaderProgram for TextureShader<'_> {
    type Varying = Vec2;

    #[inline]
    fn vertex(&self, vertex: &Vertex) -> (Vec4, Vec2) {
        (self.mvp * Vec4::point(vertex.position), vertex.uv)
    }

    #[inline]
    fn fragment(&self, uv: &Vec2) -> u32 {
        self.texture.sample(uv.mul_elem(self.uv_scale))
    }
}

// =============================================================================
// Lamp program
// =============================================================================

/// Flat color for the cube marking a light.
pub struct LampShader {
    mvp: Mat4,
    color: u32,
}

impl LampShader {
    pub fn new(transforms: &Transforms, color: Vec3) -> Self {
        Self {
            mvp: transforms.mvp(),
            color: colors::pack_rgb(color),
        }
    }
}

impl ShaderProgram for LampShader {
    type Varying = ();

    #[inline]
    fn vertex(&self, vertex: &Vertex) -> (Vec4, ()) {
        (self.mvp * Vec4::point(vertex.position), ())
    }

    #[inline]
    fn fragment(&self, _varying: &()) -> u32 {
        self.color
    }
}
