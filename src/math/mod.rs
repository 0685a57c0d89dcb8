//! Minimal linear algebra for the pipeline.
//!
//! Vectors are column vectors multiplied on the right of a [`mat4::Mat4`],
//! and the world is right-handed with +Y up, matching the conventions the
//! scenes were authored in.

pub mod mat4;
pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use mat4::Mat4;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
