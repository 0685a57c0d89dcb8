//! The software render pipeline.
//!
//! [`Renderer::draw`] plays the role of a GPU draw call: it runs a
//! [`ShaderProgram`](crate::shader::ShaderProgram) over a
//! [`Mesh`](crate::mesh::Mesh) and writes the result into the frame buffers.

mod framebuffer;
mod rasterizer;
mod renderer;

pub use framebuffer::{FrameBuffer, DEPTH_CLEAR};
pub use rasterizer::{EdgeFunctionRasterizer, ScreenVertex};
pub use renderer::{FrameStats, Renderer};
