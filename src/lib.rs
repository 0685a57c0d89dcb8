//! A CPU-rendered desk scene and texturing demo.
//!
//! Every frame runs a small programmable pipeline on the CPU: a vertex stage,
//! clipping in homogeneous space, edge-function rasterization with
//! perspective-correct interpolation and a depth buffer, then a fragment
//! stage. SDL2 is used only for the window, input and presenting the frame.
//!
//! # Quick Start
//!
//! ```ignore
//! use deskscene::prelude::*;
//!
//! let config = Config::desk();
//! let mut window = Window::new(&config.title, config.width, config.height)?;
//! let mut engine = Engine::new(config.width, config.height, Scene::desk(&config)?);
//! engine.render();
//! window.present(engine.frame_buffer())?;
//! ```

// Public API - exposed to library consumers
pub mod app;
pub mod camera;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod light;
pub mod logger;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod scene;
pub mod shader;
pub mod texture;
pub mod window;

// Internal modules - used within the crate only
pub(crate) mod clipper;
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use engine::Engine;
pub use error::{Error, Result};
pub use mesh::{Mesh, ShapeKind};
pub use projection::{Projection, ProjectionMode};
pub use scene::{Scene, Shading};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use deskscene::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::{Camera, CameraController, MouseLook};

    // Configuration
    pub use crate::config::{Args, Config};

    // Engine
    pub use crate::engine::Engine;
    pub use crate::error::{Error, Result};
    pub use crate::scene::{Scene, SceneObject, Shading};

    // Lighting & textures
    pub use crate::light::{LightRig, PointLight};
    pub use crate::texture::{Filter, Sampler, Texture, WrapMode};

    // Projection
    pub use crate::projection::{Projection, ProjectionMode};

    // Math
    pub use crate::math::{Mat4, Vec2, Vec3, Vec4};

    // Meshes
    pub use crate::mesh::{Mesh, ShapeKind, Topology, Vertex};

    // Window & Input
    pub use crate::window::{FrameLimiter, InputState, Key, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{EdgeFunctionRasterizer, FrameBuffer, Renderer, ScreenVertex};
}
