//! The two hardcoded scenes: the desk and the texturing milestone.
//!
//! A [`Scene`] owns every mesh and texture it draws, keyed by name, plus the
//! list of objects that pair a mesh with a texture and a model matrix. It is
//! built once at startup and drawn every frame.

use std::collections::HashMap;

use log::{debug, info};

use crate::camera::MouseLook;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::light::{LightRig, PointLight};
use crate::math::{Mat4, Vec2, Vec3};
use crate::mesh::{parametric, shapes, Mesh, ShapeKind};
use crate::texture::{Texture, WrapMode};

/// How objects are shaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shading {
    /// Phong lighting from the scene lights, modulated by the texture.
    #[default]
    Lit,
    /// Texture color only.
    Unlit,
}

/// Which runtime toggles a scene responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    /// `P`/`O` switch between perspective and orthographic.
    pub projection: bool,
    /// `1`-`4` pick the wrap mode, `]`/`[` grow and shrink the uv scale.
    pub texture: bool,
    /// `Q`/`E` move the camera up and down.
    pub vertical: bool,
}

/// One draw: a mesh, the texture bound for it and its model matrix.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub mesh: String,
    pub texture: String,
    pub model: Mat4,
}

pub struct Scene {
    meshes: HashMap<String, Mesh>,
    textures: HashMap<String, Texture>,
    objects: Vec<SceneObject>,
    lights: Option<LightRig>,
    shading: Shading,
    controls: Controls,
    uv_scale: Vec2,
    camera_start: Vec3,
    mouse_look: MouseLook,
}

impl Scene {
    pub fn new(shading: Shading) -> Self {
        Self {
            meshes: HashMap::new(),
            textures: HashMap::new(),
            objects: Vec::new(),
            lights: None,
            shading,
            controls: Controls::default(),
            uv_scale: Vec2::ONE,
            camera_start: Vec3::new(0.0, 0.0, 3.0),
            mouse_look: MouseLook::default(),
        }
    }

    /// The final desk scene, textures loaded from the configured directory.
    pub fn desk(config: &Config) -> Result<Self> {
        Self::desk_with(|name| Texture::from_file(config.texture_path(name)))
    }

    /// The desk scene with textures supplied by `load`.
    pub fn desk_with<F>(mut load: F) -> Result<Self>
    where
        F: FnMut(&str) -> Result<Texture>,
    {
        let mut scene = Scene::new(Shading::Lit);
        scene.lights = Some(LightRig::default());
        scene.controls = Controls {
            projection: true,
            texture: false,
            vertical: true,
        };
        scene.camera_start = Vec3::new(0.5, -3.0, 8.0);
        scene.mouse_look = MouseLook::Always;

        for kind in ShapeKind::ALL {
            scene.add_mesh(kind.name(), Mesh::build(kind)?);
        }
        for name in ["desk", "wood", "speaker", "snow", "laptop", "rubik", "cup", "silver"] {
            scene.add_texture(name, load(name)?);
        }

        // Angles passed as bare numbers are radians.
        let cylinder = Mat4::translation(-1.0, -5.25, 2.0);
        let objects = [
            ("desk", "plane", "desk", Mat4::scaling_uniform(10.0)),
            ("pencil holder", "cylinder", "wood", cylinder),
            (
                "speaker",
                "cylinder",
                "speaker",
                Mat4::scaling_uniform(1.5)
                    * Mat4::rotation(90.0, Vec3::new(1.0, -1.0, 1.0))
                    * Mat4::translation(0.0, 0.0, 3.0),
            ),
            (
                "snow globe",
                "sphere",
                "snow",
                cylinder * Mat4::translation(0.0, 0.75, 0.0),
            ),
            (
                "laptop",
                "prism",
                "laptop",
                Mat4::rotation_x(90f32.to_radians())
                    * Mat4::translation(0.75, 1.0, 5.0)
                    * Mat4::scaling(2.0, 2.0, 1.0),
            ),
            (
                "rubik's cube",
                "cube",
                "rubik",
                Mat4::translation(0.25, -4.6, 0.75)
                    * Mat4::scaling_uniform(0.5)
                    * Mat4::rotation_y(90.0),
            ),
            (
                "cup",
                "cup",
                "cup",
                Mat4::translation(1.5, -5.0, -0.5) * Mat4::rotation_y(90.0),
            ),
            (
                "ring",
                "torus",
                "silver",
                Mat4::translation(-2.0, -4.95, -1.0)
                    * Mat4::rotation_x(90f32.to_radians())
                    * Mat4::scaling_uniform(0.3),
            ),
        ];
        for (name, mesh, texture, model) in objects {
            scene.add_object(name, mesh, texture, model)?;
        }

        info!(
            "desk scene ready: {} objects, {} lights",
            scene.objects.len(),
            scene.lights().len()
        );
        Ok(scene)
    }

    /// The texturing milestone, textures loaded from the configured directory.
    pub fn milestone(config: &Config) -> Result<Self> {
        Self::milestone_with(|name| Texture::from_file(config.texture_path(name)))
    }

    /// The texturing milestone with textures supplied by `load`.
    pub fn milestone_with<F>(mut load: F) -> Result<Self>
    where
        F: FnMut(&str) -> Result<Texture>,
    {
        let mut scene = Scene::new(Shading::Unlit);
        scene.controls = Controls {
            projection: false,
            texture: true,
            vertical: false,
        };
        scene.uv_scale = Vec2::splat(5.0);
        scene.camera_start = Vec3::new(0.0, 0.0, 3.0);
        scene.mouse_look = MouseLook::WhileRightButtonHeld;

        scene.add_mesh("cylinder", parametric::centered_cylinder(30, 0.5, 1.0)?);
        scene.add_mesh("sphere", parametric::polar_sphere(30, 0.5)?);
        scene.add_mesh("plane", shapes::ground_plane());
        for name in ["wood", "glass", "desk"] {
            scene.add_texture(name, load(name)?);
        }

        let tilt = Mat4::rotation(45.0, Vec3::new(0.5, -0.5, 0.0));
        let cylinder = tilt * Mat4::scaling(2.0, 2.0, 1.0);
        let sphere =
            cylinder * Mat4::translation(0.0, 0.75, 0.0) * Mat4::scaling_uniform(1.5);
        let plane = Mat4::translation(0.0, -1.0, 0.0) * tilt * Mat4::scaling_uniform(5.0);

        scene.add_object("cylinder", "cylinder", "wood", cylinder)?;
        scene.add_object("sphere", "sphere", "glass", sphere)?;
        scene.add_object("plane", "plane", "desk", plane)?;

        info!("milestone scene ready: {} objects", scene.objects.len());
        Ok(scene)
    }

    pub fn add_mesh(&mut self, name: impl Into<String>, mesh: Mesh) {
        let name = name.into();
        debug!(
            "mesh {name}: {} vertices, {} indices",
            mesh.vertex_count(),
            mesh.index_count()
        );
        self.meshes.insert(name, mesh);
    }

    pub fn add_texture(&mut self, name: impl Into<String>, texture: Texture) {
        self.textures.insert(name.into(), texture);
    }

    /// Adds a draw of mesh `mesh` with texture `texture`.
    ///
    /// Both must already be registered.
    pub fn add_object(
        &mut self,
        name: &str,
        mesh: &str,
        texture: &str,
        model: Mat4,
    ) -> Result<()> {
        if !self.meshes.contains_key(mesh) {
            return Err(Error::UnknownMesh(mesh.to_string()));
        }
        if !self.textures.contains_key(texture) {
            return Err(Error::UnknownTexture(texture.to_string()));
        }
        self.objects.push(SceneObject {
            name: name.to_string(),
            mesh: mesh.to_string(),
            texture: texture.to_string(),
            model,
        });
        Ok(())
    }

    pub fn mesh(&self, name: &str) -> Option<&Mesh> {
        self.meshes.get(name)
    }

    pub fn texture(&self, name: &str) -> Option<&Texture> {
        self.textures.get(name)
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Lights of the scene; empty for an unlit scene.
    pub fn lights(&self) -> &[PointLight] {
        self.lights.as_ref().map_or(&[], |rig| rig.lights())
    }

    pub fn light_rig_mut(&mut self) -> Option<&mut LightRig> {
        self.lights.as_mut()
    }

    pub fn shading(&self) -> Shading {
        self.shading
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub fn uv_scale(&self) -> Vec2 {
        self.uv_scale
    }

    pub fn set_uv_scale(&mut self, uv_scale: Vec2) {
        self.uv_scale = uv_scale;
    }

    pub fn camera_start(&self) -> Vec3 {
        self.camera_start
    }

    pub fn mouse_look(&self) -> MouseLook {
        self.mouse_look
    }

    /// Applies `wrap` to every texture of the scene.
    pub fn set_wrap(&mut self, wrap: WrapMode) {
        for texture in self.textures.values_mut() {
            texture.set_wrap(wrap);
        }
    }
}
