//! Core rendering engine.
//!
//! The [`Engine`] struct is the main entry point for the demos. It owns the
//! scene, the camera and the renderer, turns a frame of input into state
//! changes and draws the scene into the color buffer.

use log::{info, warn};

use crate::camera::{Camera, CameraController};
use crate::colors;
use crate::math::Vec2;
use crate::projection::{Projection, ProjectionMode};
use crate::render::{FrameStats, Renderer};
use crate::scene::{Scene, Shading};
use crate::shader::{LampShader, LitTextureShader, TextureShader, Transforms};
use crate::texture::WrapMode;
use crate::window::{InputState, Key};

/// Amount `]` and `[` add to or remove from both uv scale components per frame.
pub const UV_SCALE_STEP: f32 = 0.1;

const WRAP_KEYS: [(Key, WrapMode); 4] = [
    (Key::Num1, WrapMode::Repeat),
    (Key::Num2, WrapMode::MirroredRepeat),
    (Key::Num3, WrapMode::ClampToEdge),
    (Key::Num4, WrapMode::ClampToBorder),
];

pub struct Engine {
    renderer: Renderer,
    scene: Scene,
    camera: Camera,
    controller: CameraController,
    projection: Projection,
    wrap_mode: WrapMode,
}

impl Engine {
    pub fn new(width: u32, height: u32, scene: Scene) -> Self {
        let camera = Camera::new(scene.camera_start());
        let controller = CameraController::new(scene.mouse_look(), scene.controls().vertical);
        Self {
            renderer: Renderer::new(width, height),
            scene,
            camera,
            controller,
            projection: Projection::for_viewport(width, height),
            wrap_mode: WrapMode::default(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
        self.projection
            .set_aspect_ratio(width as f32 / height.max(1) as f32);
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap_mode
    }

    pub fn stats(&self) -> FrameStats {
        self.renderer.stats()
    }

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }

    /// Returns the rendered frame as packed ARGB pixels.
    pub fn color_buffer(&self) -> &[u32] {
        self.renderer.color_buffer()
    }

    /// Applies one frame of input and advances the light orbit.
    ///
    /// # Key Mapping
    /// - K/L: pause/resume the light orbit
    /// - P/O: perspective/orthographic (desk scene)
    /// - 1-4: repeat, mirrored repeat, clamp to edge, clamp to border
    ///   (milestone scene)
    /// - ]/[: grow/shrink the uv scale while held (milestone scene)
    ///
    /// Camera movement is handled by [`CameraController::update`].
    pub fn update(&mut self, input: &InputState, delta_time: f32) {
        self.controller.update(&mut self.camera, input, delta_time);

        if let Some(rig) = self.scene.light_rig_mut() {
            if input.is_held(Key::L) && !rig.is_orbiting() {
                rig.resume();
                info!("light orbit resumed");
            } else if input.is_held(Key::K) && rig.is_orbiting() {
                rig.pause();
                info!("light orbit paused");
            }
            rig.update(delta_time);
        }

        let controls = self.scene.controls();
        if controls.projection {
            self.update_projection(input);
        }
        if controls.texture {
            self.update_texture_controls(input);
        }
    }

    fn update_projection(&mut self, input: &InputState) {
        let mode = self.projection.mode();
        if input.is_held(Key::P) && mode != ProjectionMode::Perspective {
            self.projection.set_mode(ProjectionMode::Perspective);
            info!("projection: perspective");
        } else if input.is_held(Key::O) && mode != ProjectionMode::Orthographic {
            self.projection.set_mode(ProjectionMode::Orthographic);
            info!("projection: orthographic");
        }
    }

    fn update_texture_controls(&mut self, input: &InputState) {
        let picked = WRAP_KEYS
            .iter()
            .find(|(key, wrap)| input.is_held(*key) && *wrap != self.wrap_mode);
        if let Some(&(_, wrap)) = picked {
            self.wrap_mode = wrap;
            self.scene.set_wrap(wrap);
            info!("texture wrapping mode: {wrap:?}");
        }

        let step = if input.is_held(Key::RightBracket) {
            UV_SCALE_STEP
        } else if input.is_held(Key::LeftBracket) {
            -UV_SCALE_STEP
        } else {
            return;
        };
        let scale = self.scene.uv_scale() + Vec2::splat(step);
        self.scene.set_uv_scale(scale);
        info!("uv scale ({:.1}, {:.1})", scale.x, scale.y);
    }

    /// Renders the current frame
    pub fn render(&mut self) {
        self.renderer.clear(colors::BLACK);

        let view = self.camera.view_matrix();
        let projection = self.projection.matrix(self.camera.zoom());
        let view_position = self.camera.position();
        let uv_scale = self.scene.uv_scale();
        let scene = &self.scene;

        for object in scene.objects() {
            let (Some(mesh), Some(texture)) =
                (scene.mesh(&object.mesh), scene.texture(&object.texture))
            else {
                warn!("skipping {}: mesh or texture missing", object.name);
                continue;
            };
            let transforms = Transforms::new(object.model, view, projection);
            match scene.shading() {
                Shading::Lit => {
                    let shader = LitTextureShader::new(
                        &transforms,
                        view_position,
                        scene.lights(),
                        texture,
                        uv_scale,
                    );
                    self.renderer.draw(mesh, &shader);
                }
                Shading::Unlit => {
                    let shader = TextureShader::new(&transforms, texture, uv_scale);
                    self.renderer.draw(mesh, &shader);
                }
            }
        }

        if let Some(lamp) = scene.mesh("cube") {
            for light in scene.lights() {
                let transforms = Transforms::new(light.lamp_model(), view, projection);
                self.renderer
                    .draw(lamp, &LampShader::new(&transforms, light.color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::math::Vec3;
    use crate::texture::Texture;

    fn white(_: &str) -> Result<Texture> {
        Ok(Texture::solid(0xFFFFFFFF))
    }

    fn desk() -> Engine {
        Engine::new(64, 48, Scene::desk_with(white).unwrap())
    }

    fn milestone() -> Engine {
        Engine::new(48, 48, Scene::milestone_with(white).unwrap())
    }

    fn holding(keys: &[Key]) -> InputState {
        let mut input = InputState::new();
        for &key in keys {
            input.press(key);
        }
        input
    }

    #[test]
    fn camera_starts_where_the_scene_says() {
        assert_eq!(desk().camera().position(), Vec3::new(0.5, -3.0, 8.0));
        assert_eq!(milestone().camera().position(), Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn q_lifts_the_desk_camera_but_not_the_milestone_one() {
        let mut engine = desk();
        engine.update(&holding(&[Key::Q]), 1.0);
        approx::assert_relative_eq!(engine.camera().position().y, -3.0 + 2.5, epsilon = 1e-5);

        let mut engine = milestone();
        engine.update(&holding(&[Key::Q]), 1.0);
        assert_eq!(engine.camera().position(), Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn orthographic_toggle_round_trips() {
        let mut engine = desk();
        engine.update(&holding(&[Key::O]), 0.0);
        assert_eq!(engine.projection().mode(), ProjectionMode::Orthographic);
        engine.update(&holding(&[Key::P]), 0.0);
        assert_eq!(engine.projection().mode(), ProjectionMode::Perspective);
    }

    #[test]
    fn milestone_ignores_projection_keys() {
        let mut engine = milestone();
        engine.update(&holding(&[Key::O]), 0.0);
        assert_eq!(engine.projection().mode(), ProjectionMode::Perspective);
    }

    #[test]
    fn pausing_freezes_the_lights() {
        let mut engine = desk();
        engine.update(&holding(&[Key::K]), 0.0);
        let before = engine.scene().lights()[0].position;
        engine.update(&InputState::new(), 1.0);
        assert_eq!(engine.scene().lights()[0].position, before);

        engine.update(&holding(&[Key::L]), 1.0);
        assert_ne!(engine.scene().lights()[0].position, before);
    }

    #[test]
    fn wrap_keys_update_every_texture() {
        let mut engine = milestone();
        engine.update(&holding(&[Key::Num4]), 0.0);
        assert_eq!(engine.wrap_mode(), WrapMode::ClampToBorder);
        assert_eq!(
            engine.scene().texture("wood").unwrap().sampler().wrap,
            WrapMode::ClampToBorder
        );
    }

    #[test]
    fn brackets_step_the_uv_scale_each_frame() {
        let mut engine = milestone();
        let grow = holding(&[Key::RightBracket]);
        engine.update(&grow, 0.0);
        engine.update(&grow, 0.0);
        approx::assert_relative_eq!(engine.scene().uv_scale().x, 5.2, epsilon = 1e-5);

        engine.update(&holding(&[Key::LeftBracket]), 0.0);
        approx::assert_relative_eq!(engine.scene().uv_scale().y, 5.1, epsilon = 1e-5);
    }

    #[test]
    fn desk_frame_draws_objects_and_lamps() {
        let mut engine = desk();
        engine.render();
        let stats = engine.stats();
        assert_eq!(stats.draw_calls, 8 + 2);
        assert!(stats.fragments > 0);
        assert_eq!(engine.frame_buffer().len(), 64 * 48 * 4);
    }

    #[test]
    fn milestone_frame_covers_the_centre() {
        let mut engine = milestone();
        engine.render();
        assert_eq!(engine.stats().draw_calls, 3);
        let centre = engine.color_buffer()[24 * 48 + 24];
        assert_eq!(centre, 0xFFFFFFFF);
    }

    #[test]
    fn resize_reallocates_the_frame() {
        let mut engine = milestone();
        engine.resize(20, 10);
        engine.render();
        assert_eq!(engine.frame_buffer().len(), 20 * 10 * 4);
        approx::assert_relative_eq!(engine.projection().aspect_ratio(), 2.0);
    }
}
