//! Free-fly camera
//!
//! # Coordinate System
//!
//! Right-handed, Y up. At yaw = -90° and pitch = 0° the camera looks down
//! the -Z axis, the way a GL view matrix expects.
//!
//! # Orientation
//!
//! Orientation is stored as yaw/pitch in degrees; the front/right/up basis is
//! recomputed whenever either angle changes.
//!
//! - **Yaw**: rotation around world Y, positive turns right
//! - **Pitch**: elevation, positive looks up, clamped to ±89°

use crate::math::{Mat4, Vec3};
use crate::window::{InputState, Key};

pub const YAW: f32 = -90.0;
pub const PITCH: f32 = 0.0;
pub const SPEED: f32 = 2.5;
pub const SENSITIVITY: f32 = 0.1;
pub const ZOOM: f32 = 45.0;

const PITCH_LIMIT: f32 = 89.0;
const ZOOM_MIN: f32 = 1.0;
const ZOOM_MAX: f32 = 45.0;

/// Planar movement directions for [`Camera::process_keyboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,

    /// Units per second.
    pub movement_speed: f32,
    /// Degrees per pixel of mouse motion.
    pub mouse_sensitivity: f32,
    zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, Vec3::Y, YAW, PITCH)
    }

    /// Creates a camera with explicit world up and yaw/pitch in degrees.
    pub fn with_orientation(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::new(0.0, 0.0, -1.0),
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
        };
        camera.update_vectors();
        camera
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.position + self.front, self.up)
    }

    pub fn process_keyboard(&mut self, direction: Movement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        let offset = match direction {
            Movement::Forward => self.front * velocity,
            Movement::Backward => self.front * -velocity,
            Movement::Left => self.right * -velocity,
            Movement::Right => self.right * velocity,
        };
        self.position += offset;
    }

    /// Moves along world Y regardless of where the camera looks.
    pub fn move_vertical(&mut self, amount: f32) {
        self.position += self.world_up * amount;
    }

    /// Applies a mouse offset in pixels; `dy` is positive when the mouse moves up.
    pub fn process_mouse_movement(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch = (self.pitch + dy * self.mouse_sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Scrolling up narrows the field of view.
    pub fn process_mouse_scroll(&mut self, dy: f32) {
        self.zoom = (self.zoom - dy).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }
}

// =============================================================================
// Camera Controller
// =============================================================================

/// When mouse motion turns the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseLook {
    #[default]
    Always,
    WhileRightButtonHeld,
}

/// Maps a frame of input onto camera calls.
#[derive(Debug, Clone, Default)]
pub struct CameraController {
    pub mouse_look: MouseLook,
    /// Whether Q/E move the camera along world Y.
    pub vertical_movement: bool,
}

impl CameraController {
    pub fn new(mouse_look: MouseLook, vertical_movement: bool) -> Self {
        Self {
            mouse_look,
            vertical_movement,
        }
    }

    /// # Input Mapping
    /// - W/S: forward/backward
    /// - A/D: strafe left/right
    /// - Q/E: up/down along world Y, when `vertical_movement` is set
    /// - Mouse: look around
    /// - Wheel: zoom
    pub fn update(&self, camera: &mut Camera, input: &InputState, delta_time: f32) {
        let moves = [
            (Key::W, Movement::Forward),
            (Key::S, Movement::Backward),
            (Key::A, Movement::Left),
            (Key::D, Movement::Right),
        ];
        for (key, movement) in moves {
            if input.is_held(key) {
                camera.process_keyboard(movement, delta_time);
            }
        }

        if self.vertical_movement {
            let vertical = camera.movement_speed * delta_time;
            if input.is_held(Key::Q) {
                camera.move_vertical(vertical);
            }
            if input.is_held(Key::E) {
                camera.move_vertical(-vertical);
            }
        }

        let looking = match self.mouse_look {
            MouseLook::Always => true,
            MouseLook::WhileRightButtonHeld => input.right_button,
        };
        let (dx, dy) = input.mouse_delta;
        if looking && (dx != 0.0 || dy != 0.0) {
            camera.process_mouse_movement(dx, dy);
        }

        if input.scroll != 0.0 {
            camera.process_mouse_scroll(input.scroll);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn camera_starts_looking_down_negative_z() {
        let camera = Camera::new(Vec3::ZERO);
        assert_relative_eq!(camera.front().z, -1.0, epsilon = 1e-5);
        assert_relative_eq!(camera.right().x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(camera.up().y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn yaw_turns_right() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_mouse_movement(900.0, 0.0); // 90 degrees
        assert_relative_eq!(camera.front().x, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_mouse_movement(0.0, 10_000.0);
        assert_relative_eq!(camera.pitch(), 89.0);
        camera.process_mouse_movement(0.0, -100_000.0);
        assert_relative_eq!(camera.pitch(), -89.0);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_mouse_scroll(-10.0);
        assert_relative_eq!(camera.zoom(), 45.0);
        camera.process_mouse_scroll(100.0);
        assert_relative_eq!(camera.zoom(), 1.0);
    }

    #[test]
    fn forward_moves_at_movement_speed() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_keyboard(Movement::Forward, 2.0);
        assert_relative_eq!(camera.position().z, -5.0, epsilon = 1e-5);
    }

    #[test]
    fn vertical_movement_ignores_pitch() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_mouse_movement(0.0, 300.0);
        camera.move_vertical(1.0);
        assert_eq!(camera.position(), Vec3::Y);
    }

    #[test]
    fn view_matrix_puts_origin_in_front() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0));
        let origin = camera.view_matrix().transform_point(Vec3::ZERO);
        assert_relative_eq!(origin.z, -5.0, epsilon = 1e-4);
    }

    #[test]
    fn controller_ignores_mouse_without_right_button() {
        let controller = CameraController::new(MouseLook::WhileRightButtonHeld, false);
        let mut camera = Camera::new(Vec3::ZERO);
        let mut input = InputState::new();
        input.add_mouse_motion(100, 0);
        controller.update(&mut camera, &input, 0.016);
        assert_relative_eq!(camera.yaw(), YAW);

        input.right_button = true;
        controller.update(&mut camera, &input, 0.016);
        assert_relative_eq!(camera.yaw(), YAW + 10.0);
    }

    #[test]
    fn controller_maps_q_to_up_and_e_to_down() {
        let controller = CameraController::new(MouseLook::Always, true);
        let mut camera = Camera::new(Vec3::ZERO);
        let mut input = InputState::new();
        input.press(Key::Q);
        controller.update(&mut camera, &input, 1.0);
        assert_relative_eq!(camera.position().y, SPEED);

        input.release(Key::Q);
        input.press(Key::E);
        controller.update(&mut camera, &input, 2.0);
        assert_relative_eq!(camera.position().y, -SPEED);
    }

    #[test]
    fn vertical_keys_do_nothing_when_disabled() {
        let controller = CameraController::new(MouseLook::Always, false);
        let mut camera = Camera::new(Vec3::ZERO);
        let mut input = InputState::new();
        input.press(Key::Q);
        input.press(Key::E);
        controller.update(&mut camera, &input, 1.0);
        assert_eq!(camera.position(), Vec3::ZERO);
    }
}
