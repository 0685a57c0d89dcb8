//! Point lights and their orbit animation.

use crate::math::{Mat4, Vec3};

/// Exponent of the specular term; larger means a tighter highlight.
pub const HIGHLIGHT_SIZE: f32 = 16.0;
pub const SPECULAR_INTENSITY: f32 = 0.1;
/// Uniform scale of the cube drawn at each light.
pub const LAMP_SCALE: f32 = 0.6;
/// Orbit speed around world Y, degrees per second.
pub const ORBIT_SPEED: f32 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub ambient_strength: f32,
    pub specular_intensity: f32,
}

impl PointLight {
    pub fn new(position: Vec3, color: Vec3, ambient_strength: f32) -> Self {
        Self {
            position,
            color,
            ambient_strength,
            specular_intensity: SPECULAR_INTENSITY,
        }
    }

    /// Warm orange key light.
    pub fn key() -> Self {
        Self::new(Vec3::new(-2.5, -0.5, 0.0), Vec3::new(1.0, 0.5, 0.0), 0.3)
    }

    /// White fill light.
    pub fn fill() -> Self {
        Self::new(Vec3::new(3.0, -2.0, 0.0), Vec3::ONE, 0.1)
    }

    /// Phong contribution of this light at a surface point.
    ///
    /// `normal` must be normalized. Returns `ambient + diffuse + specular`,
    /// not yet modulated by the surface color.
    pub fn phong(&self, frag_pos: Vec3, normal: Vec3, view_pos: Vec3) -> Vec3 {
        let ambient = self.color * self.ambient_strength;

        let light_dir = (self.position - frag_pos).normalize();
        let diffuse = self.color * normal.dot(light_dir).max(0.0);

        let view_dir = (view_pos - frag_pos).normalize();
        let reflect_dir = (-light_dir).reflect(normal);
        let spec = view_dir.dot(reflect_dir).max(0.0).powf(HIGHLIGHT_SIZE);
        let specular = self.color * (self.specular_intensity * spec);

        ambient + diffuse + specular
    }

    /// Model matrix of the lamp cube marking this light.
    pub fn lamp_model(&self) -> Mat4 {
        Mat4::translation_vec(self.position) * Mat4::scaling_uniform(LAMP_SCALE)
    }
}

/// The two lights of the desk scene, orbiting the world Y axis.
#[derive(Debug, Clone)]
pub struct LightRig {
    lights: Vec<PointLight>,
    orbiting: bool,
    /// Degrees per second.
    pub orbit_speed: f32,
}

impl Default for LightRig {
    fn default() -> Self {
        Self::new(vec![PointLight::key(), PointLight::fill()])
    }
}

impl LightRig {
    pub fn new(lights: Vec<PointLight>) -> Self {
        Self {
            lights,
            orbiting: true,
            orbit_speed: ORBIT_SPEED,
        }
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn is_orbiting(&self) -> bool {
        self.orbiting
    }

    pub fn pause(&mut self) {
        self.orbiting = false;
    }

    pub fn resume(&mut self) {
        self.orbiting = true;
    }

    /// Advances the orbit by `delta_time` seconds.
    pub fn update(&mut self, delta_time: f32) {
        if !self.orbiting {
            return;
        }
        let rotation = Mat4::rotation_y((self.orbit_speed * delta_time).to_radians());
        for light in &mut self.lights {
            light.position = rotation.transform_point(light.position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn facing_light_gets_full_diffuse() {
        let light = PointLight::new(Vec3::new(0.0, 5.0, 0.0), Vec3::ONE, 0.0);
        let lit = light.phong(Vec3::ZERO, Vec3::Y, Vec3::new(10.0, 0.0, 0.0));
        assert_relative_eq!(lit.x, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn back_facing_surface_gets_only_ambient() {
        let light = PointLight::key();
        let lit = light.phong(Vec3::ZERO, Vec3::Y, Vec3::new(0.0, 0.0, 5.0));
        // key light sits below the surface
        assert_relative_eq!(lit.x, 0.3, epsilon = 1e-5);
        assert_relative_eq!(lit.y, 0.15, epsilon = 1e-5);
        assert_relative_eq!(lit.z, 0.0);
    }

    #[test]
    fn mirror_view_adds_specular() {
        let light = PointLight::new(Vec3::new(-1.0, 1.0, 0.0), Vec3::ONE, 0.0);
        let normal = Vec3::Y;
        let lit = light.phong(Vec3::ZERO, normal, Vec3::new(1.0, 1.0, 0.0));
        let diffuse = std::f32::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(lit.x, diffuse + SPECULAR_INTENSITY, epsilon = 1e-4);
    }

    #[test]
    fn orbit_preserves_height_and_radius() {
        let mut rig = LightRig::default();
        rig.update(1.0);
        let key = rig.lights()[0].position;
        assert_relative_eq!(key.y, -0.5);
        assert_relative_eq!((key.x * key.x + key.z * key.z).sqrt(), 2.5, epsilon = 1e-5);
        assert_relative_eq!(key.z, 2.5 * 45f32.to_radians().sin(), epsilon = 1e-5);
    }

    #[test]
    fn paused_rig_stays_put() {
        let mut rig = LightRig::default();
        rig.pause();
        rig.update(1.0);
        assert_eq!(rig.lights()[1].position, Vec3::new(3.0, -2.0, 0.0));
        rig.resume();
        assert!(rig.is_orbiting());
    }
}
