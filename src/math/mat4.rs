//! 4x4 transformation matrix.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * Vec`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//! - Projection matrices map view-space depth to the `[-1, 1]` NDC range of a
//!   right-handed, camera-looks-down-`-Z` setup
//!
//! # Example
//! ```ignore
//! let model = Mat4::translation(0.0, 1.0, 0.0) * Mat4::scaling(2.0, 2.0, 2.0);
//! let world = model.transform_point(vertex);  // scaled first, then moved
//! ```

use std::ops::Mul;

use super::vec3::Vec3;
use super::vec4::Vec4;

/// 4x4 matrix stored as `data[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub const fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub const fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn translation_vec(v: Vec3) -> Self {
        Self::translation(v.x, v.y, v.z)
    }

    pub fn scaling(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn scaling_uniform(s: f32) -> Self {
        Self::scaling(s, s, s)
    }

    /// Counter-clockwise rotation of `angle` radians about an arbitrary axis.
    ///
    /// The axis does not need to be normalized; a zero axis yields identity.
    pub fn rotation(angle: f32, axis: Vec3) -> Self {
        let len = axis.magnitude();
        if len <= f32::EPSILON {
            return Self::identity();
        }
        let a = axis / len;
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;

        Mat4::new([
            [
                t * a.x * a.x + c,
                t * a.x * a.y - s * a.z,
                t * a.x * a.z + s * a.y,
                0.0,
            ],
            [
                t * a.x * a.y + s * a.z,
                t * a.y * a.y + c,
                t * a.y * a.z - s * a.x,
                0.0,
            ],
            [
                t * a.x * a.z - s * a.y,
                t * a.y * a.z + s * a.x,
                t * a.z * a.z + c,
                0.0,
            ],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn rotation_x(angle: f32) -> Self {
        Self::rotation(angle, Vec3::X)
    }

    pub fn rotation_y(angle: f32) -> Self {
        Self::rotation(angle, Vec3::Y)
    }

    /// Right-handed perspective projection with `[-1, 1]` depth.
    ///
    /// `fov_y` is the vertical field of view in radians.
    pub fn perspective(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        Mat4::new([
            [f / aspect_ratio, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [
                0.0,
                0.0,
                (far + near) / (near - far),
                2.0 * far * near / (near - far),
            ],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// Right-handed orthographic projection with `[-1, 1]` depth.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Mat4::new([
            [2.0 / (right - left), 0.0, 0.0, -(right + left) / (right - left)],
            [0.0, 2.0 / (top - bottom), 0.0, -(top + bottom) / (top - bottom)],
            [0.0, 0.0, -2.0 / (far - near), -(far + near) / (far - near)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Right-handed view matrix looking from `eye` toward `target`.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize();
        let side = forward.cross(up).normalize();
        let up = side.cross(forward);

        Self::new([
            [side.x, side.y, side.z, -side.dot(eye)],
            [up.x, up.y, up.z, -up.dot(eye)],
            [-forward.x, -forward.y, -forward.z, forward.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn transpose(&self) -> Self {
        let mut out = [[0.0f32; 4]; 4];
        for (row, values) in self.data.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                out[col][row] = *value;
            }
        }
        Mat4::new(out)
    }

    /// Computes the inverse with Gauss-Jordan elimination and partial pivoting.
    /// Returns `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Mat4> {
        let mut m = self.data;
        let mut inv = Self::identity().data;

        for col in 0..4 {
            let pivot = (col..4)
                .max_by(|&a, &b| m[a][col].abs().total_cmp(&m[b][col].abs()))
                .unwrap_or(col);
            if m[pivot][col].abs() < 1e-8 {
                return None;
            }
            m.swap(col, pivot);
            inv.swap(col, pivot);

            let scale = 1.0 / m[col][col];
            for k in 0..4 {
                m[col][k] *= scale;
                inv[col][k] *= scale;
            }

            for row in 0..4 {
                if row == col {
                    continue;
                }
                let factor = m[row][col];
                if factor == 0.0 {
                    continue;
                }
                for k in 0..4 {
                    m[row][k] -= factor * m[col][k];
                    inv[row][k] -= factor * inv[col][k];
                }
            }
        }

        Some(Mat4::new(inv))
    }

    /// Inverse transpose of the upper 3x3 block, for transforming normals.
    ///
    /// Translation is dropped. Returns `None` when the linear part is singular.
    pub fn normal_matrix(&self) -> Option<Mat4> {
        let mut linear = *self;
        for i in 0..3 {
            linear.data[i][3] = 0.0;
            linear.data[3][i] = 0.0;
        }
        linear.data[3][3] = 1.0;
        linear.inverse().map(|inv| inv.transpose())
    }

    /// Transforms a point (w=1) and drops w without dividing.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        (*self * Vec4::point(p)).xyz()
    }

    /// Transforms a direction (w=0), ignoring translation.
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        (*self * Vec4::direction(v)).xyz()
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }
}

/// Matrix multiplication: `A * B` applies B first, then A.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for (row, out_row) in result.iter_mut().enumerate() {
            for (col, out) in out_row.iter_mut().enumerate() {
                *out = (0..4).map(|k| self.data[row][k] * rhs.data[k][col]).sum();
            }
        }

        Mat4::new(result)
    }
}

/// Transform a Vec4 by a matrix: Mat4 * Vec4 (column vector).
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Self::Output {
        let row = |r: usize| {
            self.data[r][0] * v.x
                + self.data[r][1] * v.y
                + self.data[r][2] * v.z
                + self.data[r][3] * v.w
        };
        Vec4::new(row(0), row(1), row(2), row(3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn assert_mat_eq(a: Mat4, b: Mat4) {
        for row in 0..4 {
            for col in 0..4 {
                assert_relative_eq!(a.get(row, col), b.get(row, col), epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn rotation_about_y_turns_x_into_negative_z() {
        let v = Mat4::rotation_y(FRAC_PI_2).transform_vector(Vec3::X);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn rotation_normalizes_axis() {
        let a = Mat4::rotation(0.7, Vec3::new(0.0, 5.0, 0.0));
        assert_mat_eq(a, Mat4::rotation_y(0.7));
    }

    #[test]
    fn inverse_undoes_transform() {
        let m = Mat4::translation(1.0, -2.0, 3.0)
            * Mat4::rotation(1.2, Vec3::new(1.0, -1.0, 1.0))
            * Mat4::scaling(2.0, 0.5, 1.5);
        let inv = m.inverse().expect("invertible");
        assert_mat_eq(m * inv, Mat4::identity());
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        assert!(Mat4::scaling(1.0, 0.0, 1.0).inverse().is_none());
    }

    #[test]
    fn normal_matrix_undoes_non_uniform_scale() {
        let n = Mat4::scaling(2.0, 1.0, 1.0).normal_matrix().expect("invertible");
        let normal = n.transform_vector(Vec3::new(1.0, 1.0, 0.0));
        assert_relative_eq!(normal.x, 0.5);
        assert_relative_eq!(normal.y, 1.0);
    }

    #[test]
    fn perspective_maps_near_and_far_to_ndc_bounds() {
        let p = Mat4::perspective(45f32.to_radians(), 4.0 / 3.0, 0.1, 100.0);
        let near = p * Vec4::new(0.0, 0.0, -0.1, 1.0);
        let far = p * Vec4::new(0.0, 0.0, -100.0, 1.0);
        assert_relative_eq!(near.z / near.w, -1.0, epsilon = 1e-4);
        assert_relative_eq!(far.z / far.w, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn orthographic_maps_bounds_to_unit_cube() {
        let o = Mat4::orthographic(-5.0, 5.0, -5.0, 5.0, 0.1, 100.0);
        let corner = o * Vec4::new(5.0, -5.0, -0.1, 1.0);
        assert_relative_eq!(corner.x, 1.0);
        assert_relative_eq!(corner.y, -1.0);
        assert_relative_eq!(corner.z, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn look_at_puts_target_on_negative_z() {
        let view = Mat4::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let origin = view.transform_point(Vec3::ZERO);
        assert_relative_eq!(origin.z, -5.0, epsilon = 1e-5);
        assert_relative_eq!(origin.x, 0.0, epsilon = 1e-5);
    }
}
