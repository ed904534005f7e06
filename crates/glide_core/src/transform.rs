//! 3D transform values
//!
//! [`Matrix4`] blends by decomposing both endpoints into translation,
//! rotation and scale, blending each part with its own rule and composing
//! the result. Blending the raw matrix entries would shear and shrink
//! rotated content halfway through.

use crate::lerp::Lerp;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// 3D vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn dot(&self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Lerp for Vec3 {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        *a + (*b - *a) * t
    }
}

/// Rotation quaternion (x, y, z imaginary, w real)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` radians around `axis`
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let len = axis.length();
        if len == 0.0 {
            return Self::IDENTITY;
        }
        let half = angle * 0.5;
        let s = half.sin() / len;
        Self::new(axis.x * s, axis.y * s, axis.z * s, half.cos())
    }

    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn dot(&self, other: &Quaternion) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(
            self.x * factor,
            self.y * factor,
            self.z * factor,
            self.w * factor,
        )
    }

    pub fn add(&self, other: &Quaternion) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }

    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            Self::IDENTITY
        } else {
            self.scaled(1.0 / len)
        }
    }

    /// Extract the rotation of an orthonormal 3x3 matrix given as `m[row][col]`
    fn from_rotation_matrix(m: [[f32; 3]; 3]) -> Self {
        let trace = m[0][0] + m[1][1] + m[2][2];
        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self::new(
                (m[2][1] - m[1][2]) / s,
                (m[0][2] - m[2][0]) / s,
                (m[1][0] - m[0][1]) / s,
                0.25 * s,
            )
        } else if m[0][0] >= m[1][1] && m[0][0] >= m[2][2] {
            let s = (1.0 + m[0][0] - m[1][1] - m[2][2]).sqrt() * 2.0;
            Self::new(
                0.25 * s,
                (m[0][1] + m[1][0]) / s,
                (m[0][2] + m[2][0]) / s,
                (m[2][1] - m[1][2]) / s,
            )
        } else if m[1][1] > m[2][2] {
            let s = (1.0 + m[1][1] - m[0][0] - m[2][2]).sqrt() * 2.0;
            Self::new(
                (m[0][1] + m[1][0]) / s,
                0.25 * s,
                (m[1][2] + m[2][1]) / s,
                (m[0][2] - m[2][0]) / s,
            )
        } else {
            let s = (1.0 + m[2][2] - m[0][0] - m[1][1]).sqrt() * 2.0;
            Self::new(
                (m[0][2] + m[2][0]) / s,
                (m[1][2] + m[2][1]) / s,
                0.25 * s,
                (m[1][0] - m[0][1]) / s,
            )
        }
    }

    /// Rotation matrix as `m[row][col]`
    fn to_rotation_matrix(self) -> [[f32; 3]; 3] {
        let Quaternion { x, y, z, w } = self;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        [
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz), 2.0 * (xz + wy)],
            [2.0 * (xy + wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx)],
            [2.0 * (xz - wy), 2.0 * (yz + wx), 1.0 - 2.0 * (xx + yy)],
        ]
    }
}

impl Lerp for Quaternion {
    /// Normalized linear blend along the shorter arc
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        let b = if a.dot(b) < 0.0 { b.scaled(-1.0) } else { *b };
        a.scaled(1.0 - t).add(&b.scaled(t)).normalized()
    }
}

/// 4x4 transformation matrix (column-major)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix4 {
    pub cols: [[f32; 4]; 4],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4 {
    pub const IDENTITY: Matrix4 = Matrix4 {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3] = [x, y, z, 1.0];
        m
    }

    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        Self {
            cols: [
                [x, 0.0, 0.0, 0.0],
                [0.0, y, 0.0, 0.0],
                [0.0, 0.0, z, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Rotation around the Z axis (the 2D rotation)
    pub fn rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            cols: [
                [c, s, 0.0, 0.0],
                [-s, c, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    pub fn rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            cols: [
                [c, 0.0, -s, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [s, 0.0, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    pub fn rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, c, s, 0.0],
                [0.0, -s, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Entry at `row`, `col`
    #[inline]
    pub fn entry(&self, row: usize, col: usize) -> f32 {
        self.cols[col][row]
    }

    /// Multiply two matrices (`self * other`, so `other` applies first)
    pub fn mul(&self, other: &Matrix4) -> Matrix4 {
        let mut result = [[0.0f32; 4]; 4];
        for (col, out) in result.iter_mut().enumerate() {
            for (row, value) in out.iter_mut().enumerate() {
                *value = (0..4)
                    .map(|k| self.cols[k][row] * other.cols[col][k])
                    .sum();
            }
        }
        Matrix4 { cols: result }
    }

    pub fn get_translation(&self) -> Vec3 {
        Vec3::new(self.cols[3][0], self.cols[3][1], self.cols[3][2])
    }

    fn determinant_3x3(&self) -> f32 {
        let c0 = Vec3::new(self.cols[0][0], self.cols[0][1], self.cols[0][2]);
        let c1 = Vec3::new(self.cols[1][0], self.cols[1][1], self.cols[1][2]);
        let c2 = Vec3::new(self.cols[2][0], self.cols[2][1], self.cols[2][2]);
        c0.dot(c1.cross(c2))
    }

    /// Split an affine matrix into translation, rotation and scale.
    ///
    /// A negative determinant is folded into the X scale.
    pub fn decompose(&self) -> (Vec3, Quaternion, Vec3) {
        let translation = self.get_translation();

        let column = |c: usize| Vec3::new(self.cols[c][0], self.cols[c][1], self.cols[c][2]);
        let mut sx = column(0).length();
        let sy = column(1).length();
        let sz = column(2).length();
        if self.determinant_3x3() < 0.0 {
            sx = -sx;
        }
        let scale = Vec3::new(sx, sy, sz);

        let inv = |s: f32| if s == 0.0 { 0.0 } else { 1.0 / s };
        let (ix, iy, iz) = (inv(sx), inv(sy), inv(sz));
        let rotation = [
            [self.entry(0, 0) * ix, self.entry(0, 1) * iy, self.entry(0, 2) * iz],
            [self.entry(1, 0) * ix, self.entry(1, 1) * iy, self.entry(1, 2) * iz],
            [self.entry(2, 0) * ix, self.entry(2, 1) * iy, self.entry(2, 2) * iz],
        ];

        (
            translation,
            Quaternion::from_rotation_matrix(rotation),
            scale,
        )
    }

    /// Build `T * R * S` from its parts
    pub fn compose(translation: Vec3, rotation: Quaternion, scale: Vec3) -> Self {
        let r = rotation.to_rotation_matrix();
        let s = [scale.x, scale.y, scale.z];
        let mut cols = [[0.0f32; 4]; 4];
        for (c, col) in cols.iter_mut().take(3).enumerate() {
            col[0] = r[0][c] * s[c];
            col[1] = r[1][c] * s[c];
            col[2] = r[2][c] * s[c];
            col[3] = 0.0;
        }
        cols[3] = [translation.x, translation.y, translation.z, 1.0];
        Matrix4 { cols }
    }
}

impl Lerp for Matrix4 {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        if t == 0.0 {
            return *a;
        }
        if t == 1.0 {
            return *b;
        }
        let (a_translation, a_rotation, a_scale) = a.decompose();
        let (b_translation, b_rotation, b_scale) = b.decompose();
        Matrix4::compose(
            Vec3::lerp(&a_translation, &b_translation, t),
            Quaternion::lerp(&a_rotation, &b_rotation, t),
            Vec3::lerp(&a_scale, &b_scale, t),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_matrix_near(a: &Matrix4, b: &Matrix4) {
        for col in 0..4 {
            for row in 0..4 {
                let (x, y) = (a.cols[col][row], b.cols[col][row]);
                assert!((x - y).abs() < 1e-4, "entry ({row}, {col}): {x} != {y}");
            }
        }
    }

    #[test]
    fn translation_only_blend_keeps_rotation_and_scale() {
        let a = Matrix4::IDENTITY;
        let b = Matrix4::translation(10.0, 0.0, 0.0);
        let mid = Matrix4::lerp(&a, &b, 0.5);
        assert_matrix_near(&mid, &Matrix4::translation(5.0, 0.0, 0.0));

        let (translation, rotation, scale) = mid.decompose();
        assert_eq!(translation, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(rotation, Quaternion::IDENTITY);
        assert_eq!(scale, Vec3::ONE);
    }

    #[test]
    fn compose_inverts_decompose() {
        let m = Matrix4::translation(3.0, -2.0, 1.0)
            .mul(&Matrix4::rotation_z(0.7))
            .mul(&Matrix4::scale(2.0, 3.0, 1.0));
        let (t, r, s) = m.decompose();
        assert_matrix_near(&Matrix4::compose(t, r, s), &m);
    }

    #[test]
    fn rotation_blend_stays_rigid() {
        let a = Matrix4::IDENTITY;
        let b = Matrix4::rotation_z(FRAC_PI_2);
        let mid = Matrix4::lerp(&a, &b, 0.5);
        assert_matrix_near(&mid, &Matrix4::rotation_z(FRAC_PI_2 / 2.0));

        // Naive entry blending would shrink the basis vectors to ~0.707.
        let (_, _, scale) = mid.decompose();
        assert!((scale.x - 1.0).abs() < 1e-5);
        assert!((scale.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn endpoints_are_returned_unchanged() {
        let a = Matrix4::rotation_x(0.3);
        let b = Matrix4::scale(2.0, 2.0, 2.0);
        assert_eq!(Matrix4::lerp(&a, &b, 0.0), a);
        assert_eq!(Matrix4::lerp(&a, &b, 1.0), b);
    }

    #[test]
    fn quaternion_takes_shorter_arc() {
        let a = Quaternion::IDENTITY;
        let b = Quaternion::IDENTITY.scaled(-1.0);
        let mid = Quaternion::lerp(&a, &b, 0.5);
        assert!((mid.w.abs() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn multiplication_applies_right_operand_first() {
        let m = Matrix4::translation(1.0, 0.0, 0.0).mul(&Matrix4::scale(2.0, 2.0, 2.0));
        assert_eq!(m.get_translation(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(m.entry(0, 0), 2.0);
    }
}
