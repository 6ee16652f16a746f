//! Component transforms and Euler angle decomposition

use glam::{DMat3, DVec3};

use crate::constants::{CM_TO_M, ROTATION_TOLERANCE};
use crate::pose::Pose;

/// Row-major 3x3 rotation matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix(pub [[f64; 3]; 3]);

impl RotationMatrix {
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    /// Build a rotation from roll/pitch/yaw angles, applied order Z·Y·X
    /// (roll about X first)
    pub fn from_rpy(roll: f64, pitch: f64, yaw: f64) -> Self {
        let m = DMat3::from_rotation_z(yaw)
            * DMat3::from_rotation_y(pitch)
            * DMat3::from_rotation_x(roll);
        Self::from_mat3(m)
    }

    /// Convert from a column-major glam matrix
    pub fn from_mat3(m: DMat3) -> Self {
        Self([
            [m.x_axis.x, m.y_axis.x, m.z_axis.x],
            [m.x_axis.y, m.y_axis.y, m.z_axis.y],
            [m.x_axis.z, m.y_axis.z, m.z_axis.z],
        ])
    }

    /// Convert to a column-major glam matrix
    pub fn to_mat3(&self) -> DMat3 {
        let r = &self.0;
        DMat3::from_cols(
            DVec3::new(r[0][0], r[1][0], r[2][0]),
            DVec3::new(r[0][1], r[1][1], r[2][1]),
            DVec3::new(r[0][2], r[1][2], r[2][2]),
        )
    }

    /// Check that this is a proper rotation (orthonormal, determinant +1)
    pub fn is_proper(&self, tolerance: f64) -> bool {
        let m = self.to_mat3();
        let delta = m * m.transpose() - DMat3::IDENTITY;
        let max_delta = delta
            .to_cols_array()
            .iter()
            .fold(0.0_f64, |acc, v| acc.max(v.abs()));
        max_delta <= tolerance && (m.determinant() - 1.0).abs() <= tolerance
    }
}

/// Rigid transform of a component occurrence relative to the assembly root.
/// Translation is in centimeters (host units).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub rotation: RotationMatrix,
    pub translation: DVec3,
}

impl Transform {
    pub fn new(rotation: RotationMatrix, translation: DVec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Parse a row-major 3x4 (12 elements) or 4x4 (16 elements) matrix.
    /// The last row of a 4x4 matrix is ignored.
    pub fn from_rows(elements: &[f64]) -> Result<Self, TransformError> {
        match elements.len() {
            12 | 16 => {}
            n => return Err(TransformError::ElementCount(n)),
        }

        let rotation = RotationMatrix([
            [elements[0], elements[1], elements[2]],
            [elements[4], elements[5], elements[6]],
            [elements[8], elements[9], elements[10]],
        ]);
        if !rotation.is_proper(ROTATION_TOLERANCE) {
            return Err(TransformError::ImproperRotation);
        }

        let translation = DVec3::new(elements[3], elements[7], elements[11]);
        Ok(Self::new(rotation, translation))
    }

    /// Decompose into position (meters) and roll/pitch/yaw (radians).
    ///
    /// Roll becomes numerically unstable when pitch approaches ±π/2 (both
    /// r32 and r33 vanish); no special-casing is applied.
    pub fn decompose(&self) -> Pose {
        let r = &self.rotation.0;

        let roll = r[2][1].atan2(r[2][2]);
        let pitch = (-r[2][0]).atan2((r[2][1] * r[2][1] + r[2][2] * r[2][2]).sqrt());
        let yaw = r[1][0].atan2(r[0][0]);

        Pose::new(
            [
                self.translation.x * CM_TO_M,
                self.translation.y * CM_TO_M,
                self.translation.z * CM_TO_M,
            ],
            [roll, pitch, yaw],
        )
    }
}

/// Transform parsing and validation errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransformError {
    #[error("expected 12 or 16 transform elements, got {0}")]
    ElementCount(usize),
    #[error("rotation part is not a proper rotation matrix")]
    ImproperRotation,
}
