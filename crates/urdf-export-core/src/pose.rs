//! Pose output type

/// Position and orientation in SI units (meters, radians).
/// Derived from a component transform, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pose {
    pub xyz: [f64; 3],
    pub rpy: [f64; 3], // roll, pitch, yaw in radians
}

impl Pose {
    pub fn new(xyz: [f64; 3], rpy: [f64; 3]) -> Self {
        Self { xyz, rpy }
    }

    pub fn from_position(xyz: [f64; 3]) -> Self {
        Self { xyz, rpy: [0.0; 3] }
    }
}
