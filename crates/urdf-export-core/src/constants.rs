//! Global constants for urdf-export-core

/// Centimeters to meters (length)
pub const CM_TO_M: f64 = 0.01;

/// Cubic centimeters to cubic meters (volume)
pub const CM3_TO_M3: f64 = 1e-6;

/// kg·cm² to kg·m² (moments and products of inertia)
pub const KG_CM2_TO_KG_M2: f64 = 1e-4;

/// Substitute mass when a host cannot provide physical properties (kg)
pub const FALLBACK_MASS: f64 = 0.1;

/// Substitute volume when a host cannot provide physical properties (m³)
pub const FALLBACK_VOLUME: f64 = 0.001;

/// Per-element tolerance when checking that a rotation matrix is orthonormal
pub const ROTATION_TOLERANCE: f64 = 1e-5;
