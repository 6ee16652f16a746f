//! Mass properties and centimeter-to-SI unit conversion

use serde::{Deserialize, Serialize};

use crate::constants::{CM3_TO_M3, CM_TO_M, FALLBACK_MASS, FALLBACK_VOLUME, KG_CM2_TO_KG_M2};
use crate::inertia::InertiaMatrix;

/// Physical properties as reported by a CAD host, in centimeter-based units
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RawPhysicalData {
    /// Mass in kg
    pub mass: f64,
    /// Volume in cm³
    pub volume: f64,
    /// Center of mass in cm
    pub center_of_mass: [f64; 3],
    /// Moments of inertia [Ixx, Iyy, Izz] in kg·cm²
    pub moments_of_inertia: [f64; 3],
    /// Products of inertia [Ixy, Ixz, Iyz] in kg·cm²
    #[serde(default)]
    pub products_of_inertia: [f64; 3],
}

/// Mass properties in SI units
#[derive(Debug, Clone, Copy)]
pub struct MassProperties {
    /// Mass in kg
    pub mass: f64,
    /// Center of mass in m
    pub center_of_mass: [f64; 3],
    /// Inertia tensor in kg·m²
    pub inertia: InertiaMatrix,
    /// Volume in m³
    pub volume: f64,
}

impl MassProperties {
    /// Convert host-reported centimeter-based values to SI units
    pub fn from_raw(raw: &RawPhysicalData) -> Self {
        Self {
            mass: raw.mass,
            center_of_mass: raw.center_of_mass.map(|c| c * CM_TO_M),
            inertia: InertiaMatrix {
                ixx: raw.moments_of_inertia[0] * KG_CM2_TO_KG_M2,
                ixy: raw.products_of_inertia[0] * KG_CM2_TO_KG_M2,
                ixz: raw.products_of_inertia[1] * KG_CM2_TO_KG_M2,
                iyy: raw.moments_of_inertia[1] * KG_CM2_TO_KG_M2,
                iyz: raw.products_of_inertia[2] * KG_CM2_TO_KG_M2,
                izz: raw.moments_of_inertia[2] * KG_CM2_TO_KG_M2,
            },
            volume: raw.volume * CM3_TO_M3,
        }
    }

    /// Substitute record used when a host cannot provide physical
    /// properties. A policy, not a defect: the batch continues with these
    /// values instead of aborting.
    pub fn fallback() -> Self {
        Self {
            mass: FALLBACK_MASS,
            center_of_mass: [0.0; 3],
            inertia: InertiaMatrix::default(),
            volume: FALLBACK_VOLUME,
        }
    }
}
