//! CAD Assembly Export Core Data Structures
//!
//! This crate contains the core logic for exporting a CAD assembly as URDF:
//! - Transform: rotation + translation in host units, decomposed into a Pose
//! - MassProperties: centimeter-based host values converted to SI units
//! - Occurrence: abstraction over component instances from any host source
//! - AssemblyFile: serialized occurrence lists (RON/JSON)
//! - Report/export: human-readable text and URDF XML output

pub mod assembly;
pub mod constants;
pub mod export;
pub mod extract;
pub mod inertia;
pub mod mass;
pub mod pose;
pub mod report;
pub mod transform;

pub use assembly::*;
pub use constants::*;
pub use export::*;
pub use extract::*;
pub use inertia::*;
pub use mass::*;
pub use pose::*;
pub use report::*;
pub use transform::*;
