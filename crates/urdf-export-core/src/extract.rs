//! Per-component extraction over an occurrence source

use crate::mass::{MassProperties, RawPhysicalData};
use crate::pose::Pose;
use crate::transform::{Transform, TransformError};

/// A component instance within an assembly, as exposed by a host source.
/// The extractor depends only on this trait, not on any specific CAD SDK.
pub trait Occurrence {
    /// Occurrence name (unique within the assembly)
    fn name(&self) -> &str;

    /// Name of the base component this occurrence instantiates
    fn base_name(&self) -> &str;

    /// Transform relative to the assembly root, translation in centimeters
    fn transform(&self) -> Result<Transform, OccurrenceError>;

    /// Physical properties in centimeter-based units.
    /// `None` means the source exposes no physical data for this occurrence.
    fn physical_data(&self) -> Option<Result<RawPhysicalData, OccurrenceError>>;
}

/// Errors a host source can report for a single occurrence
#[derive(Debug, Clone, thiserror::Error)]
pub enum OccurrenceError {
    #[error("invalid transform: {0}")]
    Transform(#[from] TransformError),
    #[error("physical properties unavailable: {0}")]
    PhysicalProperties(String),
}

/// Extracted data for one component
#[derive(Debug, Clone)]
pub struct ComponentData {
    pub name: String,
    pub base_name: String,
    pub pose: Pose,
    pub mass: MassProperties,
}

/// An occurrence that was skipped, with the reason
#[derive(Debug, Clone)]
pub struct SkippedOccurrence {
    pub name: String,
    pub reason: String,
}

/// Result of an extraction run: successes plus skipped occurrences
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    pub components: Vec<ComponentData>,
    pub skipped: Vec<SkippedOccurrence>,
}

impl ExtractionReport {
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.skipped.is_empty()
    }
}

/// Extract pose and mass properties for every occurrence.
///
/// A failing transform skips that occurrence only; missing or failing
/// physical data substitutes [`MassProperties::fallback`]. Neither aborts
/// the batch.
pub fn extract<O: Occurrence>(occurrences: &[O]) -> ExtractionReport {
    let mut report = ExtractionReport::default();

    for occurrence in occurrences {
        let transform = match occurrence.transform() {
            Ok(transform) => transform,
            Err(error) => {
                tracing::warn!(
                    occurrence = occurrence.name(),
                    error = %error,
                    "skipping occurrence"
                );
                report.skipped.push(SkippedOccurrence {
                    name: occurrence.name().to_string(),
                    reason: error.to_string(),
                });
                continue;
            }
        };

        let mass = match occurrence.physical_data() {
            Some(Ok(raw)) => MassProperties::from_raw(&raw),
            Some(Err(error)) => {
                tracing::warn!(
                    occurrence = occurrence.name(),
                    error = %error,
                    "using fallback mass properties"
                );
                MassProperties::fallback()
            }
            None => MassProperties::fallback(),
        };

        if !mass.inertia.is_valid() {
            tracing::warn!(
                occurrence = occurrence.name(),
                "inertia tensor fails physical validity checks"
            );
        }

        report.components.push(ComponentData {
            name: occurrence.name().to_string(),
            base_name: occurrence.base_name().to_string(),
            pose: transform.decompose(),
            mass,
        });
    }

    report
}
