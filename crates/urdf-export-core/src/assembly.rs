//! Assembly description files
//!
//! A serialized form of the host assembly tree: a flat list of component
//! occurrences with their transforms and optional physical properties.
//! Supports RON and JSON, selected by file extension.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::extract::{Occurrence, OccurrenceError};
use crate::mass::RawPhysicalData;
use crate::transform::Transform;

/// A serialized CAD assembly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyFile {
    /// Assembly name
    pub name: String,
    /// Component occurrences, transforms relative to the assembly root
    pub components: Vec<ComponentRecord>,
}

/// One component occurrence as stored in an assembly file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// Occurrence name (unique within the assembly)
    pub name: String,
    /// Base component name
    pub component: String,
    /// Row-major 3x4 or 4x4 transform, translation in centimeters
    pub transform: Vec<f64>,
    /// Physical properties in centimeter-based units, if the source had them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical: Option<RawPhysicalData>,
}

impl AssemblyFile {
    /// Load an assembly from a RON or JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssemblyFileError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| AssemblyFileError::Io(e.to_string()))?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("ron") => {
                ron::from_str(&content).map_err(|e| AssemblyFileError::Deserialize(e.to_string()))
            }
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| AssemblyFileError::Deserialize(e.to_string())),
            other => Err(AssemblyFileError::UnsupportedFormat(
                other.unwrap_or("").to_string(),
            )),
        }
    }
}

impl Occurrence for ComponentRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn base_name(&self) -> &str {
        &self.component
    }

    fn transform(&self) -> Result<Transform, OccurrenceError> {
        Ok(Transform::from_rows(&self.transform)?)
    }

    fn physical_data(&self) -> Option<Result<RawPhysicalData, OccurrenceError>> {
        self.physical.map(Ok)
    }
}

/// Assembly file errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum AssemblyFileError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("Unsupported assembly format: {0:?} (expected .ron or .json)")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const RON_ASSEMBLY: &str = r#"(
    name: "arm",
    components: [
        (
            name: "base:1",
            component: "base",
            transform: [
                1.0, 0.0, 0.0, 100.0,
                0.0, 1.0, 0.0, 200.0,
                0.0, 0.0, 1.0, 300.0,
            ],
            physical: Some((
                mass: 0.5,
                volume: 125.0,
                center_of_mass: (1.0, 2.0, 3.0),
                moments_of_inertia: (10.0, 10.0, 10.0),
                products_of_inertia: (0.0, 0.0, 0.0),
            )),
        ),
        (
            name: "link:1",
            component: "link",
            transform: [
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
            ],
        ),
    ],
)"#;

    const JSON_ASSEMBLY: &str = r#"{
    "name": "arm",
    "components": [
        {
            "name": "base:1",
            "component": "base",
            "transform": [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0]
        }
    ]
}"#;

    #[test]
    fn test_load_ron() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("arm.ron");
        fs::write(&path, RON_ASSEMBLY).unwrap();

        let assembly = AssemblyFile::load(&path).unwrap();
        assert_eq!(assembly.name, "arm");
        assert_eq!(assembly.components.len(), 2);
        assert_eq!(assembly.components[0].name, "base:1");
        assert!(assembly.components[0].physical.is_some());
        assert!(assembly.components[1].physical.is_none());
    }

    #[test]
    fn test_load_json() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("arm.json");
        fs::write(&path, JSON_ASSEMBLY).unwrap();

        let assembly = AssemblyFile::load(&path).unwrap();
        assert_eq!(assembly.name, "arm");
        assert_eq!(assembly.components.len(), 1);
    }

    #[test]
    fn test_load_unsupported_extension() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("arm.yaml");
        fs::write(&path, "name: arm").unwrap();

        let result = AssemblyFile::load(&path);
        assert!(matches!(
            result,
            Err(AssemblyFileError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = AssemblyFile::load("does/not/exist.ron");
        assert!(matches!(result, Err(AssemblyFileError::Io(_))));
    }

    #[test]
    fn test_load_malformed_ron() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("broken.ron");
        fs::write(&path, "(name: ").unwrap();

        let result = AssemblyFile::load(&path);
        assert!(matches!(result, Err(AssemblyFileError::Deserialize(_))));
    }

    #[test]
    fn test_component_record_transform() {
        let record = ComponentRecord {
            name: "base:1".to_string(),
            component: "base".to_string(),
            transform: vec![
                1.0, 0.0, 0.0, 100.0, //
                0.0, 1.0, 0.0, 200.0, //
                0.0, 0.0, 1.0, 300.0,
            ],
            physical: None,
        };

        let transform = record.transform().unwrap();
        let pose = transform.decompose();
        assert!((pose.xyz[0] - 1.0).abs() < 1e-9);
        assert!((pose.xyz[1] - 2.0).abs() < 1e-9);
        assert!((pose.xyz[2] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_component_record_rejects_bad_transform() {
        let record = ComponentRecord {
            name: "bad:1".to_string(),
            component: "bad".to_string(),
            transform: vec![1.0, 2.0, 3.0],
            physical: None,
        };
        assert!(record.transform().is_err());
    }
}
