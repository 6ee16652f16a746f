//! URDF document generation

use crate::extract::{ComponentData, ExtractionReport};
use crate::pose::Pose;

/// Export options for URDF generation
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Robot name (for URDF root element)
    pub robot_name: String,
    /// Mesh package name for package:// URIs
    pub mesh_package: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            robot_name: "robot".to_string(),
            mesh_package: "robot_meshes".to_string(),
        }
    }
}

/// Format a 3-vector as a URDF attribute value
fn fmt_triple(v: &[f64; 3]) -> String {
    format!("{:.6} {:.6} {:.6}", v[0], v[1], v[2])
}

/// Render a pose as a `<origin xyz=".." rpy=".."/>` element
pub fn origin_line(pose: &Pose) -> String {
    format!(
        "<origin xyz=\"{}\" rpy=\"{}\"/>",
        fmt_triple(&pose.xyz),
        fmt_triple(&pose.rpy)
    )
}

/// Generate a URDF document with one `<link>` per extracted component
pub fn urdf_document(report: &ExtractionReport, options: &ExportOptions) -> String {
    let mut urdf = String::new();
    urdf.push_str(&format!(
        "<?xml version=\"1.0\"?>\n<robot name=\"{}\">\n\n",
        xml_escape(&options.robot_name)
    ));

    for component in &report.components {
        write_link(&mut urdf, component, options);
    }

    urdf.push_str("</robot>\n");
    urdf
}

fn write_link(urdf: &mut String, component: &ComponentData, options: &ExportOptions) {
    let mesh_uri = format!(
        "package://{}/{}.stl",
        options.mesh_package,
        sanitize_filename(&component.name)
    );

    urdf.push_str(&format!(
        "  <link name=\"{}\">\n",
        xml_escape(&component.name)
    ));

    // Inertial: origin at the center of mass, axes aligned with the link
    urdf.push_str("    <inertial>\n");
    urdf.push_str(&format!(
        "      <origin xyz=\"{}\" rpy=\"{}\"/>\n",
        fmt_triple(&component.mass.center_of_mass),
        fmt_triple(&[0.0; 3])
    ));
    urdf.push_str(&format!(
        "      <mass value=\"{:.6}\"/>\n",
        component.mass.mass
    ));
    let inertia = &component.mass.inertia;
    urdf.push_str(&format!(
        "      <inertia ixx=\"{:.6}\" ixy=\"{:.6}\" ixz=\"{:.6}\" iyy=\"{:.6}\" iyz=\"{:.6}\" izz=\"{:.6}\"/>\n",
        inertia.ixx, inertia.ixy, inertia.ixz, inertia.iyy, inertia.iyz, inertia.izz
    ));
    urdf.push_str("    </inertial>\n");

    // Visual and collision share the component pose and mesh
    write_geometry_element(urdf, "visual", &component.pose, &mesh_uri);
    write_geometry_element(urdf, "collision", &component.pose, &mesh_uri);

    urdf.push_str("  </link>\n\n");
}

fn write_geometry_element(urdf: &mut String, tag: &str, origin: &Pose, mesh_uri: &str) {
    urdf.push_str(&format!("    <{}>\n", tag));
    urdf.push_str(&format!("      {}\n", origin_line(origin)));
    urdf.push_str(&format!(
        "      <geometry>\n        <mesh filename=\"{}\"/>\n      </geometry>\n",
        xml_escape(mesh_uri)
    ));
    urdf.push_str(&format!("    </{}>\n", tag));
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
