//! Human-readable extraction report

use crate::export::origin_line;
use crate::extract::ExtractionReport;

/// Render the per-component text report (positions in meters, RPY in radians)
pub fn render_text(report: &ExtractionReport) -> String {
    let mut out = String::new();

    if report.components.is_empty() {
        out.push_str("No components found\n");
    } else {
        out.push_str(&format!("FOUND {} COMPONENTS:\n\n", report.components.len()));
        out.push_str("Format: Component (Position in meters, RPY in radians)\n");
        out.push_str(&"=".repeat(80));
        out.push_str("\n\n");

        for component in &report.components {
            let pose = &component.pose;
            let mass = &component.mass;

            out.push_str(&format!("Component: {}\n", component.name));
            out.push_str(&format!("Base: {}\n", component.base_name));
            out.push_str(&format!(
                "Position: ({:.6}, {:.6}, {:.6}) m\n",
                pose.xyz[0], pose.xyz[1], pose.xyz[2]
            ));
            out.push_str(&format!(
                "RPY: ({:.6}, {:.6}, {:.6}) rad\n",
                pose.rpy[0], pose.rpy[1], pose.rpy[2]
            ));
            out.push_str(&format!("Mass: {:.6} kg\n", mass.mass));
            out.push_str(&format!(
                "Center of Mass: ({:.6}, {:.6}, {:.6}) m\n",
                mass.center_of_mass[0], mass.center_of_mass[1], mass.center_of_mass[2]
            ));
            out.push_str(&format!(
                "Inertia: Ixx={:.6}, Iyy={:.6}, Izz={:.6} kg·m²\n",
                mass.inertia.ixx, mass.inertia.iyy, mass.inertia.izz
            ));
            out.push_str(&format!("URDF Origin: {}\n\n", origin_line(pose)));
        }
    }

    if !report.skipped.is_empty() {
        out.push_str(&format!("Skipped {} occurrence(s):\n", report.skipped.len()));
        for skipped in &report.skipped {
            out.push_str(&format!("  {}: {}\n", skipped.name, skipped.reason));
        }
    }

    out
}
