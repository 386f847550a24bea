//! The projection pipeline
//!
//! A single linear pass: generate the 4-simplex, apply the configured
//! rotation sequence, project 4D -> 3D, project 3D -> 2D, render TikZ.
//! Any degenerate vertex aborts the run; there is no partial diagram.

use wire4d_core::{project_to_2d, project_to_3d, simplex4, GeometryError};
use wire4d_math::{Vec3, Vec4};
use wire4d_tikz::TikzDiagram;

use crate::config::AppConfig;

/// Run the full pipeline and return the TikZ document
pub fn run(config: &AppConfig) -> Result<String, GeometryError> {
    let mut shape = simplex4();
    for step in &config.rotation {
        shape = shape.rotated(step.plane, step.angle);
    }
    log::info!(
        "Generated 4-simplex: {} vertices, {} edges, {} rotation step(s)",
        shape.vertex_count(),
        shape.edge_count(),
        config.rotation.len()
    );

    let [x, y, z, w] = config.camera.position4;
    let camera4 = Vec4::new(x, y, z, w);
    let volume = project_to_3d(&shape, camera4, config.projection.plane_w)?;
    log::info!("Projected 4D -> 3D onto w = {}", config.projection.plane_w);

    let [x, y, z] = config.camera.position3;
    let camera3 = Vec3::new(x, y, z);
    let flat = project_to_2d(&volume, camera3, config.projection.plane_z)?;
    log::info!("Projected 3D -> 2D onto z = {}", config.projection.plane_z);

    let diagram = TikzDiagram::new(config.diagram.scale)
        .with_marker_radius(config.diagram.marker_radius);
    Ok(diagram.render(&flat))
}
