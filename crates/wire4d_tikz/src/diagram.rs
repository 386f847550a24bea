//! Standalone TikZ document assembly

use std::fmt::Write;

use wire4d_core::Mesh;
use wire4d_math::Vec2;

/// Renders a 2D wireframe mesh as a standalone TikZ document
///
/// Pure string assembly: every edge index is already guaranteed valid by
/// [`Mesh`], so rendering cannot fail.
#[derive(Clone, Copy, Debug)]
pub struct TikzDiagram {
    scale: f64,
    marker_radius: f64,
}

impl Default for TikzDiagram {
    fn default() -> Self {
        Self {
            scale: 2.0,
            marker_radius: 0.01,
        }
    }
}

impl TikzDiagram {
    /// Create a diagram with the given tikzpicture scale
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Set the radius of the filled vertex markers
    pub fn with_marker_radius(mut self, radius: f64) -> Self {
        self.marker_radius = radius;
        self
    }

    /// Render the mesh as a complete standalone LaTeX document
    pub fn render(&self, mesh: &Mesh<Vec2>) -> String {
        let mut out = String::new();

        out.push_str("\\documentclass{standalone}\n\\usepackage{tikz}\n\n\\begin{document}\n\n");
        let _ = writeln!(out, "\\begin{{tikzpicture}}[scale={}]", self.scale);

        for (i, vertex) in mesh.vertices().iter().enumerate() {
            let _ = writeln!(
                out,
                "  \\node (v{}) at ({:.6}, {:.6}) {{}};",
                i, vertex.x, vertex.y
            );
            let _ = writeln!(out, "  \\fill (v{}) circle({});", i, self.marker_radius);
        }

        for edge in mesh.edges() {
            let _ = writeln!(
                out,
                "  \\draw (v{}.center) -- (v{}.center);",
                edge.start, edge.end
            );
        }

        out.push_str("\\end{tikzpicture}\n\n\\end{document}\n");
        out
    }
}
