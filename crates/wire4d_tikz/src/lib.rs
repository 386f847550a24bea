//! TikZ diagram emission
//!
//! Renders a projected 2D wireframe as a standalone LaTeX document: one
//! named node plus a filled marker per vertex, one line segment per edge.

mod diagram;

pub use diagram::TikzDiagram;
