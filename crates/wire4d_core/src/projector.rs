//! Perspective projection to the next dimension down
//!
//! Each vertex is mapped by intersecting the ray from the camera through
//! the vertex with a hyperplane orthogonal to one coordinate axis, then
//! dropping that coordinate. The hyperplane is therefore just a scalar:
//! the fixed value of the dropped coordinate.
//!
//! The algorithm is written once, generic over the source vector type; the
//! reference pipeline invokes it twice (4D → 3D dropping w, then 3D → 2D
//! dropping z).

use wire4d_math::{Vec2, Vec3, Vec4};

use crate::error::GeometryError;
use crate::mesh::Mesh;

/// A vector type that can be perspective-projected one dimension down
///
/// `axis` arguments index the coordinate being dropped; passing an axis
/// outside `0..DIM` is a programmer error and panics.
pub trait Projectable:
    Copy
    + std::fmt::Debug
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<f64, Output = Self>
{
    /// The vector type one dimension down
    type Lower: Copy;

    /// Number of coordinates
    const DIM: usize;

    /// The value of one coordinate
    fn coord(self, axis: usize) -> f64;

    /// Remove one coordinate, narrowing to the lower dimension
    fn dropped(self, axis: usize) -> Self::Lower;

    /// Scale to unit length (forwards to the inherent vector op)
    fn normalized(self) -> Result<Self, wire4d_math::MathError>;
}

impl Projectable for Vec4 {
    type Lower = Vec3;
    const DIM: usize = 4;

    fn coord(self, axis: usize) -> f64 {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            3 => self.w,
            _ => panic!("axis {} out of range for Vec4", axis),
        }
    }

    fn dropped(self, axis: usize) -> Vec3 {
        match axis {
            0 => Vec3::new(self.y, self.z, self.w),
            1 => Vec3::new(self.x, self.z, self.w),
            2 => Vec3::new(self.x, self.y, self.w),
            3 => self.xyz(),
            _ => panic!("axis {} out of range for Vec4", axis),
        }
    }

    fn normalized(self) -> Result<Self, wire4d_math::MathError> {
        Vec4::normalized(self)
    }
}

impl Projectable for Vec3 {
    type Lower = Vec2;
    const DIM: usize = 3;

    fn coord(self, axis: usize) -> f64 {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("axis {} out of range for Vec3", axis),
        }
    }

    fn dropped(self, axis: usize) -> Vec2 {
        match axis {
            0 => Vec2::new(self.y, self.z),
            1 => Vec2::new(self.x, self.z),
            2 => self.xy(),
            _ => panic!("axis {} out of range for Vec3", axis),
        }
    }

    fn normalized(self) -> Result<Self, wire4d_math::MathError> {
        Vec3::normalized(self)
    }
}

/// Perspective-project a mesh onto the hyperplane `coord(axis) == plane`,
/// seen from `camera`, dropping that coordinate from every vertex
///
/// The edge list passes through unchanged; projection never alters
/// connectivity. Any degenerate vertex aborts the whole projection: a
/// partial wireframe is not a meaningful diagram.
///
/// # Errors
///
/// [`GeometryError::DivisionByZero`] when a vertex coincides with the
/// camera (no viewing ray) or its viewing ray is parallel to the target
/// hyperplane (no intersection). The message names the vertex.
pub fn project<V: Projectable>(
    mesh: &Mesh<V>,
    camera: V,
    plane: f64,
    axis: usize,
) -> Result<Mesh<V::Lower>, GeometryError> {
    let mut vertices = Vec::with_capacity(mesh.vertex_count());

    for (i, &vertex) in mesh.vertices().iter().enumerate() {
        let direction = (vertex - camera).normalized().map_err(|_| {
            GeometryError::DivisionByZero(format!("vertex {} coincides with the camera", i))
        })?;

        let along = direction.coord(axis);
        if along == 0.0 {
            return Err(GeometryError::DivisionByZero(format!(
                "viewing ray of vertex {} is parallel to the target hyperplane",
                i
            )));
        }

        let t = (plane - camera.coord(axis)) / along;
        let image = camera + direction * t;
        log::debug!("vertex {} image {:?}", i, image);

        vertices.push(image.dropped(axis));
    }

    Ok(Mesh::from_parts(vertices, mesh.edges().to_vec()))
}

/// Project a 4D mesh to 3D, dropping w
pub fn project_to_3d(
    mesh: &Mesh<Vec4>,
    camera: Vec4,
    plane_w: f64,
) -> Result<Mesh<Vec3>, GeometryError> {
    project(mesh, camera, plane_w, 3)
}

/// Project a 3D mesh to 2D, dropping z
pub fn project_to_2d(
    mesh: &Mesh<Vec3>,
    camera: Vec3,
    plane_z: f64,
) -> Result<Mesh<Vec2>, GeometryError> {
    project(mesh, camera, plane_z, 2)
}
