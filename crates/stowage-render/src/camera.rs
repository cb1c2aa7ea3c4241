//! Orthographic camera for projecting container-local 3D points onto the
//! drawing plane.

use stowage_core::geom::Point3;

/// Screen-space point in SVG user units (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

/// Orthographic view of the container scene.
///
/// Defaults match the view operators are used to from the original 3D
/// viewer: azimuth -60 degrees, elevation 30 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            azimuth_deg: -60.0,
            elevation_deg: 30.0,
        }
    }
}

impl Camera {
    pub fn new(azimuth_deg: f64, elevation_deg: f64) -> Self {
        Self {
            azimuth_deg,
            elevation_deg,
        }
    }

    /// Projects a point onto the view plane: x along the camera's right
    /// vector, y along its up vector, then y is flipped for SVG.
    pub fn project(&self, p: Point3) -> ProjectedPoint {
        let az = self.azimuth_deg.to_radians();
        let el = self.elevation_deg.to_radians();

        // View basis for a camera looking at the origin from direction
        // (cos el * cos az, cos el * sin az, sin el):
        //   right = (-sin az, cos az, 0)
        //   up    = (-sin el * cos az, -sin el * sin az, cos el)
        let sx = -p.x * az.sin() + p.y * az.cos();
        let sy = -p.x * el.sin() * az.cos() - p.y * el.sin() * az.sin() + p.z * el.cos();

        ProjectedPoint { x: sx, y: -sy }
    }
}
