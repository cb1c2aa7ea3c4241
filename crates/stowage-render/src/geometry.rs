//! Geometry builder: expands a two-corner bounding box into renderable faces.

use serde::Serialize;
use stowage_core::BoundingBox;
use stowage_core::geom::{Point3, point3};

/// Vertical clearance between a box's top face and its floating label, in
/// container units.
pub const TOP_LABEL_OFFSET: f64 = 3.0;

/// One planar face of a box: four corners in a winding order that is
/// consistent across all six faces, so edges and fills render uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quad {
    pub points: [Point3; 4],
}

/// The renderable expansion of one bounding box.
///
/// Rebuilt fresh for every render pass; never cached across calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxGeometry {
    /// Fixed face order: bottom, top, front, right, back, left.
    pub faces: [Quad; 6],
    /// Geometric center; anchor for the in-box label.
    pub centroid: Point3,
    /// Anchor for the label floating [`TOP_LABEL_OFFSET`] above the top face.
    pub top_label_anchor: Point3,
}

/// Expands a bounding box into six quads plus the two label anchors.
///
/// The two-corner wire form is normalized to `(origin, extent)` first; all
/// face corners are derived from that. Degenerate boxes (zero extent on any
/// or all axes) are valid and simply produce coincident quads.
pub fn build_box(bounds: &BoundingBox) -> BoxGeometry {
    let origin = bounds.start_coordinates.to_point3();
    let extent = bounds.end_coordinates.to_point3() - origin;
    let (x, y, z) = (origin.x, origin.y, origin.z);
    let (dx, dy, dz) = (extent.x, extent.y, extent.z);

    let faces = [
        // bottom
        Quad {
            points: [
                point3(x, y, z),
                point3(x + dx, y, z),
                point3(x + dx, y + dy, z),
                point3(x, y + dy, z),
            ],
        },
        // top
        Quad {
            points: [
                point3(x, y, z + dz),
                point3(x + dx, y, z + dz),
                point3(x + dx, y + dy, z + dz),
                point3(x, y + dy, z + dz),
            ],
        },
        // front
        Quad {
            points: [
                point3(x, y, z),
                point3(x + dx, y, z),
                point3(x + dx, y, z + dz),
                point3(x, y, z + dz),
            ],
        },
        // right
        Quad {
            points: [
                point3(x + dx, y, z),
                point3(x + dx, y + dy, z),
                point3(x + dx, y + dy, z + dz),
                point3(x + dx, y, z + dz),
            ],
        },
        // back
        Quad {
            points: [
                point3(x + dx, y + dy, z),
                point3(x, y + dy, z),
                point3(x, y + dy, z + dz),
                point3(x + dx, y + dy, z + dz),
            ],
        },
        // left
        Quad {
            points: [
                point3(x, y + dy, z),
                point3(x, y, z),
                point3(x, y, z + dz),
                point3(x, y + dy, z + dz),
            ],
        },
    ];

    let centroid = point3(x + dx / 2.0, y + dy / 2.0, z + dz / 2.0);
    let top_label_anchor = point3(centroid.x, centroid.y, z + dz + TOP_LABEL_OFFSET);

    BoxGeometry {
        faces,
        centroid,
        top_label_anchor,
    }
}
