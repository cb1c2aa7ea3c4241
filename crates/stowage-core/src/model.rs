//! Wire-contract types for the placement optimizer's output.
//!
//! Field names are the bit-exact contract with the upstream producer. Unknown
//! extra fields on items (expiry dates, mass, priority, ...) are ignored.

use crate::Result;
use crate::geom::{Point3, point3};
use serde::{Deserialize, Serialize};

/// One point in container-local space. `width` maps to X, `depth` to Y and
/// `height` to Z; that axis assignment is fixed across the whole pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl Coordinates {
    pub fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    pub fn to_point3(self) -> Point3 {
        point3(self.width, self.depth, self.height)
    }
}

/// Axis-aligned box given as two opposite corners.
///
/// Producers guarantee `end >= start` per axis; zero-extent axes are legal
/// and render as flat geometry. Neither is validated here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    #[serde(rename = "startCoordinates")]
    pub start_coordinates: Coordinates,
    #[serde(rename = "endCoordinates")]
    pub end_coordinates: Coordinates,
}

impl BoundingBox {
    pub fn new(start: Coordinates, end: Coordinates) -> Self {
        Self {
            start_coordinates: start,
            end_coordinates: end,
        }
    }
}

/// Assignment of one item to one axis-aligned volume within a container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    #[serde(rename = "itemId")]
    pub item_id: String,
    pub position: BoundingBox,
}

/// Side lookup entry mapping an item id to its display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemMeta {
    #[serde(rename = "itemId")]
    pub item_id: String,
    pub name: String,
}

/// The record consumed from the upstream placement optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementDocument {
    pub items: Vec<ItemMeta>,
    pub placements: Vec<Placement>,
}

/// Strict parse of an optimizer output document.
///
/// Missing `items`/`placements` keys or wrong shapes fail hard here; there is
/// no sensible partial scene to build from a structurally invalid document.
pub fn parse_placement_document(text: &str) -> Result<PlacementDocument> {
    let doc: PlacementDocument = serde_json::from_str(text)?;
    tracing::debug!(
        items = doc.items.len(),
        placements = doc.placements.len(),
        "parsed placement document"
    );
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_field_names() {
        let text = r#"{
            "items": [{"itemId": "I1", "name": "Food Pack", "mass": 12.5}],
            "placements": [{
                "itemId": "I1",
                "position": {
                    "startCoordinates": {"width": 0, "depth": 0, "height": 0},
                    "endCoordinates": {"width": 10, "depth": 10, "height": 10}
                }
            }]
        }"#;
        let doc = parse_placement_document(text).expect("parse ok");
        assert_eq!(doc.items.len(), 1);
        assert_eq!(doc.items[0].item_id, "I1");
        assert_eq!(doc.items[0].name, "Food Pack");
        assert_eq!(doc.placements.len(), 1);
        let pos = &doc.placements[0].position;
        assert_eq!(pos.start_coordinates, Coordinates::new(0.0, 0.0, 0.0));
        assert_eq!(pos.end_coordinates, Coordinates::new(10.0, 10.0, 10.0));
    }

    #[test]
    fn missing_placements_key_is_a_hard_error() {
        let text = r#"{"items": []}"#;
        assert!(parse_placement_document(text).is_err());
    }

    #[test]
    fn wrong_shape_is_a_hard_error() {
        let text = r#"{"items": {}, "placements": []}"#;
        assert!(parse_placement_document(text).is_err());
    }

    #[test]
    fn roundtrips_camel_case_names() {
        let bb = BoundingBox::new(
            Coordinates::new(1.0, 2.0, 3.0),
            Coordinates::new(4.0, 5.0, 6.0),
        );
        let json = serde_json::to_value(bb).expect("serialize");
        assert!(json.get("startCoordinates").is_some());
        assert!(json.get("endCoordinates").is_some());
    }

    #[test]
    fn coordinates_map_onto_xyz() {
        let p = Coordinates::new(1.0, 2.0, 3.0).to_point3();
        assert_eq!((p.x, p.y, p.z), (1.0, 2.0, 3.0));
    }
}
