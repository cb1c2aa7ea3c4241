//! Scene composer: placement records + item metadata → renderable scene.

use crate::geometry::{BoxGeometry, build_box};
use serde::Serialize;
use std::collections::HashMap;
use stowage_core::{ItemMeta, Placement, PlacementDocument};

pub const DEFAULT_TITLE: &str = "3D Cargo Placement Visualization";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
    pub z: String,
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self {
            x: "Width".to_string(),
            y: "Depth".to_string(),
            z: "Height".to_string(),
        }
    }
}

/// One labeled box ready for drawing.
///
/// The same text is used for both the centroid label and the floating top
/// label; consumers that want them to differ must change the composer, not
/// patch the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxDescriptor {
    pub item_id: String,
    pub label: String,
    pub geometry: BoxGeometry,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub title: String,
    pub axis_labels: AxisLabels,
    /// Sequence order is the painter order: later boxes draw on top.
    pub boxes: Vec<BoxDescriptor>,
}

impl Scene {
    pub fn empty() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            axis_labels: AxisLabels::default(),
            boxes: Vec::new(),
        }
    }
}

/// Composes a scene from placement records and the item name lookup.
///
/// A pure, total transform: output length and order equal the input
/// placements exactly. Duplicate ids in `items` are last-write-wins; a
/// placement whose id has no metadata entry gets an empty name segment.
pub fn compose_scene(placements: &[Placement], items: &[ItemMeta]) -> Scene {
    let mut id_to_name: HashMap<&str, &str> = HashMap::with_capacity(items.len());
    for item in items {
        id_to_name.insert(item.item_id.as_str(), item.name.as_str());
    }

    let boxes = placements
        .iter()
        .map(|placement| {
            let name = id_to_name
                .get(placement.item_id.as_str())
                .copied()
                .unwrap_or("");
            BoxDescriptor {
                item_id: placement.item_id.clone(),
                label: format!("{}\n{}", placement.item_id, name),
                geometry: build_box(&placement.position),
            }
        })
        .collect::<Vec<_>>();

    tracing::debug!(boxes = boxes.len(), "composed placement scene");

    Scene {
        boxes,
        ..Scene::empty()
    }
}

/// Convenience wrapper for a whole optimizer document.
pub fn compose_document(doc: &PlacementDocument) -> Scene {
    compose_scene(&doc.placements, &doc.items)
}
